//! Error types for the rapor library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rapor operations.
///
/// The validation variants display the exact Indonesian messages the shell
/// shows to users, so callers can print them verbatim.
#[derive(Debug, Error)]
pub enum RaporError {
    /// Student id empty after trimming.
    #[error("ID siswa tidak boleh kosong")]
    EmptyId,

    /// Student name empty after trimming.
    #[error("Nama siswa tidak boleh kosong")]
    EmptyName,

    /// Class name empty after trimming.
    #[error("Kelas siswa tidak boleh kosong")]
    EmptyClass,

    /// Subject name empty after trimming.
    #[error("Nama mata pelajaran tidak boleh kosong")]
    EmptySubject,

    /// Score arrived as something other than a number (text input, JSON value).
    #[error("Nilai harus berupa angka")]
    ScoreNotNumber,

    /// Score is NaN or infinite.
    #[error("Nilai tidak valid")]
    ScoreNotFinite,

    /// Score outside the 0-100 range.
    #[error("Nilai harus antara 0-100")]
    ScoreOutOfRange(f64),

    /// Error reading or writing a data or report file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the CSV writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for rapor operations.
pub type Result<T> = std::result::Result<T, RaporError>;
