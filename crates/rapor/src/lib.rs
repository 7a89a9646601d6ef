//! Rapor: student records and grade management.
//!
//! An in-memory roster of validated student records with per-subject grades,
//! rounded averages, and pass/fail standing, plus the layers around it: a
//! JSON file store with backups and a TXT/CSV report exporter. User-facing
//! strings (labels, statuses, error messages) are Indonesian and are part of
//! the output contract.
//!
//! # Core rules
//!
//! - **Normalization**: identity fields and subject names are trimmed;
//!   empty-after-trim is rejected wherever emptiness is rejected
//! - **Averages**: arithmetic mean rounded half-up to two decimals; passing
//!   means a rounded average of at least [`PASSING_SCORE`]
//! - **Order**: grades and roster entries keep insertion order everywhere
//!
//! # Example
//!
//! ```
//! use rapor::{Student, StudentManager};
//!
//! let mut manager = StudentManager::new();
//! manager.add_student(Student::new("S001", "Budi Santoso", "12-A")?);
//!
//! if let Some(student) = manager.find_student_mut("S001") {
//!     student.add_grade("Matematika", 88.0)?;
//!     student.add_grade("Fisika", 92.0)?;
//! }
//!
//! let top = manager.top_students(3);
//! assert_eq!(top[0].average(), 90.0);
//! # Ok::<(), rapor::RaporError>(())
//! ```

pub mod error;
pub mod manager;
pub mod report;
pub mod store;
pub mod student;

pub use error::{RaporError, Result};
pub use manager::{ClassStatistics, StudentManager, StudentPatch};
pub use report::{DEFAULT_REPORTS_DIR, ReportExporter};
pub use store::{DEFAULT_DATA_FILE, DataStore, StudentData};
pub use student::{GradeStatus, PASSING_SCORE, Student, parse_score};
