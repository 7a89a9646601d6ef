//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rapor: student records and grade management
#[derive(Parser)]
#[command(name = "rapor")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Omit the subcommand to open the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the JSON data file
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        default_value = rapor::DEFAULT_DATA_FILE
    )]
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new student to the roster
    Add {
        /// Student id (unique; surrounding whitespace is trimmed)
        #[arg(value_name = "ID")]
        id: String,

        /// Full name
        #[arg(value_name = "NAME")]
        name: String,

        /// Class name, e.g. "12-A"
        #[arg(value_name = "CLASS")]
        class: String,
    },

    /// List every student with average and status
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one student's detail block
    Show {
        /// Student id
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Update a student's name and/or class
    Update {
        /// Student id
        #[arg(value_name = "ID")]
        id: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New class
        #[arg(short, long)]
        class: Option<String>,
    },

    /// Remove a student from the roster
    Remove {
        /// Student id
        #[arg(value_name = "ID")]
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Record a score for one subject
    Grade {
        /// Student id
        #[arg(value_name = "ID")]
        id: String,

        /// Subject name
        #[arg(value_name = "SUBJECT")]
        subject: String,

        /// Score between 0 and 100
        #[arg(value_name = "SCORE")]
        score: String,
    },

    /// Show the top students by average
    Top {
        /// How many students to show
        #[arg(value_name = "N", default_value = "3")]
        n: usize,
    },

    /// List the students in one class
    Class {
        /// Class name (exact match)
        #[arg(value_name = "CLASS")]
        name: String,
    },

    /// Show aggregate statistics for one class
    Stats {
        /// Class name (exact match)
        #[arg(value_name = "CLASS")]
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a report file into reports/
    Export {
        /// Report kind (all, top, csv, stats, student, list)
        #[arg(value_name = "KIND")]
        kind: ExportKind,

        /// Number of top students, for the `top` kind
        #[arg(long, default_value = "3")]
        top_n: usize,

        /// Class name, for the `stats` kind
        #[arg(long)]
        class: Option<String>,

        /// Student id, for the `student` kind
        #[arg(long)]
        id: Option<String>,
    },

    /// Copy the data file to a timestamped backup
    Backup,
}

/// Report kind for the export command
#[derive(Clone, Debug, Default)]
pub enum ExportKind {
    /// Full roster TXT report
    #[default]
    All,
    /// Top-N ranking TXT report
    Top,
    /// One-row-per-student CSV summary
    Csv,
    /// Class statistics TXT report
    Stats,
    /// Single-student detail TXT report
    Student,
    /// List existing report files
    List,
}

impl std::str::FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "semua" => Ok(ExportKind::All),
            "top" => Ok(ExportKind::Top),
            "csv" => Ok(ExportKind::Csv),
            "stats" | "statistik" => Ok(ExportKind::Stats),
            "student" | "siswa" => Ok(ExportKind::Student),
            "list" | "ls" => Ok(ExportKind::List),
            _ => Err(format!(
                "Unknown report kind: {}. Use all, top, csv, stats, student, or list.",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportKind::All => write!(f, "all"),
            ExportKind::Top => write!(f, "top"),
            ExportKind::Csv => write!(f, "csv"),
            ExportKind::Stats => write!(f, "stats"),
            ExportKind::Student => write!(f, "student"),
            ExportKind::List => write!(f, "list"),
        }
    }
}
