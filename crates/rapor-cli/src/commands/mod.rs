//! CLI command implementations.

use std::path::Path;

use colored::{ColoredString, Colorize};
use rapor::{DataStore, GradeStatus, StudentManager};

pub mod add;
pub mod backup;
pub mod class;
pub mod export;
pub mod grade;
pub mod list;
pub mod menu;
pub mod remove;
pub mod show;
pub mod stats;
pub mod top;
pub mod update;

/// Open the store and load the roster for a one-shot command.
///
/// Unlike the interactive menu, a broken data file is a hard error here.
fn open_roster(file: &Path) -> Result<(DataStore, StudentManager), Box<dyn std::error::Error>> {
    let store = DataStore::new(file);
    let mut manager = StudentManager::new();
    for student in store.load()? {
        manager.add_student(student);
    }
    Ok((store, manager))
}

/// Status label colored by outcome.
fn status_colored(status: GradeStatus) -> ColoredString {
    match status {
        GradeStatus::Lulus => status.label().green(),
        GradeStatus::TidakLulus => status.label().red(),
        GradeStatus::BelumAdaNilai => status.label().yellow(),
    }
}
