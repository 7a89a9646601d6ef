//! Show command - detail block for one student.

use std::path::PathBuf;

pub fn run(file: PathBuf, id: String) -> Result<(), Box<dyn std::error::Error>> {
    let (_store, manager) = super::open_roster(&file)?;

    match manager.find_student(&id) {
        Some(student) => {
            student.display_info();
            Ok(())
        }
        None => Err(format!("Siswa dengan ID {} tidak ditemukan", id.trim()).into()),
    }
}
