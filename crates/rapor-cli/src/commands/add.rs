//! Add command - register a new student.

use std::path::PathBuf;

use colored::Colorize;
use rapor::Student;

pub fn run(
    file: PathBuf,
    id: String,
    name: String,
    class: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let (store, mut manager) = super::open_roster(&file)?;

    let student = Student::new(id, name, class)?;
    let id = student.id().to_string();
    if !manager.add_student(student) {
        return Err(format!("ID sudah terdaftar: {}", id).into());
    }

    store.save(manager.students())?;

    println!(
        "{} Siswa {} berhasil ditambahkan. Total siswa: {}",
        "✓".green(),
        id.white().bold(),
        manager.len()
    );

    Ok(())
}
