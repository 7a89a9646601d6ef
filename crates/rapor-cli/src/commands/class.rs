//! Class command - list the students in one class.

use std::path::PathBuf;

use colored::Colorize;

pub fn run(file: PathBuf, name: String) -> Result<(), Box<dyn std::error::Error>> {
    let (_store, manager) = super::open_roster(&file)?;

    let members = manager.students_by_class(&name);
    if members.is_empty() {
        println!(
            "{}",
            format!("Tidak ada siswa di kelas {}", name.trim()).yellow()
        );
        return Ok(());
    }

    println!(
        "{} ({} siswa)",
        format!("Siswa Kelas {}", name.trim()).cyan().bold(),
        members.len()
    );
    println!();
    for student in members {
        println!(
            "  - {} ({}) rata-rata {} [{}]",
            student.name().white().bold(),
            student.id(),
            format!("{:.2}", student.average()),
            super::status_colored(student.status())
        );
    }

    Ok(())
}
