//! Remove command - drop a student from the roster.

use std::path::PathBuf;

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

pub fn run(file: PathBuf, id: String, yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (store, mut manager) = super::open_roster(&file)?;

    let Some(student) = manager.find_student(&id) else {
        return Err(format!("Siswa dengan ID {} tidak ditemukan", id.trim()).into());
    };

    if !yes {
        let question = format!(
            "Yakin ingin menghapus {} ({})?",
            student.name(),
            student.id()
        );
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Dibatalkan.");
            return Ok(());
        }
    }

    manager.remove_student(&id);
    store.save(manager.students())?;

    println!(
        "{} Siswa {} berhasil dihapus. Sisa siswa: {}",
        "✓".green(),
        id.trim().white().bold(),
        manager.len()
    );

    Ok(())
}
