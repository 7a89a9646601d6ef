//! List command - print the full roster.

use std::path::PathBuf;

use colored::Colorize;

pub fn run(file: PathBuf, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_store, manager) = super::open_roster(&file)?;

    if json_output {
        let records: Vec<serde_json::Value> = manager
            .students()
            .iter()
            .map(|student| {
                serde_json::json!({
                    "id": student.id(),
                    "name": student.name(),
                    "class": student.class_name(),
                    "grades": student.grades(),
                    "average": student.average(),
                    "status": student.status().label(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if manager.is_empty() {
        println!("{}", "Belum ada data siswa dalam sistem.".yellow());
        return Ok(());
    }

    println!(
        "{} ({} siswa)",
        "Daftar Siswa".cyan().bold(),
        manager.len()
    );
    println!();
    manager.display_all_students();

    Ok(())
}
