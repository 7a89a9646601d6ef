//! Top command - rank students by average score.

use std::path::PathBuf;

use colored::Colorize;

pub fn run(file: PathBuf, n: usize) -> Result<(), Box<dyn std::error::Error>> {
    let (_store, manager) = super::open_roster(&file)?;

    let top = manager.top_students(n);
    if top.is_empty() {
        println!("{}", "Belum ada data siswa dalam sistem.".yellow());
        return Ok(());
    }

    println!("{}", format!("Top {} Siswa Terbaik", n).cyan().bold());
    println!();
    for (rank, student) in top.iter().enumerate() {
        println!(
            "  {}. {} ({}) kelas {} rata-rata {} [{}]",
            rank + 1,
            student.name().white().bold(),
            student.id(),
            student.class_name(),
            format!("{:.2}", student.average()).cyan().bold(),
            super::status_colored(student.status())
        );
    }

    Ok(())
}
