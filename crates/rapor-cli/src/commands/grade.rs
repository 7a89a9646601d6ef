//! Grade command - record a score for one subject.

use std::path::PathBuf;

use colored::Colorize;
use rapor::parse_score;

pub fn run(
    file: PathBuf,
    id: String,
    subject: String,
    score: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let (store, mut manager) = super::open_roster(&file)?;

    let Some(student) = manager.find_student_mut(&id) else {
        return Err(format!("Siswa dengan ID {} tidak ditemukan", id.trim()).into());
    };

    let score = parse_score(&score)?;
    student.add_grade(subject.as_str(), score)?;
    let average = student.average();

    store.save(manager.students())?;

    println!(
        "{} Nilai {} untuk {} tercatat. Rata-rata sekarang: {}",
        "✓".green(),
        subject.trim().white().bold(),
        id.trim().white().bold(),
        format!("{:.2}", average).cyan().bold()
    );

    Ok(())
}
