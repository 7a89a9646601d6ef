//! Example: build a small roster and print reports.
//!
//! Usage:
//!   cargo run --example demo

use rapor::{Student, StudentManager};

fn main() -> rapor::Result<()> {
    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Rapor Demo");
    println!("{}", separator);
    println!();

    let mut manager = StudentManager::new();

    manager.add_student(Student::new("S001", "Budi Santoso", "12-A")?);
    manager.add_student(Student::new("S002", "Ani Wijaya", "12-A")?);
    manager.add_student(Student::new("S003", "Citra Dewi", "12-B")?);

    for (id, scores) in [
        ("S001", [("Matematika", 85.0), ("Fisika", 90.0)]),
        ("S002", [("Matematika", 72.0), ("Fisika", 68.0)]),
        ("S003", [("Matematika", 95.0), ("Fisika", 88.0)]),
    ] {
        if let Some(student) = manager.find_student_mut(id) {
            for (subject, score) in scores {
                student.add_grade(subject, score)?;
            }
        }
    }

    println!("## Semua Siswa");
    manager.display_all_students();
    println!();

    println!("## Top 2");
    for (rank, student) in manager.top_students(2).iter().enumerate() {
        println!(
            "  {}. {} ({}) rata-rata {:.2}",
            rank + 1,
            student.name(),
            student.id(),
            student.average()
        );
    }
    println!();

    if let Some(stats) = manager.class_statistics("12-A") {
        println!("## Statistik Kelas {}", stats.class_name);
        println!("  Total Siswa      : {}", stats.total_students);
        println!("  Rata-rata Kelas  : {:.2}", stats.class_average);
        println!("  Persentase Lulus : {:.2}%", stats.pass_rate);
    }
    println!();

    println!("{}", separator);

    Ok(())
}
