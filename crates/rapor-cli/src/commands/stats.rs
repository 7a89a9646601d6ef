//! Stats command - aggregate statistics for one class.

use std::path::PathBuf;

use colored::Colorize;

pub fn run(
    file: PathBuf,
    name: String,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (_store, manager) = super::open_roster(&file)?;

    let Some(stats) = manager.class_statistics(&name) else {
        return Err(format!("Tidak ada siswa di kelas {}", name.trim()).into());
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Statistik Kelas {}", stats.class_name).cyan().bold()
    );
    println!();
    println!("Total Siswa       : {}", stats.total_students);
    println!("Rata-rata Kelas   : {:.2}", stats.class_average);
    println!("Nilai Tertinggi   : {:.2}", stats.highest_average);
    println!("Nilai Terendah    : {:.2}", stats.lowest_average);
    println!(
        "Siswa Lulus       : {}",
        stats.passing_students.to_string().green()
    );
    println!(
        "Siswa Tidak Lulus : {}",
        stats.failing_students.to_string().red()
    );
    println!(
        "Persentase Lulus  : {}",
        format!("{:.2}%", stats.pass_rate).cyan().bold()
    );

    Ok(())
}
