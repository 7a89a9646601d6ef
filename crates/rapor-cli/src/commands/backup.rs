//! Backup command - copy the data file with a timestamp suffix.

use std::path::PathBuf;

use colored::Colorize;
use rapor::DataStore;

pub fn run(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let store = DataStore::new(file);

    match store.backup()? {
        Some(path) => println!(
            "{} Backup berhasil dibuat: {}",
            "✓".green(),
            path.display().to_string().white().bold()
        ),
        None => println!("{}", "Tidak ada data untuk di-backup.".yellow()),
    }

    Ok(())
}
