//! Update command - change a student's name and/or class.

use std::path::PathBuf;

use colored::Colorize;
use rapor::StudentPatch;

pub fn run(
    file: PathBuf,
    id: String,
    name: Option<String>,
    class: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if name.is_none() && class.is_none() {
        return Err("Must specify --name or --class".into());
    }

    let (store, mut manager) = super::open_roster(&file)?;

    let mut patch = StudentPatch::new();
    if let Some(name) = name {
        patch = patch.with_name(name);
    }
    if let Some(class) = class {
        patch = patch.with_class_name(class);
    }

    if !manager.update_student(&id, &patch)? {
        return Err(format!("Siswa dengan ID {} tidak ditemukan", id.trim()).into());
    }

    store.save(manager.students())?;

    println!(
        "{} Data siswa {} berhasil diupdate.",
        "✓".green(),
        id.trim().white().bold()
    );

    Ok(())
}
