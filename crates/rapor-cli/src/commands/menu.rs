//! Interactive menu, the default mode when no subcommand is given.
//!
//! Every mutation is saved to disk immediately, so quitting with Ctrl-C
//! between actions loses nothing.

use std::path::PathBuf;

use colored::Colorize;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use rapor::{DataStore, ReportExporter, Student, StudentManager, StudentPatch, parse_score};

const MENU_ITEMS: &[&str] = &[
    "Tambah Siswa Baru",
    "Lihat Semua Siswa",
    "Cari Siswa",
    "Update Data Siswa",
    "Hapus Siswa",
    "Tambah Nilai Siswa",
    "Lihat Top Siswa",
    "Lihat Siswa per Kelas",
    "Statistik Kelas",
    "Export Laporan",
    "Backup Data",
    "Keluar",
];

pub fn run(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let store = DataStore::new(file);
    let mut manager = StudentManager::new();

    // A broken data file must not lock users out of the menu.
    if !store.exists() {
        println!(
            "{}",
            "Belum ada file data. Memulai dengan data kosong.".yellow()
        );
    } else {
        match store.load() {
            Ok(students) => {
                for student in students {
                    manager.add_student(student);
                }
                println!(
                    "{} Data berhasil dimuat. Total siswa: {}",
                    "✓".green(),
                    manager.len()
                );
            }
            Err(e) => {
                println!("{} Gagal memuat data: {}", "✗".red(), e);
                println!("  Memulai dengan data kosong.");
            }
        }
    }

    loop {
        println!();
        println!("{}", "=== SISTEM MANAJEMEN DATA SISWA ===".cyan().bold());
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Pilih menu")
            .default(0)
            .items(MENU_ITEMS)
            .interact()?;

        let outcome = match choice {
            0 => add_student(&store, &mut manager),
            1 => show_all(&manager),
            2 => find_student(&manager),
            3 => update_student(&store, &mut manager),
            4 => remove_student(&store, &mut manager),
            5 => add_grade(&store, &mut manager),
            6 => show_top(&manager),
            7 => show_class(&manager),
            8 => show_statistics(&manager),
            9 => export_reports(&manager),
            10 => backup(&store),
            _ => {
                save_roster(&store, &manager);
                println!();
                println!("{}", "Terima kasih! Sampai jumpa.".cyan());
                return Ok(());
            }
        };

        // Validation problems are reported and the menu keeps running.
        if let Err(e) = outcome {
            println!("{} {}", "✗".red(), e);
        }
    }
}

fn prompt(label: &str) -> Result<String, dialoguer::Error> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .interact_text()
}

fn save_roster(store: &DataStore, manager: &StudentManager) {
    match store.save(manager.students()) {
        Ok(()) => println!(
            "{} Data berhasil disimpan ke {}",
            "✓".green(),
            store.path().display()
        ),
        Err(e) => println!("{} Gagal menyimpan data: {}", "✗".red(), e),
    }
}

fn add_student(
    store: &DataStore,
    manager: &mut StudentManager,
) -> Result<(), Box<dyn std::error::Error>> {
    let id: String = prompt("ID Siswa")?;
    let name: String = prompt("Nama")?;
    let class: String = prompt("Kelas")?;

    let student = Student::new(id, name, class)?;
    let id = student.id().to_string();
    if !manager.add_student(student) {
        println!("{} ID {} sudah terdaftar.", "✗".red(), id);
        return Ok(());
    }

    println!(
        "{} Siswa {} berhasil ditambahkan.",
        "✓".green(),
        id.white().bold()
    );
    save_roster(store, manager);
    Ok(())
}

fn show_all(manager: &StudentManager) -> Result<(), Box<dyn std::error::Error>> {
    if manager.is_empty() {
        println!("{}", "Belum ada data siswa dalam sistem.".yellow());
        return Ok(());
    }
    println!();
    manager.display_all_students();
    Ok(())
}

fn find_student(manager: &StudentManager) -> Result<(), Box<dyn std::error::Error>> {
    let id: String = prompt("ID Siswa")?;
    match manager.find_student(&id) {
        Some(student) => {
            println!();
            student.display_info();
        }
        None => println!(
            "{} Siswa dengan ID {} tidak ditemukan.",
            "✗".red(),
            id.trim()
        ),
    }
    Ok(())
}

fn update_student(
    store: &DataStore,
    manager: &mut StudentManager,
) -> Result<(), Box<dyn std::error::Error>> {
    let id: String = prompt("ID Siswa")?;
    let Some(current) = manager.find_student(&id) else {
        println!(
            "{} Siswa dengan ID {} tidak ditemukan.",
            "✗".red(),
            id.trim()
        );
        return Ok(());
    };

    // Enter keeps the current value.
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Nama baru")
        .default(current.name().to_string())
        .interact_text()?;
    let class: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Kelas baru")
        .default(current.class_name().to_string())
        .interact_text()?;

    let patch = StudentPatch::new().with_name(name).with_class_name(class);
    manager.update_student(&id, &patch)?;

    println!(
        "{} Data siswa {} berhasil diupdate.",
        "✓".green(),
        id.trim().white().bold()
    );
    save_roster(store, manager);
    Ok(())
}

fn remove_student(
    store: &DataStore,
    manager: &mut StudentManager,
) -> Result<(), Box<dyn std::error::Error>> {
    let id: String = prompt("ID Siswa")?;
    let Some(student) = manager.find_student(&id) else {
        println!(
            "{} Siswa dengan ID {} tidak ditemukan.",
            "✗".red(),
            id.trim()
        );
        return Ok(());
    };

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

    manager.remove_student(&id);
    println!(
        "{} Siswa {} berhasil dihapus.",
        "✓".green(),
        id.trim().white().bold()
    );
    save_roster(store, manager);
    Ok(())
}

fn add_grade(
    store: &DataStore,
    manager: &mut StudentManager,
) -> Result<(), Box<dyn std::error::Error>> {
    let id: String = prompt("ID Siswa")?;
    let Some(student) = manager.find_student_mut(&id) else {
        println!(
            "{} Siswa dengan ID {} tidak ditemukan.",
            "✗".red(),
            id.trim()
        );
        return Ok(());
    };

    let subject: String = prompt("Mata Pelajaran")?;
    let score_text: String = prompt("Nilai (0-100)")?;
    let score = parse_score(&score_text)?;
    student.add_grade(subject.as_str(), score)?;
    let average = student.average();

    println!(
        "{} Nilai {} tercatat. Rata-rata sekarang: {}",
        "✓".green(),
        subject.trim().white().bold(),
        format!("{:.2}", average).cyan().bold()
    );
    save_roster(store, manager);
    Ok(())
}

fn show_top(manager: &StudentManager) -> Result<(), Box<dyn std::error::Error>> {
    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Berapa siswa")
        .default("3".to_string())
        .interact_text()?;
    let n: usize = text.trim().parse().map_err(|_| "Jumlah harus berupa angka")?;

    let top = manager.top_students(n);
    if top.is_empty() {
        println!("{}", "Belum ada data siswa dalam sistem.".yellow());
        return Ok(());
    }

    println!();
    println!("{}", format!("Top {} Siswa Terbaik", n).cyan().bold());
    for (rank, student) in top.iter().enumerate() {
        println!(
            "  {}. {} ({}) rata-rata {} [{}]",
            rank + 1,
            student.name().white().bold(),
            student.id(),
            format!("{:.2}", student.average()).cyan().bold(),
            super::status_colored(student.status())
        );
    }
    Ok(())
}

fn show_class(manager: &StudentManager) -> Result<(), Box<dyn std::error::Error>> {
    let class: String = prompt("Nama Kelas")?;
    let members = manager.students_by_class(&class);
    if members.is_empty() {
        println!(
            "{}",
            format!("Tidak ada siswa di kelas {}", class.trim()).yellow()
        );
        return Ok(());
    }

    println!();
    println!(
        "{} ({} siswa)",
        format!("Siswa Kelas {}", class.trim()).cyan().bold(),
        members.len()
    );
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

fn show_statistics(manager: &StudentManager) -> Result<(), Box<dyn std::error::Error>> {
    let class: String = prompt("Nama Kelas")?;
    let Some(stats) = manager.class_statistics(&class) else {
        println!(
            "{}",
            format!("Tidak ada siswa di kelas {}", class.trim()).yellow()
        );
        return Ok(());
    };

    println!();
    println!(
        "{}",
        format!("Statistik Kelas {}", stats.class_name).cyan().bold()
    );
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

fn export_reports(manager: &StudentManager) -> Result<(), Box<dyn std::error::Error>> {
    let exporter = ReportExporter::default();
    let items = &[
        "Laporan Semua Siswa (TXT)",
        "Laporan Top Siswa (TXT)",
        "Data Siswa (CSV)",
        "Statistik Kelas (TXT)",
        "Detail Siswa (TXT)",
        "Lihat Daftar Laporan",
        "Kembali",
    ];
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Pilih laporan")
        .default(0)
        .items(items)
        .interact()?;

    let path = match choice {
        0 => exporter.export_all_students_txt(manager.students())?,
        1 => {
            let text: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Berapa siswa")
                .default("3".to_string())
                .interact_text()?;
            let n: usize = text.trim().parse().map_err(|_| "Jumlah harus berupa angka")?;
            let top = manager.top_students(n);
            exporter.export_top_students_txt(&top, n)?
        }
        2 => exporter.export_csv(manager.students())?,
        3 => {
            let class: String = prompt("Nama Kelas")?;
            let Some(stats) = manager.class_statistics(&class) else {
                println!(
                    "{}",
                    format!("Tidak ada siswa di kelas {}", class.trim()).yellow()
                );
                return Ok(());
            };
            exporter.export_class_statistics_txt(&stats)?
        }
        4 => {
            let id: String = prompt("ID Siswa")?;
            let Some(student) = manager.find_student(&id) else {
                println!(
                    "{} Siswa dengan ID {} tidak ditemukan.",
                    "✗".red(),
                    id.trim()
                );
                return Ok(());
            };
            exporter.export_student_detail_txt(student)?
        }
        5 => {
            let reports = exporter.list_reports()?;
            if reports.is_empty() {
                println!("{}", "Belum ada file laporan.".yellow());
            } else {
                println!(
                    "{}",
                    format!("File laporan ({}):", reports.len()).cyan().bold()
                );
                for name in reports {
                    println!("  {}", name);
                }
            }
            return Ok(());
        }
        _ => return Ok(()),
    };

    println!("{} Laporan dibuat: {}", "✓".green(), path.display());
    Ok(())
}

fn backup(store: &DataStore) -> Result<(), Box<dyn std::error::Error>> {
    match store.backup()? {
        Some(path) => println!("{} Backup berhasil dibuat: {}", "✓".green(), path.display()),
        None => println!("{}", "Tidak ada data untuk di-backup.".yellow()),
    }
    Ok(())
}
