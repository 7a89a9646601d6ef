//! Export command - write report files under the reports directory.

use std::path::PathBuf;

use colored::Colorize;
use rapor::ReportExporter;

use crate::cli::ExportKind;

pub fn run(
    file: PathBuf,
    kind: ExportKind,
    top_n: usize,
    class: Option<String>,
    id: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (_store, manager) = super::open_roster(&file)?;
    let exporter = ReportExporter::default();

    let path = match kind {
        ExportKind::All => exporter.export_all_students_txt(manager.students())?,
        ExportKind::Top => {
            let top = manager.top_students(top_n);
            exporter.export_top_students_txt(&top, top_n)?
        }
        ExportKind::Csv => exporter.export_csv(manager.students())?,
        ExportKind::Stats => {
            let class = class.ok_or("Must specify --class for the stats report")?;
            let stats = manager
                .class_statistics(&class)
                .ok_or_else(|| format!("Tidak ada siswa di kelas {}", class.trim()))?;
            exporter.export_class_statistics_txt(&stats)?
        }
        ExportKind::Student => {
            let id = id.ok_or("Must specify --id for the student report")?;
            let student = manager
                .find_student(&id)
                .ok_or_else(|| format!("Siswa dengan ID {} tidak ditemukan", id.trim()))?;
            exporter.export_student_detail_txt(student)?
        }
        ExportKind::List => {
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
    };

    println!(
        "{} Laporan dibuat: {}",
        "✓".green(),
        path.display().to_string().white().bold()
    );

    Ok(())
}
