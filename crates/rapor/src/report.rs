//! Report export - TXT and CSV files written into a reports directory.
//!
//! Filenames carry a timestamp so repeated exports never overwrite each
//! other. The exporter creates its output directory on first write.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{RaporError, Result};
use crate::manager::ClassStatistics;
use crate::student::Student;

/// Default output directory, relative to the working directory.
pub const DEFAULT_REPORTS_DIR: &str = "reports";

const BANNER_WIDTH: usize = 60;

/// Writes roster reports as TXT and CSV files.
#[derive(Debug, Clone)]
pub struct ReportExporter {
    output_dir: PathBuf,
}

impl Default for ReportExporter {
    fn default() -> Self {
        ReportExporter::new(DEFAULT_REPORTS_DIR)
    }
}

impl ReportExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        ReportExporter {
            output_dir: output_dir.into(),
        }
    }

    /// Directory the report files land in.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full roster listing with per-student detail blocks.
    pub fn export_all_students_txt(&self, students: &[Student]) -> Result<PathBuf> {
        let mut content = String::new();
        content.push_str(&banner());
        content.push_str("LAPORAN DAFTAR SEMUA SISWA\n");
        content.push_str(&date_line());
        content.push_str(&format!("Total Siswa: {}\n", students.len()));
        content.push_str(&banner());
        content.push('\n');

        if students.is_empty() {
            content.push_str("Belum ada data siswa dalam sistem.\n");
        } else {
            for (index, student) in students.iter().enumerate() {
                content.push_str(&format!("[{}] {}\n", index + 1, student.name()));
                content.push_str(&rule());
                content.push_str(&field("ID", student.id()));
                content.push_str(&field("Nama", student.name()));
                content.push_str(&field("Kelas", student.class_name()));
                content.push_str("Mata Pelajaran:\n");
                push_grade_lines(&mut content, student);
                content.push_str(&field("Rata-rata", format!("{:.2}", student.average())));
                content.push_str(&field("Status", student.status()));
                content.push('\n');
            }
        }

        self.write_report(&all_students_filename(&file_timestamp()), &content)
    }

    /// Ranking report for the given top students.
    ///
    /// `n` is the requested count and only appears in the title and the
    /// filename; the caller passes the already-ranked slice.
    pub fn export_top_students_txt(&self, top: &[&Student], n: usize) -> Result<PathBuf> {
        let mut content = String::new();
        content.push_str(&banner());
        content.push_str(&format!("LAPORAN TOP {} SISWA TERBAIK\n", n));
        content.push_str(&date_line());
        content.push_str(&banner());
        content.push('\n');

        if top.is_empty() {
            content.push_str("Belum ada data siswa dalam sistem.\n");
        } else {
            for (index, student) in top.iter().enumerate() {
                content.push_str(&format!("PERINGKAT {}\n", index + 1));
                content.push_str(&rule());
                content.push_str(&field("ID", student.id()));
                content.push_str(&field("Nama", student.name()));
                content.push_str(&field("Kelas", student.class_name()));
                content.push_str(&field("Rata-rata", format!("{:.2}", student.average())));
                content.push_str(&field("Status", student.status()));
                content.push('\n');
            }
        }

        self.write_report(&top_students_filename(n, &file_timestamp()), &content)
    }

    /// Statistics block for one class.
    pub fn export_class_statistics_txt(&self, stats: &ClassStatistics) -> Result<PathBuf> {
        let mut content = String::new();
        content.push_str(&banner());
        content.push_str(&format!("LAPORAN STATISTIK KELAS {}\n", stats.class_name));
        content.push_str(&date_line());
        content.push_str(&banner());
        content.push('\n');

        content.push_str(&stat_field("Total Siswa", stats.total_students));
        content.push_str(&stat_field(
            "Rata-rata Kelas",
            format!("{:.2}", stats.class_average),
        ));
        content.push_str(&stat_field(
            "Nilai Tertinggi",
            format!("{:.2}", stats.highest_average),
        ));
        content.push_str(&stat_field(
            "Nilai Terendah",
            format!("{:.2}", stats.lowest_average),
        ));
        content.push_str(&stat_field("Siswa Lulus", stats.passing_students));
        content.push_str(&stat_field("Siswa Tidak Lulus", stats.failing_students));
        content.push_str(&stat_field(
            "Persentase Lulus",
            format!("{:.2}%", stats.pass_rate),
        ));
        content.push('\n');

        self.write_report(
            &class_statistics_filename(&stats.class_name, &file_timestamp()),
            &content,
        )
    }

    /// One-row-per-student CSV summary.
    pub fn export_csv(&self, students: &[Student]) -> Result<PathBuf> {
        self.ensure_output_dir()?;
        let path = self.output_dir.join(csv_filename(&file_timestamp()));

        let file = File::create(&path).map_err(|e| RaporError::Io {
            path: path.clone(),
            source: e,
        })?;
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::NonNumeric)
            .from_writer(file);

        writer.write_record(["ID", "Nama", "Kelas", "Rata-rata", "Status"])?;
        for student in students {
            let average = format!("{:.2}", student.average());
            writer.write_record([
                student.id(),
                student.name(),
                student.class_name(),
                average.as_str(),
                student.status().label(),
            ])?;
        }
        writer.flush().map_err(|e| RaporError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }

    /// Detail block for a single student.
    pub fn export_student_detail_txt(&self, student: &Student) -> Result<PathBuf> {
        let mut content = String::new();
        content.push_str(&banner());
        content.push_str("LAPORAN DETAIL SISWA\n");
        content.push_str(&date_line());
        content.push_str(&banner());
        content.push('\n');

        content.push_str(&field("ID", student.id()));
        content.push_str(&field("Nama", student.name()));
        content.push_str(&field("Kelas", student.class_name()));
        content.push_str("\nMata Pelajaran:\n");
        push_grade_lines(&mut content, student);
        content.push('\n');
        content.push_str(&field("Rata-rata", format!("{:.2}", student.average())));
        content.push_str(&field("Status", student.status()));

        self.write_report(
            &student_detail_filename(student.id(), &file_timestamp()),
            &content,
        )
    }

    /// Report filenames (`.txt` and `.csv`) in the output directory, sorted.
    ///
    /// A missing directory is an empty listing, not an error.
    pub fn list_reports(&self) -> Result<Vec<String>> {
        if !self.output_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names: Vec<String> = fs::read_dir(&self.output_dir)
            .map_err(|e| RaporError::Io {
                path: self.output_dir.clone(),
                source: e,
            })?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext == "txt" || ext == "csv")
            })
            .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        names.sort();

        Ok(names)
    }

    fn ensure_output_dir(&self) -> Result<()> {
        if !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir).map_err(|e| RaporError::Io {
                path: self.output_dir.clone(),
                source: e,
            })?;
        }
        Ok(())
    }

    fn write_report(&self, filename: &str, content: &str) -> Result<PathBuf> {
        self.ensure_output_dir()?;
        let path = self.output_dir.join(filename);
        fs::write(&path, content).map_err(|e| RaporError::Io {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }
}

fn banner() -> String {
    let mut line = "=".repeat(BANNER_WIDTH);
    line.push('\n');
    line
}

fn rule() -> String {
    let mut line = "-".repeat(BANNER_WIDTH);
    line.push('\n');
    line
}

fn date_line() -> String {
    format!("Tanggal: {}\n", Local::now().format("%d/%m/%Y %H.%M.%S"))
}

/// Aligned detail line, label padded to the shared column width.
fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<14}: {}\n", label, value)
}

/// Aligned statistics line; the statistics block uses a wider label column.
fn stat_field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<18}: {}\n", label, value)
}

fn push_grade_lines(content: &mut String, student: &Student) {
    if !student.has_grades() {
        content.push_str("  (Belum ada nilai)\n");
    } else {
        for (subject, score) in student.grades() {
            content.push_str(&format!("  - {}: {}\n", subject, score));
        }
    }
}

fn file_timestamp() -> String {
    Local::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}

fn all_students_filename(timestamp: &str) -> String {
    format!("laporan_semua_siswa_{}.txt", timestamp)
}

fn top_students_filename(n: usize, timestamp: &str) -> String {
    format!("laporan_top_{}_siswa_{}.txt", n, timestamp)
}

fn class_statistics_filename(class_name: &str, timestamp: &str) -> String {
    format!("laporan_statistik_kelas_{}_{}.txt", class_name, timestamp)
}

fn csv_filename(timestamp: &str) -> String {
    format!("data_siswa_{}.csv", timestamp)
}

fn student_detail_filename(id: &str, timestamp: &str) -> String {
    format!("siswa_{}_{}.txt", id, timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_filenames() {
        let ts = "2024-01-15_10-30-00";
        assert_eq!(
            all_students_filename(ts),
            "laporan_semua_siswa_2024-01-15_10-30-00.txt"
        );
        assert_eq!(
            top_students_filename(3, ts),
            "laporan_top_3_siswa_2024-01-15_10-30-00.txt"
        );
        assert_eq!(
            class_statistics_filename("12-A", ts),
            "laporan_statistik_kelas_12-A_2024-01-15_10-30-00.txt"
        );
        assert_eq!(csv_filename(ts), "data_siswa_2024-01-15_10-30-00.csv");
        assert_eq!(
            student_detail_filename("S001", ts),
            "siswa_S001_2024-01-15_10-30-00.txt"
        );
    }

    #[test]
    fn test_field_alignment() {
        assert_eq!(field("ID", "S001"), "ID            : S001\n");
        assert_eq!(field("Rata-rata", "85.00"), "Rata-rata     : 85.00\n");
        assert_eq!(stat_field("Total Siswa", 2), "Total Siswa       : 2\n");
        assert_eq!(
            stat_field("Siswa Tidak Lulus", 1),
            "Siswa Tidak Lulus : 1\n"
        );
    }
}
