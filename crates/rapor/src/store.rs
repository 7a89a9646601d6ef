//! JSON persistence for the roster - save/load/backup of the data file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::Local;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{RaporError, Result};
use crate::student::Student;

/// Default data file location, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/students.json";

/// Plain serialized form of one student record.
///
/// Grade values stay raw JSON until [`into_student`] rebuilds the record
/// through the validating constructor path, so a hand-edited file cannot
/// smuggle an empty name, a non-numeric score, or an out-of-range score past
/// validation. The class field serializes under the `class` key the data
/// files have always used.
///
/// [`into_student`]: StudentData::into_student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentData {
    pub id: String,
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub grades: IndexMap<String, serde_json::Value>,
}

impl From<&Student> for StudentData {
    fn from(student: &Student) -> Self {
        StudentData {
            id: student.id().to_string(),
            name: student.name().to_string(),
            class_name: student.class_name().to_string(),
            grades: student
                .grades()
                .iter()
                .map(|(subject, score)| (subject.clone(), serde_json::Value::from(*score)))
                .collect(),
        }
    }
}

impl StudentData {
    /// Rebuild a validated record, re-running every constructor and grade
    /// check exactly as interactive entry would.
    pub fn into_student(self) -> Result<Student> {
        let mut student = Student::new(self.id, self.name, self.class_name)?;
        for (subject, value) in self.grades {
            let score = value.as_f64().ok_or(RaporError::ScoreNotNumber)?;
            student.add_grade(subject, score)?;
        }
        Ok(student)
    }
}

/// File-backed storage for the roster.
///
/// # Example
///
/// ```no_run
/// use rapor::{DataStore, StudentManager};
///
/// let store = DataStore::default();
/// let mut manager = StudentManager::new();
/// for student in store.load()? {
///     manager.add_student(student);
/// }
/// // ... mutate the roster ...
/// store.save(manager.students())?;
/// # Ok::<(), rapor::RaporError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DataStore {
    path: PathBuf,
}

impl Default for DataStore {
    fn default() -> Self {
        DataStore::new(DEFAULT_DATA_FILE)
    }
}

impl DataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DataStore { path: path.into() }
    }

    /// Location of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the data file exists yet. Lets callers tell a fresh start
    /// apart from a loaded-but-empty roster.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the full roster as pretty-printed JSON, creating the parent
    /// directory if needed.
    pub fn save(&self, students: &[Student]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| RaporError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let records: Vec<StudentData> = students.iter().map(StudentData::from).collect();

        let file = File::create(&self.path).map_err(|e| RaporError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &records)?;

        Ok(())
    }

    /// Read the roster back, re-validating every record.
    ///
    /// A missing file is an empty roster, not an error. A file that fails to
    /// parse or re-validate is an error; callers decide whether to fall back
    /// to an empty roster.
    pub fn load(&self) -> Result<Vec<Student>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| RaporError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        let reader = BufReader::new(file);
        let records: Vec<StudentData> = serde_json::from_reader(reader)?;

        records.into_iter().map(StudentData::into_student).collect()
    }

    /// Copy the data file beside itself with a timestamp suffix.
    ///
    /// Returns `Ok(None)` when there is nothing to back up.
    pub fn backup(&self) -> Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let timestamp = Local::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let backup_path = backup_path(&self.path, &timestamp);
        fs::copy(&self.path, &backup_path).map_err(|e| RaporError::Io {
            path: backup_path.clone(),
            source: e,
        })?;

        Ok(Some(backup_path))
    }

    /// Remove the data file. Returns `false` when there was none.
    pub fn delete(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path).map_err(|e| RaporError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(true)
    }
}

/// Backup file path for a data file: `students.json` becomes
/// `students_backup_<timestamp>.json` in the same directory.
fn backup_path(path: &Path, timestamp: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    path.with_file_name(format!("{}_backup_{}.json", stem, timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_path() {
        assert_eq!(
            backup_path(Path::new("data/students.json"), "2024-01-15T10-30-00")
                .to_string_lossy(),
            "data/students_backup_2024-01-15T10-30-00.json"
        );
        assert_eq!(
            backup_path(Path::new("siswa.json"), "t").to_string_lossy(),
            "siswa_backup_t.json"
        );
    }

    #[test]
    fn test_student_data_round_trip() {
        let mut student = Student::new("S001", "Budi", "12-A").unwrap();
        student.add_grade("Matematika", 90.0).unwrap();
        student.add_grade("Fisika", 85.5).unwrap();

        let rebuilt = StudentData::from(&student).into_student().unwrap();
        assert_eq!(rebuilt, student);
        let subjects: Vec<&str> = rebuilt.grades().keys().map(String::as_str).collect();
        assert_eq!(subjects, vec!["Matematika", "Fisika"]);
    }

    #[test]
    fn test_into_student_rejects_non_numeric_grade() {
        let data = StudentData {
            id: "S001".to_string(),
            name: "Budi".to_string(),
            class_name: "12-A".to_string(),
            grades: IndexMap::from([(
                "Matematika".to_string(),
                serde_json::Value::String("90".to_string()),
            )]),
        };
        assert!(matches!(
            data.into_student(),
            Err(RaporError::ScoreNotNumber)
        ));
    }

    #[test]
    fn test_into_student_revalidates_identity() {
        let data = StudentData {
            id: "S001".to_string(),
            name: "   ".to_string(),
            class_name: "12-A".to_string(),
            grades: IndexMap::new(),
        };
        assert!(matches!(data.into_student(), Err(RaporError::EmptyName)));
    }

    #[test]
    fn test_into_student_revalidates_score_range() {
        let data = StudentData {
            id: "S001".to_string(),
            name: "Budi".to_string(),
            class_name: "12-A".to_string(),
            grades: IndexMap::from([("Matematika".to_string(), serde_json::json!(150.0))]),
        };
        assert!(matches!(
            data.into_student(),
            Err(RaporError::ScoreOutOfRange(_))
        ));
    }
}
