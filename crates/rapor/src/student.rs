//! Student record: identity fields, per-subject grades, and derived results.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{RaporError, Result};

/// Minimum average for a passing status.
pub const PASSING_SCORE: f64 = 75.0;

/// Pass/fail standing derived from a student's average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeStatus {
    /// Average at or above [`PASSING_SCORE`].
    Lulus,
    /// Average below [`PASSING_SCORE`].
    TidakLulus,
    /// No grades recorded yet.
    BelumAdaNilai,
}

impl GradeStatus {
    /// User-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            GradeStatus::Lulus => "Lulus",
            GradeStatus::TidakLulus => "Tidak Lulus",
            GradeStatus::BelumAdaNilai => "Belum Ada Nilai",
        }
    }
}

impl fmt::Display for GradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Trim `value`, mapping an all-whitespace result to `None`.
///
/// Every emptiness rule below tests the trimmed form, so whitespace-only
/// input fails exactly like truly empty input.
pub(crate) fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Check a score value: finite and within 0-100 inclusive.
pub(crate) fn validate_score(score: f64) -> Result<()> {
    if !score.is_finite() {
        return Err(RaporError::ScoreNotFinite);
    }
    if !(0.0..=100.0).contains(&score) {
        return Err(RaporError::ScoreOutOfRange(score));
    }
    Ok(())
}

/// Parse a score that arrived as text.
///
/// The record API takes `f64`, so the wrong-representation check lives here
/// (shell input) and in the store's record rebuild. Finiteness and range are
/// still checked by [`Student::add_grade`].
pub fn parse_score(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| RaporError::ScoreNotNumber)
}

/// A validated student record.
///
/// Identity fields are stored trimmed and non-empty; the id never changes
/// after construction. Grades keep their insertion order, which drives
/// display, serialization, and export ordering.
///
/// # Example
///
/// ```
/// use rapor::Student;
///
/// let mut student = Student::new("S001", "Budi Santoso", "12-A")?;
/// student.add_grade("Matematika", 85.0)?;
/// student.add_grade("Fisika", 90.0)?;
///
/// assert_eq!(student.average(), 87.5);
/// assert_eq!(student.status().label(), "Lulus");
/// # Ok::<(), rapor::RaporError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: String,
    name: String,
    class_name: String,
    grades: IndexMap<String, f64>,
}

impl Student {
    /// Create a record from raw identity fields.
    ///
    /// All three fields are trimmed first; any field empty after trimming is
    /// rejected, id checked before name before class.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let id = non_empty(&id).ok_or(RaporError::EmptyId)?.to_string();
        let name = name.into();
        let name = non_empty(&name).ok_or(RaporError::EmptyName)?.to_string();
        let class_name = class_name.into();
        let class_name = non_empty(&class_name)
            .ok_or(RaporError::EmptyClass)?
            .to_string();

        Ok(Student {
            id,
            name,
            class_name,
            grades: IndexMap::new(),
        })
    }

    /// Record a score for a subject.
    ///
    /// The subject is trimmed and must be non-empty; the score must be finite
    /// and within 0-100. Re-adding a subject overwrites its score while the
    /// subject keeps its original position in the grade order.
    pub fn add_grade(&mut self, subject: impl Into<String>, score: f64) -> Result<()> {
        let subject = subject.into();
        let subject = non_empty(&subject).ok_or(RaporError::EmptySubject)?;
        validate_score(score)?;
        self.grades.insert(subject.to_string(), score);
        Ok(())
    }

    /// Replace the name. Empty after trimming is rejected and the old name
    /// stays in place.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let name = non_empty(&name).ok_or(RaporError::EmptyName)?;
        self.name = name.to_string();
        Ok(())
    }

    /// Replace the class name, with the same emptiness rule as [`set_name`].
    ///
    /// [`set_name`]: Student::set_name
    pub fn set_class_name(&mut self, class_name: impl Into<String>) -> Result<()> {
        let class_name = class_name.into();
        let class_name = non_empty(&class_name).ok_or(RaporError::EmptyClass)?;
        self.class_name = class_name.to_string();
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Read-only view of the grades in insertion order.
    pub fn grades(&self) -> &IndexMap<String, f64> {
        &self.grades
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    pub fn has_grades(&self) -> bool {
        !self.grades.is_empty()
    }

    /// Arithmetic mean of all scores, rounded half-up to two decimals.
    ///
    /// A record without grades averages 0.0.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: f64 = self.grades.values().sum();
        let mean = total / self.grades.len() as f64;
        (mean * 100.0).round() / 100.0
    }

    /// Standing derived from the rounded average.
    ///
    /// The comparison uses [`average`], so a raw mean that rounds up to
    /// exactly 75.00 passes.
    ///
    /// [`average`]: Student::average
    pub fn status(&self) -> GradeStatus {
        if self.grades.is_empty() {
            GradeStatus::BelumAdaNilai
        } else if self.average() >= PASSING_SCORE {
            GradeStatus::Lulus
        } else {
            GradeStatus::TidakLulus
        }
    }

    /// Print the detail block to stdout.
    pub fn display_info(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for Student {
    /// The user-facing detail block, separator line included.
    ///
    /// Scores print in their natural form (80 rather than 80.00); only the
    /// average is fixed at two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Nama: {}", self.name)?;
        writeln!(f, "Kelas: {}", self.class_name)?;
        writeln!(f, "Mata Pelajaran:")?;
        if self.grades.is_empty() {
            writeln!(f, "  (Belum ada nilai)")?;
        } else {
            for (subject, score) in &self.grades {
                writeln!(f, "  - {}: {}", subject, score)?;
            }
        }
        writeln!(f, "Rata-rata: {:.2}", self.average())?;
        writeln!(f, "Status: {}", self.status())?;
        write!(f, "------------------------")
    }
}
