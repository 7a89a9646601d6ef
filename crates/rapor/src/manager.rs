//! Roster management: add, remove, look up, update, rank, and summarize.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::Result;
use crate::student::{GradeStatus, Student, non_empty};

/// Partial update for a student's mutable identity fields.
///
/// `None` leaves a field untouched; an empty patch applied to a matched
/// record is a successful no-op. The id and the grades are never part of a
/// patch.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub class_name: Option<String>,
}

impl StudentPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.class_name.is_none()
    }
}

/// Aggregate results for one class.
#[derive(Debug, Clone, Serialize)]
pub struct ClassStatistics {
    pub class_name: String,
    pub total_students: usize,
    /// Mean over the members' (rounded) averages.
    pub class_average: f64,
    pub highest_average: f64,
    pub lowest_average: f64,
    pub passing_students: usize,
    pub failing_students: usize,
    /// Percentage of the whole class that passes. Students without grades
    /// count toward the denominator but toward neither pass nor fail.
    pub pass_rate: f64,
}

/// An insertion-ordered roster of student records with unique ids.
///
/// There is no internal synchronization; a roster shared across threads
/// needs its own lock around the mutating operations.
///
/// # Example
///
/// ```
/// use rapor::{Student, StudentManager};
///
/// let mut manager = StudentManager::new();
/// manager.add_student(Student::new("S001", "Budi", "12-A")?);
///
/// if let Some(student) = manager.find_student_mut("S001") {
///     student.add_grade("Matematika", 88.0)?;
/// }
///
/// assert_eq!(manager.len(), 1);
/// # Ok::<(), rapor::RaporError>(())
/// ```
#[derive(Debug, Default)]
pub struct StudentManager {
    students: Vec<Student>,
}

impl StudentManager {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the roster in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Add a record, taking ownership.
    ///
    /// Returns `false` without touching the roster when the record's trimmed
    /// id is empty or already taken. The duplicate check compares trimmed
    /// ids, so an id differing only in surrounding whitespace is a duplicate.
    pub fn add_student(&mut self, student: Student) -> bool {
        let Some(id) = non_empty(student.id()) else {
            return false;
        };
        if self.find_student(id).is_some() {
            return false;
        }
        self.students.push(student);
        true
    }

    /// Remove every record matching the trimmed id.
    ///
    /// Returns `true` only if the roster shrank; an empty id removes nothing.
    /// Surviving records keep their relative order.
    pub fn remove_student(&mut self, id: &str) -> bool {
        let Some(id) = non_empty(id) else {
            return false;
        };
        let before = self.students.len();
        self.students.retain(|s| s.id() != id);
        self.students.len() < before
    }

    /// Look up a record by trimmed id.
    pub fn find_student(&self, id: &str) -> Option<&Student> {
        let id = non_empty(id)?;
        self.students.iter().find(|s| s.id() == id)
    }

    /// Look up a record by trimmed id for mutation.
    ///
    /// Changes through the returned reference land directly in the roster's
    /// stored record; adding grades goes through here.
    pub fn find_student_mut(&mut self, id: &str) -> Option<&mut Student> {
        let id = non_empty(id)?;
        self.students.iter_mut().find(|s| s.id() == id)
    }

    /// Apply a patch to the record matching `id`.
    ///
    /// Returns `Ok(false)` when the id is empty or unmatched. A patch field
    /// that trims to empty is an error and leaves the record as it was (name
    /// is applied before class, so a bad class patch can follow a good name
    /// patch). A matched empty patch returns `Ok(true)`.
    pub fn update_student(&mut self, id: &str, patch: &StudentPatch) -> Result<bool> {
        let Some(student) = self.find_student_mut(id) else {
            return Ok(false);
        };
        if let Some(name) = &patch.name {
            student.set_name(name.as_str())?;
        }
        if let Some(class_name) = &patch.class_name {
            student.set_class_name(class_name.as_str())?;
        }
        Ok(true)
    }

    /// The top `n` students by average, highest first.
    ///
    /// Equal averages keep roster order (stable sort); the roster itself is
    /// never reordered. `n == 0` returns an empty list, `n` past the end
    /// returns everyone.
    pub fn top_students(&self, n: usize) -> Vec<&Student> {
        if n == 0 || self.students.is_empty() {
            return Vec::new();
        }
        let mut ranked: Vec<&Student> = self.students.iter().collect();
        ranked.sort_by(|a, b| {
            b.average()
                .partial_cmp(&a.average())
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }

    /// Print every record's detail block in roster order.
    ///
    /// An empty roster prints nothing.
    pub fn display_all_students(&self) {
        for student in &self.students {
            student.display_info();
        }
    }

    /// Records whose class name equals the trimmed query exactly
    /// (case-sensitive), in roster order.
    pub fn students_by_class(&self, class_name: &str) -> Vec<&Student> {
        let Some(class_name) = non_empty(class_name) else {
            return Vec::new();
        };
        self.students
            .iter()
            .filter(|s| s.class_name() == class_name)
            .collect()
    }

    /// Aggregate statistics for one class, or `None` when no record matches.
    pub fn class_statistics(&self, class_name: &str) -> Option<ClassStatistics> {
        let members = self.students_by_class(class_name);
        if members.is_empty() {
            return None;
        }

        let total = members.len();
        let averages: Vec<f64> = members.iter().map(|s| s.average()).collect();
        let class_average = averages.iter().sum::<f64>() / total as f64;
        let highest_average = averages.iter().copied().fold(f64::MIN, f64::max);
        let lowest_average = averages.iter().copied().fold(f64::MAX, f64::min);
        let passing_students = members
            .iter()
            .filter(|s| s.status() == GradeStatus::Lulus)
            .count();
        let failing_students = members
            .iter()
            .filter(|s| s.status() == GradeStatus::TidakLulus)
            .count();
        let pass_rate = passing_students as f64 / total as f64 * 100.0;

        Some(ClassStatistics {
            class_name: members[0].class_name().to_string(),
            total_students: total,
            class_average,
            highest_average,
            lowest_average,
            passing_students,
            failing_students,
            pass_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RaporError;

    fn student(id: &str, name: &str, class_name: &str) -> Student {
        Student::new(id, name, class_name).unwrap()
    }

    fn graded(id: &str, name: &str, class_name: &str, scores: &[f64]) -> Student {
        let mut s = student(id, name, class_name);
        for (i, score) in scores.iter().enumerate() {
            s.add_grade(format!("Mapel {}", i + 1), *score).unwrap();
        }
        s
    }

    #[test]
    fn test_new_manager_is_empty() {
        let manager = StudentManager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
        assert!(manager.students().is_empty());
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = StudentManager::new();
        let b = StudentManager::new();
        a.add_student(student("S001", "Budi", "12-A"));
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 0);
    }

    #[test]
    fn test_add_student() {
        let mut manager = StudentManager::new();
        assert!(manager.add_student(student("S001", "Budi", "12-A")));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.students()[0].id(), "S001");
    }

    #[test]
    fn test_add_student_rejects_duplicate_id() {
        let mut manager = StudentManager::new();
        assert!(manager.add_student(student("S001", "Budi", "12-A")));
        assert!(!manager.add_student(student("S001", "Ani", "12-B")));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.students()[0].name(), "Budi");
    }

    #[test]
    fn test_add_student_treats_trimmed_id_as_duplicate() {
        let mut manager = StudentManager::new();
        assert!(manager.add_student(student("S001", "Budi", "12-A")));
        // "  S001  " normalizes to "S001" at construction, so this collides.
        assert!(!manager.add_student(student("  S001  ", "Ani", "12-B")));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_remove_student() {
        let mut manager = StudentManager::new();
        manager.add_student(student("S001", "Budi", "12-A"));
        manager.add_student(student("S002", "Ani", "12-A"));

        assert!(manager.remove_student("S001"));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.students()[0].id(), "S002");

        assert!(!manager.remove_student("S001"));
        assert!(!manager.remove_student("S999"));
    }

    #[test]
    fn test_remove_student_blank_id_is_noop() {
        let mut manager = StudentManager::new();
        manager.add_student(student("S001", "Budi", "12-A"));
        assert!(!manager.remove_student(""));
        assert!(!manager.remove_student("   "));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_remove_student_preserves_order() {
        let mut manager = StudentManager::new();
        for id in ["S001", "S002", "S003"] {
            manager.add_student(student(id, "Siswa", "12-A"));
        }
        manager.remove_student("S002");
        let ids: Vec<&str> = manager.students().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["S001", "S003"]);
    }

    #[test]
    fn test_find_student() {
        let mut manager = StudentManager::new();
        manager.add_student(student("S001", "Budi", "12-A"));

        assert_eq!(manager.find_student("S001").unwrap().name(), "Budi");
        assert_eq!(manager.find_student("  S001  ").unwrap().name(), "Budi");
        assert!(manager.find_student("S999").is_none());
        assert!(manager.find_student("").is_none());
        assert!(manager.find_student("   ").is_none());
    }

    #[test]
    fn test_find_student_mut_mutates_stored_record() {
        let mut manager = StudentManager::new();
        manager.add_student(student("S001", "Budi", "12-A"));

        manager
            .find_student_mut("S001")
            .unwrap()
            .add_grade("Matematika", 90.0)
            .unwrap();

        assert_eq!(manager.find_student("S001").unwrap().grade_count(), 1);
    }

    #[test]
    fn test_update_student_name_and_class() {
        let mut manager = StudentManager::new();
        manager.add_student(student("S001", "Budi", "12-A"));

        let patch = StudentPatch::new()
            .with_name("  Budi Revisi  ")
            .with_class_name("12-B");
        assert!(manager.update_student("S001", &patch).unwrap());

        let updated = manager.find_student("S001").unwrap();
        assert_eq!(updated.name(), "Budi Revisi");
        assert_eq!(updated.class_name(), "12-B");
    }

    #[test]
    fn test_update_student_unmatched_or_blank_id() {
        let mut manager = StudentManager::new();
        manager.add_student(student("S001", "Budi", "12-A"));

        let patch = StudentPatch::new().with_name("Ani");
        assert!(!manager.update_student("S999", &patch).unwrap());
        assert!(!manager.update_student("", &patch).unwrap());
        assert_eq!(manager.find_student("S001").unwrap().name(), "Budi");
    }

    #[test]
    fn test_update_student_empty_patch_is_successful_noop() {
        let mut manager = StudentManager::new();
        manager.add_student(student("S001", "Budi", "12-A"));

        assert!(manager.update_student("S001", &StudentPatch::new()).unwrap());
        assert_eq!(manager.find_student("S001").unwrap().name(), "Budi");
    }

    #[test]
    fn test_update_student_rejects_blank_name() {
        let mut manager = StudentManager::new();
        manager.add_student(student("S001", "Budi", "12-A"));

        let patch = StudentPatch::new().with_name("   ");
        assert!(matches!(
            manager.update_student("S001", &patch),
            Err(RaporError::EmptyName)
        ));
        assert_eq!(manager.find_student("S001").unwrap().name(), "Budi");
    }

    #[test]
    fn test_update_student_never_touches_id_or_grades() {
        let mut manager = StudentManager::new();
        manager.add_student(graded("S001", "Budi", "12-A", &[80.0]));

        let patch = StudentPatch::new().with_name("Budi Revisi");
        manager.update_student("S001", &patch).unwrap();

        let updated = manager.find_student("S001").unwrap();
        assert_eq!(updated.id(), "S001");
        assert_eq!(updated.grade_count(), 1);
    }

    #[test]
    fn test_top_students_orders_by_average_descending() {
        let mut manager = StudentManager::new();
        manager.add_student(graded("S001", "Budi", "12-A", &[70.0]));
        manager.add_student(graded("S002", "Ani", "12-A", &[90.0]));
        manager.add_student(graded("S003", "Citra", "12-A", &[80.0]));

        let top = manager.top_students(2);
        let ids: Vec<&str> = top.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["S002", "S003"]);
    }

    #[test]
    fn test_top_students_ties_keep_roster_order() {
        let mut manager = StudentManager::new();
        manager.add_student(graded("A", "Siswa A", "12-A", &[80.0]));
        manager.add_student(graded("B", "Siswa B", "12-A", &[90.0]));
        manager.add_student(graded("C", "Siswa C", "12-A", &[80.0]));

        let top = manager.top_students(2);
        let ids: Vec<&str> = top.iter().map(|s| s.id()).collect();
        // A and C tie on 80; A was inserted first.
        assert_eq!(ids, vec!["B", "A"]);

        let all = manager.top_students(10);
        let ids: Vec<&str> = all.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_top_students_zero_is_empty() {
        let mut manager = StudentManager::new();
        manager.add_student(graded("S001", "Budi", "12-A", &[80.0]));
        assert!(manager.top_students(0).is_empty());
    }

    #[test]
    fn test_top_students_does_not_reorder_roster() {
        let mut manager = StudentManager::new();
        manager.add_student(graded("S001", "Budi", "12-A", &[70.0]));
        manager.add_student(graded("S002", "Ani", "12-A", &[90.0]));

        let _ = manager.top_students(2);
        let ids: Vec<&str> = manager.students().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["S001", "S002"]);
    }

    #[test]
    fn test_students_by_class_exact_match() {
        let mut manager = StudentManager::new();
        manager.add_student(student("S001", "Budi", "10A"));
        manager.add_student(student("S002", "Ani", "10B"));
        manager.add_student(student("S003", "Citra", "10A"));

        let class = manager.students_by_class("10A");
        let ids: Vec<&str> = class.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["S001", "S003"]);

        assert!(manager.students_by_class("10a").is_empty());
        assert!(manager.students_by_class("").is_empty());
        assert_eq!(manager.students_by_class("  10A  ").len(), 2);
    }

    #[test]
    fn test_class_statistics() {
        let mut manager = StudentManager::new();
        manager.add_student(graded("S001", "Budi", "12-A", &[80.0]));
        manager.add_student(graded("S002", "Ani", "12-A", &[70.0]));
        manager.add_student(graded("S003", "Citra", "12-B", &[95.0]));

        let stats = manager.class_statistics("12-A").unwrap();
        assert_eq!(stats.class_name, "12-A");
        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.class_average, 75.0);
        assert_eq!(stats.highest_average, 80.0);
        assert_eq!(stats.lowest_average, 70.0);
        assert_eq!(stats.passing_students, 1);
        assert_eq!(stats.failing_students, 1);
        assert_eq!(stats.pass_rate, 50.0);
    }

    #[test]
    fn test_class_statistics_unknown_class_is_none() {
        let mut manager = StudentManager::new();
        manager.add_student(graded("S001", "Budi", "12-A", &[80.0]));
        assert!(manager.class_statistics("12-Z").is_none());
        assert!(manager.class_statistics("").is_none());
    }

    #[test]
    fn test_class_statistics_gradeless_members_only_count_in_total() {
        let mut manager = StudentManager::new();
        manager.add_student(graded("S001", "Budi", "12-A", &[80.0]));
        manager.add_student(student("S002", "Ani", "12-A"));

        let stats = manager.class_statistics("12-A").unwrap();
        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.passing_students, 1);
        assert_eq!(stats.failing_students, 0);
        assert_eq!(stats.pass_rate, 50.0);
        assert_eq!(stats.lowest_average, 0.0);
    }

    #[test]
    fn test_class_statistics_single_gradeless_student() {
        let mut manager = StudentManager::new();
        manager.add_student(student("S001", "Budi", "12-A"));

        let stats = manager.class_statistics("12-A").unwrap();
        assert_eq!(stats.class_average, 0.0);
        assert_eq!(stats.highest_average, 0.0);
        assert_eq!(stats.lowest_average, 0.0);
        assert_eq!(stats.passing_students, 0);
        assert_eq!(stats.failing_students, 0);
        assert_eq!(stats.pass_rate, 0.0);
    }
}
