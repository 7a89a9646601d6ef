//! Property-based tests for record validation and roster ordering.
//!
//! These tests use proptest to generate random inputs and verify that
//! normalization, score validation, and ranking maintain their invariants
//! under all conditions.

use proptest::prelude::*;

use rapor::{GradeStatus, PASSING_SCORE, Student, StudentManager, parse_score};

// =============================================================================
// Test Strategies
// =============================================================================

/// Identity-ish strings that survive trimming.
fn id_like() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9\\-]{0,11}"
}

/// Names in the shapes the roster actually sees.
fn name_like() -> impl Strategy<Value = String> {
    prop_oneof![
        // Plain two-part names
        "[A-Z][a-z]{2,10} [A-Z][a-z]{2,10}",
        // Accented / hyphenated / apostrophe names
        "[A-Z][a-zéüö]{2,8}[\\-'][A-Z][a-z]{2,8}",
        // Single word
        "[A-Z][a-z]{2,12}",
    ]
}

/// Class labels in the usual formats.
fn class_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "1[0-2]-[A-D]",
        "1[0-2]-IPA-[1-3]",
        "XI{0,2} [A-Z][a-z]{3,8}",
    ]
}

fn subject_like() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,12}( [A-Z][a-z]{2,8})?"
}

fn score_in_range() -> impl Strategy<Value = f64> {
    0.0f64..=100.0
}

fn score_out_of_range() -> impl Strategy<Value = f64> {
    prop_oneof![100.01f64..=10_000.0, -10_000.0f64..=-0.01]
}

/// Whitespace-only strings, tabs included.
fn blank_string() -> impl Strategy<Value = String> {
    "[ \\t]{0,8}"
}

// =============================================================================
// Record Construction Properties
// =============================================================================

mod construction {
    use super::*;

    proptest! {
        #[test]
        fn padded_fields_always_trim(
            id in id_like(),
            name in name_like(),
            class_name in class_like(),
        ) {
            let student = Student::new(
                format!("  {}  ", id),
                format!("\t{}\t", name),
                format!(" {} ", class_name),
            ).unwrap();

            prop_assert_eq!(student.id(), id.trim());
            prop_assert_eq!(student.name(), name.trim());
            prop_assert_eq!(student.class_name(), class_name.trim());
        }

        #[test]
        fn blank_id_never_constructs(
            blank in blank_string(),
            name in name_like(),
            class_name in class_like(),
        ) {
            prop_assert!(Student::new(blank, name, class_name).is_err());
        }
    }
}

// =============================================================================
// Score and Average Properties
// =============================================================================

mod scoring {
    use super::*;

    proptest! {
        #[test]
        fn in_range_scores_accepted(
            subject in subject_like(),
            score in score_in_range(),
        ) {
            let mut student = Student::new("S001", "Budi", "12-A").unwrap();
            prop_assert!(student.add_grade(subject, score).is_ok());
            prop_assert_eq!(student.grade_count(), 1);
        }

        #[test]
        fn out_of_range_scores_rejected(
            subject in subject_like(),
            score in score_out_of_range(),
        ) {
            let mut student = Student::new("S001", "Budi", "12-A").unwrap();
            prop_assert!(student.add_grade(subject, score).is_err());
            prop_assert!(!student.has_grades());
        }

        #[test]
        fn average_stays_in_score_range(scores in prop::collection::vec(score_in_range(), 1..12)) {
            let mut student = Student::new("S001", "Budi", "12-A").unwrap();
            for (i, score) in scores.iter().enumerate() {
                student.add_grade(format!("Mapel {}", i), *score).unwrap();
            }

            let average = student.average();
            prop_assert!((0.0..=100.0).contains(&average));

            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            prop_assert_eq!(average, (mean * 100.0).round() / 100.0);
        }

        #[test]
        fn status_matches_average_threshold(scores in prop::collection::vec(score_in_range(), 1..12)) {
            let mut student = Student::new("S001", "Budi", "12-A").unwrap();
            for (i, score) in scores.iter().enumerate() {
                student.add_grade(format!("Mapel {}", i), *score).unwrap();
            }

            let expected = if student.average() >= PASSING_SCORE {
                GradeStatus::Lulus
            } else {
                GradeStatus::TidakLulus
            };
            prop_assert_eq!(student.status(), expected);
        }

        #[test]
        fn parse_score_round_trips_display(score in score_in_range()) {
            prop_assert_eq!(parse_score(&score.to_string()).unwrap(), score);
        }
    }
}

// =============================================================================
// Roster Ordering Properties
// =============================================================================

mod ranking {
    use super::*;

    fn roster_with_averages(averages: &[f64]) -> StudentManager {
        let mut manager = StudentManager::new();
        for (i, average) in averages.iter().enumerate() {
            let mut student =
                Student::new(format!("S{:03}", i), format!("Siswa {}", i), "12-A").unwrap();
            student.add_grade("Mapel", *average).unwrap();
            manager.add_student(student);
        }
        manager
    }

    proptest! {
        #[test]
        fn top_students_sorted_descending_and_stable(
            averages in prop::collection::vec(score_in_range(), 0..10),
            n in 0usize..12,
        ) {
            let manager = roster_with_averages(&averages);
            let top = manager.top_students(n);

            let expected_len = if n == 0 { 0 } else { n.min(averages.len()) };
            prop_assert_eq!(top.len(), expected_len);

            for pair in top.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!(a.average() >= b.average());
                if a.average() == b.average() {
                    // Ties keep roster order, visible through the id suffix.
                    prop_assert!(a.id() < b.id());
                }
            }

            // The roster itself never reorders.
            let ids: Vec<&str> = manager.students().iter().map(|s| s.id()).collect();
            let sorted_ids: Vec<String> =
                (0..averages.len()).map(|i| format!("S{:03}", i)).collect();
            prop_assert_eq!(ids, sorted_ids.iter().map(String::as_str).collect::<Vec<_>>());
        }

        #[test]
        fn remove_only_drops_the_matching_record(
            averages in prop::collection::vec(score_in_range(), 1..10),
            pick in 0usize..10,
        ) {
            let mut manager = roster_with_averages(&averages);
            let pick = pick % averages.len();
            let victim = format!("S{:03}", pick);

            prop_assert!(manager.remove_student(&victim));
            prop_assert_eq!(manager.len(), averages.len() - 1);
            prop_assert!(manager.find_student(&victim).is_none());
            prop_assert!(!manager.remove_student(&victim));
        }
    }
}
