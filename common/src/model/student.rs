use serde::{Deserialize, Serialize};

use super::de;
use crate::grades::{self, GpaBreakdown, Semester};

/// One examination row of a student's results workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectResult {
    #[serde(rename = "Subject", deserialize_with = "de::string")]
    pub subject_code: String,

    #[serde(rename = "Year", default, deserialize_with = "de::opt_string")]
    pub year: Option<String>,

    #[serde(rename = "Semester", default, deserialize_with = "de::opt_string")]
    pub semester: Option<String>,

    #[serde(rename = "Credits", deserialize_with = "de::f64_cell")]
    pub credits: f64,

    /// Letter grade or a non-credit marker such as `MC`.
    #[serde(rename = "Result", deserialize_with = "de::string")]
    pub grade: String,
}

impl SubjectResult {
    pub fn normalized_code(&self) -> String {
        grades::normalize_subject_code(&self.subject_code)
    }

    /// Grade points for this attempt; `None` for non-credit results. A grade
    /// outside the table still counts as an attempt, worth 0 points.
    pub fn gpa_points(&self) -> Option<f64> {
        if grades::is_excluded(&self.grade) {
            None
        } else {
            Some(grades::grade_points(&self.grade).unwrap_or(0.0))
        }
    }

    pub fn study_semester(&self) -> Semester {
        grades::semester_of(&self.subject_code)
    }
}

/// Full results of one student, as returned by `GET /students/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(deserialize_with = "de::string")]
    pub index_number: String,

    #[serde(default, deserialize_with = "de::opt_string")]
    pub student_name: Option<String>,

    #[serde(rename = "results", default)]
    pub subjects: Vec<SubjectResult>,
}

impl StudentRecord {
    pub fn breakdown(&self) -> GpaBreakdown {
        grades::compute_gpa(&self.subjects)
    }

    pub fn gpa(&self) -> f64 {
        self.breakdown().gpa
    }

    pub fn total_credits(&self) -> f64 {
        self.breakdown().credits
    }

    /// Per-semester GPA computed from the results sheet, for semesters with
    /// at least one graded subject.
    pub fn semester_trend(&self) -> Vec<(Semester, f64)> {
        Semester::ORDERED
            .into_iter()
            .filter(|semester| {
                self.subjects.iter().any(|r| {
                    r.credits > 0.0 && r.study_semester() == *semester && r.gpa_points().is_some()
                })
            })
            .map(|semester| (semester, grades::semester_gpa(&self.subjects, semester)))
            .collect()
    }

    pub fn display_name(&self) -> &str {
        self.student_name.as_deref().unwrap_or(&self.index_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_workbook_rows_with_numeric_cells() {
        let record: StudentRecord = serde_json::from_value(json!({
            "index_number": "2200123",
            "results": [
                {"Subject": "SCS 1201", "Year": 2022, "Semester": "1", "Credits": 3, "Result": "A"},
                {"Subject": "SCS1202", "Year": "2022", "Semester": 1, "Credits": "2", "Result": "MC"}
            ]
        }))
        .unwrap();

        assert_eq!(record.subjects.len(), 2);
        assert_eq!(record.subjects[0].year.as_deref(), Some("2022"));
        assert_eq!(record.subjects[1].semester.as_deref(), Some("1"));
        assert_eq!(record.subjects[1].credits, 2.0);
        assert_eq!(record.subjects[0].normalized_code(), "SCS1201");
        assert_eq!(record.subjects[0].gpa_points(), Some(4.0));
        assert_eq!(record.subjects[1].gpa_points(), None);
        assert_eq!(record.display_name(), "2200123");
    }

    #[test]
    fn derived_totals_ignore_medical_rows() {
        let record: StudentRecord = serde_json::from_value(json!({
            "index_number": "2200123",
            "student_name": "A. Perera",
            "results": [
                {"Subject": "SCS1201", "Credits": 3, "Result": "A"},
                {"Subject": "SCS1203", "Credits": 3, "Result": "B"},
                {"Subject": "SCS1204", "Credits": 2, "Result": "MC"}
            ]
        }))
        .unwrap();

        assert_eq!(record.total_credits(), 6.0);
        assert!((record.gpa() - 3.5).abs() < 1e-9);
        assert_eq!(record.breakdown().medical_credits, 2.0);
    }

    #[test]
    fn semester_trend_skips_semesters_without_graded_subjects() {
        let record: StudentRecord = serde_json::from_value(json!({
            "index_number": "2200123",
            "results": [
                {"Subject": "SCS1201", "Credits": 3, "Result": "A"},
                {"Subject": "SCS1202", "Credits": 3, "Result": "C"},
                {"Subject": "SCS1208", "Credits": 2, "Result": "MC"},
                {"Subject": "SCS2201", "Credits": 2, "Result": "B"}
            ]
        }))
        .unwrap();

        assert_eq!(
            record.semester_trend(),
            vec![(Semester::Y1S1, 3.0), (Semester::Y2S1, 3.0)]
        );
    }
}
