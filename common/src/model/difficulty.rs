use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::de;
use crate::metrics::DIFFICULTY_LEVELS;

/// Row of the overall subject summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultySummary {
    #[serde(rename = "Subject", deserialize_with = "de::string")]
    pub subject_code: String,

    #[serde(rename = "Subject Name", default, deserialize_with = "de::opt_string")]
    pub subject_name: Option<String>,

    #[serde(rename = "Average GPA", deserialize_with = "de::f64_cell")]
    pub average_gpa: f64,

    #[serde(rename = "Total Students", deserialize_with = "de::u32_cell")]
    pub total_students: u32,

    #[serde(rename = "Failures", default, deserialize_with = "de::u32_cell")]
    pub failures: u32,

    /// Percentage of graded attempts that earned zero points.
    #[serde(rename = "Failure Rate (%)", deserialize_with = "de::f64_cell")]
    pub failure_rate: f64,

    /// `(4 - average GPA) + failure rate / 100`; higher is harder.
    #[serde(rename = "Difficulty Score", default, deserialize_with = "de::f64_cell")]
    pub difficulty_score: f64,

    #[serde(rename = "Difficulty Level", default, deserialize_with = "de::opt_string")]
    pub difficulty_level: Option<String>,

    #[serde(rename = "Grade Distribution", default)]
    pub grade_distribution: BTreeMap<String, u32>,
}

impl DifficultySummary {
    pub fn pass_rate(&self) -> f64 {
        (100.0 - self.failure_rate).clamp(0.0, 100.0)
    }

    /// The backend's label when present, otherwise the label of the score tier.
    pub fn difficulty_label(&self) -> &str {
        match &self.difficulty_level {
            Some(level) => level,
            None => DIFFICULTY_LEVELS.label(self.difficulty_score),
        }
    }

    /// True when the distribution is absent or accounts for every student.
    pub fn distribution_is_consistent(&self) -> bool {
        self.grade_distribution.is_empty()
            || self.grade_distribution.values().sum::<u32>() == self.total_students
    }

    /// Share of the cohort holding `grade`, in percent.
    pub fn grade_share(&self, grade: &str) -> f64 {
        if self.total_students == 0 {
            return 0.0;
        }
        let count = self.grade_distribution.get(grade).copied().unwrap_or(0);
        f64::from(count) / f64::from(self.total_students) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary(extra: serde_json::Value) -> DifficultySummary {
        let mut base = json!({
            "Subject": "SCS2201",
            "Average GPA": 1.9,
            "Total Students": 4,
            "Failures": 1,
            "Failure Rate (%)": 25.0,
            "Difficulty Score": 2.35
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn pass_rate_is_the_complement_of_failure_rate() {
        assert_eq!(summary(json!({})).pass_rate(), 75.0);
    }

    #[test]
    fn backend_label_wins_over_score_tier() {
        assert_eq!(summary(json!({})).difficulty_label(), "Very Hard");
        assert_eq!(summary(json!({"Difficulty Level": "Moderate"})).difficulty_label(), "Moderate");
    }

    #[test]
    fn counts_and_score_accept_spreadsheet_cells() {
        let decoded = summary(json!({
            "Total Students": 40.0,
            "Failures": "3",
            "Difficulty Score": "1.75"
        }));
        assert_eq!(decoded.total_students, 40);
        assert_eq!(decoded.failures, 3);
        assert_eq!(decoded.difficulty_score, 1.75);

        let fractional = serde_json::from_value::<DifficultySummary>(json!({
            "Subject": "SCS1201",
            "Average GPA": 3.0,
            "Total Students": 40.5,
            "Failure Rate (%)": 0.0
        }));
        assert!(fractional.is_err());
    }

    #[test]
    fn distribution_must_account_for_every_student() {
        let ok = summary(json!({"Grade Distribution": {"A": 1, "B": 2, "F": 1}}));
        assert!(ok.distribution_is_consistent());
        assert_eq!(ok.grade_share("B"), 50.0);

        let short = summary(json!({"Grade Distribution": {"A": 1}}));
        assert!(!short.distribution_is_consistent());
    }
}
