use serde::{Deserialize, Serialize};

use super::de;
use crate::grades::Semester;

/// Row of the cohort GPA summary (`GPA_Summary` sheet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaSummaryItem {
    #[serde(rename = "Index", deserialize_with = "de::string")]
    pub index_number: String,

    #[serde(rename = "Y1S1", default, deserialize_with = "de::opt_f64")]
    pub y1s1: Option<f64>,
    #[serde(rename = "Y1S2", default, deserialize_with = "de::opt_f64")]
    pub y1s2: Option<f64>,
    #[serde(rename = "Y2S1", default, deserialize_with = "de::opt_f64")]
    pub y2s1: Option<f64>,
    #[serde(rename = "Y2S2", default, deserialize_with = "de::opt_f64")]
    pub y2s2: Option<f64>,
    #[serde(rename = "Y3S1", default, deserialize_with = "de::opt_f64")]
    pub y3s1: Option<f64>,

    #[serde(rename = "FinalGPA", deserialize_with = "de::f64_cell")]
    pub final_gpa: f64,

    #[serde(rename = "TotalMC", default, deserialize_with = "de::opt_f64")]
    pub total_mc: Option<f64>,

    #[serde(rename = "Rank", default, deserialize_with = "de::opt_u32")]
    pub rank: Option<u32>,
}

impl GpaSummaryItem {
    pub fn semester_gpa(&self, semester: Semester) -> Option<f64> {
        match semester {
            Semester::Y1S1 => self.y1s1,
            Semester::Y1S2 => self.y1s2,
            Semester::Y2S1 => self.y2s1,
            Semester::Y2S2 => self.y2s2,
            Semester::Y3S1 => self.y3s1,
            Semester::Unknown => None,
        }
    }

    /// Semester GPAs in study order, skipping semesters missing from the sheet.
    pub fn trend(&self) -> Vec<(Semester, f64)> {
        Semester::ORDERED
            .iter()
            .filter_map(|s| self.semester_gpa(*s).map(|gpa| (*s, gpa)))
            .collect()
    }
}
