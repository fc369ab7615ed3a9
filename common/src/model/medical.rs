use serde::{Deserialize, Serialize};

use super::de;

/// Row of the `GPA_Summary_By_Medicals` sheet.
///
/// `strategic_use` is computed by the backend: the student's final GPA is
/// above the cohort median while their MC credits are in the top quartile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalCreditRecord {
    #[serde(rename = "Index", deserialize_with = "de::string")]
    pub index_number: String,

    #[serde(rename = "FinalGPA", deserialize_with = "de::f64_cell")]
    pub final_gpa: f64,

    #[serde(rename = "Rank", default, deserialize_with = "de::opt_u32")]
    pub rank: Option<u32>,

    #[serde(rename = "TotalMC", deserialize_with = "de::f64_cell")]
    pub total_mc: f64,

    #[serde(rename = "StrategicUseOfMC", default, deserialize_with = "de::bool_cell")]
    pub strategic_use: bool,
}
