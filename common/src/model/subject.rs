use serde::{Deserialize, Serialize};

use super::de;
use crate::grades::{self, Semester};

/// Catalog entry.
///
/// The catalog endpoint currently lists bare subject codes; richer entries
/// with name, credits and department are accepted as well and both end up
/// in this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SubjectRepr")]
pub struct Subject {
    pub subject_code: String,
    pub subject_name: Option<String>,
    pub credits: Option<f64>,
    pub department: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SubjectRepr {
    Code(String),
    Entry {
        #[serde(alias = "Subject", alias = "subject")]
        subject_code: String,
        #[serde(default)]
        subject_name: Option<String>,
        #[serde(default, deserialize_with = "de::opt_f64")]
        credits: Option<f64>,
        #[serde(default)]
        department: Option<String>,
    },
}

impl From<SubjectRepr> for Subject {
    fn from(repr: SubjectRepr) -> Self {
        match repr {
            SubjectRepr::Code(subject_code) => Subject {
                subject_code: subject_code.trim().to_string(),
                subject_name: None,
                credits: None,
                department: None,
            },
            SubjectRepr::Entry {
                subject_code,
                subject_name,
                credits,
                department,
            } => Subject {
                subject_code: subject_code.trim().to_string(),
                subject_name,
                credits,
                department,
            },
        }
    }
}

impl Subject {
    pub fn normalized_code(&self) -> String {
        grades::normalize_subject_code(&self.subject_code)
    }

    pub fn semester(&self) -> Semester {
        grades::semester_of(&self.subject_code)
    }

    pub fn display_name(&self) -> &str {
        self.subject_name.as_deref().unwrap_or(&self.subject_code)
    }
}

/// Detail of one catalog entry (`GET /subjects/{code}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectMetadata {
    #[serde(rename = "subject", alias = "subject_code", deserialize_with = "de::string")]
    pub subject_code: String,

    #[serde(default)]
    pub subject_name: Option<String>,

    #[serde(default)]
    pub total_students: Option<u32>,

    #[serde(default, deserialize_with = "de::opt_f64")]
    pub average_grade: Option<f64>,

    #[serde(default)]
    pub file_size: Option<String>,

    #[serde(default)]
    pub last_updated: Option<String>,

    /// API-relative path of the workbook, e.g. `/subjects/SCS1201/download`.
    #[serde(rename = "file", alias = "download_url", default)]
    pub download_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_codes_and_entries_decode_to_the_same_type() {
        let subjects: Vec<Subject> = serde_json::from_value(json!([
            "SCS1201",
            {"subject_code": "SCS2209", "subject_name": "Operating Systems", "credits": 3, "department": "Computer Science"}
        ]))
        .unwrap();

        assert_eq!(subjects[0].subject_code, "SCS1201");
        assert_eq!(subjects[0].display_name(), "SCS1201");
        assert_eq!(subjects[0].semester(), Semester::Y1S1);
        assert_eq!(subjects[1].credits, Some(3.0));
        assert_eq!(subjects[1].semester(), Semester::Y2S2);
    }

    #[test]
    fn metadata_maps_backend_keys() {
        let meta: SubjectMetadata =
            serde_json::from_value(json!({"subject": "SCS1201", "file": "/subjects/SCS1201/download"})).unwrap();
        assert_eq!(meta.subject_code, "SCS1201");
        assert_eq!(meta.download_url.as_deref(), Some("/subjects/SCS1201/download"));
        assert_eq!(meta.total_students, None);
    }
}
