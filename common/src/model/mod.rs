//! Records served by the results API.
//!
//! The backend builds its payloads straight from spreadsheet rows, so most
//! field names are spreadsheet column headers (`Index`, `FinalGPA`,
//! `Failure Rate (%)`). Each struct renames them to Rust field names and the
//! mapping is the single canonical shape the rest of the crate relies on.

pub mod difficulty;
pub mod gpa;
pub mod medical;
pub mod student;
pub mod subject;

pub use difficulty::DifficultySummary;
pub use gpa::GpaSummaryItem;
pub use medical::MedicalCreditRecord;
pub use student::{StudentRecord, SubjectResult};
pub use subject::{Subject, SubjectMetadata};

/// Spreadsheet cells come back as numbers or strings depending on how the
/// workbook was written. These helpers accept either.
pub(crate) mod de {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn cell_to_string(value: Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => {
                let s = s.trim();
                if s.is_empty() { None } else { Some(s.to_string()) }
            }
            Value::Number(n) => Some(match n.as_f64() {
                Some(f) if f.fract() == 0.0 => format!("{}", f as i64),
                _ => n.to_string(),
            }),
            Value::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        }
    }

    fn cell_to_f64(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let value = Value::deserialize(deserializer)?;
        cell_to_string(value).ok_or_else(|| serde::de::Error::custom("expected a non-empty cell"))
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(cell_to_string(Value::deserialize(deserializer)?))
    }

    pub fn f64_cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        cell_to_f64(&value).ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {}", value)))
    }

    pub fn opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Ok(cell_to_f64(&Value::deserialize(deserializer)?))
    }

    /// Ranks are written by pandas and may arrive as `3.0`.
    pub fn opt_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
        Ok(cell_to_f64(&Value::deserialize(deserializer)?)
            .filter(|f| *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u32))
    }

    /// Whole non-negative count, accepting `40`, `40.0` and `"40"`.
    pub fn u32_cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = Value::deserialize(deserializer)?;
        cell_to_f64(&value)
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= f64::from(u32::MAX))
            .map(|f| f as u32)
            .ok_or_else(|| serde::de::Error::custom(format!("expected a count, got {}", value)))
    }

    pub fn bool_cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Bool(b) => Ok(b),
            Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
            Value::String(s) => Ok(matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")),
            _ => Ok(false),
        }
    }
}
