use std::cmp::Ordering;

use crate::metrics::mc_usage_percentage;
use crate::model::MedicalCreditRecord;
use crate::query::{cmp_f64, cmp_opt_f64, filter_then_sort, FlagFilter, SortKey, SortState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McColumn {
    Rank,
    TotalMc,
}

impl SortKey<MedicalCreditRecord> for McColumn {
    fn compare(&self, a: &MedicalCreditRecord, b: &MedicalCreditRecord) -> Ordering {
        match self {
            McColumn::Rank => cmp_opt_f64(a.rank.map(f64::from), b.rank.map(f64::from)),
            McColumn::TotalMc => cmp_f64(a.total_mc, b.total_mc),
        }
    }

    fn is_missing(&self, record: &MedicalCreditRecord) -> bool {
        matches!(self, McColumn::Rank) && record.rank.is_none()
    }
}

/// A table row with its usage share against the loaded cohort.
#[derive(Debug, Clone, PartialEq)]
pub struct McRow {
    pub record: MedicalCreditRecord,
    pub usage: f64,
}

/// Strategic-only filtering happens here, on the already loaded cohort.
pub fn mc_rows(
    records: &[MedicalCreditRecord],
    strategic: FlagFilter,
    sort: &SortState<McColumn>,
) -> Vec<McRow> {
    let cohort_max = records.iter().map(|r| r.total_mc).fold(0.0, f64::max);
    filter_then_sort(records, |r| strategic.matches(r.strategic_use), Some(sort))
        .into_iter()
        .map(|record| McRow {
            usage: mc_usage_percentage(record.total_mc, cohort_max),
            record,
        })
        .collect()
}
