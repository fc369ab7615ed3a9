use std::cmp::Ordering;

use crate::model::GpaSummaryItem;
use crate::query::{cmp_f64, cmp_opt_f64, filter_then_sort, RangeFilter, SortKey, SortState, TextFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpaColumn {
    Index,
    FinalGpa,
    TotalMc,
    Rank,
}

impl SortKey<GpaSummaryItem> for GpaColumn {
    fn compare(&self, a: &GpaSummaryItem, b: &GpaSummaryItem) -> Ordering {
        match self {
            GpaColumn::Index => a.index_number.cmp(&b.index_number),
            GpaColumn::FinalGpa => cmp_f64(a.final_gpa, b.final_gpa),
            GpaColumn::TotalMc => cmp_opt_f64(a.total_mc, b.total_mc),
            GpaColumn::Rank => cmp_opt_f64(a.rank.map(f64::from), b.rank.map(f64::from)),
        }
    }

    fn is_missing(&self, item: &GpaSummaryItem) -> bool {
        match self {
            GpaColumn::Index | GpaColumn::FinalGpa => false,
            GpaColumn::TotalMc => item.total_mc.is_none(),
            GpaColumn::Rank => item.rank.is_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GpaTableFilter {
    pub index: TextFilter,
    pub gpa: RangeFilter,
}

impl GpaTableFilter {
    pub fn matches(&self, item: &GpaSummaryItem) -> bool {
        self.index.matches(&item.index_number) && self.gpa.contains(item.final_gpa)
    }
}

pub fn gpa_rows(
    items: &[GpaSummaryItem],
    filter: &GpaTableFilter,
    sort: &SortState<GpaColumn>,
) -> Vec<GpaSummaryItem> {
    filter_then_sort(items, |i| filter.matches(i), Some(sort))
}
