use std::cmp::Ordering;
use std::collections::HashMap;

use crate::grades::normalize_subject_code;
use crate::model::{DifficultySummary, Subject};
use crate::query::{cmp_opt_f64, filter_then_sort, RangeFilter, SortKey, SortState, TextFilter};

/// Catalog entry joined with its difficulty summary, when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub subject: Subject,
    pub difficulty: Option<DifficultySummary>,
}

impl CatalogRow {
    pub fn difficulty_score(&self) -> Option<f64> {
        self.difficulty.as_ref().map(|d| d.difficulty_score)
    }

    pub fn average_gpa(&self) -> Option<f64> {
        self.difficulty.as_ref().map(|d| d.average_gpa)
    }

    pub fn pass_rate(&self) -> Option<f64> {
        self.difficulty.as_ref().map(DifficultySummary::pass_rate)
    }

    pub fn name(&self) -> &str {
        self.subject
            .subject_name
            .as_deref()
            .or_else(|| self.difficulty.as_ref().and_then(|d| d.subject_name.as_deref()))
            .unwrap_or("")
    }
}

/// Joins by normalized subject code, keeping catalog order.
pub fn join_catalog(subjects: &[Subject], difficulties: &[DifficultySummary]) -> Vec<CatalogRow> {
    let by_code: HashMap<String, &DifficultySummary> = difficulties
        .iter()
        .map(|d| (normalize_subject_code(&d.subject_code), d))
        .collect();

    subjects
        .iter()
        .map(|subject| CatalogRow {
            difficulty: by_code.get(&subject.normalized_code()).map(|d| (*d).clone()),
            subject: subject.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogColumn {
    Code,
    Name,
    Difficulty,
    AverageGpa,
    PassRate,
}

impl SortKey<CatalogRow> for CatalogColumn {
    fn compare(&self, a: &CatalogRow, b: &CatalogRow) -> Ordering {
        match self {
            CatalogColumn::Code => a.subject.subject_code.cmp(&b.subject.subject_code),
            CatalogColumn::Name => a.name().cmp(b.name()),
            CatalogColumn::Difficulty => cmp_opt_f64(a.difficulty_score(), b.difficulty_score()),
            CatalogColumn::AverageGpa => cmp_opt_f64(a.average_gpa(), b.average_gpa()),
            CatalogColumn::PassRate => cmp_opt_f64(a.pass_rate(), b.pass_rate()),
        }
    }

    fn is_missing(&self, row: &CatalogRow) -> bool {
        match self {
            CatalogColumn::Code | CatalogColumn::Name => false,
            CatalogColumn::Difficulty => row.difficulty_score().is_none(),
            CatalogColumn::AverageGpa => row.average_gpa().is_none(),
            CatalogColumn::PassRate => row.pass_rate().is_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogFilter {
    pub text: TextFilter,
    pub min_difficulty: Option<f64>,
    pub max_average_gpa: Option<f64>,
}

impl CatalogFilter {
    pub fn matches(&self, row: &CatalogRow) -> bool {
        self.text.matches_any([row.subject.subject_code.as_str(), row.name()])
            && RangeFilter::new(self.min_difficulty, None).contains_opt(row.difficulty_score())
            && RangeFilter::new(None, self.max_average_gpa).contains_opt(row.average_gpa())
    }
}

pub fn catalog_rows(
    rows: &[CatalogRow],
    filter: &CatalogFilter,
    sort: &SortState<CatalogColumn>,
) -> Vec<CatalogRow> {
    filter_then_sort(rows, |r| filter.matches(r), Some(sort))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortDirection;

    fn subject(code: &str) -> Subject {
        Subject {
            subject_code: code.to_string(),
            subject_name: None,
            credits: None,
            department: None,
        }
    }

    fn summary(code: &str, name: &str, average_gpa: f64, failure_rate: f64) -> DifficultySummary {
        DifficultySummary {
            subject_code: code.to_string(),
            subject_name: Some(name.to_string()),
            average_gpa,
            total_students: 40,
            failures: 0,
            failure_rate,
            difficulty_score: (4.0 - average_gpa) + failure_rate / 100.0,
            difficulty_level: None,
            grade_distribution: Default::default(),
        }
    }

    fn rows() -> Vec<CatalogRow> {
        join_catalog(
            &[subject("SCS1201"), subject("SCS2202"), subject("SCS3203")],
            &[
                summary("SCS 1201", "Data Structures", 3.1, 5.0),
                summary("SCS2202", "Operating Systems", 2.0, 30.0),
            ],
        )
    }

    fn codes(rows: &[CatalogRow]) -> Vec<&str> {
        rows.iter().map(|r| r.subject.subject_code.as_str()).collect()
    }

    #[test]
    fn join_matches_normalized_codes() {
        let rows = rows();
        assert_eq!(rows[0].name(), "Data Structures");
        assert_eq!(rows[1].pass_rate(), Some(70.0));
        assert!(rows[2].difficulty.is_none());
    }

    #[test]
    fn search_matches_code_or_name() {
        let filter = CatalogFilter {
            text: TextFilter::new("operating"),
            ..Default::default()
        };
        let found = catalog_rows(&rows(), &filter, &SortState::new(CatalogColumn::Code));
        assert_eq!(codes(&found), ["SCS2202"]);
    }

    #[test]
    fn numeric_bounds_drop_rows_without_summary() {
        let filter = CatalogFilter {
            min_difficulty: Some(1.0),
            ..Default::default()
        };
        let found = catalog_rows(&rows(), &filter, &SortState::new(CatalogColumn::Code));
        assert_eq!(codes(&found), ["SCS2202"]);

        let filter = CatalogFilter {
            max_average_gpa: Some(3.5),
            ..Default::default()
        };
        let found = catalog_rows(&rows(), &filter, &SortState::new(CatalogColumn::Code));
        assert_eq!(codes(&found), ["SCS1201", "SCS2202"]);
    }

    #[test]
    fn hardest_first() {
        let sort = SortState::with_direction(CatalogColumn::Difficulty, SortDirection::Descending);
        let found = catalog_rows(&rows(), &CatalogFilter::default(), &sort);
        // The unsummarised row stays last.
        assert_eq!(codes(&found), ["SCS2202", "SCS1201", "SCS3203"]);
    }
}
