use std::collections::BTreeSet;

use crate::model::SubjectResult;
use crate::query::ChoiceFilter;

/// Year / semester / grade narrowing of a student's subject list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultFilter {
    pub year: ChoiceFilter,
    pub semester: ChoiceFilter,
    pub grade: ChoiceFilter,
}

impl ResultFilter {
    pub fn matches(&self, result: &SubjectResult) -> bool {
        self.year.matches(result.year.as_deref())
            && self.semester.matches(result.semester.as_deref())
            && self.grade.matches(Some(&result.grade))
    }

    pub fn is_active(&self) -> bool {
        self.year.choice().is_some() || self.semester.choice().is_some() || self.grade.choice().is_some()
    }
}

/// Rows in workbook order.
pub fn result_rows(results: &[SubjectResult], filter: &ResultFilter) -> Vec<SubjectResult> {
    results.iter().filter(|r| filter.matches(r)).cloned().collect()
}

/// Distinct non-empty values of a column, for the filter drop-downs.
pub fn distinct_values<'a>(
    results: &'a [SubjectResult],
    field: impl Fn(&'a SubjectResult) -> Option<&'a str>,
) -> Vec<String> {
    results
        .iter()
        .filter_map(field)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Grade drop-down options. Grades differing only in case are one option.
pub fn grade_options(results: &[SubjectResult]) -> Vec<String> {
    results
        .iter()
        .map(|r| r.grade.trim().to_uppercase())
        .filter(|g| !g.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
