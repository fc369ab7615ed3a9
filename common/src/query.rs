//! Filter/sort engine shared by every table.
//!
//! A table view is always `filter` then `sort`: predicates narrow the list,
//! then a stable sort orders what is left by the active key.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// A column a table can be ordered by.
pub trait SortKey<T>: Copy + PartialEq {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Records with no value under this key. They sort last in either direction.
    fn is_missing(&self, _record: &T) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortState<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn with_direction(key: K, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Selecting the active key flips the direction; a new key starts ascending.
    pub fn select(&mut self, key: K) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn indicator(&self, key: K) -> &'static str {
        if self.key == key { self.direction.arrow() } else { "" }
    }
}

/// Natural ordering of numbers with `<`/`>` semantics; NaN compares equal so
/// the sort stays total.
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Missing values sort after present ones in ascending order.
pub fn cmp_opt_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp_f64(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in both directions: equal keys keep their relative order. Missing
/// values stay at the end whichever way the key is ordered.
pub fn sort_records<T, K: SortKey<T>>(records: &mut [T], sort: &SortState<K>) {
    records.sort_by(|a, b| {
        let missing = sort.key.is_missing(a).cmp(&sort.key.is_missing(b));
        if missing != Ordering::Equal {
            return missing;
        }
        let ordering = sort.key.compare(a, b);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Applies `predicate`, then orders the survivors.
pub fn filter_then_sort<T, K>(
    records: &[T],
    predicate: impl Fn(&T) -> bool,
    sort: Option<&SortState<K>>,
) -> Vec<T>
where
    T: Clone,
    K: SortKey<T>,
{
    let mut rows: Vec<T> = records.iter().filter(|r| predicate(r)).cloned().collect();
    if let Some(sort) = sort {
        sort_records(&mut rows, sort);
    }
    rows
}

/// Case-insensitive substring match. An empty needle matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFilter {
    needle: String,
}

impl TextFilter {
    pub fn new(input: &str) -> Self {
        Self {
            needle: input.trim().to_lowercase(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    pub fn matches(&self, haystack: &str) -> bool {
        self.needle.is_empty() || haystack.to_lowercase().contains(&self.needle)
    }

    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        self.needle.is_empty() || fields.into_iter().any(|f| self.matches(f))
    }
}

/// Inclusive numeric bounds; an unset side imposes no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeFilter {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeFilter {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Builds bounds from raw form input; blank or unparseable text leaves
    /// that side unset.
    pub fn parse(min: &str, max: &str) -> Self {
        Self {
            min: parse_bound(min),
            max: parse_bound(max),
        }
    }

    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    /// A missing value only passes when no bound is set.
    pub fn contains_opt(&self, value: Option<f64>) -> bool {
        match value {
            Some(v) => self.contains(v),
            None => !self.is_active(),
        }
    }
}

pub fn parse_bound(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    input.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Exact match on a boolean field, applied only while enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlagFilter {
    pub enabled: bool,
    pub expected: bool,
}

impl FlagFilter {
    pub fn only(expected: bool) -> Self {
        Self {
            enabled: true,
            expected,
        }
    }

    pub fn matches(&self, flag: bool) -> bool {
        !self.enabled || flag == self.expected
    }
}

/// Exact, case-insensitive match on an optional text field, applied only
/// when a value was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChoiceFilter(Option<String>);

impl ChoiceFilter {
    pub fn new(choice: &str) -> Self {
        let choice = choice.trim();
        if choice.is_empty() {
            Self(None)
        } else {
            Self(Some(choice.to_string()))
        }
    }

    pub fn choice(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        match (&self.0, value) {
            (None, _) => true,
            (Some(choice), Some(value)) => choice.eq_ignore_ascii_case(value.trim()),
            (Some(_), None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        code: &'static str,
        score: f64,
        order: usize,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Scored {
        code: &'static str,
        score: Option<f64>,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct ByScore;

    impl SortKey<Scored> for ByScore {
        fn compare(&self, a: &Scored, b: &Scored) -> Ordering {
            cmp_opt_f64(a.score, b.score)
        }

        fn is_missing(&self, record: &Scored) -> bool {
            record.score.is_none()
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Key {
        Code,
        Score,
    }

    impl SortKey<Row> for Key {
        fn compare(&self, a: &Row, b: &Row) -> Ordering {
            match self {
                Key::Code => a.code.cmp(b.code),
                Key::Score => cmp_f64(a.score, b.score),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { code: "CS1010", score: 2.0, order: 0 },
            Row { code: "MA1101", score: 1.0, order: 1 },
            Row { code: "CS2030", score: 2.0, order: 2 },
            Row { code: "PH1201", score: 3.0, order: 3 },
        ]
    }

    #[test]
    fn equal_keys_keep_their_relative_order_in_both_directions() {
        let mut asc = rows();
        sort_records(&mut asc, &SortState::new(Key::Score));
        assert_eq!(asc.iter().map(|r| r.order).collect::<Vec<_>>(), vec![1, 0, 2, 3]);

        let mut desc = rows();
        sort_records(&mut desc, &SortState::with_direction(Key::Score, SortDirection::Descending));
        assert_eq!(desc.iter().map(|r| r.order).collect::<Vec<_>>(), vec![3, 0, 2, 1]);
    }

    #[test]
    fn missing_values_sort_last_in_both_directions() {
        let scored = vec![
            Scored { code: "none", score: None },
            Scored { code: "low", score: Some(1.0) },
            Scored { code: "high", score: Some(2.0) },
        ];
        let codes = |rows: &[Scored]| rows.iter().map(|r| r.code).collect::<Vec<_>>();

        let mut asc = scored.clone();
        sort_records(&mut asc, &SortState::new(ByScore));
        assert_eq!(codes(&asc), ["low", "high", "none"]);

        let mut desc = scored;
        sort_records(&mut desc, &SortState::with_direction(ByScore, SortDirection::Descending));
        assert_eq!(codes(&desc), ["high", "low", "none"]);
    }

    #[test]
    fn selecting_the_active_key_twice_restores_the_order() {
        let mut sort = SortState::new(Key::Code);
        let original = filter_then_sort(&rows(), |_| true, Some(&sort));
        sort.select(Key::Code);
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.select(Key::Code);
        assert_eq!(filter_then_sort(&rows(), |_| true, Some(&sort)), original);
    }

    #[test]
    fn selecting_a_new_key_resets_to_ascending() {
        let mut sort = SortState::with_direction(Key::Code, SortDirection::Descending);
        sort.select(Key::Score);
        assert_eq!(sort, SortState::new(Key::Score));
        assert_eq!(sort.indicator(Key::Score), "▲");
        assert_eq!(sort.indicator(Key::Code), "");
    }

    #[test]
    fn filtering_happens_before_sorting() {
        let filter = TextFilter::new("cs");
        let sort = SortState::with_direction(Key::Score, SortDirection::Descending);
        let out = filter_then_sort(&rows(), |r| filter.matches(r.code), Some(&sort));
        assert_eq!(out.iter().map(|r| r.order).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn text_filter_is_case_insensitive() {
        let filter = TextFilter::new(" cs1010 ");
        assert!(filter.matches("CS1010"));
        assert!(!filter.matches("CS2030"));
        assert!(TextFilter::new("").matches("anything"));
        assert!(filter.matches_any(["Intro", "CS1010"]));
    }

    #[test]
    fn unset_range_is_the_identity() {
        let range = RangeFilter::parse("", "  ");
        assert!(!range.is_active());
        let out = filter_then_sort::<_, Key>(&rows(), |r| range.contains(r.score), None);
        assert_eq!(out, rows());
    }

    #[test]
    fn range_bounds_are_inclusive_and_independent() {
        let range = RangeFilter::parse("2", "");
        assert!(range.contains(2.0));
        assert!(!range.contains(1.99));
        assert!(range.contains(100.0));

        let range = RangeFilter::new(None, Some(3.0));
        assert!(range.contains(3.0));
        assert!(!range.contains(3.01));
        assert!(!range.contains_opt(None));
        assert!(RangeFilter::default().contains_opt(None));
        assert_eq!(parse_bound("abc"), None);
    }

    #[test]
    fn flag_and_choice_filters_only_apply_when_set() {
        assert!(FlagFilter::default().matches(false));
        assert!(FlagFilter::only(true).matches(true));
        assert!(!FlagFilter::only(true).matches(false));

        assert!(ChoiceFilter::new("").matches(None));
        assert!(ChoiceFilter::new("a-").matches(Some("A-")));
        assert!(!ChoiceFilter::new("2").matches(None));
    }
}
