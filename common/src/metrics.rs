//! Derived metrics for the summary cards.
//!
//! All functions are pure and total over an in-memory slice. Level labels
//! and their presentation tone come from one [`ThresholdTable`] per measure,
//! so a label and its colour can never disagree.

use std::collections::HashSet;
use std::hash::Hash;

use crate::model::{DifficultySummary, GpaSummaryItem, MedicalCreditRecord};

/// Presentation-only tone attached to a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Good,
    Info,
    Warning,
    Caution,
    Danger,
    Neutral,
}

impl StyleTag {
    pub fn class_name(&self) -> &'static str {
        match self {
            StyleTag::Good => "tone-good",
            StyleTag::Info => "tone-info",
            StyleTag::Warning => "tone-warning",
            StyleTag::Caution => "tone-caution",
            StyleTag::Danger => "tone-danger",
            StyleTag::Neutral => "tone-neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub lower_bound: f64,
    pub label: &'static str,
    pub style: StyleTag,
}

/// Tiers sorted by descending lower bound. The last tier is the fallback for
/// values below every bound.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable(&'static [Threshold]);

impl ThresholdTable {
    pub fn classify(&self, value: f64) -> &'static Threshold {
        let tiers = self.0;
        tiers
            .iter()
            .find(|t| value >= t.lower_bound)
            .or_else(|| tiers.last())
            .unwrap_or(&NEUTRAL)
    }

    pub fn label(&self, value: f64) -> &'static str {
        self.classify(value).label
    }

    pub fn style(&self, value: f64) -> StyleTag {
        self.classify(value).style
    }

    /// Tone of a label produced elsewhere (e.g. by the backend), matched
    /// case-insensitively against this table's labels.
    pub fn style_for_label(&self, label: &str) -> StyleTag {
        let label = label.trim();
        self.0
            .iter()
            .find(|t| t.label.eq_ignore_ascii_case(label))
            .map_or(StyleTag::Neutral, |t| t.style)
    }
}

static NEUTRAL: Threshold = Threshold {
    lower_bound: f64::NEG_INFINITY,
    label: "Unknown",
    style: StyleTag::Neutral,
};

pub const GPA_LEVELS: ThresholdTable = ThresholdTable(&[
    Threshold { lower_bound: 3.5, label: "Excellent", style: StyleTag::Good },
    Threshold { lower_bound: 3.0, label: "Good", style: StyleTag::Info },
    Threshold { lower_bound: 2.5, label: "Average", style: StyleTag::Warning },
    Threshold { lower_bound: f64::NEG_INFINITY, label: "Below Average", style: StyleTag::Danger },
]);

pub const MC_USAGE_LEVELS: ThresholdTable = ThresholdTable(&[
    Threshold { lower_bound: 80.0, label: "Critical", style: StyleTag::Danger },
    Threshold { lower_bound: 60.0, label: "High", style: StyleTag::Caution },
    Threshold { lower_bound: 40.0, label: "Moderate", style: StyleTag::Warning },
    Threshold { lower_bound: f64::NEG_INFINITY, label: "Low", style: StyleTag::Good },
]);

pub const PASS_RATE_LEVELS: ThresholdTable = ThresholdTable(&[
    Threshold { lower_bound: 80.0, label: "Good", style: StyleTag::Good },
    Threshold { lower_bound: 60.0, label: "Warning", style: StyleTag::Warning },
    Threshold { lower_bound: f64::NEG_INFINITY, label: "Poor", style: StyleTag::Danger },
]);

/// Used to label subjects whose summary carries no backend level, and to
/// colour backend labels.
pub const DIFFICULTY_LEVELS: ThresholdTable = ThresholdTable(&[
    Threshold { lower_bound: 2.0, label: "Very Hard", style: StyleTag::Danger },
    Threshold { lower_bound: 1.5, label: "Hard", style: StyleTag::Caution },
    Threshold { lower_bound: 1.0, label: "Moderate", style: StyleTag::Warning },
    Threshold { lower_bound: f64::NEG_INFINITY, label: "Easy", style: StyleTag::Good },
]);

/// Arithmetic mean of `field`; 0 for an empty slice.
pub fn average<T>(records: &[T], field: impl Fn(&T) -> f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(field).sum::<f64>() / records.len() as f64
}

/// Largest value of `field`; 0 for an empty slice.
pub fn maximum<T>(records: &[T], field: impl Fn(&T) -> f64) -> f64 {
    records
        .iter()
        .map(field)
        .fold(None, |max: Option<f64>, v| Some(max.map_or(v, |m| m.max(v))))
        .unwrap_or(0.0)
}

pub fn count_matching<T>(records: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|r| predicate(r)).count()
}

pub fn distinct_count<T, K>(records: &[T], key: impl Fn(&T) -> K) -> usize
where
    K: Eq + Hash,
{
    records.iter().map(key).collect::<HashSet<K>>().len()
}

/// MC credits of one record as a share of the heaviest user in the cohort.
pub fn mc_usage_percentage(total_mc: f64, cohort_max: f64) -> f64 {
    if cohort_max <= 0.0 {
        return 0.0;
    }
    (total_mc / cohort_max * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpaCohortStats {
    pub students: usize,
    pub average: f64,
    pub highest: f64,
}

pub fn gpa_cohort_stats(items: &[GpaSummaryItem]) -> GpaCohortStats {
    GpaCohortStats {
        students: items.len(),
        average: average(items, |i| i.final_gpa),
        highest: maximum(items, |i| i.final_gpa),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct McCohortStats {
    pub students: usize,
    pub records: usize,
    pub strategic_users: usize,
    pub average_usage: f64,
    pub max_total_mc: f64,
}

pub fn mc_cohort_stats(records: &[MedicalCreditRecord]) -> McCohortStats {
    let max_total_mc = maximum(records, |r| r.total_mc);
    McCohortStats {
        students: distinct_count(records, |r| r.index_number.clone()),
        records: records.len(),
        strategic_users: count_matching(records, |r| r.strategic_use),
        average_usage: average(records, |r| mc_usage_percentage(r.total_mc, max_total_mc)),
        max_total_mc,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyCohortStats {
    pub subjects: usize,
    pub average_pass_rate: f64,
    pub hard_subjects: usize,
    pub easy_subjects: usize,
}

pub fn difficulty_cohort_stats(summaries: &[DifficultySummary]) -> DifficultyCohortStats {
    DifficultyCohortStats {
        subjects: summaries.len(),
        average_pass_rate: average(summaries, |s| s.pass_rate()),
        hard_subjects: count_matching(summaries, |s| {
            s.difficulty_label().to_lowercase().contains("hard")
        }),
        easy_subjects: count_matching(summaries, |s| {
            s.difficulty_label().trim().eq_ignore_ascii_case("easy")
        }),
    }
}
