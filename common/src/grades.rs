//! Grade table, GPA computation and semester lookup for subject codes.
//!
//! GPA rules:
//! - rows with zero credits are ignored,
//! - non-credit results (`CM`, `MC`, `EC`, `CN`, `WH`, `NC`) never count
//!   towards the GPA, but `MC` and `CM` credits are reported as medical credits,
//! - a subject attempted more than once keeps its best attempt, capped at
//!   C+ (2.3) points.
//! - any other grade outside the table counts as 0 points.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::metrics::StyleTag;
use crate::model::SubjectResult;

pub const REPEAT_CAP: f64 = 2.3;

const GRADE_POINTS: [(&str, f64); 14] = [
    ("A+", 4.0),
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("E", 0.0),
    ("F", 0.0),
    ("NC", 0.0),
];

const EXCLUDED_RESULTS: [&str; 6] = ["CM", "MC", "EC", "CN", "WH", "NC"];
const MEDICAL_RESULTS: [&str; 2] = ["MC", "CM"];

static SUBJECT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SCS(\d{4})").expect("static regex"));

fn normalize_grade(grade: &str) -> String {
    grade.trim().to_ascii_uppercase()
}

/// Removes all whitespace and upper-cases, so `"scs 1201"` and `"SCS1201"` match.
pub fn normalize_subject_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

pub fn grade_points(grade: &str) -> Option<f64> {
    let grade = normalize_grade(grade);
    GRADE_POINTS
        .iter()
        .find(|(g, _)| *g == grade)
        .map(|(_, points)| *points)
}

pub fn is_excluded(grade: &str) -> bool {
    EXCLUDED_RESULTS.contains(&normalize_grade(grade).as_str())
}

pub fn is_medical(grade: &str) -> bool {
    MEDICAL_RESULTS.contains(&normalize_grade(grade).as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GpaBreakdown {
    pub gpa: f64,
    /// Credits of the subjects that entered the GPA (best attempt only).
    pub credits: f64,
    pub medical_credits: f64,
    pub repeated_subjects: usize,
}

struct BestAttempt {
    points: f64,
    credits: f64,
    attempts: usize,
}

fn best_attempts<'a, I>(results: I) -> BTreeMap<String, BestAttempt>
where
    I: IntoIterator<Item = &'a SubjectResult>,
{
    let mut best: BTreeMap<String, BestAttempt> = BTreeMap::new();
    for result in results {
        let Some(points) = result.gpa_points() else {
            continue;
        };
        best.entry(result.normalized_code())
            .and_modify(|b| {
                b.attempts += 1;
                if points > b.points {
                    b.points = points;
                    b.credits = result.credits;
                }
            })
            .or_insert(BestAttempt {
                points,
                credits: result.credits,
                attempts: 1,
            });
    }
    best
}

fn weighted_gpa<I>(attempts: I) -> (f64, f64)
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (weighted, credits) = attempts
        .into_iter()
        .fold((0.0, 0.0), |(w, c), (points, credits)| (w + points * credits, c + credits));
    if credits == 0.0 {
        (0.0, 0.0)
    } else {
        ((weighted / credits * 10_000.0).round() / 10_000.0, credits)
    }
}

/// Final GPA of a results sheet, with repeat capping.
pub fn compute_gpa(results: &[SubjectResult]) -> GpaBreakdown {
    let credited: Vec<&SubjectResult> = results.iter().filter(|r| r.credits > 0.0).collect();
    let best = best_attempts(credited.iter().copied());

    let repeated_subjects = best.values().filter(|b| b.attempts > 1).count();
    let (gpa, credits) = weighted_gpa(best.values().map(|b| {
        let points = if b.attempts > 1 { b.points.min(REPEAT_CAP) } else { b.points };
        (points, b.credits)
    }));
    let medical_credits = credited
        .iter()
        .filter(|r| is_medical(&r.grade))
        .map(|r| r.credits)
        .sum();

    GpaBreakdown {
        gpa,
        credits,
        medical_credits,
        repeated_subjects,
    }
}

/// GPA of one study semester, without repeat capping.
pub fn semester_gpa(results: &[SubjectResult], semester: Semester) -> f64 {
    let best = best_attempts(
        results
            .iter()
            .filter(|r| r.credits > 0.0 && r.study_semester() == semester),
    );
    weighted_gpa(best.values().map(|b| (b.points, b.credits))).0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Semester {
    Y1S1,
    Y1S2,
    Y2S1,
    Y2S2,
    Y3S1,
    Unknown,
}

impl Semester {
    pub const ORDERED: [Semester; 5] = [
        Semester::Y1S1,
        Semester::Y1S2,
        Semester::Y2S1,
        Semester::Y2S2,
        Semester::Y3S1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Semester::Y1S1 => "Y1S1",
            Semester::Y1S2 => "Y1S2",
            Semester::Y2S1 => "Y2S1",
            Semester::Y2S2 => "Y2S2",
            Semester::Y3S1 => "Y3S1",
            Semester::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Study semester of an `SCSnnnn` subject code.
pub fn semester_of(code: &str) -> Semester {
    let code = normalize_subject_code(code);
    let Some(number) = SUBJECT_NUMBER
        .captures(&code)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
    else {
        return Semester::Unknown;
    };

    match number {
        1201..=1207 => Semester::Y1S1,
        1208..=1214 => Semester::Y1S2,
        2201..=2208 => Semester::Y2S1,
        2209..=2214 => Semester::Y2S2,
        3200..=3299 => Semester::Y3S1,
        _ => Semester::Unknown,
    }
}

/// Badge tone for a letter grade.
pub fn grade_style(grade: &str) -> StyleTag {
    match normalize_grade(grade).as_str() {
        "A+" | "A" => StyleTag::Good,
        "A-" | "B+" => StyleTag::Info,
        "B" | "B-" => StyleTag::Warning,
        "C+" | "C" => StyleTag::Caution,
        _ => StyleTag::Danger,
    }
}
