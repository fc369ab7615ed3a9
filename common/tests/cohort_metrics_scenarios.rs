mod test_support;

use common::metrics::{
    difficulty_cohort_stats, gpa_cohort_stats, mc_cohort_stats, StyleTag, GPA_LEVELS,
    MC_USAGE_LEVELS,
};
use common::query::{FlagFilter, SortDirection, SortState};
use common::tables::medical::{mc_rows, McColumn};
use futures::executor::block_on;
use serde_json::json;
use test_support::{client, transport};

#[test]
fn gpa_cohort_average_and_levels() {
    let api = client();
    transport(&api).route(
        "/summary/students/gpa-summary",
        json!([{"Index": "1", "FinalGPA": 3.8}, {"Index": "2", "FinalGPA": 2.2}]),
    );

    let items = block_on(api.gpa_summary()).expect("summary");
    let stats = gpa_cohort_stats(&items);

    assert_eq!(stats.students, 2);
    assert!((stats.average - 3.0).abs() < 1e-9);
    assert_eq!(stats.highest, 3.8);
    assert_eq!(GPA_LEVELS.label(items[0].final_gpa), "Excellent");
    assert_eq!(GPA_LEVELS.label(items[1].final_gpa), "Below Average");
    assert_eq!(GPA_LEVELS.style(items[0].final_gpa), StyleTag::Good);
}

#[test]
fn mc_usage_levels_follow_cohort_share() {
    let api = client();
    transport(&api).route(
        "/summary/students/medical-credits",
        json!({"summary": [
            {"Index": "a", "FinalGPA": 3.1, "Rank": 4, "TotalMC": 17, "StrategicUseOfMC": "True"},
            {"Index": "b", "FinalGPA": 2.9, "Rank": 7, "TotalMC": 20, "StrategicUseOfMC": false},
            {"Index": "c", "FinalGPA": 3.6, "Rank": 1, "TotalMC": 7, "StrategicUseOfMC": 0}
        ]}),
    );

    let records = block_on(api.medical_credits(false)).expect("records");
    let sort = SortState::with_direction(McColumn::Rank, SortDirection::Ascending);
    let rows = mc_rows(&records, FlagFilter::default(), &sort);

    let levels: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.record.index_number.as_str(), MC_USAGE_LEVELS.label(r.usage)))
        .collect();
    assert_eq!(levels, [("c", "Low"), ("a", "Critical"), ("b", "Critical")]);
    assert!((rows[1].usage - 85.0).abs() < 1e-9);
    assert!((rows[0].usage - 35.0).abs() < 1e-9);

    let stats = mc_cohort_stats(&records);
    assert_eq!(stats.strategic_users, 1);
    assert_eq!(stats.students, 3);
    assert_eq!(stats.max_total_mc, 20.0);
}

#[test]
fn difficulty_counts_use_labels() {
    let api = client();
    transport(&api).route(
        "/summary/subjects/difficulty-summary",
        json!({"summary": [
            {"Subject": "SCS1201", "Average GPA": 3.4, "Total Students": 50, "Failure Rate (%)": 4, "Difficulty Score": 0.64, "Difficulty Level": "Easy"},
            {"Subject": "SCS2202", "Average GPA": 2.0, "Total Students": 40, "Failure Rate (%)": 30, "Difficulty Score": 2.3, "Difficulty Level": "Very Hard"},
            {"Subject": "SCS2203", "Average GPA": 2.4, "Total Students": 40, "Failure Rate (%)": 20, "Difficulty Score": 1.8}
        ]}),
    );

    let summaries = block_on(api.difficulty_summary()).expect("summaries");
    let stats = difficulty_cohort_stats(&summaries);

    assert_eq!(stats.subjects, 3);
    assert_eq!(stats.hard_subjects, 2);
    assert_eq!(stats.easy_subjects, 1);
    assert!((stats.average_pass_rate - 82.0).abs() < 1e-9);
}
