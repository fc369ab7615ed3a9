mod test_support;

use common::error::ApiError;
use common::grades::Semester;
use common::tables::results::{result_rows, ResultFilter};
use common::query::ChoiceFilter;
use futures::executor::block_on;
use serde_json::json;
use test_support::{client, transport};

fn route_student(api: &common::api::ApiClient<test_support::FakeTransport>) {
    transport(api).route(
        "/students/2200123",
        json!({
            "index_number": "2200123",
            "student_name": "A. Perera",
            "results": [
                {"Subject": "SCS1201", "Year": 1, "Semester": 1, "Credits": 3, "Result": "A"},
                {"Subject": "SCS1208", "Year": 1, "Semester": 2, "Credits": 3, "Result": "B"},
                {"Subject": "SCS2201", "Year": 2, "Semester": 1, "Credits": 2, "Result": "MC"}
            ]
        }),
    );
}

#[test]
fn joined_fetch_returns_record_and_trend() {
    let api = client();
    route_student(&api);
    transport(&api).route(
        "/summary/students/gpa-summary/2200123",
        json!({"summary": [{"Index": "2200123", "Y1S1": 4.0, "Y1S2": 3.0, "FinalGPA": 3.5}]}),
    );

    let (record, summary) = block_on(api.student_with_trend("2200123")).expect("joined");

    assert_eq!(record.display_name(), "A. Perera");
    assert!((record.gpa() - 3.5).abs() < 1e-9);
    assert_eq!(
        summary.trend(),
        vec![(Semester::Y1S1, 4.0), (Semester::Y1S2, 3.0)]
    );
    assert_eq!(transport(&api).calls().len(), 2);
}

#[test]
fn joined_fetch_fails_as_a_whole() {
    let api = client();
    route_student(&api);
    transport(&api).fail(
        "/summary/students/gpa-summary/2200123",
        ApiError::Timeout(5_000),
    );

    let result = block_on(api.student_with_trend("2200123"));

    assert_eq!(result, Err(ApiError::Timeout(5_000)));
}

#[test]
fn subject_list_filters_by_year_and_grade() {
    let api = client();
    route_student(&api);
    let record = block_on(api.student("2200123")).expect("record");

    let filter = ResultFilter {
        year: ChoiceFilter::new("1"),
        grade: ChoiceFilter::new("b"),
        ..Default::default()
    };
    let rows = result_rows(&record.subjects, &filter);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].subject_code, "SCS1208");
    assert_eq!(rows[0].study_semester(), Semester::Y1S2);
}

#[test]
fn single_subject_lookup_encodes_both_segments() {
    let api = client();
    transport(&api).route(
        "/students/2200123/subject/SCS%201201",
        json!({"results": [
            {"Subject": "SCS1201", "Credits": 3, "Result": "F"},
            {"Subject": "SCS1201", "Credits": 3, "Result": "B"}
        ]}),
    );

    let attempts = block_on(api.subject_result(" 2200123 ", "SCS 1201")).expect("attempts");

    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[1].grade, "B");
}
