mod test_support;

use common::error::ApiError;
use futures::executor::block_on;
use serde_json::json;
use test_support::{client, transport, BASE_URL};

#[test]
fn gpa_summary_accepts_bare_and_wrapped_lists() {
    let api = client();
    let rows = json!([
        {"Index": "2200123", "FinalGPA": 3.8, "Rank": 1},
        {"Index": 2200124, "FinalGPA": "2.2", "Rank": 2.0}
    ]);

    transport(&api).route("/summary/students/gpa-summary", rows.clone());
    let bare = block_on(api.gpa_summary()).expect("bare list");

    transport(&api).route("/summary/students/gpa-summary", json!({ "summary": rows }));
    let wrapped = block_on(api.gpa_summary()).expect("wrapped list");

    assert_eq!(bare, wrapped);
    assert_eq!(bare[1].index_number, "2200124");
    assert_eq!(bare[1].final_gpa, 2.2);
    assert_eq!(bare[1].rank, Some(2));
    assert_eq!(
        transport(&api).calls(),
        vec![
            format!("{BASE_URL}/summary/students/gpa-summary"),
            format!("{BASE_URL}/summary/students/gpa-summary"),
        ]
    );
}

#[test]
fn subject_catalog_accepts_codes_and_entries() {
    let api = client();
    transport(&api).route(
        "/subjects/",
        json!({ "subjects": ["SCS1201", {"subject_code": "SCS2202", "subject_name": "Operating Systems", "credits": "3"}] }),
    );

    let subjects = block_on(api.subjects()).expect("catalog");

    assert_eq!(subjects.len(), 2);
    assert_eq!(subjects[0].display_name(), "SCS1201");
    assert_eq!(subjects[1].display_name(), "Operating Systems");
    assert_eq!(subjects[1].credits, Some(3.0));
}

#[test]
fn strategic_flag_is_sent_as_query_parameter() {
    let api = client();
    transport(&api).route(
        "/summary/students/medical-credits?strategic_only=true",
        json!([{"Index": "2200123", "FinalGPA": 3.4, "TotalMC": 12, "StrategicUseOfMC": true}]),
    );

    let records = block_on(api.medical_credits(true)).expect("records");

    assert_eq!(records.len(), 1);
    assert!(records[0].strategic_use);
}

#[test]
fn single_record_lookups_unwrap_one_element_lists() {
    let api = client();
    transport(&api).route(
        "/subjects/difficulty-summary/SCS2202",
        json!({"summary": [{
            "Subject": "SCS2202",
            "Average GPA": 2.0,
            "Total Students": 40,
            "Failures": 12,
            "Failure Rate (%)": 30.0,
            "Difficulty Score": 2.3
        }]}),
    );
    transport(&api).route("/summary/students/gpa-summary/2200123", json!([]));

    let summary = block_on(api.difficulty_for("SCS2202")).expect("summary");
    assert_eq!(summary.difficulty_label(), "Very Hard");
    assert_eq!(summary.pass_rate(), 70.0);

    let missing = block_on(api.gpa_summary_for("2200123"));
    assert!(matches!(missing, Err(ApiError::Decode(_))));
}

#[test]
fn unknown_route_is_a_request_failure() {
    let api = client();

    let err = block_on(api.student("9999999")).expect_err("no route");

    assert!(matches!(err, ApiError::Status { status: 404, .. }));
    assert!(err.is_request_failure());
}

#[test]
fn workbook_downloads_return_raw_bytes() {
    let api = client();
    transport(&api).route_bytes("/students/2200123/download", b"PK\x03\x04");

    let bytes = block_on(api.download_student_workbook("2200123")).expect("bytes");

    assert_eq!(bytes, b"PK\x03\x04");
    assert_eq!(
        api.resolve_url("/subjects/SCS1201/download"),
        format!("{BASE_URL}/subjects/SCS1201/download")
    );
    assert_eq!(
        api.resolve_url("https://files.test/a.xlsx"),
        "https://files.test/a.xlsx"
    );
}

#[test]
fn subject_download_follows_the_metadata_file_link() {
    let api = client();
    transport(&api).route_bytes("/files/SCS1201.xlsx", b"linked");
    transport(&api).route_bytes("/subjects/SCS1201/download", b"route");

    let linked = block_on(api.download_subject_file("SCS1201", Some("/files/SCS1201.xlsx")))
        .expect("linked bytes");
    let fallback = block_on(api.download_subject_file("SCS1201", Some("  "))).expect("route bytes");

    assert_eq!(linked, b"linked");
    assert_eq!(fallback, b"route");
    assert_eq!(
        transport(&api).calls(),
        vec![
            format!("{BASE_URL}/files/SCS1201.xlsx"),
            format!("{BASE_URL}/subjects/SCS1201/download"),
        ]
    );
}
