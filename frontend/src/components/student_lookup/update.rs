use yew::platform::spawn_local;
use yew::prelude::*;

use common::api::student_workbook_name;
use common::error::ApiError;
use common::query::ChoiceFilter;
use common::tables::results::ResultFilter;
use common::validation::{required, required_pair};
use common::view_state::{Notice, Resolution};

use super::messages::Msg;
use super::state::{StudentLookup, SubjectAttempts};
use crate::components::helpers::{deliver_workbook, report, show_toast};

pub fn update(component: &mut StudentLookup, ctx: &Context<StudentLookup>, msg: Msg) -> bool {
    match msg {
        Msg::SetIndex(value) => {
            component.index_input = value;
            true
        }
        Msg::SetSubject(value) => {
            component.subject_input = value;
            true
        }
        Msg::Search => {
            let index = match required(&component.index_input, "an index number") {
                Ok(index) => index,
                Err(err) => return reject(&err),
            };

            component.subject.clear();
            component.filter = ResultFilter::default();
            let ticket = component.student.begin();

            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.student_with_trend(&index).await;
                link.send_message(Msg::StudentLoaded(ticket, result));
            });
            true
        }
        Msg::StudentLoaded(ticket, result) => {
            let resolution = component.student.resolve(ticket, result);
            if matches!(resolution, Resolution::Failed(_)) {
                component.student.clear();
            }
            report(&resolution, Some("Student data loaded"), "Failed to fetch student data");
            !matches!(resolution, Resolution::Stale)
        }
        Msg::SearchSubject => {
            let (index, subject_code) = match required_pair(
                (component.index_input.as_str(), "an index number"),
                (component.subject_input.as_str(), "a subject code"),
            ) {
                Ok(pair) => pair,
                Err(err) => return reject(&err),
            };

            component.student.clear();
            let ticket = component.subject.begin();

            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api
                    .subject_result(&index, &subject_code)
                    .await
                    .map(|attempts| SubjectAttempts {
                        index,
                        subject_code,
                        attempts,
                    });
                link.send_message(Msg::SubjectLoaded(ticket, result));
            });
            true
        }
        Msg::SubjectLoaded(ticket, result) => {
            let resolution = component.subject.resolve(ticket, result);
            if matches!(resolution, Resolution::Failed(_)) {
                component.subject.clear();
            }
            report(&resolution, None, "Failed to fetch subject result");
            !matches!(resolution, Resolution::Stale)
        }
        Msg::Download => {
            if component.downloading {
                return false;
            }
            let index = match required(&component.index_input, "an index number") {
                Ok(index) => index,
                Err(err) => return reject(&err),
            };

            component.downloading = true;
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.download_student_workbook(&index).await;
                link.send_message(Msg::Downloaded(index, result));
            });
            true
        }
        Msg::Downloaded(index, result) => {
            component.downloading = false;
            match result {
                Ok(bytes) => deliver_workbook(&bytes, &student_workbook_name(&index)),
                Err(err) => show_toast(&Notice::from_error(&err, "Failed to download workbook")),
            }
            true
        }
        Msg::SetYear(value) => {
            component.filter.year = ChoiceFilter::new(&value);
            true
        }
        Msg::SetSemester(value) => {
            component.filter.semester = ChoiceFilter::new(&value);
            true
        }
        Msg::SetGrade(value) => {
            component.filter.grade = ChoiceFilter::new(&value);
            true
        }
        Msg::ClearFilters => {
            component.filter = ResultFilter::default();
            true
        }
    }
}

/// Validation failures never reach the network.
fn reject(err: &ApiError) -> bool {
    show_toast(&Notice::from_error(err, "Invalid input"));
    false
}
