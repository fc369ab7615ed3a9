//! Markup for the student lookup: search forms, the student panel with its
//! trend and filterable subject table, and the single-subject panel.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::grades::grade_style;
use common::metrics::{StyleTag, GPA_LEVELS};
use common::model::{GpaSummaryItem, StudentRecord, SubjectResult};
use common::tables::results::{distinct_values, grade_options};

use super::messages::Msg;
use super::state::{StudentLookup, SubjectAttempts};
use crate::components::helpers::{format_credits, format_gpa};
use crate::components::widgets::{badge, bar, empty_row, loading, stat_card};

pub fn view(component: &StudentLookup, ctx: &Context<StudentLookup>) -> Html {
    let link = ctx.link();

    html! {
        <div class="student-lookup">
            { build_search_forms(component, link) }
            { loading(component.student.is_loading() || component.subject.is_loading(), "Loading...") }
            {
                match component.student.data() {
                    Some((record, summary)) => build_student_panel(component, record, summary, link),
                    None => html! {},
                }
            }
            {
                match component.subject.data() {
                    Some(attempts) => build_subject_panel(attempts),
                    None => html! {},
                }
            }
        </div>
    }
}

fn build_search_forms(component: &StudentLookup, link: &Scope<StudentLookup>) -> Html {
    let busy = component.student.is_loading() || component.subject.is_loading();

    html! {
        <div class="search-forms">
            <form
                class="search-form"
                onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Search })}
            >
                <input
                    type="text"
                    placeholder="Index number"
                    value={component.index_input.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetIndex(e.target_unchecked_into::<HtmlInputElement>().value()))}
                />
                <button type="submit" disabled={busy}>{"Search"}</button>
                <button
                    type="button"
                    disabled={component.downloading}
                    onclick={link.callback(|_| Msg::Download)}
                >
                    { if component.downloading { "Downloading..." } else { "Download workbook" } }
                </button>
            </form>
            <form
                class="search-form"
                onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::SearchSubject })}
            >
                <input
                    type="text"
                    placeholder="Subject code (e.g. SCS1201)"
                    value={component.subject_input.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetSubject(e.target_unchecked_into::<HtmlInputElement>().value()))}
                />
                <button type="submit" disabled={busy}>{"Find subject result"}</button>
            </form>
        </div>
    }
}

fn build_student_panel(
    component: &StudentLookup,
    record: &StudentRecord,
    summary: &GpaSummaryItem,
    link: &Scope<StudentLookup>,
) -> Html {
    let breakdown = record.breakdown();
    let rows = component.visible_results();

    html! {
        <section class="panel">
            <h2>{ record.display_name().to_string() }</h2>
            <div class="stat-grid">
                { stat_card("Index number", record.index_number.clone(), None) }
                { stat_card("GPA", format_gpa(breakdown.gpa), Some(GPA_LEVELS.style(breakdown.gpa))) }
                { stat_card("Level", GPA_LEVELS.label(breakdown.gpa).to_string(), None) }
                { stat_card("Credits", format_credits(breakdown.credits), None) }
                { stat_card("Medical credits", format_credits(breakdown.medical_credits), None) }
                { stat_card("Repeated subjects", breakdown.repeated_subjects.to_string(), None) }
                {
                    match summary.rank {
                        Some(rank) => stat_card("Rank", rank.to_string(), None),
                        None => html! {},
                    }
                }
            </div>
            { build_trend(summary, record) }
            { build_filters(component, record, link) }
            { build_results_table(&rows) }
        </section>
    }
}

fn build_trend(summary: &GpaSummaryItem, record: &StudentRecord) -> Html {
    let mut trend = summary.trend();
    if trend.is_empty() {
        trend = record.semester_trend();
    }
    if trend.is_empty() {
        return html! {};
    }

    html! {
        <div class="gpa-trend">
            <h3>{"GPA by semester"}</h3>
            {
                for trend.iter().map(|(semester, gpa)| html! {
                    <div class="trend-row">
                        <span class="trend-label">{ semester.to_string() }</span>
                        { bar(*gpa, 4.0, GPA_LEVELS.style(*gpa)) }
                        <span class="trend-value">{ format_gpa(*gpa) }</span>
                    </div>
                })
            }
        </div>
    }
}

fn build_filters(
    component: &StudentLookup,
    record: &StudentRecord,
    link: &Scope<StudentLookup>,
) -> Html {
    let years = distinct_values(&record.subjects, |r| r.year.as_deref());
    let semesters = distinct_values(&record.subjects, |r| r.semester.as_deref());
    let grades = grade_options(&record.subjects);

    html! {
        <div class="filters">
            { choice_select("Year", &years, component.filter.year.choice(), link.callback(Msg::SetYear)) }
            { choice_select("Semester", &semesters, component.filter.semester.choice(), link.callback(Msg::SetSemester)) }
            { choice_select("Grade", &grades, component.filter.grade.choice(), link.callback(Msg::SetGrade)) }
            if component.filter.is_active() {
                <button type="button" onclick={link.callback(|_| Msg::ClearFilters)}>{"Clear filters"}</button>
            }
        </div>
    }
}

fn choice_select(
    label: &str,
    options: &[String],
    selected: Option<&str>,
    on_change: Callback<String>,
) -> Html {
    let onchange = on_change.reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());

    html! {
        <label class="filter">
            { label.to_string() }
            <select {onchange}>
                <option value="" selected={selected.is_none()}>{"All"}</option>
                {
                    for options.iter().map(|option| html! {
                        <option
                            value={option.clone()}
                            selected={selected.is_some_and(|s| s.eq_ignore_ascii_case(option))}
                        >
                            { option.clone() }
                        </option>
                    })
                }
            </select>
        </label>
    }
}

fn build_results_table(rows: &[SubjectResult]) -> Html {
    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"Subject"}</th>
                    <th>{"Year"}</th>
                    <th>{"Semester"}</th>
                    <th>{"Credits"}</th>
                    <th>{"Result"}</th>
                    <th>{"Points"}</th>
                </tr>
            </thead>
            <tbody>
                if rows.is_empty() {
                    { empty_row(6, "No subjects match the current filters") }
                } else {
                    { for rows.iter().map(result_row) }
                }
            </tbody>
        </table>
    }
}

fn result_row(result: &SubjectResult) -> Html {
    html! {
        <tr>
            <td>{ result.subject_code.clone() }</td>
            <td>{ result.year.clone().unwrap_or_default() }</td>
            <td>{ result.semester.clone().unwrap_or_default() }</td>
            <td>{ format_credits(result.credits) }</td>
            <td>{ badge(&result.grade, grade_style(&result.grade)) }</td>
            <td>{ result.gpa_points().map(format_gpa).unwrap_or_else(|| "-".to_string()) }</td>
        </tr>
    }
}

fn build_subject_panel(found: &SubjectAttempts) -> Html {
    html! {
        <section class="panel">
            <h2>{ format!("{} in {}", found.index, found.subject_code) }</h2>
            if found.attempts.len() > 1 {
                { badge(&format!("{} attempts", found.attempts.len()), StyleTag::Caution) }
            }
            { build_results_table(&found.attempts) }
        </section>
    }
}
