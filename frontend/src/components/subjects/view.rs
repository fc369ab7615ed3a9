use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::metrics::{DIFFICULTY_LEVELS, PASS_RATE_LEVELS};
use common::model::SubjectMetadata;
use common::tables::catalog::{CatalogColumn, CatalogRow};

use super::messages::Msg;
use super::state::Subjects;
use crate::components::helpers::{format_count, format_gpa, format_percent};
use crate::components::subject_difficulty::detail;
use crate::components::widgets::{badge, empty_row, loading, sort_header, stat_card};

pub fn view(component: &Subjects, ctx: &Context<Subjects>) -> Html {
    let link = ctx.link();
    let rows = component.visible_rows();

    html! {
        <div class="subjects">
            { build_filters(component, link) }
            { loading(component.is_loading(), "Loading subjects...") }
            { build_detail(component, link) }
            <p class="table-caption">
                { format!("Showing {} of {} subjects", format_count(rows.len()), format_count(component.catalog.rows().len())) }
            </p>
            <table class="data-table">
                <thead>
                    <tr>
                        { header(component, link, "Code", CatalogColumn::Code) }
                        { header(component, link, "Name", CatalogColumn::Name) }
                        <th>{"Semester"}</th>
                        { header(component, link, "Average GPA", CatalogColumn::AverageGpa) }
                        { header(component, link, "Pass rate", CatalogColumn::PassRate) }
                        { header(component, link, "Difficulty", CatalogColumn::Difficulty) }
                        <th>{"Level"}</th>
                    </tr>
                </thead>
                <tbody>
                    if rows.is_empty() {
                        { empty_row(7, "No subjects match the current filters") }
                    } else {
                        { for rows.iter().map(|row| catalog_row(component, row, link)) }
                    }
                </tbody>
            </table>
        </div>
    }
}

fn header(component: &Subjects, link: &Scope<Subjects>, label: &str, column: CatalogColumn) -> Html {
    sort_header(label, column, &component.sort, link.callback(move |_| Msg::SortBy(column)))
}

fn build_filters(component: &Subjects, link: &Scope<Subjects>) -> Html {
    html! {
        <div class="filters">
            <input
                type="text"
                placeholder="Search code or name"
                value={component.search.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value()))}
            />
            <input
                type="number"
                step="0.1"
                placeholder="Min difficulty score"
                value={component.min_difficulty.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetMinDifficulty(e.target_unchecked_into::<HtmlInputElement>().value()))}
            />
            <input
                type="number"
                step="0.01"
                placeholder="Max average GPA"
                value={component.max_average_gpa.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetMaxAverageGpa(e.target_unchecked_into::<HtmlInputElement>().value()))}
            />
            <button type="button" onclick={link.callback(|_| Msg::Load)} disabled={component.is_loading()}>
                {"Refresh"}
            </button>
        </div>
    }
}

fn catalog_row(component: &Subjects, row: &CatalogRow, link: &Scope<Subjects>) -> Html {
    let code = row.subject.subject_code.clone();
    let selected = component.selected.as_deref() == Some(code.as_str());
    let onclick = link.callback(move |_| Msg::Select(code.clone()));

    html! {
        <tr class={classes!("clickable", selected.then_some("selected"))} {onclick}>
            <td>{ row.subject.subject_code.clone() }</td>
            <td>{ row.name().to_string() }</td>
            <td>{ row.subject.semester().to_string() }</td>
            <td>{ row.average_gpa().map(format_gpa).unwrap_or_else(|| "-".to_string()) }</td>
            <td>
                {
                    match row.pass_rate() {
                        Some(rate) => badge(&format_percent(rate), PASS_RATE_LEVELS.style(rate)),
                        None => html! { "-" },
                    }
                }
            </td>
            <td>{ row.difficulty_score().map(|s| format!("{:.2}", s)).unwrap_or_else(|| "-".to_string()) }</td>
            <td>
                {
                    match &row.difficulty {
                        Some(summary) => {
                            let label = summary.difficulty_label();
                            badge(label, DIFFICULTY_LEVELS.style_for_label(label))
                        }
                        None => html! {},
                    }
                }
            </td>
        </tr>
    }
}

fn build_detail(component: &Subjects, link: &Scope<Subjects>) -> Html {
    let Some(code) = component.selected.clone() else {
        return html! {};
    };
    let row = component.selected_row();
    let downloading = component.downloading.as_deref() == Some(code.as_str());
    let download = link.callback({
        let code = code.clone();
        move |_| Msg::Download(code.clone())
    });

    html! {
        <section class="panel subject-detail">
            <h2>
                { code.clone() }
                {
                    match row.as_ref().map(CatalogRow::name).filter(|n| !n.is_empty()) {
                        Some(name) => html! { <small>{ format!(" {}", name) }</small> },
                        None => html! {},
                    }
                }
            </h2>
            { loading(component.metadata.is_loading(), "Loading subject details...") }
            {
                match component.metadata.data() {
                    Some(metadata) => metadata_cards(metadata),
                    None => html! {},
                }
            }
            {
                match row.as_ref().and_then(|r| r.difficulty.as_ref()) {
                    Some(summary) => detail(summary),
                    None => html! { <p class="muted">{"No difficulty summary for this subject"}</p> },
                }
            }
            <div class="actions">
                <button type="button" onclick={download} disabled={downloading}>
                    { if downloading { "Downloading..." } else { "Download workbook" } }
                </button>
                <button type="button" onclick={link.callback(|_| Msg::CloseDetail)}>{"Close"}</button>
            </div>
        </section>
    }
}

fn metadata_cards(metadata: &SubjectMetadata) -> Html {
    let dash = || "-".to_string();

    html! {
        <div class="stat-grid">
            { stat_card("Students", metadata.total_students.map(|n| format_count(n as usize)).unwrap_or_else(dash), None) }
            { stat_card("Average grade", metadata.average_grade.map(format_gpa).unwrap_or_else(dash), None) }
            { stat_card("File size", metadata.file_size.clone().unwrap_or_else(dash), None) }
            { stat_card("Last updated", metadata.last_updated.clone().unwrap_or_else(dash), None) }
        </div>
    }
}
