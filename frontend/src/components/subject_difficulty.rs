//! Difficulty summaries of every subject, with a single-subject lookup.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ApiError;
use common::metrics::{difficulty_cohort_stats, StyleTag, DIFFICULTY_LEVELS, GPA_LEVELS, PASS_RATE_LEVELS};
use common::model::DifficultySummary;
use common::validation::required;
use common::view_state::{FetchSlot, Notice, Resolution, Ticket};

use crate::components::helpers::{format_count, format_gpa, format_percent, report, show_toast};
use crate::components::widgets::{badge, bar, empty_row, loading, stat_card};
use crate::services::api::ApiHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct SubjectDifficultyProps {
    pub api: ApiHandle,
}

pub enum Msg {
    Load,
    Loaded(Ticket, Result<Vec<DifficultySummary>, ApiError>),
    SetLookup(String),
    Lookup,
    LookupLoaded(Ticket, Result<DifficultySummary, ApiError>),
    CloseLookup,
}

pub struct SubjectDifficulty {
    /// Summary of every subject, loaded on first render.
    summaries: FetchSlot<Vec<DifficultySummary>>,

    /// Subject code typed into the single-subject lookup.
    lookup_input: String,
    single: FetchSlot<DifficultySummary>,
}

impl Component for SubjectDifficulty {
    type Message = Msg;
    type Properties = SubjectDifficultyProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            summaries: FetchSlot::new(),
            lookup_input: String::new(),
            single: FetchSlot::new(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let ticket = self.summaries.begin();
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api.difficulty_summary().await;
                    link.send_message(Msg::Loaded(ticket, result));
                });
                true
            }
            Msg::Loaded(ticket, result) => {
                let resolution = self.summaries.resolve(ticket, result);
                report(&resolution, None, "Failed to fetch subject difficulty data");
                !matches!(resolution, Resolution::Stale)
            }
            Msg::SetLookup(value) => {
                self.lookup_input = value;
                true
            }
            Msg::Lookup => {
                let code = match required(&self.lookup_input, "a subject code") {
                    Ok(code) => code,
                    Err(err) => {
                        show_toast(&Notice::from_error(&err, "Invalid input"));
                        return false;
                    }
                };
                let ticket = self.single.begin();
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api.difficulty_for(&code).await;
                    link.send_message(Msg::LookupLoaded(ticket, result));
                });
                true
            }
            Msg::LookupLoaded(ticket, result) => {
                let resolution = self.single.resolve(ticket, result);
                if matches!(resolution, Resolution::Failed(_)) {
                    self.single.clear();
                }
                report(&resolution, None, "Failed to fetch subject difficulty");
                !matches!(resolution, Resolution::Stale)
            }
            Msg::CloseLookup => {
                self.single.clear();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let summaries = self.summaries.rows();
        let stats = difficulty_cohort_stats(summaries);

        html! {
            <div class="subject-difficulty">
                <div class="stat-grid">
                    { stat_card("Subjects", format_count(stats.subjects), None) }
                    { stat_card("Average pass rate", format_percent(stats.average_pass_rate), Some(PASS_RATE_LEVELS.style(stats.average_pass_rate))) }
                    { stat_card("Hard subjects", format_count(stats.hard_subjects), Some(StyleTag::Danger)) }
                    { stat_card("Easy subjects", format_count(stats.easy_subjects), Some(StyleTag::Good)) }
                </div>
                { self.build_lookup(link) }
                { loading(self.summaries.is_loading(), "Loading difficulty summaries...") }
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Subject"}</th>
                            <th>{"Name"}</th>
                            <th>{"Average GPA"}</th>
                            <th>{"Students"}</th>
                            <th>{"Failures"}</th>
                            <th>{"Pass rate"}</th>
                            <th>{"Score"}</th>
                            <th>{"Difficulty"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if summaries.is_empty() {
                            { empty_row(8, "No subjects to show") }
                        } else {
                            { for summaries.iter().map(summary_row) }
                        }
                    </tbody>
                </table>
            </div>
        }
    }
}

impl SubjectDifficulty {
    fn build_lookup(&self, link: &Scope<Self>) -> Html {
        html! {
            <div class="lookup">
                <form
                    class="search-form"
                    onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Lookup })}
                >
                    <input
                        type="text"
                        placeholder="Subject code"
                        value={self.lookup_input.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetLookup(e.target_unchecked_into::<HtmlInputElement>().value()))}
                    />
                    <button type="submit" disabled={self.single.is_loading()}>{"Look up"}</button>
                    <button type="button" onclick={link.callback(|_| Msg::Load)} disabled={self.summaries.is_loading()}>
                        {"Refresh"}
                    </button>
                </form>
                {
                    match self.single.data() {
                        Some(summary) => html! {
                            <section class="panel individual">
                                <h3>{ summary.subject_code.clone() }</h3>
                                { detail(summary) }
                                <button type="button" onclick={link.callback(|_| Msg::CloseLookup)}>{"Close"}</button>
                            </section>
                        },
                        None => html! {},
                    }
                }
            </div>
        }
    }
}

fn difficulty_badge(summary: &DifficultySummary) -> Html {
    let label = summary.difficulty_label();
    badge(label, DIFFICULTY_LEVELS.style_for_label(label))
}

/// Stat cards and grade distribution of one subject, shared with the
/// catalog's detail panel.
pub fn detail(summary: &DifficultySummary) -> Html {
    let pass_rate = summary.pass_rate();

    html! {
        <>
            <div class="stat-grid">
                { stat_card("Average GPA", format_gpa(summary.average_gpa), Some(GPA_LEVELS.style(summary.average_gpa))) }
                { stat_card("Students", format_count(summary.total_students as usize), None) }
                { stat_card("Pass rate", format_percent(pass_rate), Some(PASS_RATE_LEVELS.style(pass_rate))) }
                { stat_card("Difficulty score", format!("{:.2}", summary.difficulty_score), None) }
            </div>
            { difficulty_badge(summary) }
            if !summary.grade_distribution.is_empty() {
                <div class="grade-distribution">
                    if !summary.distribution_is_consistent() {
                        <p class="muted">
                            { badge("Distribution does not match the student count", StyleTag::Caution) }
                        </p>
                    }
                    {
                        for summary.grade_distribution.iter().map(|(grade, count)| html! {
                            <div class="trend-row">
                                <span class="trend-label">{ grade.clone() }</span>
                                { bar(summary.grade_share(grade), 100.0, StyleTag::Info) }
                                <span class="trend-value">{ count.to_string() }</span>
                            </div>
                        })
                    }
                </div>
            }
        </>
    }
}

fn summary_row(summary: &DifficultySummary) -> Html {
    let pass_rate = summary.pass_rate();

    html! {
        <tr>
            <td>{ summary.subject_code.clone() }</td>
            <td>{ summary.subject_name.clone().unwrap_or_default() }</td>
            <td>{ format_gpa(summary.average_gpa) }</td>
            <td>{ format_count(summary.total_students as usize) }</td>
            <td>{ summary.failures.to_string() }</td>
            <td>{ badge(&format_percent(pass_rate), PASS_RATE_LEVELS.style(pass_rate)) }</td>
            <td>{ format!("{:.2}", summary.difficulty_score) }</td>
            <td>{ difficulty_badge(summary) }</td>
        </tr>
    }
}
