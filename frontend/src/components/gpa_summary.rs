//! Cohort GPA ranking with an individual lookup panel.
//!
//! The cohort loads on first render. Filtering and sorting happen on the
//! loaded list; the lookup panel is fetched separately and does not touch
//! the table.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ApiError;
use common::metrics::{gpa_cohort_stats, GPA_LEVELS};
use common::model::GpaSummaryItem;
use common::query::{RangeFilter, SortDirection, SortState, TextFilter};
use common::tables::gpa::{gpa_rows, GpaColumn, GpaTableFilter};
use common::validation::required;
use common::view_state::{FetchSlot, Notice, Resolution, Ticket};

use crate::components::helpers::{format_count, format_credits, format_gpa, report, show_toast};
use crate::components::widgets::{badge, empty_row, loading, sort_header, stat_card};
use crate::services::api::ApiHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct GpaSummaryProps {
    pub api: ApiHandle,
}

pub enum Msg {
    Load,
    Loaded(Ticket, Result<Vec<GpaSummaryItem>, ApiError>),
    SetLookup(String),
    Lookup,
    LookupLoaded(Ticket, Result<GpaSummaryItem, ApiError>),
    CloseLookup,
    SetIndexFilter(String),
    SetMinGpa(String),
    SetMaxGpa(String),
    SortBy(GpaColumn),
}

pub struct GpaSummary {
    /// Whole-cohort summary, loaded on first render.
    items: FetchSlot<Vec<GpaSummaryItem>>,

    /// Index number typed into the individual lookup.
    lookup_input: String,
    /// Result of the individual lookup, shown in its own panel.
    individual: FetchSlot<GpaSummaryItem>,

    /// Table filter inputs, kept as typed and parsed on render.
    index_filter: String,
    min_gpa: String,
    max_gpa: String,
    /// Active column and direction of the cohort table.
    sort: SortState<GpaColumn>,
}

impl GpaSummary {
    fn table_filter(&self) -> GpaTableFilter {
        GpaTableFilter {
            index: TextFilter::new(&self.index_filter),
            gpa: RangeFilter::parse(&self.min_gpa, &self.max_gpa),
        }
    }
}

impl Component for GpaSummary {
    type Message = Msg;
    type Properties = GpaSummaryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            items: FetchSlot::new(),
            lookup_input: String::new(),
            individual: FetchSlot::new(),
            index_filter: String::new(),
            min_gpa: String::new(),
            max_gpa: String::new(),
            sort: SortState::with_direction(GpaColumn::FinalGpa, SortDirection::Descending),
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
                let ticket = self.items.begin();
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api.gpa_summary().await;
                    link.send_message(Msg::Loaded(ticket, result));
                });
                true
            }
            Msg::Loaded(ticket, result) => {
                let resolution = self.items.resolve(ticket, result);
                report(&resolution, None, "Failed to fetch GPA summaries");
                !matches!(resolution, Resolution::Stale)
            }
            Msg::SetLookup(value) => {
                self.lookup_input = value;
                true
            }
            Msg::Lookup => {
                let index = match required(&self.lookup_input, "an index number") {
                    Ok(index) => index,
                    Err(err) => {
                        show_toast(&Notice::from_error(&err, "Invalid input"));
                        return false;
                    }
                };
                let ticket = self.individual.begin();
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api.gpa_summary_for(&index).await;
                    link.send_message(Msg::LookupLoaded(ticket, result));
                });
                true
            }
            Msg::LookupLoaded(ticket, result) => {
                let resolution = self.individual.resolve(ticket, result);
                if matches!(resolution, Resolution::Failed(_)) {
                    self.individual.clear();
                }
                report(&resolution, None, "Failed to fetch student GPA summary");
                !matches!(resolution, Resolution::Stale)
            }
            Msg::CloseLookup => {
                self.individual.clear();
                true
            }
            Msg::SetIndexFilter(value) => {
                self.index_filter = value;
                true
            }
            Msg::SetMinGpa(value) => {
                self.min_gpa = value;
                true
            }
            Msg::SetMaxGpa(value) => {
                self.max_gpa = value;
                true
            }
            Msg::SortBy(column) => {
                self.sort.select(column);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let items = self.items.rows();
        let stats = gpa_cohort_stats(items);
        let rows = gpa_rows(items, &self.table_filter(), &self.sort);

        html! {
            <div class="gpa-summary">
                <div class="stat-grid">
                    { stat_card("Students", format_count(stats.students), None) }
                    { stat_card("Average GPA", format_gpa(stats.average), Some(GPA_LEVELS.style(stats.average))) }
                    { stat_card("Highest GPA", format_gpa(stats.highest), Some(GPA_LEVELS.style(stats.highest))) }
                </div>
                { self.build_lookup(link) }
                { self.build_filters(link) }
                { loading(self.items.is_loading(), "Loading GPA summaries...") }
                <p class="table-caption">{ format!("Showing {} of {} students", format_count(rows.len()), format_count(items.len())) }</p>
                <table class="data-table">
                    <thead>
                        <tr>
                            { sort_header("Index", GpaColumn::Index, &self.sort, link.callback(|_| Msg::SortBy(GpaColumn::Index))) }
                            <th>{"Y1S1"}</th>
                            <th>{"Y1S2"}</th>
                            <th>{"Y2S1"}</th>
                            <th>{"Y2S2"}</th>
                            <th>{"Y3S1"}</th>
                            { sort_header("Final GPA", GpaColumn::FinalGpa, &self.sort, link.callback(|_| Msg::SortBy(GpaColumn::FinalGpa))) }
                            { sort_header("Total MC", GpaColumn::TotalMc, &self.sort, link.callback(|_| Msg::SortBy(GpaColumn::TotalMc))) }
                            { sort_header("Rank", GpaColumn::Rank, &self.sort, link.callback(|_| Msg::SortBy(GpaColumn::Rank))) }
                            <th>{"Level"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if rows.is_empty() {
                            { empty_row(10, "No students to show") }
                        } else {
                            { for rows.iter().map(summary_row) }
                        }
                    </tbody>
                </table>
            </div>
        }
    }
}

impl GpaSummary {
    fn build_lookup(&self, link: &Scope<Self>) -> Html {
        html! {
            <div class="lookup">
                <form
                    class="search-form"
                    onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Lookup })}
                >
                    <input
                        type="text"
                        placeholder="Index number"
                        value={self.lookup_input.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetLookup(e.target_unchecked_into::<HtmlInputElement>().value()))}
                    />
                    <button type="submit" disabled={self.individual.is_loading()}>{"Look up"}</button>
                </form>
                {
                    match self.individual.data() {
                        Some(item) => html! {
                            <section class="panel individual">
                                <h3>{ item.index_number.clone() }</h3>
                                <div class="stat-grid">
                                    { stat_card("Final GPA", format_gpa(item.final_gpa), Some(GPA_LEVELS.style(item.final_gpa))) }
                                    { stat_card("Level", GPA_LEVELS.label(item.final_gpa).to_string(), None) }
                                    { stat_card("Rank", item.rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()), None) }
                                    { stat_card("Total MC", item.total_mc.map(format_credits).unwrap_or_else(|| "-".to_string()), None) }
                                </div>
                                <div class="trend-inline">
                                    { for item.trend().into_iter().map(|(semester, gpa)| html! {
                                        <span class="trend-chip">{ format!("{}: {}", semester, format_gpa(gpa)) }</span>
                                    }) }
                                </div>
                                <button type="button" onclick={link.callback(|_| Msg::CloseLookup)}>{"Close"}</button>
                            </section>
                        },
                        None => html! {},
                    }
                }
            </div>
        }
    }

    fn build_filters(&self, link: &Scope<Self>) -> Html {
        html! {
            <div class="filters">
                <input
                    type="text"
                    placeholder="Filter by index"
                    value={self.index_filter.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetIndexFilter(e.target_unchecked_into::<HtmlInputElement>().value()))}
                />
                <input
                    type="number"
                    step="0.01"
                    placeholder="Min GPA"
                    value={self.min_gpa.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetMinGpa(e.target_unchecked_into::<HtmlInputElement>().value()))}
                />
                <input
                    type="number"
                    step="0.01"
                    placeholder="Max GPA"
                    value={self.max_gpa.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetMaxGpa(e.target_unchecked_into::<HtmlInputElement>().value()))}
                />
                <button type="button" onclick={link.callback(|_| Msg::Load)} disabled={self.items.is_loading()}>
                    {"Refresh"}
                </button>
            </div>
        }
    }
}

fn semester_cell(value: Option<f64>) -> Html {
    html! { <td>{ value.map(format_gpa).unwrap_or_else(|| "-".to_string()) }</td> }
}

fn summary_row(item: &GpaSummaryItem) -> Html {
    html! {
        <tr>
            <td>{ item.index_number.clone() }</td>
            { semester_cell(item.y1s1) }
            { semester_cell(item.y1s2) }
            { semester_cell(item.y2s1) }
            { semester_cell(item.y2s2) }
            { semester_cell(item.y3s1) }
            <td>{ format_gpa(item.final_gpa) }</td>
            <td>{ item.total_mc.map(format_credits).unwrap_or_else(|| "-".to_string()) }</td>
            <td>{ item.rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()) }</td>
            <td>{ badge(GPA_LEVELS.label(item.final_gpa), GPA_LEVELS.style(item.final_gpa)) }</td>
        </tr>
    }
}
