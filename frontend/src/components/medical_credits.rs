//! MC usage per student. The strategic-only switch filters the loaded cohort
//! in place; usage shares and cohort stats always refer to the full cohort.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ApiError;
use common::metrics::{mc_cohort_stats, StyleTag, GPA_LEVELS, MC_USAGE_LEVELS};
use common::model::MedicalCreditRecord;
use common::query::{FlagFilter, SortDirection, SortState};
use common::tables::medical::{mc_rows, McColumn, McRow};
use common::view_state::{FetchSlot, Resolution, Ticket};

use crate::components::helpers::{format_count, format_credits, format_gpa, format_percent, report};
use crate::components::widgets::{badge, bar, empty_row, loading, sort_header, stat_card};
use crate::services::api::ApiHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct MedicalCreditsProps {
    pub api: ApiHandle,
}

pub enum Msg {
    Load,
    Loaded(Ticket, Result<Vec<MedicalCreditRecord>, ApiError>),
    ToggleStrategic,
    SortBy(McColumn),
}

pub struct MedicalCredits {
    /// Whole-cohort MC records. Usage shares are relative to this list.
    records: FetchSlot<Vec<MedicalCreditRecord>>,
    /// Hides records not flagged as strategic MC use.
    strategic_only: bool,
    sort: SortState<McColumn>,
}

impl Component for MedicalCredits {
    type Message = Msg;
    type Properties = MedicalCreditsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            records: FetchSlot::new(),
            strategic_only: false,
            sort: SortState::with_direction(McColumn::TotalMc, SortDirection::Descending),
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
                let ticket = self.records.begin();
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api.medical_credits(false).await;
                    link.send_message(Msg::Loaded(ticket, result));
                });
                true
            }
            Msg::Loaded(ticket, result) => {
                let resolution = self.records.resolve(ticket, result);
                report(&resolution, None, "Failed to fetch medical credit data");
                !matches!(resolution, Resolution::Stale)
            }
            Msg::ToggleStrategic => {
                self.strategic_only = !self.strategic_only;
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
        let records = self.records.rows();
        let stats = mc_cohort_stats(records);
        let strategic = if self.strategic_only {
            FlagFilter::only(true)
        } else {
            FlagFilter::default()
        };
        let rows = mc_rows(records, strategic, &self.sort);

        html! {
            <div class="medical-credits">
                <div class="stat-grid">
                    { stat_card("Students", format_count(stats.students), None) }
                    { stat_card("Strategic users", format_count(stats.strategic_users), Some(StyleTag::Caution)) }
                    { stat_card("Average usage", format_percent(stats.average_usage), Some(MC_USAGE_LEVELS.style(stats.average_usage))) }
                    { stat_card("Highest total MC", format_credits(stats.max_total_mc), None) }
                </div>
                <div class="filters">
                    <label class="toggle">
                        <input
                            type="checkbox"
                            checked={self.strategic_only}
                            onchange={link.callback(|_: Event| Msg::ToggleStrategic)}
                        />
                        {"Strategic use only"}
                    </label>
                    <button type="button" onclick={link.callback(|_| Msg::Load)} disabled={self.records.is_loading()}>
                        {"Refresh"}
                    </button>
                </div>
                { loading(self.records.is_loading(), "Loading medical credits...") }
                <p class="table-caption">{ format!("Showing {} of {} records", format_count(rows.len()), format_count(stats.records)) }</p>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Index"}</th>
                            <th>{"Final GPA"}</th>
                            { sort_header("Rank", McColumn::Rank, &self.sort, link.callback(|_| Msg::SortBy(McColumn::Rank))) }
                            { sort_header("Total MC", McColumn::TotalMc, &self.sort, link.callback(|_| Msg::SortBy(McColumn::TotalMc))) }
                            <th>{"Usage"}</th>
                            <th>{"Level"}</th>
                            <th>{"Strategic"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if rows.is_empty() {
                            { empty_row(7, "No records to show") }
                        } else {
                            { for rows.iter().map(mc_row) }
                        }
                    </tbody>
                </table>
            </div>
        }
    }
}

fn mc_row(row: &McRow) -> Html {
    let record = &row.record;
    let level = MC_USAGE_LEVELS.classify(row.usage);

    html! {
        <tr class={classes!(record.strategic_use.then_some("strategic"))}>
            <td>{ record.index_number.clone() }</td>
            <td>{ badge(&format_gpa(record.final_gpa), GPA_LEVELS.style(record.final_gpa)) }</td>
            <td>{ record.rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()) }</td>
            <td>{ format_credits(record.total_mc) }</td>
            <td class="usage-cell">
                { bar(row.usage, 100.0, level.style) }
                <span>{ format_percent(row.usage) }</span>
            </td>
            <td>{ badge(level.label, level.style) }</td>
            <td>{ if record.strategic_use { "Yes" } else { "No" } }</td>
        </tr>
    }
}
