//! Small markup builders reused across views.

use yew::prelude::*;

use common::metrics::StyleTag;
use common::query::SortState;

pub fn stat_card(label: &str, value: String, tone: Option<StyleTag>) -> Html {
    let tone = tone.map(|t| t.class_name());
    html! {
        <div class={classes!("stat-card", tone)}>
            <span class="stat-label">{ label.to_string() }</span>
            <span class="stat-value">{ value }</span>
        </div>
    }
}

pub fn badge(label: &str, style: StyleTag) -> Html {
    html! {
        <span class={classes!("badge", style.class_name())}>{ label.to_string() }</span>
    }
}

/// Clickable column header showing the sort arrow when `key` is active.
pub fn sort_header<K: Copy + PartialEq>(
    label: &str,
    key: K,
    sort: &SortState<K>,
    onclick: Callback<MouseEvent>,
) -> Html {
    html! {
        <th class="sortable" {onclick}>
            { label.to_string() }
            <span class="sort-indicator">{ sort.indicator(key) }</span>
        </th>
    }
}

pub fn loading(active: bool, text: &str) -> Html {
    if active {
        html! { <div class="loading">{ text.to_string() }</div> }
    } else {
        html! {}
    }
}

pub fn empty_row(columns: usize, text: &str) -> Html {
    html! {
        <tr class="empty-row">
            <td colspan={columns.to_string()}>{ text.to_string() }</td>
        </tr>
    }
}

/// Horizontal bar for a value on a `0..=max` scale.
pub fn bar(value: f64, max: f64, style: StyleTag) -> Html {
    let width = if max > 0.0 {
        (value / max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    html! {
        <div class="bar-track">
            <div class={classes!("bar-fill", style.class_name())} style={format!("width: {:.1}%;", width)} />
        </div>
    }
}
