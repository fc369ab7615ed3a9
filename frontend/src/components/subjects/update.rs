use yew::platform::spawn_local;
use yew::prelude::*;

use common::api::subject_workbook_name;
use common::view_state::{Notice, Resolution};

use super::messages::Msg;
use super::state::Subjects;
use crate::components::helpers::{deliver_workbook, report, show_toast};

pub fn update(component: &mut Subjects, ctx: &Context<Subjects>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let catalog_ticket = component.catalog.begin();
            let difficulty_ticket = component.difficulties.begin();

            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.subjects().await;
                link.send_message(Msg::CatalogLoaded(catalog_ticket, result));
            });

            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.difficulty_summary().await;
                link.send_message(Msg::DifficultyLoaded(difficulty_ticket, result));
            });
            true
        }
        Msg::CatalogLoaded(ticket, result) => {
            let resolution = component.catalog.resolve(ticket, result);
            report(&resolution, None, "Failed to fetch subjects");
            !matches!(resolution, Resolution::Stale)
        }
        Msg::DifficultyLoaded(ticket, result) => {
            let resolution = component.difficulties.resolve(ticket, result);
            report(&resolution, None, "Failed to fetch subject difficulty data");
            !matches!(resolution, Resolution::Stale)
        }
        Msg::Select(code) => {
            if !component.needs_metadata(&code) {
                return false;
            }
            component.selected = Some(code.clone());
            let ticket = component.metadata.begin();

            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.subject_metadata(&code).await;
                link.send_message(Msg::MetadataLoaded(ticket, result));
            });
            true
        }
        Msg::MetadataLoaded(ticket, result) => {
            let resolution = component.metadata.resolve(ticket, result);
            if matches!(resolution, Resolution::Failed(_)) {
                component.metadata.clear();
            }
            report(&resolution, None, "Failed to fetch subject details");
            !matches!(resolution, Resolution::Stale)
        }
        Msg::CloseDetail => {
            component.selected = None;
            component.metadata.clear();
            true
        }
        Msg::Download(code) => {
            if component.downloading.is_some() {
                return false;
            }
            component.downloading = Some(code.clone());
            let link_path = component.download_link(&code);

            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api
                    .download_subject_file(&code, link_path.as_deref())
                    .await;
                link.send_message(Msg::Downloaded(code, result));
            });
            true
        }
        Msg::Downloaded(code, result) => {
            component.downloading = None;
            match result {
                Ok(bytes) => deliver_workbook(&bytes, &subject_workbook_name(&code)),
                Err(err) => show_toast(&Notice::from_error(&err, "Failed to download subject data")),
            }
            true
        }
        Msg::SetSearch(value) => {
            component.search = value;
            true
        }
        Msg::SetMinDifficulty(value) => {
            component.min_difficulty = value;
            true
        }
        Msg::SetMaxAverageGpa(value) => {
            component.max_average_gpa = value;
            true
        }
        Msg::SortBy(column) => {
            component.sort.select(column);
            true
        }
    }
}
