use yew::prelude::*;

use crate::services::api::ApiHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct SubjectsProps {
    pub api: ApiHandle,
}
