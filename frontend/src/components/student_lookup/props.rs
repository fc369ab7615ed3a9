use yew::prelude::*;

use crate::services::api::ApiHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct StudentLookupProps {
    pub api: ApiHandle,
}
