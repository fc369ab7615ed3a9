use common::error::ApiError;
use common::model::{DifficultySummary, Subject, SubjectMetadata};
use common::tables::catalog::CatalogColumn;
use common::view_state::Ticket;

pub enum Msg {
    Load,
    CatalogLoaded(Ticket, Result<Vec<Subject>, ApiError>),
    DifficultyLoaded(Ticket, Result<Vec<DifficultySummary>, ApiError>),
    Select(String),
    MetadataLoaded(Ticket, Result<SubjectMetadata, ApiError>),
    CloseDetail,
    Download(String),
    Downloaded(String, Result<Vec<u8>, ApiError>),
    SetSearch(String),
    SetMinDifficulty(String),
    SetMaxAverageGpa(String),
    SortBy(CatalogColumn),
}
