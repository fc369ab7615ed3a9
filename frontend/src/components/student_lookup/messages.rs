use common::error::ApiError;
use common::model::{GpaSummaryItem, StudentRecord};
use common::view_state::Ticket;

use super::state::SubjectAttempts;

pub enum Msg {
    SetIndex(String),
    SetSubject(String),
    Search,
    StudentLoaded(Ticket, Result<(StudentRecord, GpaSummaryItem), ApiError>),
    SearchSubject,
    SubjectLoaded(Ticket, Result<SubjectAttempts, ApiError>),
    Download,
    Downloaded(String, Result<Vec<u8>, ApiError>),
    SetYear(String),
    SetSemester(String),
    SetGrade(String),
    ClearFilters,
}
