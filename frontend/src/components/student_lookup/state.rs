use common::model::{GpaSummaryItem, StudentRecord, SubjectResult};
use common::tables::results::{result_rows, ResultFilter};
use common::view_state::FetchSlot;

/// Every attempt of one student at one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectAttempts {
    pub index: String,
    pub subject_code: String,
    pub attempts: Vec<SubjectResult>,
}

pub struct StudentLookup {
    pub index_input: String,
    pub subject_input: String,

    /// Record joined with its GPA summary row, which carries the trend.
    pub student: FetchSlot<(StudentRecord, GpaSummaryItem)>,

    pub subject: FetchSlot<SubjectAttempts>,

    /// Narrowing of the loaded record's subject list.
    pub filter: ResultFilter,

    /// Guards against a second download while one is in flight.
    pub downloading: bool,
}

impl StudentLookup {
    pub fn new() -> Self {
        Self {
            index_input: String::new(),
            subject_input: String::new(),
            student: FetchSlot::new(),
            subject: FetchSlot::new(),
            filter: ResultFilter::default(),
            downloading: false,
        }
    }

    pub fn visible_results(&self) -> Vec<SubjectResult> {
        self.student
            .data()
            .map(|(record, _)| result_rows(&record.subjects, &self.filter))
            .unwrap_or_default()
    }
}
