use common::model::{DifficultySummary, Subject, SubjectMetadata};
use common::query::{parse_bound, SortState, TextFilter};
use common::tables::catalog::{catalog_rows, join_catalog, CatalogColumn, CatalogFilter, CatalogRow};
use common::view_state::FetchSlot;

pub struct Subjects {
    pub catalog: FetchSlot<Vec<Subject>>,
    pub difficulties: FetchSlot<Vec<DifficultySummary>>,

    /// Code of the row whose detail panel is open.
    pub selected: Option<String>,
    pub metadata: FetchSlot<SubjectMetadata>,

    /// Code of the workbook being downloaded, if any.
    pub downloading: Option<String>,

    pub search: String,
    pub min_difficulty: String,
    pub max_average_gpa: String,
    pub sort: SortState<CatalogColumn>,
}

impl Subjects {
    pub fn new() -> Self {
        Self {
            catalog: FetchSlot::new(),
            difficulties: FetchSlot::new(),
            selected: None,
            metadata: FetchSlot::new(),
            downloading: None,
            search: String::new(),
            min_difficulty: String::new(),
            max_average_gpa: String::new(),
            sort: SortState::new(CatalogColumn::Code),
        }
    }

    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter {
            text: TextFilter::new(&self.search),
            min_difficulty: parse_bound(&self.min_difficulty),
            max_average_gpa: parse_bound(&self.max_average_gpa),
        }
    }

    pub fn joined(&self) -> Vec<CatalogRow> {
        join_catalog(self.catalog.rows(), self.difficulties.rows())
    }

    pub fn visible_rows(&self) -> Vec<CatalogRow> {
        catalog_rows(&self.joined(), &self.filter(), &self.sort)
    }

    pub fn selected_row(&self) -> Option<CatalogRow> {
        let code = self.selected.as_deref()?;
        self.joined()
            .into_iter()
            .find(|row| row.subject.subject_code == code)
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_loading() || self.difficulties.is_loading()
    }

    /// Whether selecting `code` has to fetch its metadata. Reselecting the open
    /// row only short-circuits while its metadata is loading or loaded.
    pub fn needs_metadata(&self, code: &str) -> bool {
        self.selected.as_deref() != Some(code)
            || !(self.metadata.is_loading() || self.metadata.data().is_some())
    }

    /// Metadata `file` link for `code`, once its metadata has loaded.
    pub fn download_link(&self, code: &str) -> Option<String> {
        self.metadata
            .data()
            .filter(|meta| meta.subject_code == code)
            .and_then(|meta| meta.download_url.clone())
    }
}
