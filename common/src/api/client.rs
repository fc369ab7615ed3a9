use log::{debug, warn};
use serde_json::Value;

use super::{Endpoint, Transport};
use crate::config::ApiConfig;
use crate::envelope::{decode, unwrap_list, unwrap_one};
use crate::error::ApiError;
use crate::model::{
    DifficultySummary, GpaSummaryItem, MedicalCreditRecord, StudentRecord, Subject,
    SubjectMetadata, SubjectResult,
};

pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL of an API-relative path such as a metadata `file` link.
    pub fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            self.config.url(path)
        }
    }

    async fn fetch_json(&self, endpoint: Endpoint<'_>) -> Result<Value, ApiError> {
        let url = self.config.url(&endpoint.path());
        debug!("GET {}", url);
        self.transport
            .get_json(&url, self.config.timeout_ms())
            .await
            .inspect_err(|e| warn!("GET {} failed: {}", url, e))
    }

    async fn fetch_bytes(&self, endpoint: Endpoint<'_>) -> Result<Vec<u8>, ApiError> {
        let url = self.config.url(&endpoint.path());
        debug!("GET {} (binary)", url);
        self.transport
            .get_bytes(&url, self.config.timeout_ms())
            .await
            .inspect_err(|e| warn!("GET {} failed: {}", url, e))
    }

    pub async fn student(&self, index: &str) -> Result<StudentRecord, ApiError> {
        decode(self.fetch_json(Endpoint::Student(index)).await?)
    }

    pub async fn download_student_workbook(&self, index: &str) -> Result<Vec<u8>, ApiError> {
        self.fetch_bytes(Endpoint::StudentDownload(index)).await
    }

    /// Every attempt the student has for one subject.
    pub async fn subject_result(
        &self,
        index: &str,
        subject_code: &str,
    ) -> Result<Vec<SubjectResult>, ApiError> {
        unwrap_list(
            self.fetch_json(Endpoint::StudentSubject { index, subject_code })
                .await?,
        )
    }

    pub async fn gpa_summary(&self) -> Result<Vec<GpaSummaryItem>, ApiError> {
        unwrap_list(self.fetch_json(Endpoint::GpaSummary).await?)
    }

    pub async fn gpa_summary_for(&self, index: &str) -> Result<GpaSummaryItem, ApiError> {
        unwrap_one(self.fetch_json(Endpoint::GpaSummaryFor(index)).await?)
    }

    /// Student record and GPA summary fetched concurrently. Fails as a whole
    /// when either request fails.
    pub async fn student_with_trend(
        &self,
        index: &str,
    ) -> Result<(StudentRecord, GpaSummaryItem), ApiError> {
        futures::try_join!(self.student(index), self.gpa_summary_for(index))
    }

    pub async fn medical_credits(
        &self,
        strategic_only: bool,
    ) -> Result<Vec<MedicalCreditRecord>, ApiError> {
        unwrap_list(
            self.fetch_json(Endpoint::MedicalCredits { strategic_only })
                .await?,
        )
    }

    pub async fn subjects(&self) -> Result<Vec<Subject>, ApiError> {
        unwrap_list(self.fetch_json(Endpoint::Subjects).await?)
    }

    pub async fn subject_metadata(&self, code: &str) -> Result<SubjectMetadata, ApiError> {
        decode(self.fetch_json(Endpoint::Subject(code)).await?)
    }

    pub async fn download_subject_workbook(&self, code: &str) -> Result<Vec<u8>, ApiError> {
        self.fetch_bytes(Endpoint::SubjectDownload(code)).await
    }

    /// Downloads through the metadata `file` link when the backend gave one,
    /// otherwise through the subject download route.
    pub async fn download_subject_file(
        &self,
        code: &str,
        link: Option<&str>,
    ) -> Result<Vec<u8>, ApiError> {
        match link.map(str::trim).filter(|l| !l.is_empty()) {
            Some(link) => {
                let url = self.resolve_url(link);
                debug!("GET {} (binary)", url);
                self.transport
                    .get_bytes(&url, self.config.timeout_ms())
                    .await
                    .inspect_err(|e| warn!("GET {} failed: {}", url, e))
            }
            None => self.download_subject_workbook(code).await,
        }
    }

    pub async fn difficulty_summary(&self) -> Result<Vec<DifficultySummary>, ApiError> {
        unwrap_list(self.fetch_json(Endpoint::DifficultySummary).await?)
    }

    pub async fn difficulty_for(&self, code: &str) -> Result<DifficultySummary, ApiError> {
        unwrap_one(self.fetch_json(Endpoint::DifficultyFor(code)).await?)
    }
}

/// File name offered when saving a student's workbook.
pub fn student_workbook_name(index: &str) -> String {
    format!("student_{}_results.xlsx", index.trim())
}

/// File name offered when saving a subject's workbook.
pub fn subject_workbook_name(code: &str) -> String {
    format!("subject_{}_data.xlsx", code.trim())
}
