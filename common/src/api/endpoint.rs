/// Backend routes consumed by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Student(&'a str),
    StudentDownload(&'a str),
    StudentSubject { index: &'a str, subject_code: &'a str },
    GpaSummary,
    GpaSummaryFor(&'a str),
    MedicalCredits { strategic_only: bool },
    Subjects,
    Subject(&'a str),
    SubjectDownload(&'a str),
    DifficultySummary,
    DifficultyFor(&'a str),
}

fn seg(value: &str) -> String {
    urlencoding::encode(value.trim()).into_owned()
}

impl Endpoint<'_> {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Student(index) => format!("/students/{}", seg(index)),
            Endpoint::StudentDownload(index) => format!("/students/{}/download", seg(index)),
            Endpoint::StudentSubject { index, subject_code } => {
                format!("/students/{}/subject/{}", seg(index), seg(subject_code))
            }
            Endpoint::GpaSummary => "/summary/students/gpa-summary".to_string(),
            Endpoint::GpaSummaryFor(index) => {
                format!("/summary/students/gpa-summary/{}", seg(index))
            }
            Endpoint::MedicalCredits { strategic_only: false } => {
                "/summary/students/medical-credits".to_string()
            }
            Endpoint::MedicalCredits { strategic_only: true } => {
                "/summary/students/medical-credits?strategic_only=true".to_string()
            }
            Endpoint::Subjects => "/subjects/".to_string(),
            Endpoint::Subject(code) => format!("/subjects/{}", seg(code)),
            Endpoint::SubjectDownload(code) => format!("/subjects/{}/download", seg(code)),
            Endpoint::DifficultySummary => "/summary/subjects/difficulty-summary".to_string(),
            Endpoint::DifficultyFor(code) => format!("/subjects/difficulty-summary/{}", seg(code)),
        }
    }
}
