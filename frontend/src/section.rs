//! Top-level sections of the dashboard and their sidebar copy.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    StudentLookup,
    GpaSummary,
    MedicalCredits,
    Subjects,
    SubjectDifficulty,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::StudentLookup,
        Section::GpaSummary,
        Section::MedicalCredits,
        Section::Subjects,
        Section::SubjectDifficulty,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::StudentLookup => "Student Lookup",
            Section::GpaSummary => "GPA Summary",
            Section::MedicalCredits => "Medical Credits",
            Section::Subjects => "Subjects",
            Section::SubjectDifficulty => "Subject Difficulty",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Section::StudentLookup => "Search a student's results and download the workbook",
            Section::GpaSummary => "Cohort GPA ranking and individual lookups",
            Section::MedicalCredits => "MC usage and strategic usage flags",
            Section::Subjects => "Subject catalog, metadata and workbook downloads",
            Section::SubjectDifficulty => "Pass rates and difficulty levels per subject",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::StudentLookup => "person_search",
            Section::GpaSummary => "leaderboard",
            Section::MedicalCredits => "medical_services",
            Section::Subjects => "menu_book",
            Section::SubjectDifficulty => "insights",
        }
    }
}
