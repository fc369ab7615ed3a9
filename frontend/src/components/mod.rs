pub mod gpa_summary;
pub mod helpers;
pub mod medical_credits;
pub mod sidebar;
pub mod student_lookup;
pub mod subject_difficulty;
pub mod subjects;
pub mod widgets;
