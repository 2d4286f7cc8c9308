use profile_store::{AttendanceRecord, Grade, ParentProfile, StudentProfile};
use serde::Serialize;

/// Everything the parent dashboard shows, in one projection.
#[derive(Debug, Serialize)]
pub struct ParentDashboard {
    pub profile: ParentProfile,
    pub students: Vec<StudentSection>,
}

/// One linked student's records.
#[derive(Debug, Serialize)]
pub struct StudentSection {
    pub profile: StudentProfile,
    pub grades: Vec<Grade>,
    pub attendance: Vec<AttendanceRecord>,
}

/// Everything the student dashboard shows.
#[derive(Debug, Serialize)]
pub struct StudentDashboard {
    pub profile: StudentProfile,
    pub grades: Vec<Grade>,
    pub attendance: Vec<AttendanceRecord>,
}
