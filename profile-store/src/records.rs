//! Typed views of the externally-owned documents.
//!
//! Field names follow the document database's camelCase convention on the
//! wire. All records are consumed read-only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A parent account's profile document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Students linked to this parent, by student profile id.
    #[serde(default)]
    pub student_ids: Vec<String>,
}

/// A student's profile document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub grade_level: u8,
}

/// One course grade for a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: String,
    pub course_name: String,
    pub score: f32,
    pub letter_grade: String,
}

/// One attendance entry for a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Attendance outcome for a school day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Tardy,
    Excused,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_decode_from_store_documents() {
        let parent: ParentProfile = serde_json::from_str(
            r#"{"firstName":"Dana","lastName":"Reyes","email":"dana@example.com","studentIds":["s-1"]}"#,
        )
        .unwrap();
        assert_eq!(parent.first_name, "Dana");
        assert_eq!(parent.student_ids, vec!["s-1"]);

        let grade: Grade = serde_json::from_str(
            r#"{"id":"g-1","courseName":"Biology","score":91,"letterGrade":"A-"}"#,
        )
        .unwrap();
        assert_eq!(grade.course_name, "Biology");

        let att: AttendanceRecord = serde_json::from_str(
            r#"{"id":"a-1","date":"2026-03-02","status":"Tardy"}"#,
        )
        .unwrap();
        assert_eq!(att.status, AttendanceStatus::Tardy);
    }

    #[test]
    fn missing_student_ids_defaults_to_empty() {
        let parent: ParentProfile = serde_json::from_str(
            r#"{"firstName":"Dana","lastName":"Reyes","email":"dana@example.com"}"#,
        )
        .unwrap();
        assert!(parent.student_ids.is_empty());
    }
}
