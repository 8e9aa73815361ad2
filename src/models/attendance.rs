use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub student_id: i64,
    pub student_name: String,
    pub course_id: i64,
    pub course_name: String,
    pub course_location_id: i64,
    pub course_location_name: String,
    pub attendance_date: NaiveDate,
    pub is_present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAttendanceRecord {
    pub student_id: i64,
    pub is_present: bool,
}

/// Batch save: one date, one course/location, every student's mark
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRequest {
    pub course_id: i64,
    pub course_location_id: i64,
    pub attendance_date: NaiveDate,
    pub student_records: Vec<StudentAttendanceRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStats {
    pub present_days: i64,
    pub absent_days: i64,
    pub total_days: i64,
}
