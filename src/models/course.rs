use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::lesson::Lesson;
use super::location::CourseLocation;
use super::user::UserSummary;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    /// Single-location field kept for backward compatibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_location: Option<CourseLocation>,
    /// Multi-location support
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_locations: Option<Vec<CourseLocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<Lesson>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Admin operations target a single location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_location_id: Option<i64>,
    /// Superadmin operations can target several
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_location_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_location_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_location_ids: Option<Vec<i64>>,
}
