use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub admin: DashboardAdmin,
    pub course_count: i64,
    pub student_count: i64,
    pub lesson_count: i64,
    pub note_count: i64,
    pub locations: Vec<DashboardLocation>,
    pub recent_activities: Vec<RecentActivity>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAdmin {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardLocation {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub student_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub text: String,
    pub timestamp: Option<NaiveDateTime>,
    pub formatted_time: Option<String>,
}
