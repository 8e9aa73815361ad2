use serde::Deserialize;

/// Public leaderboard entry, served without authentication
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRanking {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub total_score: f64,
    pub average_score: f64,
    pub rank: i64,
    pub course_location_id: Option<i64>,
    pub course_location_name: Option<String>,
}

/// Parent-lookup report for one student, keyed by national id.
/// Also public: parents query it without an account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPerformance {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub total_courses: i64,
    pub total_lessons: i64,
    pub passed_lessons: i64,
    pub failed_lessons: i64,
    pub average_score: f64,
    pub attendance_rate: Option<f64>,
    pub performance_level: Option<String>,
    pub courses: Option<Vec<CoursePerformance>>,
}

/// Per-course breakdown inside the parent-lookup report
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePerformance {
    pub course_id: i64,
    pub course_name: String,
    pub average_score: Option<f64>,
    pub passed_lessons: i64,
    pub failed_lessons: i64,
}
