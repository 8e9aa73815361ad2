// Public leaderboard endpoints, used by the parent lookup portal.
// No token is required; with an empty store the pipeline sends the requests
// without an Authorization header.

use std::sync::Arc;

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::models::{StudentPerformance, StudentRanking};

pub struct RankingService {
    api: Arc<ApiClient>,
}

impl RankingService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn top_students(&self, limit: u32) -> Result<Vec<StudentRanking>> {
        self.api
            .get(&format!("/public/rankings/top-students?limit={}", limit))
            .await
    }

    pub async fn top_students_by_location(
        &self,
        location_id: i64,
        limit: u32,
    ) -> Result<Vec<StudentRanking>> {
        self.api
            .get(&format!(
                "/public/rankings/top-students/location/{}?limit={}",
                location_id, limit
            ))
            .await
    }

    /// Parent lookup: the performance report for one student by national id
    pub async fn student_performance(&self, national_id: &str) -> Result<StudentPerformance> {
        self.api
            .get(&format!("/public/students/performance/{}", national_id))
            .await
    }
}
