// Admin dashboard endpoint

use std::sync::Arc;

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::models::AdminDashboard;

pub struct DashboardService {
    api: Arc<ApiClient>,
}

impl DashboardService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn admin_dashboard(&self) -> Result<AdminDashboard> {
        self.api.get("/admin/dashboard").await
    }
}
