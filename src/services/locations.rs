// Course location endpoints

use std::sync::Arc;

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::models::{CourseLocation, CourseLocationCreateRequest, CourseLocationUpdateRequest};

pub struct LocationService {
    api: Arc<ApiClient>,
}

impl LocationService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<CourseLocation>> {
        self.api.get("/locations").await
    }

    /// Locations administered by the calling admin
    pub async fn list_for_admin(&self) -> Result<Vec<CourseLocation>> {
        self.api.get("/locations/admin").await
    }

    pub async fn by_admin(&self, admin_id: i64) -> Result<Vec<CourseLocation>> {
        self.api.get(&format!("/locations/admin/{}", admin_id)).await
    }

    pub async fn get(&self, id: i64) -> Result<CourseLocation> {
        self.api.get(&format!("/locations/{}", id)).await
    }

    pub async fn create(&self, request: &CourseLocationCreateRequest) -> Result<CourseLocation> {
        self.api.post("/locations", request).await
    }

    pub async fn update(
        &self,
        id: i64,
        request: &CourseLocationUpdateRequest,
    ) -> Result<CourseLocation> {
        self.api.put(&format!("/locations/{}", id), request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/locations/{}", id)).await
    }

    /// Replace the admin set of a location
    pub async fn assign_admins(
        &self,
        location_id: i64,
        admin_ids: &[i64],
    ) -> Result<CourseLocation> {
        self.api
            .post(&format!("/locations/{}/admins", location_id), &admin_ids)
            .await
    }
}
