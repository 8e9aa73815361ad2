// Course endpoints

use std::sync::Arc;

use serde_json::json;

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::models::{Course, CourseCreateRequest, CourseUpdateRequest};

pub struct CourseService {
    api: Arc<ApiClient>,
}

impl CourseService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Course>> {
        self.api.get("/courses").await
    }

    /// Courses scoped to the calling admin's locations
    pub async fn list_for_admin(&self) -> Result<Vec<Course>> {
        self.api.get("/courses/admin").await
    }

    pub async fn get(&self, id: i64) -> Result<Course> {
        self.api.get(&format!("/courses/{}", id)).await
    }

    pub async fn create(&self, request: &CourseCreateRequest) -> Result<Course> {
        self.api.post("/courses", request).await
    }

    pub async fn update(&self, id: i64, request: &CourseUpdateRequest) -> Result<Course> {
        self.api.put(&format!("/courses/{}", id), request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/courses/{}", id)).await
    }

    pub async fn by_location(&self, location_id: i64) -> Result<Vec<Course>> {
        self.api
            .get(&format!("/courses/location/{}", location_id))
            .await
    }

    pub async fn assign_location(&self, course_id: i64, location_id: i64) -> Result<Course> {
        self.api
            .post(
                &format!("/courses/{}/locations/{}", course_id, location_id),
                &json!({}),
            )
            .await
    }

    pub async fn unassign_location(&self, course_id: i64, location_id: i64) -> Result<Course> {
        self.api
            .delete_with_body(
                &format!("/courses/{}/locations/{}", course_id, location_id),
                &json!({}),
            )
            .await
    }
}
