// Student endpoints

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::models::{Student, StudentCreateRequest, StudentDetail, StudentUpdateRequest};

pub struct StudentService {
    api: Arc<ApiClient>,
}

impl StudentService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Student>> {
        self.api.get("/students").await
    }

    pub async fn get(&self, id: i64) -> Result<Student> {
        self.api.get(&format!("/students/{}", id)).await
    }

    pub async fn detail(&self, id: i64) -> Result<StudentDetail> {
        self.api.get(&format!("/students/{}/detail", id)).await
    }

    pub async fn by_national_id(&self, national_id: &str) -> Result<Student> {
        self.api
            .get(&format!("/students/national-id/{}", national_id))
            .await
    }

    pub async fn create(&self, request: &StudentCreateRequest) -> Result<Student> {
        self.api.post("/students", request).await
    }

    pub async fn update(&self, id: i64, request: &StudentUpdateRequest) -> Result<Student> {
        self.api.put(&format!("/students/{}", id), request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/students/{}", id)).await
    }

    /// Admin responsible for the student, untyped on the wire
    pub async fn admin_of(&self, student_id: i64) -> Result<Value> {
        self.api.get(&format!("/students/{}/admin", student_id)).await
    }
}
