// Lesson endpoints, including the superadmin bulk operations

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::models::{BulkMoveRequest, Lesson, LessonCreateRequest, LessonUpdateRequest};

pub struct LessonService {
    api: Arc<ApiClient>,
}

impl LessonService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Lesson>> {
        self.api.get("/lessons").await
    }

    pub async fn by_course(&self, course_id: i64) -> Result<Vec<Lesson>> {
        self.api.get(&format!("/lessons/course/{}", course_id)).await
    }

    pub async fn get(&self, id: i64) -> Result<Lesson> {
        self.api.get(&format!("/lessons/{}", id)).await
    }

    pub async fn create(&self, request: &LessonCreateRequest) -> Result<Lesson> {
        self.api.post("/lessons", request).await
    }

    /// Superadmin: create the same lesson under several courses at once
    pub async fn create_for_courses(&self, request: &LessonCreateRequest) -> Result<Lesson> {
        self.api
            .post("/superadmin/lessons/multiple-courses", request)
            .await
    }

    pub async fn update(&self, id: i64, request: &LessonUpdateRequest) -> Result<Lesson> {
        self.api.put(&format!("/lessons/{}", id), request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/lessons/{}", id)).await
    }

    pub async fn count_by_course(&self, course_id: i64) -> Result<i64> {
        self.api
            .get(&format!("/lessons/course/{}/count", course_id))
            .await
    }

    /// Superadmin: delete many lessons in one call; body is the bare id list
    pub async fn bulk_delete(&self, lesson_ids: &[i64]) -> Result<Value> {
        self.api
            .delete_with_body("/superadmin/lessons/bulk", &lesson_ids)
            .await
    }

    /// Superadmin: move lessons under another course
    pub async fn bulk_move(&self, lesson_ids: Vec<i64>, target_course_id: i64) -> Result<Value> {
        let request = BulkMoveRequest {
            lesson_ids,
            target_course_id,
        };
        self.api.put("/superadmin/lessons/bulk/move", &request).await
    }
}
