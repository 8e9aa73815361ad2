// Lesson note (grading) endpoints

use std::sync::Arc;

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::models::{
    LessonNote, LessonNoteCreateRequest, LessonNoteHistory, LessonNoteUpdateRequest,
};

pub struct LessonNoteService {
    api: Arc<ApiClient>,
}

impl LessonNoteService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<LessonNote>> {
        self.api.get("/admin/lesson-notes").await
    }

    pub async fn by_lesson(&self, lesson_id: i64) -> Result<Vec<LessonNote>> {
        self.api
            .get(&format!("/admin/lesson-notes/lesson/{}", lesson_id))
            .await
    }

    pub async fn by_student(&self, student_id: i64) -> Result<Vec<LessonNote>> {
        self.api
            .get(&format!("/admin/lesson-notes/student/{}", student_id))
            .await
    }

    pub async fn by_course(&self, course_id: i64) -> Result<Vec<LessonNote>> {
        self.api
            .get(&format!("/admin/lesson-notes/course/{}", course_id))
            .await
    }

    pub async fn passed_by_student(&self, student_id: i64) -> Result<Vec<LessonNote>> {
        self.api
            .get(&format!("/admin/lesson-notes/student/{}/passed", student_id))
            .await
    }

    pub async fn failed_by_student(&self, student_id: i64) -> Result<Vec<LessonNote>> {
        self.api
            .get(&format!("/admin/lesson-notes/student/{}/failed", student_id))
            .await
    }

    pub async fn get(&self, id: i64) -> Result<LessonNote> {
        self.api.get(&format!("/admin/lesson-notes/{}", id)).await
    }

    pub async fn create(&self, request: &LessonNoteCreateRequest) -> Result<LessonNote> {
        self.api.post("/admin/lesson-notes", request).await
    }

    pub async fn update(&self, id: i64, request: &LessonNoteUpdateRequest) -> Result<LessonNote> {
        self.api
            .put(&format!("/admin/lesson-notes/{}", id), request)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/admin/lesson-notes/{}", id)).await
    }

    /// Prior values of an edited note
    pub async fn history(&self, id: i64) -> Result<Vec<LessonNoteHistory>> {
        self.api
            .get(&format!("/admin/lesson-notes/{}/history", id))
            .await
    }
}
