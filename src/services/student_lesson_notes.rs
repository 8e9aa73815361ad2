// Batch grading grid: students of a course joined with their notes for one
// lesson, plus single and batch note updates keyed by student and lesson

use std::sync::Arc;

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::models::{
    LessonNote, LessonNoteBatchUpdateRequest, LessonNoteUpdateItem, StudentLessonNote,
};

pub struct StudentLessonNoteService {
    api: Arc<ApiClient>,
}

impl StudentLessonNoteService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn grid(&self, course_id: i64, lesson_id: i64) -> Result<Vec<StudentLessonNote>> {
        self.api
            .get(&format!(
                "/admin/student-lesson-notes/course/{}/lesson/{}",
                course_id, lesson_id
            ))
            .await
    }

    pub async fn update_one(
        &self,
        student_id: i64,
        lesson_id: i64,
        note: &LessonNoteUpdateItem,
    ) -> Result<LessonNote> {
        self.api
            .put(
                &format!(
                    "/admin/student-lesson-notes/student/{}/lesson/{}",
                    student_id, lesson_id
                ),
                note,
            )
            .await
    }

    pub async fn batch_update(&self, notes: Vec<LessonNoteUpdateItem>) -> Result<Vec<LessonNote>> {
        let request = LessonNoteBatchUpdateRequest { notes };
        self.api
            .post("/admin/student-lesson-notes/batch-update", &request)
            .await
    }
}
