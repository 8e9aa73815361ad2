// Data transfer objects mirrored from the backend API.
// Field names and optionality follow the wire format exactly (camelCase).

pub mod attendance;
pub mod course;
pub mod dashboard;
pub mod lesson;
pub mod lesson_note;
pub mod location;
pub mod ranking;
pub mod student;
pub mod user;

pub use attendance::{Attendance, AttendanceRequest, AttendanceStats, StudentAttendanceRecord};
pub use course::{Course, CourseCreateRequest, CourseUpdateRequest};
pub use dashboard::AdminDashboard;
pub use lesson::{BulkMoveRequest, Lesson, LessonCreateRequest, LessonUpdateRequest};
pub use lesson_note::{
    LessonNote, LessonNoteBatchUpdateRequest, LessonNoteCreateRequest, LessonNoteHistory,
    LessonNoteUpdateItem, LessonNoteUpdateRequest, StudentLessonNote,
};
pub use location::{CourseLocation, CourseLocationCreateRequest, CourseLocationUpdateRequest};
pub use ranking::{CoursePerformance, StudentPerformance, StudentRanking};
pub use student::{Student, StudentCreateRequest, StudentDetail, StudentUpdateRequest};
pub use user::{User, UserCreateRequest, UserSummary, UserUpdateRequest};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates;

    #[test]
    fn test_course_decodes_with_date_tuples() {
        let raw = serde_json::json!({
            "id": 4,
            "name": "Geometry",
            "startDate": [2024, 9, 2],
            "endDate": null,
            "createdAt": [2024, 8, 20, 10, 15, 0],
            "updatedAt": [2024, 8, 20, 10, 15, 0],
            "courseLocations": [
                {"id": 1, "name": "Merkez", "address": "Ana Cad. 5",
                 "createdAt": null, "updatedAt": null}
            ]
        });
        let course: Course = serde_json::from_value(dates::normalized(raw)).unwrap();
        assert_eq!(course.start_date.unwrap().to_string(), "2024-09-02");
        assert!(course.end_date.is_none());
        assert_eq!(course.course_locations.unwrap()[0].name, "Merkez");
    }

    #[test]
    fn test_update_request_skips_unset_fields() {
        let req = StudentUpdateRequest {
            phone: Some("5551234".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"phone": "5551234"}));
    }

    #[test]
    fn test_attendance_request_wire_shape() {
        let req = AttendanceRequest {
            course_id: 2,
            course_location_id: 1,
            attendance_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            student_records: vec![StudentAttendanceRecord {
                student_id: 9,
                is_present: true,
            }],
            notes: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["attendanceDate"], "2024-03-15");
        assert_eq!(json["studentRecords"][0]["isPresent"], true);
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_lesson_note_null_score_allowed() {
        let raw = serde_json::json!({
            "id": 11,
            "score": null,
            "passed": null,
            "remark": null,
            "createdAt": "2024-03-01T08:00:00",
            "updatedAt": "2024-03-01T08:00:00"
        });
        let note: LessonNote = serde_json::from_value(raw).unwrap();
        assert!(note.score.is_none());
        assert!(note.passed.is_none());
    }
}
