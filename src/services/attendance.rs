// Attendance endpoints

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::models::{Attendance, AttendanceRequest, AttendanceStats};

pub struct AttendanceService {
    api: Arc<ApiClient>,
}

impl AttendanceService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Save one batch of marks for a course/location/date
    pub async fn save(&self, request: &AttendanceRequest) -> Result<Vec<Attendance>> {
        self.api.post("/attendance", request).await
    }

    pub async fn by_location_and_date(
        &self,
        location_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        self.api
            .get(&format!("/attendance/location/{}/date/{}", location_id, date))
            .await
    }

    /// Records across all of the caller's locations for a date
    pub async fn by_my_locations_and_date(&self, date: NaiveDate) -> Result<Vec<Attendance>> {
        self.api
            .get(&format!("/attendance/my-locations/date/{}", date))
            .await
    }

    /// Dates that have records, drives the calendar highlighting
    pub async fn dates_for_my_locations(&self) -> Result<Vec<NaiveDate>> {
        self.api.get("/attendance/my-locations/dates").await
    }

    pub async fn student_stats(&self, student_id: i64) -> Result<AttendanceStats> {
        self.api
            .get(&format!("/attendance/student/{}/stats", student_id))
            .await
    }

    /// Per-student attendance breakdown from the admin area, untyped
    pub async fn student_details(&self, student_id: i64) -> Result<Value> {
        self.api
            .get(&format!("/admin/students/{}/attendance", student_id))
            .await
    }
}
