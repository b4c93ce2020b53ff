use crate::api::{ApiClient, ApiError, AttendanceRecord, AttendanceUpsert, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_records(&self, employee_id: i64) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.list_attendance(employee_id).await
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    /// Both activation reads, issued concurrently. Each result is reported
    /// separately so one failing read does not hide the other.
    pub async fn load_activation(
        &self,
        employee_id: i64,
    ) -> (
        Result<Vec<AttendanceRecord>, ApiError>,
        Result<Vec<Employee>, ApiError>,
    ) {
        futures::join!(self.fetch_records(employee_id), self.fetch_employees())
    }

    pub async fn upsert(&self, payload: &AttendanceUpsert) -> Result<AttendanceRecord, ApiError> {
        self.client.upsert_attendance(payload).await
    }
}
