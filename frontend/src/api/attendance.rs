use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, AttendanceUpsert},
};

impl ApiClient {
    pub async fn list_attendance(&self, employee_id: i64) -> Result<Vec<AttendanceRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/attendance/{}", base_url, employee_id)),
            )
            .await?;
        Self::parse_json(response).await
    }

    pub async fn upsert_attendance(
        &self,
        payload: &AttendanceUpsert,
    ) -> Result<AttendanceRecord, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/attendance/", base_url))
                    .json(payload),
            )
            .await?;
        Self::parse_json(response).await
    }
}
