use super::{
    client::ApiClient,
    types::{ApiError, CreateEmployee, Employee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/employees/", base_url)))
            .await?;
        Self::parse_json(response).await
    }

    pub async fn create_employee(&self, payload: &CreateEmployee) -> Result<Employee, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/employees/", base_url))
                    .json(payload),
            )
            .await?;
        Self::parse_json(response).await
    }

    /// Succeeds on any 2xx; the response body is ignored.
    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .delete(format!("{}/employees/{}", base_url, id)),
            )
            .await?;
        Self::ensure_success(response).await.map(|_| ())
    }
}
