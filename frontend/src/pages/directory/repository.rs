use crate::api::{ApiClient, ApiError, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct DirectoryRepository {
    client: Rc<ApiClient>,
}

impl DirectoryRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    /// Resolves to the deleted id so callers can drop the matching row.
    pub async fn delete_employee(&self, id: i64) -> Result<i64, ApiError> {
        self.client.delete_employee(id).await.map(|_| id)
    }
}
