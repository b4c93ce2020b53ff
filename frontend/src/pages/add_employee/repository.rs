use crate::api::{ApiClient, ApiError, CreateEmployee, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct AddEmployeeRepository {
    client: Rc<ApiClient>,
}

impl AddEmployeeRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create(&self, payload: CreateEmployee) -> Result<Employee, ApiError> {
        self.client.create_employee(&payload).await
    }
}
