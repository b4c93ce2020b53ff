use crate::api::{ApiError, CreateEmployee};
use std::fmt;
use std::str::FromStr;

pub const CREATE_FAILED_MESSAGE: &str = "An error occurred while adding the employee.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Engineering,
    HumanResources,
    Sales,
    Marketing,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::Engineering,
        Department::HumanResources,
        Department::Sales,
        Department::Marketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::HumanResources => "Human Resources",
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
        }
    }

    /// (value, label) pairs for a `<select>`.
    pub fn options() -> Vec<(String, String)> {
        Self::ALL
            .iter()
            .map(|d| (d.as_str().to_string(), d.as_str().to_string()))
            .collect()
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s.trim())
            .ok_or_else(|| ApiError::validation(format!("Unknown department: {}", s)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    /// Empty until a department is picked.
    pub department: String,
}

impl EmployeeFormState {
    pub fn is_valid(&self) -> bool {
        !(self.employee_id.trim().is_empty()
            || self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.department.trim().is_empty())
    }

    /// Only presence is checked here; format rules are the backend's call.
    /// The department must be one of the offered choices.
    pub fn to_request(&self) -> Result<CreateEmployee, ApiError> {
        if !self.is_valid() {
            return Err(ApiError::validation("All fields are required."));
        }
        let department: Department = self.department.parse()?;
        Ok(CreateEmployee {
            employee_id: self.employee_id.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            department: department.to_string(),
        })
    }
}
