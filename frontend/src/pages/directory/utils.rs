use crate::api::{ApiError, Employee};
use std::collections::HashSet;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch employees.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete employee.";
pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this employee?";
pub const EMPTY_DIRECTORY_TITLE: &str = "No employees found.";
pub const EMPTY_DIRECTORY_HINT: &str = "Click \"Add Employee\" to get started!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectorySummary {
    pub total_employees: usize,
    pub total_departments: usize,
}

/// Headcount and distinct-department count, computed fresh from `employees`.
pub fn summarize(employees: &[Employee]) -> DirectorySummary {
    let departments: HashSet<&str> = employees
        .iter()
        .map(|employee| employee.department.as_str())
        .collect();
    DirectorySummary {
        total_employees: employees.len(),
        total_departments: departments.len(),
    }
}

/// Drops the row with server id `id`, keeping the others in order. Returns
/// whether anything was removed.
pub fn remove_employee(employees: &mut Vec<Employee>, id: i64) -> bool {
    let before = employees.len();
    employees.retain(|employee| employee.id != id);
    employees.len() != before
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryState {
    pub employees: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl DirectoryState {
    /// Settles the one-shot list fetch. A failure is terminal for this view.
    pub fn apply_load(&mut self, result: Result<Vec<Employee>, ApiError>) {
        match result {
            Ok(employees) => {
                self.employees = employees;
                self.error = None;
            }
            Err(err) => {
                log::error!("Failed to fetch employees: {}", err);
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    pub fn summary(&self) -> DirectorySummary {
        summarize(&self.employees)
    }

    pub fn remove(&mut self, id: i64) -> bool {
        remove_employee(&mut self.employees, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::employee;

    #[test]
    fn summary_counts_distinct_departments() {
        let employees = vec![
            employee(1, "Engineering"),
            employee(2, "Sales"),
            employee(3, "Engineering"),
        ];
        assert_eq!(
            summarize(&employees),
            DirectorySummary {
                total_employees: 3,
                total_departments: 2,
            }
        );
    }

    #[test]
    fn five_employees_across_two_departments() {
        let employees: Vec<Employee> = (1..=5)
            .map(|id| employee(id, if id % 2 == 0 { "Sales" } else { "Marketing" }))
            .collect();
        let summary = summarize(&employees);
        assert_eq!(summary.total_employees, 5);
        assert_eq!(summary.total_departments, 2);
    }

    #[test]
    fn empty_directory_summarizes_to_zero() {
        assert_eq!(summarize(&[]), DirectorySummary::default());
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut employees = vec![
            employee(1, "Engineering"),
            employee(2, "Sales"),
            employee(3, "Engineering"),
        ];
        assert!(remove_employee(&mut employees, 2));
        let ids: Vec<i64> = employees.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut employees = vec![employee(1, "Engineering"), employee(3, "Sales")];
        let before = employees.clone();
        assert!(!remove_employee(&mut employees, 2));
        assert_eq!(employees, before);
    }

    #[test]
    fn failed_load_is_terminal_with_fixed_message() {
        let mut state = DirectoryState::default();
        assert!(state.loading);
        state.apply_load(Err(ApiError::request_failed("offline")));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
        assert!(state.employees.is_empty());
    }

    #[test]
    fn successful_load_feeds_summary() {
        let mut state = DirectoryState::default();
        state.apply_load(Ok(vec![employee(1, "Engineering"), employee(2, "Sales")]));
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.summary().total_departments, 2);
        assert!(state.remove(1));
        assert_eq!(state.summary().total_employees, 1);
    }
}
