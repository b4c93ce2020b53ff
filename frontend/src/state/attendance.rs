use crate::api::{ApiError, AttendanceRecord, AttendanceStatus, Employee};
use leptos::*;

pub const LOADING_EMPLOYEE_NAME: &str = "Loading...";
pub const UNKNOWN_EMPLOYEE_NAME: &str = "Unknown Employee";

/// Identifies one load for one employee. A ticket stops being current as soon
/// as another activation starts, so late responses for it are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub employee_id: i64,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceState {
    pub employee_id: Option<i64>,
    pub records: Vec<AttendanceRecord>,
    pub employee_name: String,
    pub loading: bool,
    generation: u64,
}

impl Default for AttendanceState {
    fn default() -> Self {
        Self {
            employee_id: None,
            records: Vec::new(),
            employee_name: LOADING_EMPLOYEE_NAME.to_string(),
            loading: true,
            generation: 0,
        }
    }
}

impl AttendanceState {
    /// Resets the view for `employee_id` and hands out the ticket its reads
    /// must present. `None` (unparseable route id) settles immediately.
    pub fn begin_activation(&mut self, employee_id: Option<i64>) -> Option<LoadTicket> {
        self.generation = self.generation.wrapping_add(1);
        self.employee_id = employee_id;
        self.records.clear();
        match employee_id {
            Some(employee_id) => {
                self.employee_name = LOADING_EMPLOYEE_NAME.to_string();
                self.loading = true;
                Some(LoadTicket {
                    employee_id,
                    generation: self.generation,
                })
            }
            None => {
                self.employee_name = UNKNOWN_EMPLOYEE_NAME.to_string();
                self.loading = false;
                None
            }
        }
    }

    /// Ticket for re-reading the current employee's records without starting
    /// a new activation.
    pub fn refresh_ticket(&self) -> Option<LoadTicket> {
        self.employee_id.map(|employee_id| LoadTicket {
            employee_id,
            generation: self.generation,
        })
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.generation && self.employee_id == Some(ticket.employee_id)
    }

    /// Applies both activation reads. Failures are logged and leave the
    /// previous value in place; `loading` is cleared either way.
    pub fn finish_activation(
        &mut self,
        ticket: LoadTicket,
        records: Result<Vec<AttendanceRecord>, ApiError>,
        employees: Result<Vec<Employee>, ApiError>,
    ) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "discarding stale attendance load for employee {}",
                ticket.employee_id
            );
            return false;
        }
        match records {
            Ok(records) => self.records = records,
            Err(err) => log::error!("Failed to fetch attendance records: {}", err),
        }
        self.employee_name = match employees {
            Ok(employees) => resolve_employee_name(&employees, ticket.employee_id),
            Err(err) => {
                log::error!("Failed to resolve employee name: {}", err);
                UNKNOWN_EMPLOYEE_NAME.to_string()
            }
        };
        self.loading = false;
        true
    }

    /// Replaces the record set wholesale with a fresh read.
    pub fn apply_refresh(
        &mut self,
        ticket: LoadTicket,
        records: Result<Vec<AttendanceRecord>, ApiError>,
    ) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "discarding stale attendance refresh for employee {}",
                ticket.employee_id
            );
            return false;
        }
        match records {
            Ok(records) => {
                self.records = records;
                true
            }
            Err(err) => {
                log::error!("Failed to refresh attendance records: {}", err);
                false
            }
        }
    }

    pub fn total_present_days(&self) -> usize {
        total_present_days(&self.records)
    }
}

pub fn total_present_days(records: &[AttendanceRecord]) -> usize {
    records
        .iter()
        .filter(|record| record.status == AttendanceStatus::Present)
        .count()
}

pub fn resolve_employee_name(employees: &[Employee], employee_id: i64) -> String {
    employees
        .iter()
        .find(|employee| employee.id == employee_id)
        .map(|employee| employee.full_name.clone())
        .unwrap_or_else(|| UNKNOWN_EMPLOYEE_NAME.to_string())
}

pub fn use_attendance() -> RwSignal<AttendanceState> {
    create_rw_signal(AttendanceState::default())
}
