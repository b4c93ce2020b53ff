#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
    use chrono::NaiveDate;

    /// Employee with server id `id`, code `EMP-00{id}` and the given department.
    pub fn employee(id: i64, department: &str) -> Employee {
        Employee {
            id,
            employee_id: format!("EMP-{:03}", id),
            full_name: format!("Employee {}", id),
            email: format!("emp{}@company.com", id),
            department: department.to_string(),
        }
    }

    pub fn attendance_record(id: i64, date: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: 1,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid fixture date"),
            status,
        }
    }
}
