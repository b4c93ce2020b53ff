use crate::api::{ApiError, AttendanceRecord, AttendanceStatus, AttendanceUpsert};
use chrono::NaiveDate;

pub const SUBMIT_FALLBACK_MESSAGE: &str = "Failed to mark/update attendance.";
pub const NO_RECORDS_MESSAGE: &str = "No attendance records yet.";
pub const NO_RECORDS_IN_RANGE_MESSAGE: &str = "No records found for this date range.";

/// Inclusive date-range filter bound to the two date pickers. An empty input
/// leaves that side unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeFilter {
    pub from: String,
    pub to: String,
}

impl DateRangeFilter {
    pub fn is_active(&self) -> bool {
        !self.from.trim().is_empty() || !self.to.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.from.clear();
        self.to.clear();
    }

    pub fn from_bound(&self) -> Option<NaiveDate> {
        parse_bound(&self.from)
    }

    pub fn to_bound(&self) -> Option<NaiveDate> {
        parse_bound(&self.to)
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        let after_from = self.from_bound().map_or(true, |from| date >= from);
        let before_to = self.to_bound().map_or(true, |to| date <= to);
        after_from && before_to
    }

    /// Matching records in their original order.
    pub fn apply(&self, records: &[AttendanceRecord]) -> Vec<AttendanceRecord> {
        records
            .iter()
            .filter(|record| self.matches(record.date))
            .cloned()
            .collect()
    }
}

fn parse_bound(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Route `:id` segment as a numeric employee key. Anything that is not a
/// plain integer yields `None`.
pub fn parse_employee_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok()
}

pub fn empty_history_message(filter_active: bool) -> &'static str {
    if filter_active {
        NO_RECORDS_IN_RANGE_MESSAGE
    } else {
        NO_RECORDS_MESSAGE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFormState {
    pub date: String,
    pub status: AttendanceStatus,
}

impl AttendanceFormState {
    pub fn to_payload(&self, employee_id: i64) -> Result<AttendanceUpsert, ApiError> {
        let date = self.date.trim();
        if date.is_empty() {
            return Err(ApiError::validation("Date is required."));
        }
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ApiError::validation("Date must be in YYYY-MM-DD format."))?;
        Ok(AttendanceUpsert {
            employee_id,
            date,
            status: self.status,
        })
    }

    /// Folds an upsert response back into the form. Success clears the date
    /// and keeps the status; failure leaves both fields alone.
    pub fn apply_submit_result<T>(&mut self, result: &Result<T, ApiError>) -> SubmitOutcome {
        match result {
            Ok(_) => {
                self.date.clear();
                SubmitOutcome::Saved
            }
            Err(err) => SubmitOutcome::Failed(err.message_or(SUBMIT_FALLBACK_MESSAGE)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Records must be re-read.
    Saved,
    /// Text for the blocking alert.
    Failed(String),
}

pub fn status_badge_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => {
            "px-2 py-1 rounded text-sm font-medium bg-status-success-bg text-status-success-text"
        }
        AttendanceStatus::Absent => {
            "px-2 py-1 rounded text-sm font-medium bg-status-error-bg text-status-error-text"
        }
    }
}
