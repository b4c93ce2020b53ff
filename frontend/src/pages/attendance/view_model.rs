use super::{
    repository::AttendanceRepository,
    utils::{AttendanceFormState, DateRangeFilter, SubmitOutcome, SUBMIT_FALLBACK_MESSAGE},
};
use crate::api::{ApiClient, ApiError, AttendanceRecord, AttendanceStatus, AttendanceUpsert};
use crate::state::attendance::{use_attendance, AttendanceState, LoadTicket};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub state: RwSignal<AttendanceState>,
    pub date: RwSignal<String>,
    pub status: RwSignal<AttendanceStatus>,
    pub filter_from: RwSignal<String>,
    pub filter_to: RwSignal<String>,
    /// Pending blocking notice; `None` when nothing is shown.
    pub alert: RwSignal<Option<String>>,
    pub submit_action: Action<AttendanceUpsert, Result<AttendanceRecord, ApiError>>,
}

impl AttendanceViewModel {
    pub fn form_snapshot(&self) -> AttendanceFormState {
        AttendanceFormState {
            date: self.date.get_untracked(),
            status: self.status.get_untracked(),
        }
    }

    pub fn filter(&self) -> Signal<DateRangeFilter> {
        let from = self.filter_from;
        let to = self.filter_to;
        Signal::derive(move || DateRangeFilter {
            from: from.get(),
            to: to.get(),
        })
    }

    pub fn filtered_records(&self) -> Signal<Vec<AttendanceRecord>> {
        let state = self.state;
        let filter = self.filter();
        Signal::derive(move || filter.with(|f| state.with(|s| f.apply(&s.records))))
    }

    /// Counts over every record, not just the filtered ones.
    pub fn total_present_days(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(AttendanceState::total_present_days))
    }

    pub fn clear_filters(&self) {
        self.filter_from.set(String::new());
        self.filter_to.set(String::new());
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        let Some(employee_id) = self.state.with_untracked(|s| s.employee_id) else {
            self.alert.set(Some(SUBMIT_FALLBACK_MESSAGE.to_string()));
            return;
        };
        match self.form_snapshot().to_payload(employee_id) {
            Ok(payload) => self.submit_action.dispatch(payload),
            Err(err) => self.alert.set(Some(err.error)),
        }
    }

    /// Applies a finished upsert. Returns the ticket to re-read records
    /// with after a save; a failure raises the alert instead.
    pub fn handle_submit_result(
        &self,
        result: &Result<AttendanceRecord, ApiError>,
    ) -> Option<LoadTicket> {
        let mut form = self.form_snapshot();
        match form.apply_submit_result(result) {
            SubmitOutcome::Saved => {
                self.date.set(form.date);
                self.state.with_untracked(AttendanceState::refresh_ticket)
            }
            SubmitOutcome::Failed(message) => {
                if let Err(err) = result {
                    log::error!("Failed to mark attendance: {}", err);
                }
                self.alert.set(Some(message));
                None
            }
        }
    }

    pub fn dismiss_alert(&self) {
        self.alert.set(None);
    }
}

fn spawn_activation(
    repository: AttendanceRepository,
    state: RwSignal<AttendanceState>,
    ticket: LoadTicket,
) {
    spawn_local(async move {
        let (records, employees) = repository.load_activation(ticket.employee_id).await;
        state.try_update(|s| s.finish_activation(ticket, records, employees));
    });
}

fn spawn_refresh(
    repository: AttendanceRepository,
    state: RwSignal<AttendanceState>,
    ticket: LoadTicket,
) {
    spawn_local(async move {
        let records = repository.fetch_records(ticket.employee_id).await;
        state.try_update(|s| s.apply_refresh(ticket, records));
    });
}

pub fn use_attendance_view_model(employee_id: Signal<Option<i64>>) -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AttendanceRepository::new_with_client(Rc::new(api));

    let state = use_attendance();
    let date = create_rw_signal(String::new());
    let status = create_rw_signal(AttendanceStatus::default());
    let filter_from = create_rw_signal(String::new());
    let filter_to = create_rw_signal(String::new());
    let alert = create_rw_signal(None::<String>);

    let repo_for_load = repository.clone();
    create_effect(move |_| {
        let employee_id = employee_id.get();
        let ticket = state
            .try_update(|s| s.begin_activation(employee_id))
            .flatten();
        if let Some(ticket) = ticket {
            spawn_activation(repo_for_load.clone(), state, ticket);
        }
    });

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |payload: &AttendanceUpsert| {
        let repo = repo_for_submit.clone();
        let payload = payload.clone();
        async move { repo.upsert(&payload).await }
    });

    let vm = AttendanceViewModel {
        state,
        date,
        status,
        filter_from,
        filter_to,
        alert,
        submit_action,
    };

    let repo_for_refresh = repository;
    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            if let Some(ticket) = vm.handle_submit_result(&result) {
                spawn_refresh(repo_for_refresh.clone(), state, ticket);
            }
        }
    });

    vm
}
