use super::{
    components::{
        form::MarkAttendanceForm,
        history::{HistoryFilterBar, HistorySection},
        summary::PresentDaysCard,
    },
    layout::AttendanceFrame,
    utils::parse_employee_id,
    view_model::use_attendance_view_model,
};
use crate::components::dialog::AlertDialog;
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let params = use_params_map();
    let employee_id =
        Signal::derive(move || params.with(|p| parse_employee_id(p.get("id").map(String::as_str))));
    view! { <AttendancePanel employee_id=employee_id /> }
}

#[component]
pub fn AttendancePanel(employee_id: Signal<Option<i64>>) -> impl IntoView {
    let vm = use_attendance_view_model(employee_id);
    let state = vm.state;

    let employee_name = Signal::derive(move || state.with(|s| s.employee_name.clone()));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let filter = vm.filter();
    let filter_active = Signal::derive(move || filter.with(|f| f.is_active()));
    let pending = vm.submit_action.pending();

    view! {
        <AttendanceFrame employee_name=employee_name>
            <PresentDaysCard total=vm.total_present_days() />
            <MarkAttendanceForm
                date=vm.date
                status=vm.status
                pending=pending.into()
                on_submit=Callback::new(move |_| vm.submit())
            />
            <HistorySection
                records=vm.filtered_records()
                loading=loading
                filter_active=filter_active
            >
                <HistoryFilterBar
                    from=vm.filter_from
                    to=vm.filter_to
                    active=filter_active
                    on_clear=Callback::new(move |_| vm.clear_filters())
                />
            </HistorySection>
        </AttendanceFrame>
        <AlertDialog
            message=vm.alert.into()
            on_dismiss=Callback::new(move |_| vm.dismiss_alert())
        />
    }
}
