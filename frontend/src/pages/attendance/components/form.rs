use crate::api::AttendanceStatus;
use crate::components::{
    common::{Button, ButtonVariant},
    forms::DatePicker,
};
use leptos::{ev::SubmitEvent, *};
use std::str::FromStr;

#[component]
pub fn MarkAttendanceForm(
    date: RwSignal<String>,
    status: RwSignal<AttendanceStatus>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-4 space-y-4" on:submit=submit>
            <h3 class="text-lg font-medium text-fg">{"Mark Attendance"}</h3>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-3 sm:items-end">
                <DatePicker value=date label=Some("Date") />
                <div>
                    <label class="block text-sm font-medium text-fg-muted mb-1">{"Status"}</label>
                    <select
                        class="w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                        on:change=move |ev| {
                            if let Ok(value) = AttendanceStatus::from_str(&event_target_value(&ev)) {
                                status.set(value);
                            }
                        }
                    >
                        {AttendanceStatus::ALL
                            .iter()
                            .map(|option| {
                                let option = *option;
                                view! {
                                    <option
                                        value=option.as_str()
                                        selected=move || status.get() == option
                                    >
                                        {option.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <Button
                    variant=ButtonVariant::Primary
                    button_type="submit"
                    loading=pending
                >
                    {"Mark Attendance"}
                </Button>
            </div>
        </form>
    }
}
