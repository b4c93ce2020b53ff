use crate::{
    api::AttendanceRecord,
    components::{
        common::{Button, ButtonVariant},
        forms::DatePicker,
        layout::LoadingMessage,
    },
    pages::attendance::utils::{empty_history_message, status_badge_class},
};
use leptos::*;

#[component]
pub fn HistoryFilterBar(
    from: RwSignal<String>,
    to: RwSignal<String>,
    active: Signal<bool>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-3 sm:flex-row sm:items-end">
            <div class="w-full sm:w-48">
                <DatePicker value=from label=Some("From") />
            </div>
            <div class="w-full sm:w-48">
                <DatePicker value=to label=Some("To") />
            </div>
            <Show when=move || active.get()>
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| on_clear.call(()))
                >
                    {"Clear Filters"}
                </Button>
            </Show>
        </div>
    }
}

#[component]
pub fn HistorySection(
    records: Signal<Vec<AttendanceRecord>>,
    loading: Signal<bool>,
    filter_active: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow overflow-hidden sm:rounded-md space-y-4 p-4">
            <h3 class="text-lg font-medium text-fg">{"Attendance History"}</h3>
            {children()}
            {move || {
                if loading.get() {
                    view! { <LoadingMessage message="Loading attendance..." /> }.into_view()
                } else if records.with(Vec::is_empty) {
                    view! {
                        <p class="text-sm text-fg-muted">
                            {empty_history_message(filter_active.get())}
                        </p>
                    }
                    .into_view()
                } else {
                    view! { <HistoryTable records=records /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn HistoryTable(records: Signal<Vec<AttendanceRecord>>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead>
                <tr>
                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">{"Date"}</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">{"Status"}</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                <For
                    each=move || records.get()
                    key=|record| (record.id, record.status)
                    children=move |record| view! {
                        <tr>
                            <td class="px-4 py-2 text-sm text-fg">{record.date.format("%Y-%m-%d").to_string()}</td>
                            <td class="px-4 py-2 text-sm">
                                <span class=status_badge_class(record.status)>{record.status.as_str()}</span>
                            </td>
                        </tr>
                    }
                />
            </tbody>
        </table>
    }
}
