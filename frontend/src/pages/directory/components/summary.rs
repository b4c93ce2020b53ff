use crate::pages::directory::utils::DirectorySummary;
use leptos::*;

#[component]
pub fn SummarySection(summary: Signal<DirectorySummary>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
            <Metric
                label="Total Employees"
                value=Signal::derive(move || summary.get().total_employees)
            />
            <Metric
                label="Active Departments"
                value=Signal::derive(move || summary.get().total_departments)
            />
        </div>
    }
}

#[component]
fn Metric(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden p-6 rounded-2xl bg-surface-elevated border border-border shadow group">
            <div class="absolute top-0 right-0 -mr-4 -mt-4 w-24 h-24 bg-primary-subtle rounded-full opacity-50 group-hover:scale-110 transition-transform"></div>
            <p class="relative z-10 text-xs font-bold text-action-primary-bg uppercase tracking-widest">{label}</p>
            <p class="relative z-10 mt-3 text-3xl font-extrabold text-fg">{move || value.get()}</p>
        </div>
    }
}
