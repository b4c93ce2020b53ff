use crate::components::layout::Layout;
use leptos::*;

pub fn attendance_heading(employee_name: &str) -> String {
    format!("{}'s Attendance", employee_name)
}

#[component]
pub fn AttendanceFrame(employee_name: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="max-w-4xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-fg">
                        {move || employee_name.with(|name| attendance_heading(name))}
                    </h1>
                    <a href="/" class="text-sm font-medium text-action-primary-bg hover:underline">
                        {"Back to Directory"}
                    </a>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
