use crate::api::Employee;
use leptos::*;

pub fn attendance_href(id: i64) -> String {
    format!("/attendance/{}", id)
}

#[component]
pub fn EmployeeTable(employees: Signal<Vec<Employee>>, on_delete: Callback<i64>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated rounded-lg shadow border border-border overflow-hidden">
            <table class="w-full text-left border-collapse">
                <thead class="bg-surface-muted border-b border-border">
                    <tr>
                        <th class="p-4 font-medium text-fg-muted">{"Emp ID"}</th>
                        <th class="p-4 font-medium text-fg-muted">{"Name"}</th>
                        <th class="p-4 font-medium text-fg-muted">{"Email"}</th>
                        <th class="p-4 font-medium text-fg-muted">{"Department"}</th>
                        <th class="p-4 font-medium text-fg-muted">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || employees.get()
                        key=|employee| employee.id
                        children=move |employee| {
                            let id = employee.id;
                            view! {
                                <tr class="hover:bg-surface-muted transition-colors">
                                    <td class="p-4 text-fg">{employee.employee_id}</td>
                                    <td class="p-4 text-fg font-medium">{employee.full_name}</td>
                                    <td class="p-4 text-fg-muted">{employee.email}</td>
                                    <td class="p-4 text-fg-muted">
                                        <span class="bg-surface-muted px-2 py-1 rounded text-sm">
                                            {employee.department}
                                        </span>
                                    </td>
                                    <td class="p-4 flex gap-4">
                                        <a
                                            href=attendance_href(id)
                                            class="text-action-primary-bg hover:underline font-medium text-sm"
                                        >
                                            {"Attendance"}
                                        </a>
                                        <button
                                            type="button"
                                            class="text-action-danger-bg hover:underline font-medium text-sm"
                                            on:click=move |_| on_delete.call(id)
                                        >
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
