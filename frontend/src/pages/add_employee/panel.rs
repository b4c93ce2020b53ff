use super::{
    utils::{Department, CREATE_FAILED_MESSAGE},
    view_model::{use_add_employee_view_model, AddEmployeeViewModel},
};
use crate::components::{
    common::{Button, ButtonVariant},
    error::InlineErrorMessage,
    forms::{SelectField, TextField},
    layout::Layout,
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::use_navigate;

pub fn submit_label(pending: bool) -> &'static str {
    if pending {
        "Adding..."
    } else {
        "Save Employee"
    }
}

#[component]
pub fn AddEmployeePage() -> impl IntoView {
    let vm = use_add_employee_view_model();
    let navigate = use_navigate();
    let on_created = Callback::new(move |_| navigate("/", Default::default()));
    view! {
        <Layout>
            <AddEmployeePanel vm=vm on_created=on_created />
        </Layout>
    }
}

#[component]
pub fn AddEmployeePanel(vm: AddEmployeeViewModel, on_created: Callback<()>) -> impl IntoView {
    let pending = vm.submit_action.pending();

    create_effect(move |_| {
        if let Some(Ok(_)) = vm.submit_action.value().get() {
            on_created.call(());
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="max-w-md mx-auto bg-surface-elevated p-8 rounded-lg shadow border border-border">
            <h2 class="text-2xl font-bold mb-6 text-fg">{"Add New Employee"}</h2>
            <InlineErrorMessage error=vm.error.into() fallback=CREATE_FAILED_MESSAGE />
            <form class="space-y-4" on:submit=on_submit>
                <TextField
                    label="Employee ID"
                    value=vm.employee_id
                    placeholder="e.g. EMP-001"
                    required=true
                />
                <TextField
                    label="Full Name"
                    value=vm.full_name
                    placeholder="Jane Doe"
                    required=true
                />
                <TextField
                    label="Email Address"
                    value=vm.email
                    input_type="email"
                    placeholder="jane@company.com"
                    required=true
                />
                <SelectField
                    label="Department"
                    value=vm.department
                    options=Department::options()
                    placeholder="Select a department..."
                    required=true
                />
                <Button
                    variant=ButtonVariant::Primary
                    class="w-full"
                    button_type="submit"
                    disabled=pending
                >
                    {move || submit_label(pending.get())}
                </Button>
            </form>
        </div>
    }
}
