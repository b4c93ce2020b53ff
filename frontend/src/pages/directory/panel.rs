use super::{
    components::{EmployeeTable, SummarySection},
    utils::{DELETE_CONFIRM_MESSAGE, EMPTY_DIRECTORY_HINT, EMPTY_DIRECTORY_TITLE},
    view_model::{use_directory_view_model, DirectoryViewModel},
};
use crate::components::{
    dialog::{AlertDialog, ConfirmDialog},
    empty_state::EmptyState,
    layout::{ErrorMessage, Layout, LoadingMessage},
};
use leptos::*;

#[component]
pub fn DirectoryPage() -> impl IntoView {
    let vm = use_directory_view_model();
    view! {
        <Layout>
            <DirectoryPanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn DirectoryPanel(vm: DirectoryViewModel) -> impl IntoView {
    let state = vm.state;
    let employees = Signal::derive(move || state.with(|s| s.employees.clone()));
    let is_empty = move || state.with(|s| s.employees.is_empty());
    let confirm_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));

    view! {
        {move || {
            let (loading, error) = state.with(|s| (s.loading, s.error.clone()));
            if loading {
                view! { <LoadingMessage message="Loading employees..." /> }.into_view()
            } else if let Some(error) = error {
                view! { <ErrorMessage message=error /> }.into_view()
            } else {
                view! {
                    <div class="space-y-6">
                        <SummarySection summary=vm.summary() />
                        <Show
                            when=move || !is_empty()
                            fallback=|| {
                                view! {
                                    <EmptyState
                                        title=EMPTY_DIRECTORY_TITLE
                                        description=EMPTY_DIRECTORY_HINT
                                        action=("/add", "Add Employee")
                                    />
                                }
                            }
                        >
                            <EmployeeTable
                                employees=employees
                                on_delete=Callback::new(move |id| vm.request_delete(id))
                            />
                        </Show>
                    </div>
                }
                .into_view()
            }
        }}
        <ConfirmDialog
            is_open=confirm_open
            title="Delete employee"
            message=DELETE_CONFIRM_MESSAGE
            on_confirm=Callback::new(move |_| vm.confirm_delete())
            on_cancel=Callback::new(move |_| vm.cancel_delete())
            confirm_label="Delete"
            confirm_disabled=vm.delete_action.pending()
            destructive=true
        />
        <AlertDialog
            message=vm.alert.into()
            on_dismiss=Callback::new(move |_| vm.dismiss_alert())
        />
    }
}
