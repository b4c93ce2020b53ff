use super::{repository::AddEmployeeRepository, utils::EmployeeFormState};
use crate::api::{ApiClient, ApiError, CreateEmployee, Employee};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AddEmployeeViewModel {
    pub employee_id: RwSignal<String>,
    pub full_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub department: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub submit_action: Action<CreateEmployee, Result<Employee, ApiError>>,
}

impl AddEmployeeViewModel {
    pub fn form_snapshot(&self) -> EmployeeFormState {
        EmployeeFormState {
            employee_id: self.employee_id.get_untracked(),
            full_name: self.full_name.get_untracked(),
            email: self.email.get_untracked(),
            department: self.department.get_untracked(),
        }
    }

    /// Returns false when nothing was sent, either because a request is
    /// already in flight or a field is missing.
    pub fn submit(&self) -> bool {
        if self.submit_action.pending().get_untracked() {
            return false;
        }
        self.error.set(None);
        match self.form_snapshot().to_request() {
            Ok(request) => {
                self.submit_action.dispatch(request);
                true
            }
            Err(err) => {
                self.error.set(Some(err));
                false
            }
        }
    }
}

pub fn use_add_employee_view_model() -> AddEmployeeViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AddEmployeeRepository::new_with_client(Rc::new(api));

    let employee_id = create_rw_signal(String::new());
    let full_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let department = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let submit_action = create_action(move |request: &CreateEmployee| {
        let repo = repository.clone();
        let request = request.clone();
        async move { repo.create(request).await }
    });

    create_effect(move |_| {
        if let Some(Err(err)) = submit_action.value().get() {
            log::error!("Failed to add employee: {}", err);
            error.set(Some(err));
        }
    });

    AddEmployeeViewModel {
        employee_id,
        full_name,
        email,
        department,
        error,
        submit_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn incomplete_form_is_not_sent() {
        with_runtime(|| {
            let vm = use_add_employee_view_model();
            vm.employee_id.set("EMP-001".into());
            assert!(!vm.submit());
            assert_eq!(vm.submit_action.version().get_untracked(), 0);
            assert_eq!(
                vm.error.get_untracked().map(|e| e.code),
                Some("VALIDATION_ERROR".to_string())
            );
        });
    }

    #[test]
    fn snapshot_collects_all_inputs() {
        with_runtime(|| {
            let vm = use_add_employee_view_model();
            vm.employee_id.set("EMP-002".into());
            vm.full_name.set("Jane Doe".into());
            vm.email.set("jane@company.com".into());
            vm.department.set("Marketing".into());
            let form = vm.form_snapshot();
            assert!(form.is_valid());
            assert_eq!(form.department, "Marketing");
        });
    }
}
