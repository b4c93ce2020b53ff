use super::{
    repository::DirectoryRepository,
    utils::{DirectoryState, DirectorySummary, DELETE_FAILED_MESSAGE},
};
use crate::api::{ApiClient, ApiError};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DirectoryViewModel {
    pub state: RwSignal<DirectoryState>,
    /// Row awaiting confirmation in the delete dialog.
    pub pending_delete: RwSignal<Option<i64>>,
    pub alert: RwSignal<Option<String>>,
    pub delete_action: Action<i64, Result<i64, ApiError>>,
}

impl DirectoryViewModel {
    pub fn summary(&self) -> Signal<DirectorySummary> {
        let state = self.state;
        Signal::derive(move || state.with(DirectoryState::summary))
    }

    pub fn request_delete(&self, id: i64) {
        self.pending_delete.set(Some(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if self.delete_action.pending().get_untracked() {
            return;
        }
        if let Some(id) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(id);
        }
    }

    /// Applies a finished delete: drops the row on success, raises the
    /// blocking alert and keeps the list on failure.
    pub fn handle_delete_result(&self, result: &Result<i64, ApiError>) {
        match result {
            Ok(id) => {
                let id = *id;
                self.state.update(|s| {
                    if !s.remove(id) {
                        log::debug!("employee {} already gone from the directory", id);
                    }
                });
            }
            Err(err) => {
                log::error!("Failed to delete employee: {}", err);
                self.alert.set(Some(DELETE_FAILED_MESSAGE.to_string()));
            }
        }
    }

    pub fn dismiss_alert(&self) {
        self.alert.set(None);
    }
}

pub fn use_directory_view_model() -> DirectoryViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DirectoryRepository::new_with_client(Rc::new(api));

    let state = create_rw_signal(DirectoryState::default());
    let pending_delete = create_rw_signal(None::<i64>);
    let alert = create_rw_signal(None::<String>);

    let repo_for_load = repository.clone();
    create_effect(move |_| {
        let repo = repo_for_load.clone();
        spawn_local(async move {
            let result = repo.fetch_employees().await;
            state.try_update(|s| s.apply_load(result));
        });
    });

    let repo_for_delete = repository;
    let delete_action = create_action(move |id: &i64| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { repo.delete_employee(id).await }
    });

    let vm = DirectoryViewModel {
        state,
        pending_delete,
        alert,
        delete_action,
    };

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            vm.handle_delete_result(&result);
        }
    });

    vm
}
