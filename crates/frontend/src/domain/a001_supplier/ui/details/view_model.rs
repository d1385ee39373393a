use super::model::{ApiError, SupplierApi};
use crate::shared::notifications::Notifications;
use contracts::domain::a001_supplier::{
    Supplier, SupplierDto, SupplierField, SupplierId, ValidationError,
};
use leptos::prelude::*;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Page the editor returns to after a successful save or delete.
pub const LIST_PATH: &str = "/consultas";

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this supplier?";

const LOAD_FAILED: &str = "Failed to load supplier.";
const SAVE_FAILED: &str = "Failed to save supplier.";
const DELETE_FAILED: &str = "Failed to delete supplier.";
const SERVER_UNREACHABLE: &str = "Could not reach the server, please try again.";
const DELETE_UNREACHABLE: &str = "Could not reach the server.";
const SAVED: &str = "Supplier saved successfully!";
const DELETED: &str = "Supplier deleted successfully!";

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// ViewModel for the supplier form.
///
/// Owns the draft, the busy flag and the load state; talks to the API,
/// the notification channel and the router only through the handles
/// passed to [`SupplierDetailsViewModel::new`].
#[derive(Clone)]
pub struct SupplierDetailsViewModel {
    pub id: Option<SupplierId>,
    pub form: RwSignal<SupplierDto>,
    pub load_state: RwSignal<LoadState>,
    pub is_busy: RwSignal<bool>,
    notifications: Notifications,
    api: Rc<dyn SupplierApi>,
    navigate: Rc<dyn Fn(&str)>,
    confirm: Rc<dyn Fn(&str) -> bool>,
    alive: Arc<AtomicBool>,
}

impl SupplierDetailsViewModel {
    pub fn new(
        id: Option<SupplierId>,
        api: Rc<dyn SupplierApi>,
        notifications: Notifications,
        navigate: Rc<dyn Fn(&str)>,
        confirm: Rc<dyn Fn(&str) -> bool>,
    ) -> Self {
        Self {
            id,
            form: RwSignal::new(SupplierDto::default()),
            load_state: RwSignal::new(LoadState::Idle),
            is_busy: RwSignal::new(false),
            notifications,
            api,
            navigate,
            confirm,
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Callback for `on_cleanup`: after it runs, pending requests finish
    /// without touching page state or navigating.
    pub fn disposer(&self) -> impl FnOnce() + Send + Sync + 'static {
        let alive = Arc::clone(&self.alive);
        move || alive.store(false, Ordering::Release)
    }

    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn set_field(&self, field: SupplierField, value: String) {
        self.form.update(|f| f.set(field, value));
    }

    /// Input handler shared by all form fields: `name` is the input's `name`
    /// attribute, i.e. the field's wire name.
    pub fn apply_input(&self, name: &str, value: String) -> Result<(), String> {
        let field = name.parse::<SupplierField>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Validate the current draft, reporting the first failure as a notification.
    pub fn validate_form(&self) -> Result<Supplier, ValidationError> {
        self.form.with_untracked(|f| f.validate()).inspect_err(|e| {
            log::warn!("Supplier form rejected: {:?} ({})", e.field(), e);
            self.notifications.error(e.to_string());
        })
    }

    /// Fetch the record named by the route, if any.
    pub async fn load(&self) {
        let Some(id) = self.id.clone() else {
            self.load_state.set(LoadState::Ready);
            return;
        };
        if self.is_busy.get_untracked() {
            return;
        }

        self.load_state.set(LoadState::Loading);
        self.is_busy.set(true);

        let result = self.api.fetch_by_id(&id).await;
        let alive = self.is_alive();
        if alive {
            self.is_busy.set(false);
        }

        match result {
            Ok(dto) => {
                log::info!("Supplier {} loaded", id);
                if alive {
                    self.form.set(dto);
                    self.load_state.set(LoadState::Ready);
                }
            }
            Err(e) => {
                log::error!("Failed to load supplier {}: {}", id, e);
                self.notifications.error(LOAD_FAILED);
                if alive {
                    self.load_state.set(LoadState::Failed(e.to_string()));
                }
            }
        }
    }

    /// Validate, then create or fully replace the record.
    pub async fn save(&self) {
        if self.is_busy.get_untracked() {
            return;
        }
        let Ok(supplier) = self.validate_form() else {
            return;
        };

        self.is_busy.set(true);
        let result = match &self.id {
            Some(id) => self.api.update(id, &supplier).await,
            None => self.api.create(&supplier).await,
        };
        let alive = self.is_alive();
        if alive {
            self.is_busy.set(false);
        }

        match result {
            Ok(()) => {
                log::info!("Supplier saved: {:?}", self.id);
                self.notifications.success(SAVED);
                if alive {
                    (self.navigate)(LIST_PATH);
                }
            }
            Err(e) => {
                log::error!("Failed to save supplier {:?}: {}", self.id, e);
                self.notifications.error(failure_message(&e, SAVE_FAILED, SERVER_UNREACHABLE));
            }
        }
    }

    /// Delete the record after the user confirms. No-op in create mode.
    pub async fn delete(&self) {
        let Some(id) = self.id.clone() else {
            return;
        };
        if self.is_busy.get_untracked() {
            return;
        }
        if !(self.confirm)(DELETE_CONFIRMATION) {
            log::debug!("Deletion of supplier {} cancelled", id);
            return;
        }

        self.is_busy.set(true);
        let result = self.api.delete(&id).await;
        let alive = self.is_alive();
        if alive {
            self.is_busy.set(false);
        }

        match result {
            Ok(()) => {
                log::info!("Supplier {} deleted", id);
                self.notifications.success(DELETED);
                if alive {
                    (self.navigate)(LIST_PATH);
                }
            }
            Err(e) => {
                log::error!("Failed to delete supplier {}: {}", id, e);
                self.notifications.error(failure_message(&e, DELETE_FAILED, DELETE_UNREACHABLE));
            }
        }
    }

    pub fn load_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load().await });
    }

    pub fn save_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.save().await });
    }

    pub fn delete_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.delete().await });
    }
}

fn failure_message(
    error: &ApiError,
    rejected: &'static str,
    unreachable: &'static str,
) -> &'static str {
    match error {
        ApiError::Network(_) => unreachable,
        ApiError::Status(_) | ApiError::Decode(_) => rejected,
    }
}
