use contracts::domain::a002_department::{Department, DepartmentDto};
use contracts::domain::common::digits_only;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_department::api;
use crate::shared::notification::{use_notifications, NotificationService};

#[derive(Clone, Copy)]
pub struct DepartmentFormViewModel {
    /// `None` while creating.
    pub editing_id: Option<i64>,
    pub code: RwSignal<String>,
    pub name: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    notifications: NotificationService,
}

impl DepartmentFormViewModel {
    pub fn new() -> Self {
        Self {
            editing_id: None,
            code: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            notifications: use_notifications(),
        }
    }

    pub fn for_department(department: &Department) -> Self {
        let vm = Self::new();
        vm.code.set(department.department_id.clone());
        vm.name.set(department.name.clone());
        Self {
            editing_id: Some(department.id),
            ..vm
        }
    }

    /// The code input only ever holds digits.
    pub fn set_code(&self, raw: &str) {
        self.code.set(digits_only(raw));
    }

    pub fn clear(&self) {
        self.code.set(String::new());
        self.name.set(String::new());
        self.error.set(None);
    }

    pub fn save(self, on_saved: Callback<()>) {
        let dto = match DepartmentDto::from_form(&self.code.get_untracked(), &self.name.get_untracked()) {
            Ok(dto) => dto,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };
        self.error.set(None);
        self.saving.set(true);
        spawn_local(async move {
            let result = match self.editing_id {
                Some(id) => api::update_department(id, &dto).await,
                None => api::create_department(&dto).await,
            };
            self.saving.set(false);
            match result {
                Ok(()) => {
                    if self.editing_id.is_some() {
                        self.notifications.success("Department updated successfully");
                    } else {
                        self.notifications.success("Department saved successfully");
                        self.clear();
                    }
                    on_saved.run(());
                }
                Err(e) => self.notifications.api_error("Failed to save department", &e),
            }
        });
    }
}
