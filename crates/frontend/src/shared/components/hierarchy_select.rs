//! Division → Department → Sub Department selectors.
//!
//! [`CascadeController`] owns a [`HierarchyCascade`] signal and issues the
//! fetches; responses for superseded selections are dropped by the cascade.

use contracts::shared::api_error::ApiError;
use contracts::shared::hierarchy::{Applied, HierarchyCascade, SelectorState, Ticket};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_data_entry::api;
use crate::shared::notification::{use_notifications, NotificationService};

#[derive(Clone, Copy)]
pub struct CascadeController {
    pub state: RwSignal<HierarchyCascade>,
    notifications: NotificationService,
}

impl CascadeController {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(HierarchyCascade::new()),
            notifications: use_notifications(),
        }
    }

    fn report(&self, ticket: Ticket, context: &str, error: &ApiError) {
        let applied = self.state.try_update(|c| c.fail(ticket));
        if applied == Some(Applied::Applied) {
            log::warn!("{}: {}", context, error);
            self.notifications.api_error(context, error);
        }
    }

    async fn fetch_divisions(self) -> bool {
        let Some(ticket) = self.state.try_update(|c| c.begin_load_divisions()) else {
            return false;
        };
        match api::fetch_hierarchy().await {
            Ok(branches) => {
                self.state.try_update(|c| c.apply_divisions(ticket, &branches))
                    == Some(Applied::Applied)
            }
            Err(e) => {
                self.report(ticket, "Failed to load divisions", &e);
                false
            }
        }
    }

    pub fn load_divisions(&self) {
        let this = *self;
        spawn_local(async move {
            this.fetch_divisions().await;
        });
    }

    async fn load_departments(self, ticket: Ticket) -> bool {
        match api::fetch_hierarchy().await {
            Ok(branches) => {
                self.state.try_update(|c| c.apply_departments(ticket, &branches))
                    == Some(Applied::Applied)
            }
            Err(e) => {
                self.report(ticket, "Failed to load departments", &e);
                false
            }
        }
    }

    async fn load_sub_departments(self, ticket: Ticket) -> bool {
        match api::fetch_hierarchy().await {
            Ok(branches) => {
                self.state
                    .try_update(|c| c.apply_sub_departments(ticket, &branches))
                    == Some(Applied::Applied)
            }
            Err(e) => {
                self.report(ticket, "Failed to load sub-departments", &e);
                false
            }
        }
    }

    async fn load_fields(self, ticket: Ticket, sub_department: i64) -> bool {
        match api::fetch_fields(sub_department).await {
            Ok(fields) => {
                self.state.try_update(|c| c.apply_fields(ticket, fields)) == Some(Applied::Applied)
            }
            Err(e) => {
                self.report(ticket, "Failed to load fields", &e);
                false
            }
        }
    }

    pub fn select_division(&self, id: Option<i64>) {
        if let Some(ticket) = self.state.try_update(|c| c.select_division(id)).flatten() {
            let this = *self;
            spawn_local(async move {
                this.load_departments(ticket).await;
            });
        }
    }

    pub fn select_department(&self, id: Option<i64>) {
        if let Some(ticket) = self.state.try_update(|c| c.select_department(id)).flatten() {
            let this = *self;
            spawn_local(async move {
                this.load_sub_departments(ticket).await;
            });
        }
    }

    pub fn select_sub_department(&self, id: Option<i64>) {
        let ticket = self.state.try_update(|c| c.select_sub_department(id)).flatten();
        if let (Some(ticket), Some(id)) = (ticket, id) {
            let this = *self;
            spawn_local(async move {
                this.load_fields(ticket, id).await;
            });
        }
    }

    fn missing(&self, level: &str, id: i64) {
        log::warn!("stored {} {} is not in the hierarchy", level, id);
        self.notifications.error(format!(
            "The saved {} is no longer available. Please choose another.",
            level
        ));
    }

    /// Load divisions, then walk the cascade down to an existing record's
    /// selection one level at a time. Stops at the first stored level that the
    /// hierarchy no longer offers.
    pub async fn preset(self, branch: i64, department: i64, sub_department: i64) {
        if !self.fetch_divisions().await {
            return;
        }
        let ticket = match self.state.try_update(|c| c.select_division(Some(branch))) {
            Some(Some(ticket)) => ticket,
            Some(None) => return self.missing("division", branch),
            None => return,
        };
        if !self.load_departments(ticket).await {
            return;
        }
        let ticket = match self.state.try_update(|c| c.select_department(Some(department))) {
            Some(Some(ticket)) => ticket,
            Some(None) => return self.missing("department", department),
            None => return,
        };
        if !self.load_sub_departments(ticket).await {
            return;
        }
        let ticket = match self
            .state
            .try_update(|c| c.select_sub_department(Some(sub_department)))
        {
            Some(Some(ticket)) => ticket,
            Some(None) => return self.missing("sub department", sub_department),
            None => return,
        };
        self.load_fields(ticket, sub_department).await;
    }

    pub fn reset(&self) {
        self.state.update(|c| c.reset());
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

#[component]
fn LevelSelect(
    id: String,
    label: &'static str,
    selector: Signal<SelectorState>,
    on_change: Callback<Option<i64>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let label_id = id.clone();
    view! {
        <div class="form__group">
            <label for=label_id>{label}{required.then_some(" *")}</label>
            <select
                id=id
                class="form__select"
                required=required
                disabled=move || !selector.with(|s| s.enabled)
                prop:value=move || selector.with(|s| s.selected.map(|v| v.to_string()).unwrap_or_default())
                on:change=move |ev| on_change.run(parse_id(&event_target_value(&ev)))
            >
                <option value="">
                    {move || selector.with(|s| if s.loading { "Loading..." } else { s.placeholder })}
                </option>
                {move || selector.with(|s| s.options.iter().map(|o| {
                    let selected = s.selected == Some(o.id);
                    view! {
                        <option value=o.id.to_string() selected=selected>{o.name.clone()}</option>
                    }
                }).collect_view())}
            </select>
        </div>
    }
}

/// The three cascade dropdowns. `id_prefix` keeps element ids unique when
/// several cascades live on one page.
#[component]
pub fn HierarchySelector(
    controller: CascadeController,
    #[prop(optional)] id_prefix: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let state = controller.state;
    let division = Signal::derive(move || state.with(|c| c.division.clone()));
    let department = Signal::derive(move || state.with(|c| c.department.clone()));
    let sub_department = Signal::derive(move || state.with(|c| c.sub_department.clone()));

    view! {
        <div class="hierarchy-select">
            <LevelSelect
                id=format!("{}division", id_prefix)
                label="Division/Branch"
                selector=division
                required=required
                on_change=Callback::new(move |id| controller.select_division(id))
            />
            <LevelSelect
                id=format!("{}department", id_prefix)
                label="Department"
                selector=department
                required=required
                on_change=Callback::new(move |id| controller.select_department(id))
            />
            <LevelSelect
                id=format!("{}sub-department", id_prefix)
                label="Sub Department"
                selector=sub_department
                required=required
                on_change=Callback::new(move |id| controller.select_sub_department(id))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(""), None);
    }
}
