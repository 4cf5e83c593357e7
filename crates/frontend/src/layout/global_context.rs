use std::collections::HashMap;

use leptos::prelude::*;
use web_sys::window;

use super::tabs::tab_labels::{tab_label_for_key, HOME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Tab to activate after `closed` is removed from `tabs`: the last remaining one.
fn next_active(tabs: &[Tab], closed: &str) -> Option<String> {
    tabs.iter()
        .rev()
        .find(|t| t.key != closed)
        .map(|t| t.key.clone())
}

/// Open screens and sidebar visibility. Screens are addressed by key (see
/// `tabs::tab_labels`); the active key is mirrored into `?active=` in the URL.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Open the tab named in `?active=` (or the home screen), then keep the
    /// URL in sync with the active tab.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        let initial = params
            .get("active")
            .cloned()
            .unwrap_or_else(|| HOME.to_string());
        self.open_tab(&initial, tab_label_for_key(&initial));

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query = serde_qs::to_string(&HashMap::from([("active", active_key)]))
                .unwrap_or_default();
            let new_url = format!("?{}", query);
            let current = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                if history
                    .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
                    .is_err()
                {
                    log::warn!("failed to update URL to {}", new_url);
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open tab {}", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close tab {}", key);
        let next = self.opened.with_untracked(|tabs| next_active(tabs, key));
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            self.active.set(next);
        }
    }

    /// Close everything, e.g. on sign-out.
    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(key: &str) -> Tab {
        Tab {
            key: key.into(),
            title: key.into(),
        }
    }

    #[test]
    fn test_next_active_is_last_remaining() {
        let tabs = vec![tab("home"), tab("department"), tab("users")];
        assert_eq!(next_active(&tabs, "users"), Some("department".into()));
        assert_eq!(next_active(&tabs, "home"), Some("users".into()));
        assert_eq!(next_active(&[tab("home")], "home"), None);
    }
}
