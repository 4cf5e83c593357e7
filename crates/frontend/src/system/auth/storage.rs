use contracts::system::users::User;
use web_sys::window;

use crate::shared::config::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn set(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage rejected {}", key);
        }
    }
}

fn get(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn save_access_token(token: &str) {
    set(ACCESS_TOKEN_KEY, token);
}

pub fn get_access_token() -> Option<String> {
    get(ACCESS_TOKEN_KEY)
}

pub fn save_refresh_token(token: &str) {
    set(REFRESH_TOKEN_KEY, token);
}

pub fn get_refresh_token() -> Option<String> {
    get(REFRESH_TOKEN_KEY)
}

/// The signed-in user, kept so a reload can restore the header and menus.
pub fn save_user(user: &User) {
    match serde_json::to_string(user) {
        Ok(json) => set(USER_KEY, &json),
        Err(e) => log::warn!("Failed to store user: {}", e),
    }
}

pub fn get_user() -> Option<User> {
    serde_json::from_str(&get(USER_KEY)?).ok()
}

/// Forget tokens and the stored user.
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY] {
            let _ = storage.remove_item(key);
        }
    }
}
