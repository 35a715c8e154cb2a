use web_sys::window;

use crate::auth::models::UserProfile;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

pub fn get_stored_token() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok()).flatten()
}

/// The profile stored at login. A parse failure is treated like a logged
/// out user rather than an error.
pub fn get_stored_user() -> Option<UserProfile> {
    let raw = local_storage().and_then(|storage| storage.get_item(USER_KEY).ok()).flatten()?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Discarding malformed stored user profile: {e}");
            None
        }
    }
}

pub fn store_auth(token: &str, user: &UserProfile) {
    let Some(storage) = local_storage() else {
        return;
    };
    if storage.set_item(TOKEN_KEY, token).is_err() {
        log::error!("Failed to store auth token");
    }
    match serde_json::to_string(user) {
        Ok(serialized) => {
            if storage.set_item(USER_KEY, &serialized).is_err() {
                log::error!("Failed to store user profile");
            }
        }
        Err(e) => log::error!("Failed to serialize user profile: {e}"),
    }
}

pub fn clear_auth() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
