//! Runtime configuration read from the `window.ENV_CONFIG` object injected
//! by the hosting page, with development defaults.

use lazy_static::lazy_static;

lazy_static! {
    pub static ref BACKEND_URL: String =
        env_config("BACKEND_URL").unwrap_or_else(|| "http://localhost:5000".to_string());
    pub static ref APP_NAME: String =
        env_config("APP_NAME").unwrap_or_else(|| "Niche".to_string());
}

/// Default server page size for search submissions.
pub const SERVER_PAGE_SIZE: u32 = 100;

fn env_config(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let env = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;
    if env.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }
    let value = js_sys::Reflect::get(&env, &key.into()).ok()?;
    if value.is_undefined() {
        log::warn!("Environment variable '{}' is undefined", key);
        return None;
    }
    value.as_string()
}

pub fn is_debug_mode() -> bool {
    env_config("DEBUG_MODE")
        .as_deref()
        .map(|v| v == "true")
        .unwrap_or(false)
}
