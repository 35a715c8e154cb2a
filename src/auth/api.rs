use gloo_net::http::{Request, Response};

use crate::auth::models::{
    AuthResponse, LoginRequest, RegisterRequest, SubscriptionStatus,
};
use crate::config::BACKEND_URL;
use crate::models::ErrorResponse;

pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    let url = format!("{}/api/auth/login", &*BACKEND_URL);
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| format!("Request error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if response.ok() {
        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| format!("JSON parse error: {e}"))
    } else {
        Err(error_text(response, "Login failed").await)
    }
}

pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, String> {
    let url = format!("{}/api/auth/register", &*BACKEND_URL);
    let body = RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| format!("Request error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if response.ok() {
        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| format!("JSON parse error: {e}"))
    } else {
        Err(error_text(response, "Registration failed").await)
    }
}

pub async fn check_subscription(token: &str) -> Result<SubscriptionStatus, String> {
    let url = format!("{}/api/auth/check-subscription", &*BACKEND_URL);

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if response.ok() {
        response
            .json::<SubscriptionStatus>()
            .await
            .map_err(|e| format!("JSON parse error: {e}"))
    } else {
        Err(error_text(response, "Subscription check failed").await)
    }
}

async fn error_text(response: Response, fallback: &str) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(ErrorResponse::into_message)
            .unwrap_or_else(|| format!("{fallback}: HTTP {status}")),
        Err(_) => format!("{fallback}: HTTP {status}"),
    }
}
