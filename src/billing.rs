//! Subscription screen and the hosted-checkout handoff. The payment
//! provider itself stays behind the backend's checkout-session endpoint.

use gloo_net::http::Request;
use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::BACKEND_URL;
use crate::models::ErrorResponse;
use crate::router::Route;

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    #[serde(default, rename = "sessionId")]
    pub session_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

pub async fn create_checkout_session() -> Result<CheckoutSession, String> {
    let url = format!("{}/api/payment/create-checkout-session", &*BACKEND_URL);

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if response.ok() {
        response
            .json::<CheckoutSession>()
            .await
            .map_err(|e| format!("JSON parse error: {e}"))
    } else {
        let status = response.status();
        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorResponse>(&body).ok())
            .and_then(ErrorResponse::into_message)
            .unwrap_or_else(|| format!("Checkout failed: HTTP {status}"));
        Err(message)
    }
}

/// Create a session and send the window to the hosted checkout page.
/// Surfaces an inline error instead when no redirect URL comes back.
pub async fn start_checkout(error_message: UseStateHandle<Option<String>>) {
    match create_checkout_session().await {
        Ok(session) => match session.url {
            Some(url) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&url);
                }
            }
            None => {
                log::warn!(
                    "Checkout session {:?} came without a redirect URL",
                    session.session_id
                );
                error_message.set(Some(
                    "Checkout session did not include a redirect URL".to_string(),
                ));
            }
        },
        Err(e) => error_message.set(Some(e)),
    }
}

const PLAN_FEATURES: &[&str] = &[
    "Unlimited viral niche searches",
    "Advanced search filters",
    "Viral factor analysis",
    "Always up-to-date data",
    "Priority support",
];

#[function_component(SubscriptionPage)]
pub fn subscription_page() -> Html {
    let error_message = use_state(Option::<String>::default);
    let loading = use_state(|| false);

    let on_subscribe = {
        let error_message = error_message.clone();
        let loading = loading.clone();
        Callback::from(move |_| {
            let error_message = error_message.clone();
            let loading = loading.clone();
            loading.set(true);
            error_message.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                start_checkout(error_message).await;
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 text-white p-4">
            <div class="bg-gray-800 border border-yellow-500 rounded-lg p-8 w-full max-w-lg">
                <h1 class="text-2xl font-bold text-yellow-500 text-center mb-2">{"Niche Premium"}</h1>
                <p class="text-center text-4xl font-bold mb-1">
                    {"R$29,90"}<span class="text-xl text-gray-400">{"/month"}</span>
                </p>
                <p class="text-center text-gray-300 mb-6">{"Full access to every feature"}</p>
                <ul class="space-y-3 mb-8">
                    { for PLAN_FEATURES.iter().map(|feature| html! {
                        <li class="flex items-start">
                            <span class="text-green-500 mr-3">{"✔"}</span>
                            <span>{ *feature }</span>
                        </li>
                    })}
                </ul>
                {
                    if let Some(msg) = &*error_message {
                        html! { <p class="text-red-400 text-center mb-4">{ msg.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
                <button
                    onclick={on_subscribe}
                    class="w-full bg-yellow-500 hover:bg-yellow-600 text-black font-semibold p-3 rounded disabled:opacity-50"
                    disabled={*loading}
                >
                    { if *loading { "Redirecting..." } else { "Subscribe now" } }
                </button>
                <p class="text-center mt-4">
                    <Link<Route> to={Route::Home} classes="text-gray-400 hover:text-yellow-500">
                        {"Back to dashboard"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
