use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::api;
use crate::auth::utils::store_auth;
use crate::router::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error_message = use_state(Option::<String>::default);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error_message = error_message.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = (*email).clone();
            let password = (*password).clone();
            let error_message = error_message.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();

            loading.set(true);
            error_message.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match api::login(&email, &password).await {
                    Ok(auth) => {
                        store_auth(&auth.token, &auth.user);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(e) => error_message.set(Some(e)),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 p-4">
            <div class="bg-gray-800 p-8 rounded-lg shadow-lg w-full max-w-md">
                <h1 class="text-2xl font-bold text-yellow-500 mb-6 text-center">{"Login"}</h1>
                {
                    if let Some(msg) = &*error_message {
                        html! { <p class="text-red-400 text-center mb-4">{ msg.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
                <form onsubmit={on_submit} class="space-y-4">
                    <input
                        type="email"
                        class="w-full p-3 rounded bg-gray-700 text-white border border-gray-600 focus:border-yellow-500 focus:outline-none"
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={on_email_input}
                        disabled={*loading}
                    />
                    <input
                        type="password"
                        class="w-full p-3 rounded bg-gray-700 text-white border border-gray-600 focus:border-yellow-500 focus:outline-none"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        disabled={*loading}
                    />
                    <button
                        type="submit"
                        class="w-full bg-yellow-500 hover:bg-yellow-600 text-black font-semibold p-3 rounded disabled:opacity-50"
                        disabled={*loading}
                    >
                        { if *loading { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
                <p class="text-gray-400 text-center mt-4">
                    {"No account yet? "}
                    <Link<Route> to={Route::Register} classes="text-yellow-500 hover:underline">
                        {"Register"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error_message = use_state(Option::<String>::default);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error_message = error_message.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if name.is_empty() || email.is_empty() || password.is_empty() {
                error_message.set(Some("All fields are required".to_string()));
                return;
            }
            let name = (*name).clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let error_message = error_message.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();

            loading.set(true);
            error_message.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match api::register(&name, &email, &password).await {
                    Ok(auth) => {
                        store_auth(&auth.token, &auth.user);
                        if let Some(navigator) = navigator {
                            // new accounts start unsubscribed
                            navigator.push(&Route::Subscription);
                        }
                    }
                    Err(e) => error_message.set(Some(e)),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 p-4">
            <div class="bg-gray-800 p-8 rounded-lg shadow-lg w-full max-w-md">
                <h1 class="text-2xl font-bold text-yellow-500 mb-6 text-center">{"Create account"}</h1>
                {
                    if let Some(msg) = &*error_message {
                        html! { <p class="text-red-400 text-center mb-4">{ msg.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
                <form onsubmit={on_submit} class="space-y-4">
                    <input
                        type="text"
                        class="w-full p-3 rounded bg-gray-700 text-white border border-gray-600 focus:border-yellow-500 focus:outline-none"
                        placeholder="Name"
                        value={(*name).clone()}
                        oninput={on_name_input}
                        disabled={*loading}
                    />
                    <input
                        type="email"
                        class="w-full p-3 rounded bg-gray-700 text-white border border-gray-600 focus:border-yellow-500 focus:outline-none"
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={on_email_input}
                        disabled={*loading}
                    />
                    <input
                        type="password"
                        class="w-full p-3 rounded bg-gray-700 text-white border border-gray-600 focus:border-yellow-500 focus:outline-none"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        disabled={*loading}
                    />
                    <button
                        type="submit"
                        class="w-full bg-yellow-500 hover:bg-yellow-600 text-black font-semibold p-3 rounded disabled:opacity-50"
                        disabled={*loading}
                    >
                        { if *loading { "Creating..." } else { "Register" } }
                    </button>
                </form>
                <p class="text-gray-400 text-center mt-4">
                    {"Already registered? "}
                    <Link<Route> to={Route::Login} classes="text-yellow-500 hover:underline">
                        {"Login"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
