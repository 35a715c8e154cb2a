use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::utils::{get_stored_token, get_stored_user};
use crate::router::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🔍",
        title: "Advanced search",
        text: "Filter by views, engagement, subscriber count and more to find the perfect niches.",
    },
    Feature {
        icon: "🔥",
        title: "Viral potential",
        text: "A viral factor on every result shows how far a video reached beyond its channel's baseline.",
    },
    Feature {
        icon: "📊",
        title: "Fresh data",
        text: "Results come straight from the platforms, so you stay ahead of the trends.",
    },
];

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let navigator = use_navigator();
    let logged_in = get_stored_token().is_some();
    let subscribed = get_stored_user().map(|user| user.is_subscribed).unwrap_or(false);

    // Logged-in subscribers go straight to the dashboard; everyone else is
    // funneled to register or the subscription page.
    let on_subscribe_click = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let Some(navigator) = navigator.clone() else {
                return;
            };
            if !logged_in {
                navigator.push(&Route::Register);
            } else if subscribed {
                navigator.push(&Route::Home);
            } else {
                navigator.push(&Route::Subscription);
            }
        })
    };

    let on_login_click = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let Some(navigator) = navigator.clone() else {
                return;
            };
            if logged_in {
                navigator.push(&Route::Home);
            } else {
                navigator.push(&Route::Login);
            }
        })
    };

    let login_label = if logged_in { "Dashboard" } else { "Login" };
    let subscribe_label = if logged_in && subscribed {
        "Open dashboard"
    } else {
        "Subscribe now"
    };

    html! {
        <div class="min-h-screen bg-gray-900 text-white">
            <header class="py-4 px-6 bg-gray-800 border-b border-gray-700 flex justify-between items-center">
                <h1 class="text-2xl font-bold text-yellow-500">{"Niche"}</h1>
                <div>
                    <button
                        onclick={on_login_click.clone()}
                        class="border border-yellow-500 text-yellow-500 hover:bg-yellow-500 hover:text-black rounded px-4 py-2 mr-2"
                    >
                        { login_label }
                    </button>
                    <button
                        onclick={on_subscribe_click.clone()}
                        class="bg-yellow-500 hover:bg-yellow-600 text-black rounded px-4 py-2"
                    >
                        { subscribe_label }
                    </button>
                </div>
            </header>

            <section class="py-20 px-6 text-center">
                <h1 class="text-5xl font-bold mb-6 max-w-4xl mx-auto">
                    {"Discover "}<span class="text-yellow-500">{"viral niches"}</span>{" for your content"}
                </h1>
                <p class="text-xl text-gray-300 mb-10 max-w-3xl mx-auto">
                    {"Find the most viral short-form niches and create content that actually \
                      engages. We analyze millions of videos to surface trends and opportunities."}
                </p>
                <button
                    onclick={on_subscribe_click}
                    class="bg-yellow-500 hover:bg-yellow-600 text-black text-lg rounded px-8 py-4"
                >
                    {"Get started"}
                </button>
            </section>

            <section class="py-20 px-6 bg-gray-800">
                <div class="max-w-6xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-8">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="bg-gray-700 border border-gray-600 rounded-lg p-6">
                            <div class="text-yellow-500 text-4xl mb-4">{ feature.icon }</div>
                            <h3 class="text-xl font-bold mb-2">{ feature.title }</h3>
                            <p class="text-gray-300">{ feature.text }</p>
                        </div>
                    })}
                </div>
            </section>

            <footer class="py-8 px-6 bg-gray-800 border-t border-gray-700 text-center">
                <h2 class="text-2xl font-bold text-yellow-500 mb-2">{"Niche"}</h2>
                <p class="text-gray-400">{"The best place to find viral niches and grow your content"}</p>
            </footer>
        </div>
    }
}
