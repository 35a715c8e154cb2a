//! The main dashboard: search form, result pipeline wiring, saved-channel
//! view, export, and both pagination levels.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::api as auth_api;
use crate::auth::utils::{clear_auth, get_stored_token, get_stored_user};
use crate::billing;
use crate::config::SERVER_PAGE_SIZE;
use crate::export::download_csv;
use crate::models::{PaginationInfo, SearchQuery, SearchResult};
use crate::results::{apply_view, toggle_channel, toggle_link, LocalPage};
use crate::router::Route;
use crate::search::api::{execute_search, fetch_suggestions};
use crate::search::components::{
    FilterSelect, LocalPaginationBar, NichePicker, ResultsGrid, ServerPaginationBar,
    SuggestionsStrip,
};
use crate::search::search_options::{
    platform_options, sort_key_from_key, sort_key_key, PlatformFilter, SortKey,
};
use crate::storage::{LocalStorageStore, SavedChannelStore};

pub const AVAILABLE_NICHES: &[&str] = &[
    "Motivational",
    "Politics",
    "Basketball",
    "Finance",
    "History",
    "Quiz",
    "Animals",
    "TV Shows",
    "Educational",
    "Geography",
    "Horror Stories",
    "Fitness",
    "Ranking Content",
    "Reddit Stories",
    "Crypto",
    "Travel",
    "Storytelling",
    "Gaming",
    "Lifestyle",
    "Food & Drink",
];

const PUBLISHED_DAYS_OPTIONS: &[(&str, &str)] = &[
    ("7", "Last 7 days"),
    ("30", "Last 30 days"),
    ("90", "Last 90 days"),
    ("180", "Last 180 days"),
    ("365", "Last 365 days"),
];

const MAX_SUBS_OPTIONS: &[(&str, &str)] = &[
    ("1000", "Up to 1K subs"),
    ("5000", "Up to 5K subs"),
    ("10000", "Up to 10K subs"),
    ("25000", "Up to 25K subs"),
    ("50000", "Up to 50K subs"),
    ("100000", "Up to 100K subs"),
];

const MIN_VIEWS_OPTIONS: &[(&str, &str)] = &[
    ("1000", "1K+ views"),
    ("5000", "5K+ views"),
    ("10000", "10K+ views"),
    ("25000", "25K+ views"),
    ("50000", "50K+ views"),
    ("100000", "100K+ views"),
];

const MAX_CHANNEL_VIDEOS_OPTIONS: &[(&str, &str)] = &[
    ("10", "Up to 10 videos"),
    ("20", "Up to 20 videos"),
    ("30", "Up to 30 videos"),
    ("50", "Up to 50 videos"),
    ("100", "Up to 100 videos"),
    ("999999", "No limit"),
];

fn select_options(options: &[(&str, &str)]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|(value, display)| (value.to_string(), display.to_string()))
        .collect()
}

/// `?subscribed=true` arrives on the post-checkout redirect.
fn subscribed_query_param() -> bool {
    let Some(href) = web_sys::window().and_then(|w| w.location().href().ok()) else {
        return false;
    };
    let Ok(url) = web_sys::Url::new(&href) else {
        return false;
    };
    url.search_params().get("subscribed").as_deref() == Some("true")
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let navigator = use_navigator();

    // search form
    let selected_niches = use_state(Vec::<String>::default);
    let video_published_days = use_state(|| "30".to_string());
    let max_subs = use_state(|| "10000".to_string());
    let min_views = use_state(|| "50000".to_string());
    let max_channel_videos_total = use_state(|| "50".to_string());

    // result set and server paging, replaced wholesale on each fetch
    let all_results = use_state(Vec::<SearchResult>::default);
    let pagination = use_state(Option::<PaginationInfo>::default);
    let last_query = use_state(Option::<SearchQuery>::default);
    let loading = use_state(|| false);
    let error_message = use_state(Option::<String>::default);

    // client-side view state
    let platform_filter = use_state(|| PlatformFilter::All);
    let sort_by = use_state(|| SortKey::ViewsDesc);
    let local_page = use_state(|| 1usize);
    let show_saved = use_state(|| false);

    // favorites and entitlement
    let favorited = use_state(Vec::<String>::default);
    let saved_channels = use_state(Vec::<SearchResult>::default);
    let is_subscribed = use_state(|| false);
    let checking_subscription = use_state(|| true);

    let suggestions = use_state(Vec::<SearchResult>::default);
    let init_done = use_state(|| false);

    {
        let navigator = navigator.clone();
        let saved_channels = saved_channels.clone();
        let favorited = favorited.clone();
        let is_subscribed = is_subscribed.clone();
        let checking_subscription = checking_subscription.clone();
        let suggestions = suggestions.clone();
        let init_done = init_done.clone();

        use_effect(move || {
            if !*init_done {
                init_done.set(true);

                match get_stored_token() {
                    // route guard: the dashboard is for logged-in users
                    None => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Some(token) => {
                        // saved channels survive independently of any result set
                        let stored = LocalStorageStore.load();
                        favorited.set(stored.iter().map(|c| c.video_link.clone()).collect());
                        saved_channels.set(stored);

                        if subscribed_query_param() {
                            is_subscribed.set(true);
                            checking_subscription.set(false);
                        } else if let Some(user) = get_stored_user() {
                            is_subscribed.set(user.is_subscribed);
                            checking_subscription.set(false);
                        } else {
                            let is_subscribed = is_subscribed.clone();
                            let checking_subscription = checking_subscription.clone();
                            wasm_bindgen_futures::spawn_local(async move {
                                match auth_api::check_subscription(&token).await {
                                    Ok(status) => is_subscribed.set(status.is_subscribed),
                                    Err(e) => {
                                        log::warn!("Subscription check failed: {e}");
                                        is_subscribed.set(false);
                                    }
                                }
                                checking_subscription.set(false);
                            });
                        }

                        wasm_bindgen_futures::spawn_local(async move {
                            fetch_suggestions(suggestions).await;
                        });
                    }
                }
            }
            || ()
        });
    }

    // The derived view pipeline: saved set or held results, filtered and
    // sorted without mutating either, then sliced into local pages.
    let source: Vec<SearchResult> = if *show_saved {
        (*saved_channels).clone()
    } else {
        (*all_results).clone()
    };
    let visible = apply_view(&source, &platform_filter, *sort_by);
    let cursor = LocalPage::at(*local_page);
    let total_local_pages = cursor.total_pages(visible.len());
    let page_items: Vec<SearchResult> = cursor.slice(&visible).to_vec();

    let on_niche_toggle = {
        let selected_niches = selected_niches.clone();
        let local_page = local_page.clone();
        Callback::from(move |niche: String| {
            let mut next = (*selected_niches).clone();
            if let Some(index) = next.iter().position(|n| *n == niche) {
                next.remove(index);
            } else {
                next.push(niche);
            }
            selected_niches.set(next);
            local_page.set(1);
        })
    };

    let on_search = {
        let selected_niches = selected_niches.clone();
        let video_published_days = video_published_days.clone();
        let max_subs = max_subs.clone();
        let min_views = min_views.clone();
        let max_channel_videos_total = max_channel_videos_total.clone();
        let all_results = all_results.clone();
        let pagination = pagination.clone();
        let last_query = last_query.clone();
        let local_page = local_page.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        let is_subscribed = is_subscribed.clone();
        let checking_subscription = checking_subscription.clone();
        let show_saved = show_saved.clone();

        Callback::from(move |_| {
            // entitlement and validation fail fast, no network call
            if !*is_subscribed && !*checking_subscription {
                error_message.set(Some(
                    "Niche search is for subscribers only. Subscribe to unlock it.".to_string(),
                ));
                return;
            }
            if selected_niches.is_empty() {
                error_message.set(Some("Select at least one niche to search.".to_string()));
                return;
            }

            let query = SearchQuery {
                niches: (*selected_niches).clone(),
                video_published_days: video_published_days.parse().unwrap_or(30),
                max_subs: max_subs.parse().unwrap_or(10_000),
                min_views: min_views.parse().unwrap_or(50_000),
                max_channel_videos_total: max_channel_videos_total.parse().unwrap_or(50),
                page: 1,
                page_size: SERVER_PAGE_SIZE,
            };
            last_query.set(Some(query.clone()));

            loading.set(true);
            error_message.set(None);
            all_results.set(Vec::new());
            local_page.set(1);
            show_saved.set(false);

            let all_results = all_results.clone();
            let pagination = pagination.clone();
            let local_page = local_page.clone();
            let error_message = error_message.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                execute_search(
                    query,
                    all_results,
                    pagination,
                    local_page,
                    error_message,
                    loading,
                )
                .await;
            });
        })
    };

    // Server page navigation reuses the last-submitted filters; the
    // disabled-while-loading buttons are the only overlap guard.
    let on_server_page = {
        let pagination = pagination.clone();
        let last_query = last_query.clone();
        let all_results = all_results.clone();
        let local_page = local_page.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        Callback::from(move |page: u32| {
            if *loading {
                return;
            }
            let Some(server_page) = *pagination else {
                return;
            };
            if !server_page.can_load(page) {
                return;
            }
            let Some(query) = (*last_query).clone() else {
                return;
            };

            loading.set(true);
            error_message.set(None);

            let all_results = all_results.clone();
            let pagination = pagination.clone();
            let local_page = local_page.clone();
            let error_message = error_message.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                execute_search(
                    query.with_page(page),
                    all_results,
                    pagination,
                    local_page,
                    error_message,
                    loading,
                )
                .await;
            });
        })
    };

    let on_platform_change = {
        let platform_filter = platform_filter.clone();
        let local_page = local_page.clone();
        Callback::from(move |key: String| {
            platform_filter.set(PlatformFilter::from_key(&key));
            local_page.set(1);
        })
    };

    let on_sort_change = {
        let sort_by = sort_by.clone();
        let local_page = local_page.clone();
        Callback::from(move |key: String| {
            if let Some(sort) = sort_key_from_key(&key) {
                sort_by.set(sort);
                local_page.set(1);
            }
        })
    };

    let on_toggle_saved_view = {
        let show_saved = show_saved.clone();
        let local_page = local_page.clone();
        Callback::from(move |_| {
            show_saved.set(!*show_saved);
            local_page.set(1);
        })
    };

    let on_local_page = {
        let local_page = local_page.clone();
        let visible_len = visible.len();
        Callback::from(move |page: usize| {
            let next = LocalPage::at(*local_page).jump(page, visible_len);
            if next.page != *local_page {
                local_page.set(next.page);
            }
        })
    };

    let on_favorite = {
        let favorited = favorited.clone();
        let saved_channels = saved_channels.clone();
        Callback::from(move |result: SearchResult| {
            favorited.set(toggle_link(&favorited, &result.video_link));
            let next = toggle_channel(&saved_channels, &result);
            LocalStorageStore.save(&next);
            saved_channels.set(next);
        })
    };

    let on_export = {
        let visible = visible.clone();
        let selected_niches = selected_niches.clone();
        Callback::from(move |_| {
            if visible.is_empty() {
                return;
            }
            download_csv(&visible, &selected_niches);
        })
    };

    let on_checkout = {
        let error_message = error_message.clone();
        Callback::from(move |_| {
            let error_message = error_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                billing::start_checkout(error_message).await;
            });
        })
    };

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            clear_auth();
            if let Some(navigator) = navigator.clone() {
                navigator.push(&Route::Landing);
            }
        })
    };

    let user_name = get_stored_user().map(|user| user.name).unwrap_or_default();
    let search_blocked =
        *loading || selected_niches.is_empty() || (!*is_subscribed && !*checking_subscription);
    let platform_select_options: Vec<(String, String)> = platform_options()
        .into_iter()
        .map(|filter| (filter.key(), filter.display_name()))
        .collect();
    let sort_select_options: Vec<(String, String)> = SortKey::all_variants()
        .into_iter()
        .map(|sort| (sort_key_key(&sort).to_string(), sort.display_name().to_string()))
        .collect();

    html! {
        <div class="min-h-screen bg-gray-900 text-white p-6 md:p-10">
            <div class="flex justify-between items-center mb-8">
                <div>
                    <h1 class="text-3xl font-bold text-yellow-500">{"NICHE"}</h1>
                    {
                        if !user_name.is_empty() {
                            html! { <p class="text-gray-400">{ format!("Welcome back, {user_name}") }</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="flex items-center gap-3">
                    <button
                        onclick={on_toggle_saved_view}
                        class={ if *show_saved {
                            "px-4 py-2 rounded-md bg-yellow-500 text-black font-semibold"
                        } else {
                            "px-4 py-2 rounded-md bg-gray-800 border border-gray-700 text-gray-300 hover:border-yellow-500"
                        }}
                    >
                        { format!("♥ Saved ({})", saved_channels.len()) }
                    </button>
                    <button
                        onclick={on_logout}
                        class="px-4 py-2 rounded-md bg-gray-800 border border-gray-700 text-gray-300 hover:border-yellow-500"
                    >
                        {"Logout"}
                    </button>
                </div>
            </div>

            <NichePicker
                available={AVAILABLE_NICHES.iter().map(|n| n.to_string()).collect::<Vec<_>>()}
                selected={(*selected_niches).clone()}
                on_toggle={on_niche_toggle}
            />

            {
                if !*is_subscribed && !*checking_subscription {
                    html! {
                        <div class="mb-8 bg-yellow-500 text-black rounded-lg p-6">
                            <h2 class="text-xl font-bold mb-1">{"Premium access"}</h2>
                            <p class="mb-4">{"Unlock niche search with a subscription."}</p>
                            <button
                                onclick={on_checkout}
                                class="bg-gray-900 text-yellow-500 font-semibold px-5 py-2 rounded hover:bg-gray-800"
                            >
                                {"Subscribe now"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="mb-8 bg-gray-800 border border-gray-700 rounded-lg p-6">
                <h2 class="text-2xl text-yellow-500 font-semibold mb-1">{"Find viral niches"}</h2>
                <p class="text-gray-400 mb-6">{"Search short-form videos that outperform their channel size."}</p>
                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6">
                    <FilterSelect
                        label="Published within"
                        value={(*video_published_days).clone()}
                        options={select_options(PUBLISHED_DAYS_OPTIONS)}
                        on_change={let state = video_published_days.clone(); Callback::from(move |v| state.set(v))}
                    />
                    <FilterSelect
                        label="Max channel subscribers"
                        value={(*max_subs).clone()}
                        options={select_options(MAX_SUBS_OPTIONS)}
                        on_change={let state = max_subs.clone(); Callback::from(move |v| state.set(v))}
                    />
                    <FilterSelect
                        label="Min video views"
                        value={(*min_views).clone()}
                        options={select_options(MIN_VIEWS_OPTIONS)}
                        on_change={let state = min_views.clone(); Callback::from(move |v| state.set(v))}
                    />
                    <FilterSelect
                        label="Max videos on channel"
                        value={(*max_channel_videos_total).clone()}
                        options={select_options(MAX_CHANNEL_VIDEOS_OPTIONS)}
                        on_change={let state = max_channel_videos_total.clone(); Callback::from(move |v| state.set(v))}
                    />
                </div>
                <div class="flex justify-end gap-4 pt-6">
                    <button
                        onclick={on_export}
                        disabled={visible.is_empty() || *loading}
                        class="border border-yellow-500 text-yellow-500 hover:bg-yellow-500 hover:text-black font-semibold rounded-md px-6 py-2.5 disabled:opacity-50"
                    >
                        {"Export CSV"}
                    </button>
                    <button
                        onclick={on_search}
                        disabled={search_blocked}
                        class="bg-yellow-500 text-black hover:bg-yellow-600 font-semibold rounded-md px-6 py-2.5 disabled:opacity-50"
                    >
                        { if *loading { "Searching..." } else { "Search niches" } }
                    </button>
                </div>
            </div>

            {
                if let Some(msg) = &*error_message {
                    let on_dismiss = {
                        let error_message = error_message.clone();
                        Callback::from(move |_| error_message.set(None))
                    };
                    html! {
                        <div class="mb-8 bg-red-900/30 border border-red-700 rounded-lg p-4 flex justify-between items-start">
                            <div>
                                <p class="text-red-400 font-semibold">{"Error"}</p>
                                <p>{ msg.clone() }</p>
                            </div>
                            <button onclick={on_dismiss} class="text-red-400 hover:text-red-200 px-2">
                                {"✕"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if *loading {
                    html! { <p class="text-center text-gray-400 py-10 text-lg">{"Loading results..."}</p> }
                } else {
                    html! {}
                }
            }

            {
                if !*show_saved && all_results.is_empty() && !*loading {
                    html! { <SuggestionsStrip suggestions={(*suggestions).clone()} /> }
                } else {
                    html! {}
                }
            }

            {
                if !*loading && !source.is_empty() {
                    html! {
                        <div class="mt-2">
                            <div class="flex flex-col sm:flex-row justify-between items-center mb-6 gap-4">
                                <h2 class="text-2xl font-semibold text-yellow-500">
                                    { if *show_saved {
                                        format!("Saved channels ({})", visible.len())
                                    } else {
                                        format!("Results ({})", visible.len())
                                    }}
                                </h2>
                                <div class="flex items-end gap-4">
                                    <FilterSelect
                                        label="Platform"
                                        value={platform_filter.key()}
                                        options={platform_select_options}
                                        on_change={on_platform_change}
                                    />
                                    <FilterSelect
                                        label="Sort by"
                                        value={sort_key_key(&sort_by)}
                                        options={sort_select_options}
                                        on_change={on_sort_change}
                                    />
                                </div>
                            </div>

                            <ResultsGrid
                                results={page_items}
                                favorited={(*favorited).clone()}
                                on_favorite={on_favorite}
                            />

                            <LocalPaginationBar
                                page={*local_page}
                                total_pages={total_local_pages}
                                on_page={on_local_page}
                            />

                            {
                                match (*pagination, *show_saved) {
                                    (Some(server_page), false) if server_page.is_multi_page() => html! {
                                        <ServerPaginationBar
                                            pagination={server_page}
                                            loading={*loading}
                                            on_page={on_server_page}
                                        />
                                    },
                                    _ => html! {},
                                }
                            }
                        </div>
                    }
                } else if !*loading && *show_saved {
                    html! { <p class="text-center mt-10 text-gray-400 text-lg">{"No saved channels yet."}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
