use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Event;
use yew::prelude::*;

use crate::models::{PaginationInfo, SearchResult};
use crate::utils::{
    calculate_viral_factor, format_large_number, format_published_date, niche_emoji,
};

// Helper to read "value" from any event target without HtmlSelectElement.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

#[derive(Properties, PartialEq)]
pub struct NichePickerProps {
    pub available: Vec<String>,
    pub selected: Vec<String>,
    pub on_toggle: Callback<String>,
}

/// Clickable niche chips; selection toggles membership in the query.
#[function_component(NichePicker)]
pub fn niche_picker(props: &NichePickerProps) -> Html {
    html! {
        <div class="flex flex-wrap gap-3 mb-8">
            { for props.available.iter().map(|niche| {
                let selected = props.selected.contains(niche);
                let on_toggle = props.on_toggle.clone();
                let name = niche.clone();
                let onclick = Callback::from(move |_| on_toggle.emit(name.clone()));
                let class = if selected {
                    "flex items-center gap-2 px-4 py-2 rounded-full border text-sm font-medium bg-pink-600 text-white border-pink-600"
                } else {
                    "flex items-center gap-2 px-4 py-2 rounded-full border text-sm font-medium bg-gray-800 text-gray-300 border-gray-600 hover:border-pink-500 hover:text-pink-500"
                };
                html! {
                    <button {onclick} {class}>
                        <span>{ niche_emoji(niche) }</span>
                        <span>{ niche.clone() }</span>
                    </button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterSelectProps {
    pub label: AttrValue,
    pub value: AttrValue,
    /// (option value, display name) pairs.
    pub options: Vec<(String, String)>,
    pub on_change: Callback<String>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(FilterSelect)]
pub fn filter_select(props: &FilterSelectProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                on_change.emit(value);
            }
        })
    };

    html! {
        <label class="flex flex-col text-sm text-gray-400 gap-1">
            { props.label.clone() }
            <select
                class="bg-gray-900 border border-gray-600 text-white rounded-md p-2 hover:border-yellow-500 disabled:opacity-70"
                value={props.value.clone()}
                onchange={on_change}
                disabled={props.disabled}
            >
                { for props.options.iter().map(|(value, display)| html! {
                    <option value={value.clone()} selected={value.as_str() == props.value.as_str()}>
                        { display.clone() }
                    </option>
                })}
            </select>
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct SuggestionsStripProps {
    pub suggestions: Vec<SearchResult>,
}

/// "Viral right now" teaser cards shown before the first search.
#[function_component(SuggestionsStrip)]
pub fn suggestions_strip(props: &SuggestionsStripProps) -> Html {
    if props.suggestions.is_empty() {
        return html! {};
    }
    html! {
        <section class="mb-10">
            <h2 class="text-2xl font-semibold text-yellow-500 mb-4">{"Viral right now"}</h2>
            <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-6">
                { for props.suggestions.iter().map(|result| html! {
                    <div class="bg-gray-800 border border-gray-700 hover:border-yellow-500 rounded-xl overflow-hidden shadow-md">
                        <a href={result.video_link.clone()} target="_blank" rel="noopener noreferrer">
                            {
                                if let Some(thumbnail) = &result.thumbnail_url {
                                    html! { <img src={thumbnail.clone()} alt={result.video_title.clone()} class="w-full aspect-video object-cover" /> }
                                } else {
                                    html! {}
                                }
                            }
                        </a>
                        <div class="p-3">
                            <h3 class="text-sm font-semibold line-clamp-2 text-white">{ result.video_title.clone() }</h3>
                            <p class="text-xs text-gray-400 mt-1">{ result.channel_name.clone() }</p>
                        </div>
                    </div>
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub result: SearchResult,
    pub favorited: bool,
    pub on_favorite: Callback<SearchResult>,
}

#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    let result = &props.result;

    // Favoriting must never follow the card's external link, even though
    // the heart sits on top of the clickable thumbnail.
    let on_heart = {
        let on_favorite = props.on_favorite.clone();
        let result = result.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_favorite.emit(result.clone());
        })
    };

    let heart_class = if props.favorited {
        "text-yellow-400"
    } else {
        "text-gray-300"
    };

    html! {
        <div class="flex flex-col bg-gray-800 border border-gray-700 hover:border-yellow-500 rounded-xl overflow-hidden shadow-lg">
            <div class="relative">
                {
                    if let Some(thumbnail) = &result.thumbnail_url {
                        html! {
                            <a href={result.video_link.clone()} target="_blank" rel="noopener noreferrer" class="block aspect-video">
                                <img
                                    src={thumbnail.clone()}
                                    alt={format!("Thumbnail for {}", result.video_title)}
                                    class="w-full h-full object-cover"
                                />
                            </a>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="absolute top-2 right-2 flex flex-col items-end space-y-1.5 z-10">
                    <div class="bg-orange-500/80 text-white text-xs font-semibold px-2 py-1 rounded-full shadow-md">
                        {"🔥 "}{ calculate_viral_factor(result.view_count, result.subscriber_count) }
                    </div>
                    {
                        if let Some(niche) = &result.niche {
                            html! {
                                <div class="bg-black/70 text-white text-xs font-medium px-2.5 py-1 rounded-full shadow-md">
                                    <span class="mr-1.5">{ niche_emoji(niche) }</span>
                                    <span>{ niche.clone() }</span>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <button
                    onclick={on_heart}
                    class="absolute top-3 left-3 bg-black/70 hover:bg-black/90 rounded-full h-9 w-9 flex items-center justify-center z-10"
                    title={ if props.favorited { "Remove from saved channels" } else { "Save channel" } }
                >
                    <span class={heart_class}>{ if props.favorited { "♥" } else { "♡" } }</span>
                </button>
            </div>
            <div class="p-4 flex-grow flex flex-col">
                <h3 class="font-semibold text-base leading-snug mb-1.5 text-white">
                    <a href={result.video_link.clone()} target="_blank" rel="noopener noreferrer"
                       title={result.video_title.clone()} class="hover:text-yellow-500 line-clamp-2">
                        { result.video_title.clone() }
                    </a>
                </h3>
                <p class="text-sm text-gray-400 mb-2">
                    <a href={result.channel_link.clone()} target="_blank" rel="noopener noreferrer" class="hover:text-yellow-500">
                        { result.channel_name.clone() }
                    </a>
                </p>
                <div class="text-xs text-gray-400 space-x-2 mb-3">
                    <span>{ format_published_date(&result.published_at) }</span>
                    {
                        if let Some(platform) = &result.platform {
                            html! { <span class="text-yellow-500 font-medium">{ platform.clone() }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <div class="p-4 pt-0 text-xs text-gray-400 grid grid-cols-3 gap-2 border-t border-gray-700 mt-auto">
                <div class="text-center py-2">
                    <p class="font-bold text-sm text-white">{ format_large_number(result.view_count) }</p>
                    <p>{"Views"}</p>
                </div>
                <div class="text-center py-2 border-x border-gray-700">
                    <p class="font-bold text-sm text-white">{ format_large_number(result.like_count.unwrap_or(0)) }</p>
                    <p>{"Likes"}</p>
                </div>
                <div class="text-center py-2">
                    <p class="font-bold text-sm text-white">{ format_large_number(result.subscriber_count) }</p>
                    <p>{"Subs"}</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsGridProps {
    pub results: Vec<SearchResult>,
    pub favorited: Vec<String>,
    pub on_favorite: Callback<SearchResult>,
}

#[function_component(ResultsGrid)]
pub fn results_grid(props: &ResultsGridProps) -> Html {
    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            { for props.results.iter().map(|result| {
                let favorited = props.favorited.contains(&result.video_link);
                html! {
                    <ResultCard
                        result={result.clone()}
                        {favorited}
                        on_favorite={props.on_favorite.clone()}
                    />
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LocalPaginationBarProps {
    pub page: usize,
    pub total_pages: usize,
    pub on_page: Callback<usize>,
}

/// Numbered pagination over the filtered view; hidden for a single page.
#[function_component(LocalPaginationBar)]
pub fn local_pagination_bar(props: &LocalPaginationBarProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }
    let page = props.page;
    let total = props.total_pages;

    html! {
        <div class="mt-10 flex justify-center items-center space-x-2">
            <button
                onclick={let on_page = props.on_page.clone(); move |_| on_page.emit(page.saturating_sub(1))}
                disabled={page == 1}
                class="bg-gray-800 border border-gray-700 text-yellow-500 hover:border-yellow-500 disabled:opacity-50 rounded-md w-9 h-9"
            >
                {"‹"}
            </button>
            { for (1..=total).map(|n| {
                let on_page = props.on_page.clone();
                let class = if n == page {
                    "bg-yellow-500 text-black font-semibold rounded-md w-9 h-9"
                } else {
                    "bg-gray-800 border border-gray-700 text-gray-300 hover:border-yellow-500 hover:text-yellow-500 rounded-md w-9 h-9"
                };
                html! {
                    <button onclick={move |_| on_page.emit(n)} {class}>{ n }</button>
                }
            })}
            <button
                onclick={let on_page = props.on_page.clone(); move |_| on_page.emit(page + 1)}
                disabled={page == total}
                class="bg-gray-800 border border-gray-700 text-yellow-500 hover:border-yellow-500 disabled:opacity-50 rounded-md w-9 h-9"
            >
                {"›"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServerPaginationBarProps {
    pub pagination: PaginationInfo,
    pub loading: bool,
    pub on_page: Callback<u32>,
}

/// Server-side page navigation, driven by the backend's reported paging
/// state. Rendered by the dashboard only when there is more than one page.
#[function_component(ServerPaginationBar)]
pub fn server_pagination_bar(props: &ServerPaginationBarProps) -> Html {
    let pagination = props.pagination;
    let previous = pagination.page.saturating_sub(1);
    let next = pagination.page + 1;

    html! {
        <div class="mt-6 flex justify-center items-center gap-4 text-sm text-gray-300">
            <button
                onclick={let on_page = props.on_page.clone(); move |_| on_page.emit(previous)}
                disabled={props.loading || !pagination.can_load(previous)}
                class="px-4 py-2 bg-gray-800 border border-gray-700 text-yellow-500 rounded hover:border-yellow-500 disabled:opacity-50"
            >
                {"Previous"}
            </button>
            <span>
                { format!(
                    "Server page {} of {} ({} results)",
                    pagination.page, pagination.total_pages, pagination.total_results
                )}
            </span>
            <button
                onclick={let on_page = props.on_page.clone(); move |_| on_page.emit(next)}
                disabled={props.loading || !pagination.can_load(next)}
                class="px-4 py-2 bg-gray-800 border border-gray-700 text-yellow-500 rounded hover:border-yellow-500 disabled:opacity-50"
            >
                {"Next"}
            </button>
        </div>
    }
}
