use gloo_net::http::{Request, Response};
use yew::prelude::*;

use crate::config::{BACKEND_URL, SERVER_PAGE_SIZE};
use crate::models::{ErrorResponse, PaginationInfo, SearchQuery, SearchResponse, SearchResult};
use crate::results::dedupe_by_video_link;

/// Niches sampled for the "viral right now" strip on the dashboard.
const SUGGESTION_NICHES: &[&str] = &["Ranking Content", "Fitness", "Crypto", "Animals", "Travel"];
const SUGGESTION_COUNT: usize = 4;

/// Issue one paginated search and, on success, replace the whole held
/// result set, store the server's pagination verbatim, and reset the
/// local page. Used for both search submission (page 1) and server-side
/// page navigation.
pub async fn execute_search(
    query: SearchQuery,
    all_results: UseStateHandle<Vec<SearchResult>>,
    pagination: UseStateHandle<Option<PaginationInfo>>,
    local_page: UseStateHandle<usize>,
    error_message: UseStateHandle<Option<String>>,
    loading: UseStateHandle<bool>,
) {
    let url = format!(
        "{}/api/search/viral-videos?{}",
        &*BACKEND_URL,
        query.to_query_string()
    );

    match Request::get(&url).send().await {
        Ok(response) if response.ok() => match response.json::<SearchResponse>().await {
            Ok(payload) => {
                let (results, server_page) = payload.into_parts();
                all_results.set(results);
                pagination.set(server_page);
                local_page.set(1);
                error_message.set(None);
            }
            Err(e) => error_message.set(Some(format!("Failed to parse response: {e}"))),
        },
        Ok(response) => error_message.set(Some(read_error_body(response).await)),
        Err(e) => error_message.set(Some(format!("Network error: {e}"))),
    }

    loading.set(false);
}

/// Prefer the server-provided message over a generic fallback.
async fn read_error_body(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(ErrorResponse::into_message)
            .unwrap_or_else(|| format!("Search failed ({status}): {body}")),
        Err(_) => format!("Search failed with status: {status}"),
    }
}

/// Best-effort fetch for the suggestions strip: a fixed niche sample,
/// deduplicated by video link, first four kept. Failures only log and
/// leave the strip empty.
pub async fn fetch_suggestions(suggestions: UseStateHandle<Vec<SearchResult>>) {
    let query = SearchQuery {
        niches: SUGGESTION_NICHES.iter().map(|n| n.to_string()).collect(),
        video_published_days: 30,
        max_subs: 50_000,
        min_views: 10_000,
        max_channel_videos_total: 50,
        page: 1,
        page_size: SERVER_PAGE_SIZE,
    };
    let url = format!(
        "{}/api/search/viral-videos?{}",
        &*BACKEND_URL,
        query.to_query_string()
    );

    match Request::get(&url).send().await {
        Ok(response) if response.ok() => match response.json::<SearchResponse>().await {
            Ok(payload) => {
                let (results, _) = payload.into_parts();
                let unique: Vec<SearchResult> = dedupe_by_video_link(&results)
                    .into_iter()
                    .take(SUGGESTION_COUNT)
                    .collect();
                suggestions.set(unique);
            }
            Err(e) => log::warn!("Failed to parse suggestions: {e}"),
        },
        Ok(response) => log::warn!("Suggestions fetch failed: HTTP {}", response.status()),
        Err(e) => log::warn!("Suggestions fetch failed: {e}"),
    }
}
