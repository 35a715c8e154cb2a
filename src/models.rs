use serde::{Deserialize, Serialize};

/// One discovered short-form video, as reported by the search backend.
/// `video_link` is the identity key across result sets and the saved set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub video_link: String,
    #[serde(default)]
    pub video_title: String,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default)]
    pub channel_link: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub like_count: Option<i64>,
    #[serde(default)]
    pub comment_count: Option<i64>,
    #[serde(default)]
    pub subscriber_count: i64,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub niche: Option<String>,
    #[serde(default)]
    pub published_at: String,
}

/// Server-reported paging state, stored verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_results: u64,
}

impl PaginationInfo {
    /// A server page load is only meaningful for an in-range page that
    /// differs from the one currently held.
    pub fn can_load(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages && page != self.page
    }

    pub fn is_multi_page(&self) -> bool {
        self.total_pages > 1
    }
}

/// The search endpoint answers with either the current paginated envelope
/// or (from older deployments) a bare array of results.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Paged {
        results: Vec<SearchResult>,
        pagination: PaginationInfo,
    },
    Legacy(Vec<SearchResult>),
}

impl SearchResponse {
    pub fn into_parts(self) -> (Vec<SearchResult>, Option<PaginationInfo>) {
        match self {
            SearchResponse::Paged {
                results,
                pagination,
            } => (results, Some(pagination)),
            SearchResponse::Legacy(results) => (results, None),
        }
    }
}

/// User-selected filter parameters for one search submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub niches: Vec<String>,
    pub video_published_days: u32,
    pub max_subs: i64,
    pub min_views: i64,
    pub max_channel_videos_total: i64,
    pub page: u32,
    pub page_size: u32,
}

impl SearchQuery {
    pub fn with_page(&self, page: u32) -> Self {
        let mut query = self.clone();
        query.page = page;
        query
    }

    pub fn to_query_string(&self) -> String {
        format!(
            "niches={}&video_published_days={}&max_subs={}&min_views={}&max_channel_videos_total={}&page={}&page_size={}",
            urlencoding::encode(&self.niches.join(",")),
            self.video_published_days,
            self.max_subs,
            self.min_views,
            self.max_channel_videos_total,
            self.page,
            self.page_size,
        )
    }
}

/// Error bodies from the backend come in two flavours: the search routes
/// use `{"error": ...}`, the auth routes `{"message": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULT_JSON: &str = r#"{
        "videoLink": "https://www.youtube.com/shorts/abc123",
        "videoTitle": "Tiny channel, huge short",
        "channelName": "SmallCreator",
        "channelLink": "https://www.youtube.com/channel/UC123",
        "thumbnailUrl": "https://i.ytimg.com/vi/abc123/hq.jpg",
        "viewCount": 120000,
        "likeCount": 8000,
        "commentCount": 240,
        "subscriberCount": 1000,
        "platform": "YouTube Shorts",
        "niche": "Gaming",
        "publishedAt": "2025-08-01T12:00:00Z"
    }"#;

    #[test]
    fn parses_camel_case_result() {
        let result: SearchResult = serde_json::from_str(RESULT_JSON).unwrap();
        assert_eq!(result.video_link, "https://www.youtube.com/shorts/abc123");
        assert_eq!(result.view_count, 120_000);
        assert_eq!(result.subscriber_count, 1000);
        assert_eq!(result.platform.as_deref(), Some("YouTube Shorts"));
    }

    #[test]
    fn parses_paged_envelope() {
        let body = format!(
            r#"{{"results": [{RESULT_JSON}], "pagination": {{"page": 1, "page_size": 100, "total_pages": 1, "total_results": 12}}}}"#
        );
        let response: SearchResponse = serde_json::from_str(&body).unwrap();
        let (results, pagination) = response.into_parts();
        assert_eq!(results.len(), 1);
        let pagination = pagination.unwrap();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.total_results, 12);
        assert!(!pagination.is_multi_page());
    }

    #[test]
    fn parses_legacy_bare_array() {
        let body = format!("[{RESULT_JSON}, {RESULT_JSON}]");
        let response: SearchResponse = serde_json::from_str(&body).unwrap();
        let (results, pagination) = response.into_parts();
        assert_eq!(results.len(), 2);
        assert!(pagination.is_none());
    }

    #[test]
    fn can_load_rejects_out_of_range_and_current_page() {
        let pagination = PaginationInfo {
            page: 2,
            page_size: 100,
            total_pages: 3,
            total_results: 250,
        };
        assert!(pagination.can_load(1));
        assert!(pagination.can_load(3));
        assert!(!pagination.can_load(0));
        assert!(!pagination.can_load(2));
        assert!(!pagination.can_load(4));
    }

    #[test]
    fn query_string_joins_and_encodes_niches() {
        let query = SearchQuery {
            niches: vec!["Gaming".to_string(), "Food & Drink".to_string()],
            video_published_days: 30,
            max_subs: 10_000,
            min_views: 50_000,
            max_channel_videos_total: 50,
            page: 1,
            page_size: 100,
        };
        let qs = query.to_query_string();
        assert!(qs.starts_with("niches=Gaming%2CFood%20%26%20Drink&"));
        assert!(qs.contains("video_published_days=30"));
        assert!(qs.contains("page=1&page_size=100"));
    }

    #[test]
    fn error_body_prefers_error_over_message() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"error": "quota exceeded", "message": "nope"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("quota exceeded"));
        let body: ErrorResponse = serde_json::from_str(r#"{"message": "Invalid token!"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Invalid token!"));
    }
}
