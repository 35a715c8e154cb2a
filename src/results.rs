//! Client-side half of the result lifecycle: deduplication, platform
//! filtering, sorting, and local pagination over the slice currently held
//! in memory. Everything here is pure so it can run without a browser.

use std::collections::HashSet;

use crate::models::SearchResult;
use crate::search::search_options::{PlatformFilter, SortKey};

pub const LOCAL_PAGE_SIZE: usize = 20;

/// Drop repeated entries keyed on `video_link`, keeping the first
/// occurrence and the source order.
pub fn dedupe_by_video_link(results: &[SearchResult]) -> Vec<SearchResult> {
    let mut seen = HashSet::new();
    results
        .iter()
        .filter(|result| seen.insert(result.video_link.clone()))
        .cloned()
        .collect()
}

/// Filter and sort the held slice without mutating it. The sort is stable,
/// so equal keys keep their relative source order.
pub fn apply_view(
    results: &[SearchResult],
    platform: &PlatformFilter,
    sort: SortKey,
) -> Vec<SearchResult> {
    let mut filtered: Vec<SearchResult> = results
        .iter()
        .filter(|result| platform.matches(result.platform.as_deref()))
        .cloned()
        .collect();

    match sort {
        SortKey::ViewsDesc => filtered.sort_by_key(|r| std::cmp::Reverse(r.view_count)),
        SortKey::ViewsAsc => filtered.sort_by_key(|r| r.view_count),
        SortKey::DateDesc => filtered.sort_by_key(|r| std::cmp::Reverse(published_timestamp(r))),
        SortKey::DateAsc => filtered.sort_by_key(published_timestamp),
    }
    filtered
}

/// Unparseable timestamps sink to the Unix epoch so they land at the
/// oldest end under either date ordering.
fn published_timestamp(result: &SearchResult) -> i64 {
    chrono::DateTime::parse_from_rfc3339(&result.published_at)
        .map(|datetime| datetime.timestamp())
        .unwrap_or(0)
}

/// Toggle membership of `link` in the visual favorited set.
pub fn toggle_link(links: &[String], link: &str) -> Vec<String> {
    if links.iter().any(|l| l == link) {
        links.iter().filter(|l| *l != link).cloned().collect()
    } else {
        let mut next = links.to_vec();
        next.push(link.to_string());
        next
    }
}

/// Toggle membership of `result` in the saved-channel set, keyed by
/// `video_link`. Stored entries are never mutated, only added or removed.
pub fn toggle_channel(channels: &[SearchResult], result: &SearchResult) -> Vec<SearchResult> {
    if channels.iter().any(|c| c.video_link == result.video_link) {
        channels
            .iter()
            .filter(|c| c.video_link != result.video_link)
            .cloned()
            .collect()
    } else {
        let mut next = channels.to_vec();
        next.push(result.clone());
        next
    }
}

/// Cursor over the filtered view, independent of the server's paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalPage {
    pub page: usize,
    pub page_size: usize,
}

impl Default for LocalPage {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: LOCAL_PAGE_SIZE,
        }
    }
}

impl LocalPage {
    pub fn at(page: usize) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size)
    }

    /// The slice of `items` visible on this page.
    pub fn slice<'a>(&self, items: &'a [SearchResult]) -> &'a [SearchResult] {
        let start = (self.page.saturating_sub(1)) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// Move to `page` if it is in range; out-of-range requests leave the
    /// cursor where it is.
    pub fn jump(&self, page: usize, item_count: usize) -> Self {
        if page >= 1 && page <= self.total_pages(item_count) {
            Self { page, ..*self }
        } else {
            *self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(link: &str, views: i64, published_at: &str) -> SearchResult {
        SearchResult {
            video_link: link.to_string(),
            video_title: format!("video {link}"),
            channel_name: "channel".to_string(),
            channel_link: "https://example.com/channel".to_string(),
            thumbnail_url: None,
            view_count: views,
            like_count: None,
            comment_count: None,
            subscriber_count: 1000,
            platform: Some("YouTube Shorts".to_string()),
            niche: Some("Gaming".to_string()),
            published_at: published_at.to_string(),
        }
    }

    #[test]
    fn dedupe_keeps_first_occurrence_and_order() {
        let results = vec![
            result("a", 1, "2025-08-01T00:00:00Z"),
            result("b", 2, "2025-08-02T00:00:00Z"),
            result("a", 3, "2025-08-03T00:00:00Z"),
            result("c", 4, "2025-08-04T00:00:00Z"),
            result("b", 5, "2025-08-05T00:00:00Z"),
            result("d", 6, "2025-08-06T00:00:00Z"),
            result("e", 7, "2025-08-07T00:00:00Z"),
        ];
        let unique = dedupe_by_video_link(&results);
        let links: Vec<&str> = unique.iter().map(|r| r.video_link.as_str()).collect();
        assert_eq!(links, vec!["a", "b", "c", "d", "e"]);
        // first occurrence wins
        assert_eq!(unique[0].view_count, 1);

        let suggestions: Vec<SearchResult> = unique.into_iter().take(4).collect();
        assert_eq!(suggestions.len(), 4);
    }

    #[test]
    fn views_sorts_reverse_each_other() {
        let results = vec![
            result("a", 500, "2025-08-01T00:00:00Z"),
            result("b", 9000, "2025-08-02T00:00:00Z"),
            result("c", 70, "2025-08-03T00:00:00Z"),
            result("d", 3200, "2025-08-04T00:00:00Z"),
        ];
        let desc = apply_view(&results, &PlatformFilter::All, SortKey::ViewsDesc);
        let asc = apply_view(&results, &PlatformFilter::All, SortKey::ViewsAsc);
        let desc_views: Vec<i64> = desc.iter().map(|r| r.view_count).collect();
        let mut reversed_asc: Vec<i64> = asc.iter().map(|r| r.view_count).collect();
        reversed_asc.reverse();
        assert_eq!(desc_views, vec![9000, 3200, 500, 70]);
        assert_eq!(desc_views, reversed_asc);
    }

    #[test]
    fn date_desc_is_strictly_descending() {
        let results = vec![
            result("a", 1, "2025-03-10T08:00:00Z"),
            result("b", 2, "2025-08-20T23:59:00Z"),
            result("c", 3, "2024-12-31T00:00:00Z"),
            result("d", 4, "2025-06-01T12:30:00Z"),
        ];
        let sorted = apply_view(&results, &PlatformFilter::All, SortKey::DateDesc);
        for pair in sorted.windows(2) {
            let earlier = chrono::DateTime::parse_from_rfc3339(&pair[1].published_at).unwrap();
            let later = chrono::DateTime::parse_from_rfc3339(&pair[0].published_at).unwrap();
            assert!(later > earlier);
        }
    }

    #[test]
    fn unparseable_dates_sort_oldest() {
        let results = vec![
            result("a", 1, "not-a-date"),
            result("b", 2, "2025-08-20T00:00:00Z"),
        ];
        let sorted = apply_view(&results, &PlatformFilter::All, SortKey::DateDesc);
        assert_eq!(sorted[0].video_link, "b");
        assert_eq!(sorted[1].video_link, "a");
    }

    #[test]
    fn platform_filter_is_exact_match_and_all_bypasses() {
        let mut results = vec![
            result("a", 1, "2025-08-01T00:00:00Z"),
            result("b", 2, "2025-08-02T00:00:00Z"),
        ];
        results[1].platform = Some("TikTok".to_string());

        let shorts = apply_view(
            &results,
            &PlatformFilter::Only("YouTube Shorts".to_string()),
            SortKey::ViewsDesc,
        );
        assert_eq!(shorts.len(), 1);
        assert_eq!(shorts[0].video_link, "a");

        let all = apply_view(&results, &PlatformFilter::All, SortKey::ViewsDesc);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn view_does_not_mutate_source() {
        let results = vec![
            result("a", 10, "2025-08-01T00:00:00Z"),
            result("b", 90, "2025-08-02T00:00:00Z"),
        ];
        let before = results.clone();
        let _ = apply_view(&results, &PlatformFilter::All, SortKey::ViewsDesc);
        assert_eq!(results, before);
    }

    #[test]
    fn local_pagination_slices_45_items_into_three_pages() {
        let results: Vec<SearchResult> = (0..45)
            .map(|i| result(&format!("v{i}"), i, "2025-08-01T00:00:00Z"))
            .collect();
        let cursor = LocalPage::default();
        assert_eq!(cursor.total_pages(results.len()), 3);
        assert_eq!(cursor.slice(&results).len(), 20);
        assert_eq!(LocalPage::at(3).slice(&results).len(), 5);

        // out-of-range jumps leave the cursor unchanged
        assert_eq!(cursor.jump(0, results.len()), cursor);
        assert_eq!(cursor.jump(4, results.len()), cursor);
        assert_eq!(cursor.jump(2, results.len()).page, 2);
    }

    #[test]
    fn favorite_toggle_round_trips() {
        let target = result("x", 100, "2025-08-01T00:00:00Z");
        let links = vec!["other".to_string()];
        let channels = vec![result("other", 5, "2025-07-01T00:00:00Z")];

        let links_after = toggle_link(&links, &target.video_link);
        let channels_after = toggle_channel(&channels, &target);
        assert!(links_after.contains(&target.video_link));
        assert_eq!(channels_after.len(), 2);

        let links_back = toggle_link(&links_after, &target.video_link);
        let channels_back = toggle_channel(&channels_after, &target);
        assert_eq!(links_back, links);
        assert_eq!(channels_back, channels);
    }
}
