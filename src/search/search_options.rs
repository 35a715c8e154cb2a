use serde::{Deserialize, Serialize};

/// Client-side sort applied to the currently held result slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    ViewsDesc,
    ViewsAsc,
    DateDesc,
    DateAsc,
}

impl SortKey {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::ViewsDesc => "Most viewed",
            SortKey::ViewsAsc => "Least viewed",
            SortKey::DateDesc => "Most recent",
            SortKey::DateAsc => "Least recent",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            SortKey::ViewsDesc,
            SortKey::ViewsAsc,
            SortKey::DateDesc,
            SortKey::DateAsc,
        ]
    }
}

// Keys used in <option value="..."> so we can reliably map back and forth.
pub fn sort_key_key(key: &SortKey) -> &'static str {
    match key {
        SortKey::ViewsDesc => "views_desc",
        SortKey::ViewsAsc => "views_asc",
        SortKey::DateDesc => "date_desc",
        SortKey::DateAsc => "date_asc",
    }
}

pub fn sort_key_from_key(key: &str) -> Option<SortKey> {
    match key {
        "views_desc" => Some(SortKey::ViewsDesc),
        "views_asc" => Some(SortKey::ViewsAsc),
        "date_desc" => Some(SortKey::DateDesc),
        "date_asc" => Some(SortKey::DateAsc),
        _ => None,
    }
}

/// Platform filter over the held slice. "all" bypasses, anything else is
/// an exact match against the result's reported platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformFilter {
    All,
    Only(String),
}

impl PlatformFilter {
    pub fn matches(&self, platform: Option<&str>) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Only(wanted) => platform == Some(wanted.as_str()),
        }
    }

    pub fn key(&self) -> String {
        match self {
            PlatformFilter::All => "all".to_string(),
            PlatformFilter::Only(platform) => platform.clone(),
        }
    }

    pub fn from_key(key: &str) -> Self {
        if key == "all" {
            PlatformFilter::All
        } else {
            PlatformFilter::Only(key.to_string())
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            PlatformFilter::All => "All platforms".to_string(),
            PlatformFilter::Only(platform) => platform.clone(),
        }
    }
}

/// The platforms the backend currently reports.
pub fn platform_options() -> Vec<PlatformFilter> {
    vec![
        PlatformFilter::All,
        PlatformFilter::Only("YouTube Shorts".to_string()),
        PlatformFilter::Only("TikTok".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys_round_trip_through_option_values() {
        for variant in SortKey::all_variants() {
            assert_eq!(sort_key_from_key(sort_key_key(&variant)), Some(variant));
        }
        assert_eq!(sort_key_from_key("relevance"), None);
    }

    #[test]
    fn platform_filter_round_trips_and_matches() {
        let all = PlatformFilter::from_key("all");
        assert_eq!(all, PlatformFilter::All);
        assert!(all.matches(Some("TikTok")));
        assert!(all.matches(None));

        let shorts = PlatformFilter::from_key("YouTube Shorts");
        assert_eq!(shorts.key(), "YouTube Shorts");
        assert!(shorts.matches(Some("YouTube Shorts")));
        assert!(!shorts.matches(Some("TikTok")));
        assert!(!shorts.matches(None));
    }
}
