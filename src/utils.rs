use std::collections::HashMap;

use lazy_static::lazy_static;

/// Compact display for view/subscriber counts: millions and thousands get
/// one decimal, anything smaller stays literal.
pub fn format_large_number(number: i64) -> String {
    if number >= 1_000_000 {
        format!("{:.1}M", number as f64 / 1_000_000.0)
    } else if number >= 1_000 {
        format!("{:.1}K", number as f64 / 1_000.0)
    } else {
        number.to_string()
    }
}

/// Views divided by channel subscribers, rounded to a whole multiplier.
/// A channel without subscriber data has no meaningful factor.
pub fn calculate_viral_factor(views: i64, subscribers: i64) -> String {
    if subscribers <= 0 {
        return "N/A".to_string();
    }
    let factor = views as f64 / subscribers as f64;
    format!("{}x", factor.round() as i64)
}

pub fn format_published_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        iso_date.to_string()
    }
}

lazy_static! {
    /// Display decoration keyed by the canonical niche name the backend
    /// reports, not by substring matching.
    static ref NICHE_EMOJI: HashMap<&'static str, &'static str> = HashMap::from([
        ("Crypto", "💰"),
        ("Gaming", "🎮"),
        ("Food & Drink", "🍔"),
        ("Travel", "✈️"),
        ("Finance", "💵"),
        ("Fitness", "💪"),
        ("Animals", "🐾"),
        ("History", "📜"),
        ("Geography", "🗺️"),
        ("Quiz", "❓"),
        ("Basketball", "🏀"),
        ("Horror Stories", "👻"),
        ("Reddit Stories", "📖"),
        ("Storytelling", "🎙️"),
        ("Lifestyle", "🌿"),
    ]);
}

const DEFAULT_NICHE_EMOJI: &str = "😊";

pub fn niche_emoji(niche: &str) -> &'static str {
    NICHE_EMOJI.get(niche).copied().unwrap_or(DEFAULT_NICHE_EMOJI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_large_numbers() {
        assert_eq!(format_large_number(999), "999");
        assert_eq!(format_large_number(1500), "1.5K");
        assert_eq!(format_large_number(2_500_000), "2.5M");
        assert_eq!(format_large_number(1_000), "1.0K");
        assert_eq!(format_large_number(0), "0");
    }

    #[test]
    fn viral_factor_rounds_and_handles_zero_subscribers() {
        assert_eq!(calculate_viral_factor(120_000, 1000), "120x");
        assert_eq!(calculate_viral_factor(500, 0), "N/A");
        assert_eq!(calculate_viral_factor(1500, 1000), "2x");
    }

    #[test]
    fn formats_published_date_and_passes_through_garbage() {
        assert_eq!(format_published_date("2025-08-01T12:34:56Z"), "2025-08-01");
        assert_eq!(format_published_date("yesterday"), "yesterday");
    }

    #[test]
    fn niche_emoji_is_a_table_lookup() {
        assert_eq!(niche_emoji("Crypto"), "💰");
        assert_eq!(niche_emoji("Gaming"), "🎮");
        // no substring matching: unknown labels fall back even when they
        // contain a known word
        assert_eq!(niche_emoji("Crypto News"), DEFAULT_NICHE_EMOJI);
    }
}
