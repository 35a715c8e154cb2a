//! CSV export of the currently visible (filtered + sorted) view, delivered
//! through a client-side blob download.

use wasm_bindgen::JsCast;

use crate::models::SearchResult;

const CSV_HEADER: &[&str] = &[
    "channelName",
    "channelLink",
    "subscriberCount",
    "videoTitle",
    "videoLink",
    "viewCount",
    "likeCount",
    "commentCount",
    "publishedAt",
    "platform",
    "niche",
    "thumbnailUrl",
];

/// Serialize the view to CSV with a header row. Fields are quoted only
/// when they contain a delimiter, quote, or newline.
pub fn build_csv(results: &[SearchResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for result in results {
        let fields = [
            csv_field(&result.channel_name),
            csv_field(&result.channel_link),
            result.subscriber_count.to_string(),
            csv_field(&result.video_title),
            csv_field(&result.video_link),
            result.view_count.to_string(),
            result.like_count.map(|n| n.to_string()).unwrap_or_default(),
            result
                .comment_count
                .map(|n| n.to_string())
                .unwrap_or_default(),
            csv_field(&result.published_at),
            csv_field(result.platform.as_deref().unwrap_or("")),
            csv_field(result.niche.as_deref().unwrap_or("")),
            csv_field(result.thumbnail_url.as_deref().unwrap_or("")),
        ];
        lines.push(fields.join(","));
    }
    let mut csv = lines.join("\r\n");
    csv.push_str("\r\n");
    csv
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Filename embedding the selected niches and the export date.
pub fn export_filename(niches: &[String], date: chrono::NaiveDate) -> String {
    format!(
        "nich_results_{}_{}.csv",
        niches.join("_"),
        date.format("%Y-%m-%d")
    )
}

/// Build and download the CSV for the visible view. A no-op when the view
/// is empty.
pub fn download_csv(results: &[SearchResult], niches: &[String]) {
    if results.is_empty() {
        return;
    }
    let csv = build_csv(results);
    let filename = export_filename(niches, chrono::Utc::now().date_naive());
    if let Err(e) = trigger_download(&filename, &csv) {
        log::error!("CSV download failed: {e:?}");
    }
}

fn trigger_download(filename: &str, content: &str) -> Result<(), wasm_bindgen::JsValue> {
    let parts = js_sys::Array::of1(&content.into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let anchor: web_sys::HtmlAnchorElement =
        document.create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);
    if let Some(body) = document.body() {
        body.append_child(&anchor)?;
        anchor.click();
        body.remove_child(&anchor)?;
    }
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SearchResult {
        SearchResult {
            video_link: "https://www.youtube.com/shorts/abc".to_string(),
            video_title: "Why cats, actually, \"rule\"".to_string(),
            channel_name: "CatFacts".to_string(),
            channel_link: "https://www.youtube.com/channel/UC1".to_string(),
            thumbnail_url: Some("https://i.ytimg.com/vi/abc/hq.jpg".to_string()),
            view_count: 120_000,
            like_count: Some(8000),
            comment_count: None,
            subscriber_count: 1000,
            platform: Some("YouTube Shorts".to_string()),
            niche: Some("Animals".to_string()),
            published_at: "2025-08-01T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn header_row_comes_first() {
        let csv = build_csv(&[sample()]);
        let first = csv.lines().next().unwrap();
        assert!(first.starts_with("channelName,channelLink,subscriberCount"));
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn quotes_fields_with_delimiters_and_embedded_quotes() {
        let csv = build_csv(&[sample()]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"Why cats, actually, \"\"rule\"\"\""));
        // missing optional counts serialize as empty fields
        assert!(row.contains(",8000,,2025-08-01T12:00:00Z,"));
    }

    #[test]
    fn empty_view_still_produces_only_a_header() {
        let csv = build_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn filename_embeds_niches_and_date() {
        let niches = vec!["Gaming".to_string(), "Crypto".to_string()];
        let date = chrono::NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();
        assert_eq!(
            export_filename(&niches, date),
            "nich_results_Gaming_Crypto_2025-08-30.csv"
        );
    }
}
