//! Permissive decoding of catalog list payloads.
//!
//! Trending and discover endpoints return a paged envelope whose `results`
//! mix movies, series, and sometimes people. Fields vary by media type
//! (`title` vs `name`, `release_date` vs `first_air_date`) and are often
//! null or empty. A record that cannot become an [`Item`] is skipped with a
//! warning rather than failing the whole list.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Result;
use crate::ids::MediaKind;
use crate::image::ImagePath;
use crate::item::Item;

/// Title used when a record carries none of the title fields.
pub const UNTITLED: &str = "Untitled";

/// One decoded page of catalog results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogListing {
    pub page: Option<u32>,
    pub total_pages: Option<u32>,
    pub total_results: Option<u64>,
    pub items: Vec<Item>,
    /// Records dropped because they were not browsable media or lacked an id.
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Page(CatalogPage),
    List(Vec<Value>),
}

#[derive(Debug, Deserialize)]
struct CatalogPage {
    #[serde(default)]
    page: Option<u32>,
    results: Vec<Value>,
    #[serde(default)]
    total_pages: Option<u32>,
    #[serde(default)]
    total_results: Option<u64>,
}

/// Every field is read leniently: a value of the wrong JSON type is treated
/// as absent so one bad field degrades the card instead of dropping it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogRecord {
    #[serde(deserialize_with = "lenient")]
    id: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    media_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    original_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    original_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    vote_average: Option<f32>,
    #[serde(deserialize_with = "lenient")]
    vote_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    poster_path: Option<String>,
    #[serde(deserialize_with = "lenient")]
    release_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    first_air_date: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

impl CatalogRecord {
    fn kind(&self, default_kind: MediaKind) -> Option<MediaKind> {
        match self.media_type.as_deref() {
            Some(raw) => MediaKind::from_catalog(raw),
            None => Some(default_kind),
        }
    }

    fn title(&self) -> String {
        [
            &self.title,
            &self.name,
            &self.original_title,
            &self.original_name,
        ]
        .into_iter()
        .flatten()
        .map(|t| t.trim())
        .find(|t| !t.is_empty())
        .unwrap_or(UNTITLED)
        .to_string()
    }

    fn rating(&self) -> Option<f32> {
        if self.vote_count == Some(0) {
            return None;
        }
        self.vote_average
    }

    fn date(&self) -> Option<NaiveDate> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
            .and_then(parse_date)
    }

    fn into_item(self, default_kind: MediaKind) -> Option<Item> {
        let kind = self.kind(default_kind)?;
        let id = self.id?;
        let image = self.poster_path.as_deref().and_then(ImagePath::new);
        Some(
            Item::new(kind, id, self.title())
                .with_rating(self.rating())
                .with_image(image)
                .with_date(self.date()),
        )
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Decode a catalog payload: either a paged envelope or a bare array of
/// records. `default_kind` applies to records without a `media_type`, which
/// is how the per-kind endpoints (`/movie/popular`, `/tv/top_rated`) reply.
pub fn decode_listing(json: &str, default_kind: MediaKind) -> Result<CatalogListing> {
    let payload: CatalogPayload = serde_json::from_str(json)?;
    let (page, total_pages, total_results, records) = match payload {
        CatalogPayload::Page(p) => (p.page, p.total_pages, p.total_results, p.results),
        CatalogPayload::List(records) => (None, None, None, records),
    };

    let mut listing = CatalogListing {
        page,
        total_pages,
        total_results,
        items: Vec::with_capacity(records.len()),
        skipped: 0,
    };

    for (position, raw) in records.into_iter().enumerate() {
        let record = match CatalogRecord::deserialize(raw) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(position, %err, "skipping malformed catalog record");
                listing.skipped += 1;
                continue;
            }
        };
        let media_type = record.media_type.clone();
        match record.into_item(default_kind) {
            Some(item) => listing.items.push(item),
            None => {
                tracing::debug!(
                    position,
                    media_type = media_type.as_deref().unwrap_or("-"),
                    "skipping non-browsable catalog record"
                );
                listing.skipped += 1;
            }
        }
    }

    Ok(listing)
}

/// Convenience wrapper returning only the items.
pub fn decode_items(json: &str, default_kind: MediaKind) -> Result<Vec<Item>> {
    decode_listing(json, default_kind).map(|listing| listing.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_falls_back_through_name_fields() {
        let record = CatalogRecord {
            name: Some("  ".into()),
            original_name: Some("Dark".into()),
            ..Default::default()
        };
        assert_eq!(record.title(), "Dark");
        assert_eq!(CatalogRecord::default().title(), UNTITLED);
    }

    #[test]
    fn unvoted_rating_is_absent() {
        let record = CatalogRecord {
            vote_average: Some(0.0),
            vote_count: Some(0),
            ..Default::default()
        };
        assert_eq!(record.rating(), None);
    }

    #[test]
    fn mistyped_fields_read_as_absent() {
        let record = CatalogRecord::deserialize(serde_json::json!({
            "id": 9,
            "title": 42,
            "name": "Severance",
            "vote_average": "8.4",
            "first_air_date": 20220218,
        }))
        .unwrap();
        assert_eq!(record.id, Some(9));
        assert_eq!(record.title(), "Severance");
        assert_eq!(record.rating(), None);
        assert_eq!(record.date(), None);
    }

    #[test]
    fn bad_dates_are_dropped() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2024"), None);
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
    }
}
