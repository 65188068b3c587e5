use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::ids::{ItemId, MediaKind};
use crate::image::ImagePath;

/// Highest rating the catalog reports.
pub const MAX_RATING: f32 = 10.0;

/// A browsable catalog entry.
///
/// Items are immutable once decoded; carousels borrow them from the list that
/// owns them. Every field except the identity and title is optional and the
/// UI degrades to placeholder visuals when one is missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    id: ItemId,
    kind: MediaKind,
    catalog_id: u64,
    title: String,
    rating: Option<f32>,
    image: Option<ImagePath>,
    date: Option<NaiveDate>,
}

impl Item {
    pub fn new(kind: MediaKind, catalog_id: u64, title: impl Into<String>) -> Self {
        Self {
            id: ItemId::from_catalog(kind, catalog_id),
            kind,
            catalog_id,
            title: title.into(),
            rating: None,
            image: None,
            date: None,
        }
    }

    /// Ratings outside `0..=10` are clamped; NaN is treated as unrated.
    pub fn with_rating(mut self, rating: Option<f32>) -> Self {
        self.rating = rating
            .filter(|r| !r.is_nan())
            .map(|r| r.clamp(0.0, MAX_RATING));
        self
    }

    pub fn with_image(mut self, image: Option<ImagePath>) -> Self {
        self.image = image;
        self
    }

    pub fn with_date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn catalog_id(&self) -> u64 {
        self.catalog_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rating(&self) -> Option<f32> {
        self.rating
    }

    pub fn image(&self) -> Option<&ImagePath> {
        self.image.as_ref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }
}
