//! Poster image references and URL resolution.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ModelError, Result};

/// Path of an image on the catalog's image CDN (e.g. `/kqjL17yufvn9OVLyXYpvtyrFfak.jpg`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImagePath(String);

impl ImagePath {
    /// Normalizes the path to a single leading slash. Blank input has no
    /// image behind it and yields `None`.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim().trim_start_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        Some(ImagePath(format!("/{trimmed}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Poster widths offered by the catalog CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosterSize {
    W92,
    W154,
    W185,
    W342,
    #[default]
    W500,
    W780,
    Original,
}

impl PosterSize {
    pub const ALL: [PosterSize; 7] = [
        Self::W92,
        Self::W154,
        Self::W185,
        Self::W342,
        Self::W500,
        Self::W780,
        Self::Original,
    ];

    /// Path segment used by the CDN for this size.
    pub fn as_str(self) -> &'static str {
        match self {
            PosterSize::W92 => "w92",
            PosterSize::W154 => "w154",
            PosterSize::W185 => "w185",
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }

    /// Pixel width, `None` for the original upload.
    pub fn width(self) -> Option<u32> {
        match self {
            PosterSize::W92 => Some(92),
            PosterSize::W154 => Some(154),
            PosterSize::W185 => Some(185),
            PosterSize::W342 => Some(342),
            PosterSize::W500 => Some(500),
            PosterSize::W780 => Some(780),
            PosterSize::Original => None,
        }
    }

    /// Smallest size at least `card_width` pixels wide.
    pub fn for_card_width(card_width: f32) -> Self {
        Self::ALL
            .into_iter()
            .find(|size| size.width().is_none_or(|w| w as f32 >= card_width))
            .unwrap_or(PosterSize::Original)
    }
}

/// What a card should display as its poster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "src", rename_all = "snake_case")]
pub enum PosterSource {
    Remote(Url),
    /// The item has no image; the host shows its bundled placeholder.
    Fallback(String),
}

impl PosterSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, PosterSource::Fallback(_))
    }
}

/// Resolves image paths against the catalog CDN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBase {
    base: Url,
    fallback: String,
}

impl ImageBase {
    pub fn new(base: &str, fallback: impl Into<String>) -> Result<Self> {
        let mut base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(ModelError::CannotBeABase(base.to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            fallback: fallback.into(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Poster for an optional image path. Missing paths, and paths the URL
    /// parser rejects, degrade to the fallback reference.
    pub fn poster(&self, path: Option<&ImagePath>, size: PosterSize) -> PosterSource {
        let Some(path) = path else {
            return PosterSource::Fallback(self.fallback.clone());
        };
        let relative = format!("{}{}", size.as_str(), path.as_str());
        match self.base.join(&relative) {
            Ok(url) => PosterSource::Remote(url),
            Err(err) => {
                tracing::warn!(path = path.as_str(), %err, "unresolvable poster path");
                PosterSource::Fallback(self.fallback.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_paths_are_normalized() {
        assert_eq!(ImagePath::new("abc.jpg").unwrap().as_str(), "/abc.jpg");
        assert_eq!(ImagePath::new("//abc.jpg").unwrap().as_str(), "/abc.jpg");
        assert!(ImagePath::new("   ").is_none());
        assert!(ImagePath::new("").is_none());
    }

    #[test]
    fn poster_urls_join_size_and_path() {
        let base =
            ImageBase::new("https://image.tmdb.org/t/p", "placeholder.svg")
                .unwrap();
        let path = ImagePath::new("/poster.jpg");
        let source = base.poster(path.as_ref(), PosterSize::W342);
        assert_eq!(
            source,
            PosterSource::Remote(
                Url::parse("https://image.tmdb.org/t/p/w342/poster.jpg").unwrap()
            )
        );
    }

    #[test]
    fn missing_image_falls_back() {
        let base =
            ImageBase::new("https://image.tmdb.org/t/p/", "placeholder.svg")
                .unwrap();
        let source = base.poster(None, PosterSize::W500);
        assert_eq!(source, PosterSource::Fallback("placeholder.svg".into()));
        assert!(source.is_fallback());
    }

    #[test]
    fn rejects_non_hierarchical_base() {
        assert!(matches!(
            ImageBase::new("mailto:posters@example.com", "x"),
            Err(ModelError::CannotBeABase(_))
        ));
        assert!(matches!(
            ImageBase::new("not a url", "x"),
            Err(ModelError::InvalidUrl(_))
        ));
    }

    #[test]
    fn poster_size_covers_card_width() {
        assert_eq!(PosterSize::for_card_width(250.0), PosterSize::W342);
        assert_eq!(PosterSize::for_card_width(300.0), PosterSize::W342);
        assert_eq!(PosterSize::for_card_width(92.0), PosterSize::W92);
        assert_eq!(PosterSize::for_card_width(2000.0), PosterSize::Original);
    }
}
