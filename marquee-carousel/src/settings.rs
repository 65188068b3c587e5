//! Settings with optional overrides for carousel constants
//!
//! Every field is `None` by default and accessor methods fall back to the
//! compiled constants in [`crate::constants`]. A settings file only needs to
//! name the values it changes:
//!
//! ```toml
//! mobile_card_width = 220.0
//! page_easing = "ease_out"
//! ```

use std::path::Path;
use std::time::Duration;

use marquee_model::{ImageBase, PosterSize};
use serde::{Deserialize, Serialize};

use crate::constants::{breakpoints, gesture, images, layout, paging};
use crate::error::{Result, SettingsError};
use crate::virtual_carousel::animator::Easing;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    // ========== BREAKPOINTS ==========
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet_min_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop_min_width: Option<f32>,

    // ========== LAYOUT ==========
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_card_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet_card_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet_gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop_card_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop_gap: Option<f32>,
    /// Items materialized beyond each edge of the visible window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_buffer: Option<usize>,

    // ========== GESTURES ==========
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drag_multiplier: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub touch_threshold: Option<f32>,

    // ========== PAGING ==========
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_fraction: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_easing: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_page_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    // ========== IMAGES ==========
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
    /// Fixed poster size; derived from the card width when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_size: Option<PosterSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_poster: Option<String>,
}

impl Settings {
    /// Read, parse, and validate a TOML settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| {
            SettingsError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let settings = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded carousel settings");
        Ok(settings)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Every field populated with its effective value.
    pub fn effective(&self) -> Self {
        Self {
            tablet_min_width: Some(self.tablet_min_width()),
            desktop_min_width: Some(self.desktop_min_width()),
            mobile_card_width: Some(self.mobile_card_width()),
            mobile_gap: Some(self.mobile_gap()),
            tablet_card_width: Some(self.tablet_card_width()),
            tablet_gap: Some(self.tablet_gap()),
            desktop_card_width: Some(self.desktop_card_width()),
            desktop_gap: Some(self.desktop_gap()),
            render_buffer: Some(self.render_buffer()),
            drag_multiplier: Some(self.drag_multiplier()),
            touch_threshold: Some(self.touch_threshold()),
            page_fraction: Some(self.page_fraction()),
            page_duration_ms: Some(self.page_duration().as_millis() as u64),
            page_easing: Some(self.page_easing()),
            mobile_page_size: Some(self.mobile_page_size()),
            page_size: Some(self.page_size()),
            image_base_url: Some(self.image_base_url().to_string()),
            poster_size: self.poster_size,
            fallback_poster: Some(self.fallback_poster().to_string()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let tablet = self.tablet_min_width();
        let desktop = self.desktop_min_width();
        if !tablet.is_finite() || tablet <= 0.0 {
            return Err(SettingsError::invalid(
                "tablet_min_width",
                format!("must be a positive width, got {tablet}"),
            ));
        }
        if !desktop.is_finite() || desktop <= tablet {
            return Err(SettingsError::invalid(
                "desktop_min_width",
                format!("must exceed tablet_min_width ({tablet}), got {desktop}"),
            ));
        }

        for (field, width) in [
            ("mobile_card_width", self.mobile_card_width()),
            ("tablet_card_width", self.tablet_card_width()),
            ("desktop_card_width", self.desktop_card_width()),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(SettingsError::invalid(
                    field,
                    format!("must be a positive width, got {width}"),
                ));
            }
        }
        for (field, gap) in [
            ("mobile_gap", self.mobile_gap()),
            ("tablet_gap", self.tablet_gap()),
            ("desktop_gap", self.desktop_gap()),
            ("touch_threshold", self.touch_threshold()),
        ] {
            if !gap.is_finite() || gap < 0.0 {
                return Err(SettingsError::invalid(
                    field,
                    format!("must be zero or positive, got {gap}"),
                ));
            }
        }

        let multiplier = self.drag_multiplier();
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(SettingsError::invalid(
                "drag_multiplier",
                format!("must be a positive factor, got {multiplier}"),
            ));
        }
        let fraction = self.page_fraction();
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(SettingsError::invalid(
                "page_fraction",
                format!("must be in (0, 1], got {fraction}"),
            ));
        }
        if self.mobile_page_size() == 0 {
            return Err(SettingsError::invalid("mobile_page_size", "must be at least 1"));
        }
        if self.page_size() == 0 {
            return Err(SettingsError::invalid("page_size", "must be at least 1"));
        }

        self.image_base()?;
        Ok(())
    }

    pub fn tablet_min_width(&self) -> f32 {
        self.tablet_min_width
            .unwrap_or(breakpoints::TABLET_MIN_WIDTH)
    }

    pub fn desktop_min_width(&self) -> f32 {
        self.desktop_min_width
            .unwrap_or(breakpoints::DESKTOP_MIN_WIDTH)
    }

    pub fn mobile_card_width(&self) -> f32 {
        self.mobile_card_width.unwrap_or(layout::MOBILE_CARD_WIDTH)
    }

    pub fn mobile_gap(&self) -> f32 {
        self.mobile_gap.unwrap_or(layout::MOBILE_GAP)
    }

    pub fn tablet_card_width(&self) -> f32 {
        self.tablet_card_width.unwrap_or(layout::TABLET_CARD_WIDTH)
    }

    pub fn tablet_gap(&self) -> f32 {
        self.tablet_gap.unwrap_or(layout::TABLET_GAP)
    }

    pub fn desktop_card_width(&self) -> f32 {
        self.desktop_card_width
            .unwrap_or(layout::DESKTOP_CARD_WIDTH)
    }

    pub fn desktop_gap(&self) -> f32 {
        self.desktop_gap.unwrap_or(layout::DESKTOP_GAP)
    }

    pub fn render_buffer(&self) -> usize {
        self.render_buffer.unwrap_or(layout::RENDER_BUFFER_ITEMS)
    }

    pub fn drag_multiplier(&self) -> f32 {
        self.drag_multiplier
            .unwrap_or(gesture::POINTER_DRAG_MULTIPLIER)
    }

    pub fn touch_threshold(&self) -> f32 {
        self.touch_threshold
            .unwrap_or(gesture::TOUCH_HORIZONTAL_THRESHOLD)
    }

    pub fn page_fraction(&self) -> f32 {
        self.page_fraction.unwrap_or(paging::PAGE_FRACTION)
    }

    pub fn page_duration(&self) -> Duration {
        Duration::from_millis(self.page_duration_ms.unwrap_or(paging::PAGE_DURATION_MS))
    }

    pub fn page_easing(&self) -> Easing {
        self.page_easing.unwrap_or(paging::PAGE_EASING)
    }

    pub fn mobile_page_size(&self) -> usize {
        self.mobile_page_size.unwrap_or(paging::MOBILE_PAGE_SIZE)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(paging::PAGE_SIZE)
    }

    pub fn image_base_url(&self) -> &str {
        self.image_base_url
            .as_deref()
            .unwrap_or(images::IMAGE_BASE_URL)
    }

    pub fn fallback_poster(&self) -> &str {
        self.fallback_poster
            .as_deref()
            .unwrap_or(images::FALLBACK_POSTER)
    }

    pub fn image_base(&self) -> Result<ImageBase> {
        Ok(ImageBase::new(self.image_base_url(), self.fallback_poster())?)
    }

    /// Poster size to request for cards of the given width.
    pub fn poster_size_for(&self, card_width: f32) -> PosterSize {
        self.poster_size
            .unwrap_or_else(|| PosterSize::for_card_width(card_width))
    }
}
