//! Shared types for the virtual carousel module

use std::ops::RangeInclusive;

use marquee_model::MediaKind;
use serde::{Deserialize, Serialize};

use crate::breakpoint::Breakpoint;
use crate::settings::Settings;

/// Unique key for identifying the carousels on a browse page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CarouselKey {
    Trending(MediaKind),
    Popular(MediaKind),
    TopRated(MediaKind),
    /// Discover-by-genre row (catalog genre id).
    Genre(MediaKind, u32),
    Custom(&'static str),
}

/// Direction of a programmatic page step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageDirection {
    Back,
    Forward,
}

impl PageDirection {
    pub fn sign(self) -> f32 {
        match self {
            PageDirection::Back => -1.0,
            PageDirection::Forward => 1.0,
        }
    }
}

/// Inclusive interval of item indices rendered at full fidelity.
///
/// `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    /// Cards (full or partial) a container of this width can show at once.
    pub fn capacity(container_width: f32, stride: f32) -> usize {
        let stride = stride.max(1.0);
        (container_width.max(0.0) / stride).ceil() as usize
    }

    /// Raw window for a scroll position:
    /// `start = floor(offset / stride)`, `end = start + capacity + 1`.
    ///
    /// Not clamped to any item count; see [`clamp_to`](Self::clamp_to).
    pub fn compute(scroll_offset: f32, container_width: f32, stride: f32) -> Self {
        let stride = stride.max(1.0);
        let start = (scroll_offset.max(0.0) / stride).floor() as usize;
        let end = start + Self::capacity(container_width, stride) + 1;
        Self { start, end }
    }

    /// Restrict to `[0, item_count - 1]`. An empty list has no range.
    pub fn clamp_to(self, item_count: usize) -> Option<Self> {
        let last = item_count.checked_sub(1)?;
        let end = self.end.min(last);
        let start = self.start.min(end);
        Some(Self { start, end })
    }

    /// Widen by `buffer` items on each side, saturating at zero.
    pub fn expand(self, buffer: usize) -> Self {
        Self {
            start: self.start.saturating_sub(buffer),
            end: self.end.saturating_add(buffer),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Number of indices covered (never zero).
    pub fn count(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Per-breakpoint card geometry and interaction factors for one carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    pub card_width: f32,
    pub gap: f32,
    pub drag_multiplier: f32,
    pub page_fraction: f32,
}

impl CarouselLayout {
    pub fn for_breakpoint(breakpoint: Breakpoint, settings: &Settings) -> Self {
        let (card_width, gap) = match breakpoint {
            Breakpoint::Mobile => (settings.mobile_card_width(), settings.mobile_gap()),
            Breakpoint::Tablet => (settings.tablet_card_width(), settings.tablet_gap()),
            Breakpoint::Desktop => (settings.desktop_card_width(), settings.desktop_gap()),
        };
        Self {
            card_width,
            gap,
            drag_multiplier: settings.drag_multiplier(),
            page_fraction: settings.page_fraction(),
        }
    }

    /// Distance between the starts of adjacent cards.
    #[inline]
    pub fn stride(&self) -> f32 {
        (self.card_width.max(0.0) + self.gap.max(0.0)).max(1.0)
    }
}
