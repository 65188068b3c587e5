//! Carousel constants
//!
//! Compiled-in defaults for layout, gestures, paging, and poster images.
//! [`Settings`](crate::settings::Settings) falls back to these for every
//! field a settings file leaves out, so tuning here updates all carousels.

/// Viewport width thresholds (px) for responsive classification.
pub mod breakpoints {
    /// Narrowest tablet viewport; anything below is mobile.
    pub const TABLET_MIN_WIDTH: f32 = 768.0;
    /// Narrowest desktop viewport.
    pub const DESKTOP_MIN_WIDTH: f32 = 1024.0;
}

/// Card dimensions per breakpoint.
pub mod layout {
    pub const MOBILE_CARD_WIDTH: f32 = 250.0;
    pub const MOBILE_GAP: f32 = 20.0;
    /// Tablets share the desktop card size; only page dots differ on mobile.
    pub const TABLET_CARD_WIDTH: f32 = 300.0;
    pub const TABLET_GAP: f32 = 20.0;
    pub const DESKTOP_CARD_WIDTH: f32 = 300.0;
    pub const DESKTOP_GAP: f32 = 20.0;
    /// Items materialized on each side of the visible window.
    pub const RENDER_BUFFER_ITEMS: usize = 1;
}

/// Pointer and touch gesture tuning.
pub mod gesture {
    /// Scroll pixels per pointer pixel while dragging.
    pub const POINTER_DRAG_MULTIPLIER: f32 = 2.0;
    /// Horizontal travel (px) after which a touch stops the page from
    /// scrolling vertically.
    pub const TOUCH_HORIZONTAL_THRESHOLD: f32 = 10.0;
}

/// Programmatic page navigation and the page indicator.
pub mod paging {
    use crate::virtual_carousel::animator::Easing;

    /// Fraction of the container width moved by one page step.
    pub const PAGE_FRACTION: f32 = 0.8;
    /// Duration (ms) of the smooth page scroll.
    pub const PAGE_DURATION_MS: u64 = 400;
    pub const PAGE_EASING: Easing = Easing::EaseInOut;
    /// Items per indicator dot on mobile.
    pub const MOBILE_PAGE_SIZE: usize = 2;
    /// Items per indicator dot on tablet and desktop.
    pub const PAGE_SIZE: usize = 5;
}

/// Poster image CDN defaults.
pub mod images {
    pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";
    /// Reference the host resolves to its bundled "no poster" artwork.
    pub const FALLBACK_POSTER: &str = "assets/poster-placeholder.svg";
}
