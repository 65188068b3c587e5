//! Horizontal carousel core for the Marquee catalog browser.
//!
//! The crate turns raw host input (scroll offsets, pointer and touch
//! coordinates, viewport widths, frame callbacks) into the state a renderer
//! needs: the visible item window, which cards to materialize, page
//! indicator dots, and the responsive breakpoint. It performs no rendering
//! and no I/O beyond loading [`Settings`].
#![allow(missing_docs)]

pub mod breakpoint;
pub mod constants;
pub mod error;
pub mod frame;
pub mod settings;
pub mod virtual_carousel;

pub use breakpoint::{Breakpoint, ResizeOutcome, ResizeSample, ResponsiveBreakpoint};
pub use error::{Result, SettingsError};
pub use frame::FrameCoalescer;
pub use settings::Settings;
pub use virtual_carousel::{
    CardRenderer, CarouselKey, CarouselLayout, CarouselRegistry, CarouselSession,
    CarouselViewport, EventOutcome, HostEvent, PageDirection, PageIndicator, Snapshot,
    VisibleRange,
};
