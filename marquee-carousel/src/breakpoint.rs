//! Responsive breakpoint tracking
//!
//! Classifies the viewport width into [`Breakpoint`]s and coalesces resize
//! events to one classification per frame, the same policy the carousel
//! applies to scroll events.

use serde::Serialize;

use crate::frame::FrameCoalescer;
use crate::settings::Settings;

/// Discrete viewport-width class driving layout constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    /// Mobile below `tablet_min`, desktop at or above `desktop_min`.
    pub fn classify(width: f32, tablet_min: f32, desktop_min: f32) -> Self {
        if width < tablet_min {
            Breakpoint::Mobile
        } else if width < desktop_min {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    pub fn from_settings(width: f32, settings: &Settings) -> Self {
        Self::classify(
            width,
            settings.tablet_min_width(),
            settings.desktop_min_width(),
        )
    }

    pub fn is_mobile(self) -> bool {
        self == Breakpoint::Mobile
    }
}

/// A resize observation: the window width used for classification and the
/// width of the carousel's own scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSample {
    pub viewport_width: f32,
    pub container_width: f32,
}

/// Result of applying a coalesced resize at frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOutcome {
    pub sample: ResizeSample,
    pub breakpoint: Breakpoint,
    /// Whether the classification differs from the previous frame's.
    pub changed: bool,
}

#[derive(Debug, Clone)]
pub struct ResponsiveBreakpoint {
    tablet_min: f32,
    desktop_min: f32,
    current: Breakpoint,
    sample: ResizeSample,
    pending: FrameCoalescer<ResizeSample>,
}

impl ResponsiveBreakpoint {
    /// Classifies immediately, as a host does on mount.
    pub fn new(sample: ResizeSample, settings: &Settings) -> Self {
        let current = Breakpoint::from_settings(sample.viewport_width, settings);
        tracing::debug!(width = sample.viewport_width, ?current, "initial breakpoint");
        Self {
            tablet_min: settings.tablet_min_width(),
            desktop_min: settings.desktop_min_width(),
            current,
            sample,
            pending: FrameCoalescer::new(),
        }
    }

    pub fn current(&self) -> Breakpoint {
        self.current
    }

    pub fn sample(&self) -> ResizeSample {
        self.sample
    }

    /// Record a native resize event; returns `true` when a frame is needed.
    pub fn on_resize(&mut self, sample: ResizeSample) -> bool {
        self.pending.submit(sample)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }

    /// Apply the latest resize of this frame, if any.
    pub fn on_frame(&mut self) -> Option<ResizeOutcome> {
        let sample = self.pending.take()?;
        let breakpoint =
            Breakpoint::classify(sample.viewport_width, self.tablet_min, self.desktop_min);
        let changed = breakpoint != self.current;
        if changed {
            tracing::debug!(
                from = ?self.current,
                to = ?breakpoint,
                width = sample.viewport_width,
                "breakpoint changed"
            );
        }
        self.current = breakpoint;
        self.sample = sample;
        Some(ResizeOutcome {
            sample,
            breakpoint,
            changed,
        })
    }
}
