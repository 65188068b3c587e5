//! Pointer-drag and touch gesture state

use serde::Serialize;

/// State of a pointer drag. Only meaningful while `active`; release and
/// leave reset it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DragState {
    pub active: bool,
    /// Pointer x at press time.
    pub anchor_x: f32,
    /// Scroll offset at press time.
    pub origin_scroll: f32,
}

impl DragState {
    pub fn begin(anchor_x: f32, origin_scroll: f32) -> Self {
        Self {
            active: true,
            anchor_x,
            origin_scroll,
        }
    }

    /// Scroll offset for the pointer at `x`: the origin minus the pointer
    /// travel scaled by `multiplier`. `None` while inactive.
    pub fn offset_for(&self, x: f32, multiplier: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        let walk = (x - self.anchor_x) * multiplier;
        Some(self.origin_scroll - walk)
    }

    pub fn end(&mut self) {
        *self = Self::default();
    }
}

/// What the host should do with the page's native vertical scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchDecision {
    /// Let the browser scroll the page normally.
    PassThrough,
    /// The gesture is horizontal; stop the page from scrolling vertically.
    SuppressVerticalScroll,
}

/// Tracks a touch gesture to decide when it is horizontal.
///
/// The carousel's offset is driven by the host's native touch scrolling,
/// which reports back through scroll events; this tracker never moves it.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    threshold: f32,
    start: Option<(f32, f32)>,
}

impl TouchTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Horizontal travel since touch start beyond the threshold suppresses
    /// vertical scrolling.
    pub fn touch_move(&mut self, x: f32, _y: f32) -> TouchDecision {
        match self.start {
            Some((start_x, _)) if (x - start_x).abs() > self.threshold => {
                TouchDecision::SuppressVerticalScroll
            }
            _ => TouchDecision::PassThrough,
        }
    }

    pub fn touch_end(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_walk_is_scaled_and_inverted() {
        let drag = DragState::begin(500.0, 320.0);
        assert_eq!(drag.offset_for(450.0, 2.0), Some(420.0));
        assert_eq!(drag.offset_for(560.0, 2.0), Some(200.0));
        assert_eq!(drag.offset_for(500.0, 2.0), Some(320.0));
    }

    #[test]
    fn inactive_drag_ignores_moves() {
        let mut drag = DragState::begin(10.0, 0.0);
        drag.end();
        assert!(!drag.active);
        assert_eq!(drag.offset_for(0.0, 2.0), None);
    }

    #[test]
    fn touch_threshold_is_exclusive() {
        let mut touch = TouchTracker::new(10.0);
        touch.touch_start(100.0, 100.0);
        assert_eq!(touch.touch_move(110.0, 100.0), TouchDecision::PassThrough);
        assert_eq!(
            touch.touch_move(89.0, 140.0),
            TouchDecision::SuppressVerticalScroll
        );
        assert_eq!(touch.touch_move(104.0, 300.0), TouchDecision::PassThrough);
        touch.touch_end();
        assert_eq!(touch.touch_move(300.0, 0.0), TouchDecision::PassThrough);
    }
}
