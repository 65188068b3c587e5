//! CarouselViewport: viewport-aware horizontal windowing state

use super::gesture::DragState;
use super::types::{CarouselLayout, PageDirection, VisibleRange};

/// Scroll offsets closer than this are treated as equal.
const SCROLL_EPSILON: f32 = 1e-3;

/// Scroll position, drag state, and visible window of one carousel.
///
/// The viewport is the only writer of the scroll offset. Moving the offset
/// ([`scroll_to`](Self::scroll_to), drags) and recomputing the window
/// ([`recompute`](Self::recompute)) are separate steps so hosts can coalesce
/// recomputation to once per frame.
#[derive(Debug, Clone)]
pub struct CarouselViewport {
    // Content
    total_items: usize,

    // Viewport + layout
    container_width: f32,
    layout: CarouselLayout,

    // Windowing
    window: VisibleRange,
    /// Incremented on every window recomputation.
    generation: u64,

    // Scrolling
    scroll_x: f32,
    max_scroll: f32,

    // Gestures
    drag: DragState,
}

impl CarouselViewport {
    pub fn new(total_items: usize, container_width: f32, layout: CarouselLayout) -> Self {
        let mut viewport = Self {
            total_items,
            container_width: container_width.max(0.0),
            layout,
            window: VisibleRange { start: 0, end: 0 },
            generation: 0,
            scroll_x: 0.0,
            max_scroll: 0.0,
            drag: DragState::default(),
        };
        viewport.recompute_metrics();
        viewport
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_x
    }

    pub fn max_scroll(&self) -> f32 {
        self.max_scroll
    }

    /// Unclamped window from the last recomputation. May extend past the
    /// end of the list; index it through [`visible_range`](Self::visible_range)
    /// or bounds-check.
    pub fn window(&self) -> VisibleRange {
        self.window
    }

    /// The window clamped to the item list; `None` when the list is empty.
    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.window.clamp_to(self.total_items)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    #[inline]
    pub fn stride(&self) -> f32 {
        self.layout.stride()
    }

    /// Width of all cards and the gaps between them.
    #[inline]
    pub fn content_width(&self) -> f32 {
        if self.total_items == 0 {
            return 0.0;
        }
        let w = self.layout.card_width.max(0.0);
        let s = self.layout.gap.max(0.0);
        self.total_items as f32 * w + (self.total_items - 1) as f32 * s
    }

    /// Move the scroll offset without recomputing the window. Returns
    /// whether the offset changed. Non-finite offsets are ignored.
    pub fn scroll_to(&mut self, x: f32) -> bool {
        if !x.is_finite() {
            return false;
        }
        let clamped = x.clamp(0.0, self.max_scroll);
        let changed = (clamped - self.scroll_x).abs() > SCROLL_EPSILON;
        self.scroll_x = clamped;
        changed
    }

    /// Move the offset and recompute the window immediately.
    pub fn set_scroll_offset(&mut self, x: f32) {
        self.scroll_to(x);
        self.recompute();
    }

    /// Recompute the window from the current offset and container width.
    pub fn recompute(&mut self) {
        self.window = VisibleRange::compute(self.scroll_x, self.container_width, self.stride());
        self.generation += 1;
        tracing::trace!(
            start = self.window.start,
            end = self.window.end,
            scroll_x = self.scroll_x,
            container_width = self.container_width,
            total = self.total_items,
            "carousel window recomputed"
        );
    }

    /// Update total items; clamps the offset to the new content width.
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
        self.recompute_metrics();
    }

    /// Update the scroll container width.
    pub fn update_dimensions(&mut self, container_width: f32) {
        self.update_geometry(container_width, self.layout);
    }

    /// Swap card geometry (breakpoint change).
    pub fn apply_layout(&mut self, layout: CarouselLayout) {
        self.update_geometry(self.container_width, layout);
    }

    /// Apply a new container width and card layout with a single window
    /// recomputation. When the layout changes, the leading card index is
    /// kept so the same items stay in view.
    pub fn update_geometry(&mut self, container_width: f32, layout: CarouselLayout) {
        let leading_index = self.scroll_x / self.stride();
        let layout_changed = layout != self.layout;
        self.container_width = container_width.max(0.0);
        self.layout = layout;
        self.recompute_max_scroll();
        if layout_changed {
            self.scroll_to(leading_index * self.stride());
        }
        self.recompute();
    }

    // Pointer drag

    pub fn pointer_down(&mut self, x: f32) {
        self.drag = DragState::begin(x, self.scroll_x);
        tracing::debug!(anchor_x = x, origin = self.scroll_x, "drag started");
    }

    /// Apply pointer travel while dragging. Returns the new offset, or
    /// `None` when no drag is active.
    pub fn pointer_move(&mut self, x: f32) -> Option<f32> {
        let target = self.drag.offset_for(x, self.layout.drag_multiplier)?;
        self.scroll_to(target);
        Some(self.scroll_x)
    }

    pub fn pointer_up(&mut self) {
        self.end_drag("released");
    }

    pub fn pointer_leave(&mut self) {
        self.end_drag("left");
    }

    fn end_drag(&mut self, reason: &'static str) {
        if self.drag.active {
            tracing::debug!(reason, scroll_x = self.scroll_x, "drag ended");
        }
        self.drag.end();
    }

    // Paging

    /// Offset one page step away: `page_fraction` of the container width,
    /// clamped to the scrollable extent.
    pub fn page_target(&self, direction: PageDirection) -> f32 {
        let step = self.container_width * self.layout.page_fraction;
        (self.scroll_x + direction.sign() * step).clamp(0.0, self.max_scroll)
    }

    pub fn can_page_back(&self) -> bool {
        self.scroll_x > SCROLL_EPSILON
    }

    pub fn can_page_forward(&self) -> bool {
        self.scroll_x < self.max_scroll - SCROLL_EPSILON
    }

    fn recompute_metrics(&mut self) {
        self.recompute_max_scroll();
        self.recompute();
    }

    fn recompute_max_scroll(&mut self) {
        self.max_scroll = (self.content_width() - self.container_width).max(0.0);
        if self.scroll_x > self.max_scroll {
            self.scroll_x = self.max_scroll;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;
    use crate::settings::Settings;

    fn desktop(total: usize, container: f32) -> CarouselViewport {
        let layout = CarouselLayout::for_breakpoint(Breakpoint::Desktop, &Settings::default());
        CarouselViewport::new(total, container, layout)
    }

    #[test]
    fn max_scroll_tracks_content() {
        let vp = desktop(10, 1000.0);
        // 10 * 300 + 9 * 20
        assert_eq!(vp.content_width(), 3180.0);
        assert_eq!(vp.max_scroll(), 2180.0);

        let short = desktop(2, 1000.0);
        assert_eq!(short.max_scroll(), 0.0);
        assert!(!short.can_page_forward());
    }

    #[test]
    fn scroll_is_clamped_to_extent() {
        let mut vp = desktop(10, 1000.0);
        vp.set_scroll_offset(-50.0);
        assert_eq!(vp.scroll_offset(), 0.0);
        vp.set_scroll_offset(10_000.0);
        assert_eq!(vp.scroll_offset(), 2180.0);
        assert!(!vp.scroll_to(f32::NAN));
        assert_eq!(vp.scroll_offset(), 2180.0);
    }

    #[test]
    fn scroll_to_defers_recompute() {
        let mut vp = desktop(20, 1000.0);
        let generation = vp.generation();
        assert!(vp.scroll_to(640.0));
        assert_eq!(vp.window().start, 0);
        assert_eq!(vp.generation(), generation);
        vp.recompute();
        assert_eq!(vp.window(), VisibleRange { start: 2, end: 7 });
        assert_eq!(vp.generation(), generation + 1);
    }

    #[test]
    fn drag_moves_offset_by_twice_the_pointer_travel() {
        let mut vp = desktop(20, 1000.0);
        vp.set_scroll_offset(400.0);
        vp.pointer_down(600.0);
        assert!(vp.is_dragging());
        assert_eq!(vp.pointer_move(550.0), Some(500.0));
        assert_eq!(vp.pointer_move(700.0), Some(200.0));
        vp.pointer_up();
        assert!(!vp.is_dragging());
        assert_eq!(vp.pointer_move(0.0), None);
        assert_eq!(vp.scroll_offset(), 200.0);
    }

    #[test]
    fn drag_past_start_clamps_to_zero() {
        let mut vp = desktop(20, 1000.0);
        vp.pointer_down(100.0);
        assert_eq!(vp.pointer_move(400.0), Some(0.0));
        vp.pointer_leave();
        assert!(!vp.is_dragging());
    }

    #[test]
    fn page_steps_are_eighty_percent_of_container() {
        let mut vp = desktop(20, 1000.0);
        assert!(!vp.can_page_back());
        assert_eq!(vp.page_target(PageDirection::Forward), 800.0);
        vp.set_scroll_offset(500.0);
        assert_eq!(vp.page_target(PageDirection::Back), 0.0);
        vp.set_scroll_offset(vp.max_scroll());
        assert_eq!(vp.page_target(PageDirection::Forward), vp.max_scroll());
        assert!(!vp.can_page_forward());
    }

    #[test]
    fn shrinking_list_pulls_offset_back() {
        let mut vp = desktop(20, 1000.0);
        vp.set_scroll_offset(4000.0);
        vp.set_total_items(5);
        // 5 * 300 + 4 * 20 - 1000
        assert_eq!(vp.scroll_offset(), 580.0);
        assert_eq!(vp.visible_range(), Some(VisibleRange { start: 1, end: 4 }));
    }

    #[test]
    fn layout_change_keeps_leading_card() {
        let mut vp = desktop(20, 1000.0);
        vp.set_scroll_offset(640.0);
        let mobile = CarouselLayout::for_breakpoint(Breakpoint::Mobile, &Settings::default());
        vp.apply_layout(mobile);
        assert_eq!(vp.scroll_offset(), 540.0);
        assert_eq!(vp.window().start, 2);
    }
}
