//! Event routing for a single carousel
//!
//! A [`CarouselSession`] receives raw host events (pointer, touch, scroll,
//! resize, frame callbacks, page buttons), feeds them to the viewport,
//! breakpoint tracker, and animator, and publishes a [`Snapshot`] on every
//! frame. Scroll and resize are coalesced to one recomputation per frame.

use std::time::{Duration, Instant};

use marquee_model::{ImageBase, Item, ItemId};
use serde::{Deserialize, Serialize};

use crate::breakpoint::{Breakpoint, ResizeSample, ResponsiveBreakpoint};
use crate::error::Result;
use crate::frame::FrameCoalescer;
use crate::settings::Settings;

use super::animator::SnapAnimator;
use super::gesture::{TouchDecision, TouchTracker};
use super::pager::PageIndicator;
use super::renderer::{CardFace, CardRenderer};
use super::state::CarouselViewport;
use super::types::{CarouselLayout, PageDirection, VisibleRange};

/// Page steps shorter than this (px) are not animated.
const MIN_PAGE_TRAVEL: f32 = 0.5;

/// Raw input delivered by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// Window resize. The carousel's container defaults to the full width.
    Resize {
        viewport_width: f32,
        #[serde(default)]
        container_width: Option<f32>,
    },
    /// Native scroll of the carousel container (wheel, touch momentum).
    Scroll { offset: f32 },
    /// Animation-frame callback; `at_ms` is the host clock.
    Frame { at_ms: u64 },
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    PointerLeave,
    TouchStart { x: f32, y: f32 },
    TouchMove { x: f32, y: f32 },
    TouchEnd,
    /// Chevron press.
    Page { direction: PageDirection, at_ms: u64 },
}

/// What the host should do after an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventOutcome {
    /// Schedule an animation-frame callback.
    pub request_frame: bool,
    /// Cancel the page's native vertical scroll for this touch move.
    pub suppress_vertical_scroll: bool,
    /// Present after `Frame` events.
    pub snapshot: Option<Snapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSummary {
    pub index: usize,
    pub id: ItemId,
    #[serde(flatten)]
    pub face: CardFace,
}

/// Derived carousel state published once per frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub at_ms: u64,
    pub breakpoint: Breakpoint,
    pub container_width: f32,
    pub scroll_offset: f32,
    pub window: VisibleRange,
    pub visible_range: Option<VisibleRange>,
    pub dragging: bool,
    pub animating: bool,
    pub cards: Vec<CardSummary>,
    pub placeholders: usize,
    pub page_dots: Vec<bool>,
    pub can_page_back: bool,
    pub can_page_forward: bool,
}

#[derive(Debug)]
pub struct CarouselSession {
    settings: Settings,
    images: ImageBase,
    items: Vec<Item>,

    breakpoint: ResponsiveBreakpoint,
    viewport: CarouselViewport,
    renderer: CardRenderer,
    pager: PageIndicator,

    touch: TouchTracker,
    scroll: FrameCoalescer<f32>,
    /// Offset moved outside a frame; the window is recomputed at the next one.
    window_stale: bool,
    animator: SnapAnimator,

    epoch: Instant,
    last_frame_ms: u64,
}

impl CarouselSession {
    /// Mount a carousel: classify the initial width and compute the first
    /// window. Fails only when `settings` are invalid.
    pub fn new(items: Vec<Item>, sample: ResizeSample, settings: Settings) -> Result<Self> {
        settings.validate()?;
        let images = settings.image_base()?;
        let breakpoint = ResponsiveBreakpoint::new(sample, &settings);
        let layout = CarouselLayout::for_breakpoint(breakpoint.current(), &settings);
        let viewport = CarouselViewport::new(items.len(), sample.container_width, layout);

        Ok(Self {
            renderer: CardRenderer::new(settings.render_buffer()),
            pager: PageIndicator::for_breakpoint(breakpoint.current(), &settings),
            touch: TouchTracker::new(settings.touch_threshold()),
            scroll: FrameCoalescer::new(),
            window_stale: false,
            animator: SnapAnimator::new(),
            epoch: Instant::now(),
            last_frame_ms: 0,
            settings,
            images,
            items,
            breakpoint,
            viewport,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn viewport(&self) -> &CarouselViewport {
        &self.viewport
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint.current()
    }

    pub fn pager(&self) -> &PageIndicator {
        &self.pager
    }

    pub fn renderer(&self) -> &CardRenderer {
        &self.renderer
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Replace the item list (upstream refetch). The offset is clamped to
    /// the new content width.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.viewport.set_total_items(self.items.len());
    }

    pub fn handle(&mut self, event: HostEvent) -> EventOutcome {
        let mut outcome = EventOutcome::default();
        match event {
            HostEvent::Resize {
                viewport_width,
                container_width,
            } => {
                outcome.request_frame = self.breakpoint.on_resize(ResizeSample {
                    viewport_width,
                    container_width: container_width.unwrap_or(viewport_width),
                });
            }
            HostEvent::Scroll { offset } => {
                outcome.request_frame = self.scroll.submit(offset);
            }
            HostEvent::Frame { at_ms } => {
                let snapshot = self.on_frame(at_ms);
                outcome.request_frame = self.animator.is_active();
                outcome.snapshot = Some(snapshot);
            }
            HostEvent::PointerDown { x } => {
                self.animator.cancel();
                self.settle_pending_scroll();
                self.viewport.pointer_down(x);
            }
            HostEvent::PointerMove { x } => {
                if let Some(offset) = self.viewport.pointer_move(x) {
                    outcome.request_frame = self.scroll.submit(offset);
                }
            }
            HostEvent::PointerUp => self.viewport.pointer_up(),
            HostEvent::PointerLeave => self.viewport.pointer_leave(),
            HostEvent::TouchStart { x, y } => {
                self.animator.cancel();
                self.touch.touch_start(x, y);
            }
            HostEvent::TouchMove { x, y } => {
                outcome.suppress_vertical_scroll =
                    self.touch.touch_move(x, y) == TouchDecision::SuppressVerticalScroll;
            }
            HostEvent::TouchEnd => self.touch.touch_end(),
            HostEvent::Page { direction, at_ms } => {
                outcome.request_frame = self.page(direction, at_ms);
            }
        }
        outcome
    }

    /// Start a smooth page step. Returns `true` when an animation started.
    /// A host scroll still waiting for its frame is applied first, so the
    /// step starts from where the user left the strip.
    pub fn page(&mut self, direction: PageDirection, at_ms: u64) -> bool {
        self.settle_pending_scroll();
        let current = self.viewport.scroll_offset();
        let target = self.viewport.page_target(direction);
        if (target - current).abs() < MIN_PAGE_TRAVEL {
            return false;
        }
        tracing::debug!(?direction, from = current, to = target, "page step");
        self.animator.start_at(
            current,
            target,
            self.settings.page_duration(),
            self.settings.page_easing(),
            self.clock(at_ms),
        );
        true
    }

    /// Apply everything coalesced since the previous frame with at most one
    /// window recomputation, then publish a snapshot.
    pub fn on_frame(&mut self, at_ms: u64) -> Snapshot {
        self.last_frame_ms = at_ms;
        let mut moved = std::mem::take(&mut self.window_stale);

        if let Some(offset) = self.scroll.take() {
            self.viewport.scroll_to(offset);
            moved = true;
        }
        if let Some(offset) = self.animator.tick_at(self.clock(at_ms)) {
            self.viewport.scroll_to(offset);
            moved = true;
        }

        match self.breakpoint.on_frame() {
            Some(resize) => {
                let layout = CarouselLayout::for_breakpoint(resize.breakpoint, &self.settings);
                if resize.changed {
                    self.pager = PageIndicator::for_breakpoint(resize.breakpoint, &self.settings);
                }
                self.viewport
                    .update_geometry(resize.sample.container_width, layout);
            }
            None if moved => self.viewport.recompute(),
            None => {}
        }
        tracing::trace!(at_ms, dropped_scrolls = self.scroll.dropped(), "carousel frame");

        self.snapshot()
    }

    /// Snapshot of the current state without advancing anything.
    pub fn snapshot(&self) -> Snapshot {
        let window = self.viewport.window();
        let visible_range = self.viewport.visible_range();
        let poster_size = self
            .settings
            .poster_size_for(self.viewport.layout().card_width);

        let cards: Vec<CardSummary> = self
            .renderer
            .cards(window, &self.items)
            .into_iter()
            .map(|plan| CardSummary {
                index: plan.index,
                id: plan.key,
                face: CardFace::from_item(plan.item, &self.images, poster_size),
            })
            .collect();

        Snapshot {
            at_ms: self.last_frame_ms,
            breakpoint: self.breakpoint.current(),
            container_width: self.viewport.container_width(),
            scroll_offset: self.viewport.scroll_offset(),
            window,
            visible_range,
            dragging: self.viewport.is_dragging(),
            animating: self.animator.is_active(),
            placeholders: self.items.len() - cards.len(),
            cards,
            page_dots: self.pager.dots(self.items.len(), visible_range),
            can_page_back: self.viewport.can_page_back(),
            can_page_forward: self.viewport.can_page_forward(),
        }
    }

    /// Move the viewport to a coalesced scroll offset that has not reached a
    /// frame yet. The window itself waits for the frame.
    fn settle_pending_scroll(&mut self) {
        if let Some(offset) = self.scroll.take() {
            self.window_stale |= self.viewport.scroll_to(offset);
        }
    }

    fn clock(&self, at_ms: u64) -> Instant {
        self.epoch + Duration::from_millis(at_ms)
    }
}
