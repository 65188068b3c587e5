//! Virtual Carousel
//!
//! Viewport-aware, horizontally scrolling carousel core. State (viewport,
//! gestures), derived views (card plan, page dots), and integration points
//! (session event routing, registry) are kept in separate modules so hosts
//! can use the pieces directly or drive everything through a session.

pub mod animator;
pub mod gesture;
pub mod pager;
pub mod registry;
pub mod renderer;
pub mod session;
pub mod state;
pub mod types;

pub use animator::{Easing, SnapAnimator};
pub use gesture::{DragState, TouchDecision, TouchTracker};
pub use pager::PageIndicator;
pub use registry::CarouselRegistry;
pub use renderer::{CardFace, CardPlan, CardRenderer, CardSlot};
pub use session::{CardSummary, CarouselSession, EventOutcome, HostEvent, Snapshot};
pub use state::CarouselViewport;
pub use types::*;
