//! Registry for managing the carousels of a browse page keyed by CarouselKey

use std::collections::HashMap;

use marquee_model::Item;

use super::session::{CarouselSession, EventOutcome, HostEvent};
use super::types::CarouselKey;

#[derive(Debug, Default)]
pub struct CarouselRegistry {
    sessions: HashMap<CarouselKey, CarouselSession>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn insert(
        &mut self,
        key: CarouselKey,
        session: CarouselSession,
    ) -> Option<CarouselSession> {
        self.sessions.insert(key, session)
    }

    /// Get a mutable reference, creating a session with the provided factory when absent.
    pub fn get_or_insert_with<F>(&mut self, key: CarouselKey, init: F) -> &mut CarouselSession
    where
        F: FnOnce() -> CarouselSession,
    {
        self.sessions.entry(key).or_insert_with(init)
    }

    pub fn get(&self, key: &CarouselKey) -> Option<&CarouselSession> {
        self.sessions.get(key)
    }

    pub fn get_mut(&mut self, key: &CarouselKey) -> Option<&mut CarouselSession> {
        self.sessions.get_mut(key)
    }

    pub fn remove(&mut self, key: &CarouselKey) -> Option<CarouselSession> {
        self.sessions.remove(key)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Replace a carousel's items after a refetch. Returns `false` for
    /// unknown keys.
    pub fn replace_items(&mut self, key: &CarouselKey, items: Vec<Item>) -> bool {
        match self.sessions.get_mut(key) {
            Some(session) => {
                session.set_items(items);
                true
            }
            None => false,
        }
    }

    /// Route an event to one carousel (pointer, touch, and scroll events
    /// target the carousel under the cursor).
    pub fn dispatch(&mut self, key: &CarouselKey, event: HostEvent) -> Option<EventOutcome> {
        self.sessions.get_mut(key).map(|s| s.handle(event))
    }

    /// Deliver a page-wide event (resize, frame) to every carousel.
    pub fn broadcast(&mut self, event: HostEvent) -> Vec<(CarouselKey, EventOutcome)> {
        let outcomes: Vec<(CarouselKey, EventOutcome)> = self
            .sessions
            .iter_mut()
            .map(|(key, session)| (key.clone(), session.handle(event)))
            .collect();
        tracing::trace!(carousels = outcomes.len(), ?event, "broadcast host event");
        outcomes
    }

    /// Return a snapshot of all keys currently in the registry.
    pub fn keys(&self) -> Vec<CarouselKey> {
        self.sessions.keys().cloned().collect()
    }
}
