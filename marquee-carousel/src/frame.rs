//! Per-frame event coalescing.
//!
//! Hosts deliver scroll and resize events far more often than they paint.
//! A [`FrameCoalescer`] keeps only the most recent value between frames and
//! asks for a single frame callback per burst: the first submission in a
//! frame returns `true` (request a frame), later ones just overwrite the
//! pending value. At frame time [`take`](FrameCoalescer::take) hands back the
//! latest value and clears the pending flag. Intermediate values are dropped,
//! never queued.

#[derive(Debug, Clone)]
pub struct FrameCoalescer<T> {
    latest: Option<T>,
    pending: bool,
    dropped: u64,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self {
            latest: None,
            pending: false,
            dropped: 0,
        }
    }
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value; returns `true` when the caller should request a frame.
    pub fn submit(&mut self, value: T) -> bool {
        if self.latest.replace(value).is_some() {
            self.dropped += 1;
        }
        let request = !self.pending;
        self.pending = true;
        request
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Latest value submitted since the previous frame, if any.
    pub fn take(&mut self) -> Option<T> {
        self.pending = false;
        self.latest.take()
    }

    /// Values overwritten before a frame consumed them.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
