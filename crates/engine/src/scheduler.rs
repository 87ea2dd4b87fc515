//! Frame scheduler: a cancelable "call me on the next frame" primitive.
//!
//! Holds at most one pending request. The event loop polls [`FrameScheduler::take_due`]
//! and sleeps for [`FrameScheduler::time_until_due`] in between.

use std::time::{Duration, Instant};

/// Identifies one frame request; stale handles never match a newer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval: Duration,
    next_id: u64,
    pending: Option<(FrameHandle, Instant)>,
}

impl FrameScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_id: 0,
            pending: None,
        }
    }

    /// Request a frame one interval after `now`, replacing any pending one.
    pub fn request(&mut self, now: Instant) -> FrameHandle {
        self.schedule(now + self.interval)
    }

    /// Request a frame that is already due.
    pub fn request_immediate(&mut self, now: Instant) -> FrameHandle {
        self.schedule(now)
    }

    fn schedule(&mut self, due: Instant) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some((handle, due));
        handle
    }

    /// Drop the request if it is still pending. Returns whether it was.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        match self.pending {
            Some((pending, _)) if pending == handle => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        matches!(self.pending, Some((pending, _)) if pending == handle)
    }

    /// Consume the pending request if its due time has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<FrameHandle> {
        match self.pending {
            Some((handle, due)) if due <= now => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }

    /// Time left until the pending request fires, if any.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|(_, due)| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS16: Duration = Duration::from_millis(16);

    #[test]
    fn request_fires_after_interval() {
        let t0 = Instant::now();
        let mut s = FrameScheduler::new(MS16);
        let h = s.request(t0);
        assert_eq!(s.take_due(t0 + Duration::from_millis(15)), None);
        assert_eq!(s.take_due(t0 + MS16), Some(h));
        assert_eq!(s.take_due(t0 + MS16 * 2), None);
    }

    #[test]
    fn immediate_request_is_due_now() {
        let t0 = Instant::now();
        let mut s = FrameScheduler::new(MS16);
        let h = s.request_immediate(t0);
        assert_eq!(s.time_until_due(t0), Some(Duration::ZERO));
        assert_eq!(s.take_due(t0), Some(h));
    }

    #[test]
    fn cancel_prevents_firing() {
        let t0 = Instant::now();
        let mut s = FrameScheduler::new(MS16);
        let h = s.request(t0);
        assert!(s.cancel(h));
        assert!(!s.is_pending(h));
        assert_eq!(s.take_due(t0 + MS16 * 10), None);
        assert_eq!(s.time_until_due(t0), None);
    }

    #[test]
    fn stale_handle_cannot_cancel_newer_request() {
        let t0 = Instant::now();
        let mut s = FrameScheduler::new(MS16);
        let old = s.request(t0);
        let new = s.request(t0);
        assert_ne!(old, new);
        assert!(!s.cancel(old));
        assert!(s.is_pending(new));
    }
}
