//! Frame-rate counter.

use std::fmt::Write as _;
use std::time::Instant;

use arrayvec::ArrayVec;

/// Number of recent frames averaged by [`FpsCounter`].
pub const FPS_WINDOW: usize = 100;

/// Receives one signal per rendered frame and keeps its own display text.
pub trait FrameRate {
    fn record_frame(&mut self, now: Instant);

    /// Forget the averaging window (called on pause).
    fn reset(&mut self);

    fn text(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsStats {
    pub latest: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Rolling FPS over the last [`FPS_WINDOW`] frames; allocation-free after
/// construction.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    samples: ArrayVec<f64, FPS_WINDOW>,
    cursor: usize,
    latest: f64,
    last_frame: Option<Instant>,
    text: String,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        let mut counter = Self {
            samples: ArrayVec::new(),
            cursor: 0,
            latest: 0.0,
            last_frame: None,
            text: String::with_capacity(64),
        };
        counter.refresh_text();
        counter
    }

    pub fn stats(&self) -> Option<FpsStats> {
        if self.samples.is_empty() {
            return None;
        }
        let (mut min, mut max, mut sum) = (f64::INFINITY, f64::NEG_INFINITY, 0.0);
        for &fps in &self.samples {
            min = min.min(fps);
            max = max.max(fps);
            sum += fps;
        }
        Some(FpsStats {
            latest: self.latest,
            mean: sum / self.samples.len() as f64,
            min,
            max,
        })
    }

    fn push(&mut self, fps: f64) {
        self.latest = fps;
        if self.samples.is_full() {
            self.samples[self.cursor] = fps;
            self.cursor = (self.cursor + 1) % FPS_WINDOW;
        } else {
            self.samples.push(fps);
        }
    }

    fn refresh_text(&mut self) {
        self.text.clear();
        match self.stats() {
            Some(s) => {
                let _ = write!(
                    self.text,
                    "fps {:.0} (avg {:.0} min {:.0} max {:.0})",
                    s.latest, s.mean, s.min, s.max
                );
            }
            None => self.text.push_str("fps --"),
        }
    }
}

impl FrameRate for FpsCounter {
    fn record_frame(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            let delta = now.saturating_duration_since(last).as_secs_f64();
            if delta > 0.0 {
                self.push(1.0 / delta);
            }
        }
        self.last_frame = Some(now);
        self.refresh_text();
    }

    fn reset(&mut self) {
        self.samples.clear();
        self.cursor = 0;
        self.latest = 0.0;
        self.last_frame = None;
        self.refresh_text();
    }

    fn text(&self) -> &str {
        &self.text
    }
}
