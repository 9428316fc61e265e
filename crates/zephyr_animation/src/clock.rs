//! Frame clock
//!
//! Converts the host's per-frame timestamps into deltas for
//! [`AnimatedValue::tick`](crate::AnimatedValue::tick). Timestamps are
//! milliseconds on any monotonic timeline the host likes.

/// Largest delta handed out for a single frame
///
/// A window that was hidden or a debugger pause would otherwise finish every
/// running transition in one frame.
pub const MAX_FRAME_DELTA_MS: f32 = 100.0;

/// Turns absolute frame times into clamped deltas
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last_frame_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now_ms`, returning milliseconds since the last one
    ///
    /// The first frame yields 0. Time running backwards yields 0 and the
    /// clock resyncs to the new timestamp.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_frame_ms {
            Some(last) if now_ms > last => ((now_ms - last) as f32).min(MAX_FRAME_DELTA_MS),
            _ => 0.0,
        };
        if now_ms.is_finite() {
            self.last_frame_ms = Some(now_ms);
        }
        if dt >= MAX_FRAME_DELTA_MS {
            tracing::debug!("frame gap clamped to {}ms", MAX_FRAME_DELTA_MS);
        }
        dt
    }

    /// Timestamp of the last recorded frame
    pub fn last_frame(&self) -> Option<f64> {
        self.last_frame_ms
    }

    /// Forget the last frame; the next `advance` yields 0
    pub fn reset(&mut self) {
        self.last_frame_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1_000.0), 0.0);
        assert_eq!(clock.advance(1_016.0), 16.0);
        assert_eq!(clock.last_frame(), Some(1_016.0));
    }

    #[test]
    fn test_long_gaps_are_clamped() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        assert_eq!(clock.advance(5_000.0), MAX_FRAME_DELTA_MS);
        assert_eq!(clock.advance(5_010.0), 10.0);
    }

    #[test]
    fn test_backwards_time_resyncs() {
        let mut clock = FrameClock::new();
        clock.advance(500.0);
        assert_eq!(clock.advance(100.0), 0.0);
        assert_eq!(clock.advance(120.0), 20.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        clock.advance(10.0);
        clock.reset();
        assert_eq!(clock.advance(50.0), 0.0);
    }
}
