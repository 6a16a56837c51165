use web_time::{Duration, Instant};

/// Fraction of `duration` covered by `elapsed`. A zero duration completes
/// immediately.
#[must_use]
pub fn elapsed_fraction(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        1.0
    } else {
        elapsed.as_secs_f32() / duration.as_secs_f32()
    }
}

/// Wall-clock adapter that turns frame timestamps into tick fractions.
///
/// The first frame only establishes the baseline and yields 0.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Length of one full transition
    duration: Duration,
    /// Timestamp of the previous frame
    last_frame: Option<Instant>,
}

impl FrameClock {
    /// Clock for transitions lasting `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            last_frame: None,
        }
    }

    /// Fraction elapsed since the previous call, measured now.
    pub fn frame(&mut self) -> f32 {
        self.frame_at(Instant::now())
    }

    /// Fraction elapsed between the previous frame and `now`.
    pub fn frame_at(&mut self, now: Instant) -> f32 {
        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_frame = Some(now);
        if elapsed.is_zero() {
            return 0.0;
        }
        elapsed_fraction(elapsed, self.duration)
    }

    /// Forget the previous frame, e.g. after the host paused rendering.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }

    /// Transition duration this clock scales by.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_completes_immediately() {
        assert_eq!(
            elapsed_fraction(Duration::from_millis(16), Duration::ZERO),
            1.0
        );
    }

    #[test]
    fn first_frame_is_baseline() {
        let mut clock = FrameClock::new(Duration::from_millis(200));
        let t0 = Instant::now();
        assert_eq!(clock.frame_at(t0), 0.0);
        let f = clock.frame_at(t0 + Duration::from_millis(50));
        assert!((f - 0.25).abs() < 1e-5);
    }

    #[test]
    fn backwards_time_yields_zero() {
        let mut clock = FrameClock::new(Duration::from_millis(200));
        let t0 = Instant::now() + Duration::from_secs(1);
        let _ = clock.frame_at(t0);
        assert_eq!(clock.frame_at(t0 - Duration::from_millis(10)), 0.0);
    }

    #[test]
    fn reset_restarts_baseline() {
        let mut clock = FrameClock::new(Duration::from_millis(100));
        let t0 = Instant::now();
        let _ = clock.frame_at(t0);
        clock.reset();
        assert_eq!(clock.frame_at(t0 + Duration::from_secs(5)), 0.0);
    }
}
