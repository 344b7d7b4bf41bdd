use std::time::{Duration, Instant};

const DT_MIN: Duration = Duration::from_micros(100);
const DT_MAX: Duration = Duration::from_millis(250);

/// Timing snapshot for one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,
    pub frame_index: u64,
}

/// Monotonic frame clock.
///
/// `dt` is clamped to `[0.1ms, 250ms]` so a stall (debugger, minimized window)
/// does not turn into one huge slider jump.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: Instant::now(), frame_index: 0 }
    }

    /// Advances the clock to now.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now.saturating_duration_since(self.last).clamp(DT_MIN, DT_MAX);
        self.last = now;

        let ft = FrameTime { dt: dt.as_secs_f32(), frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_ticks() {
        let mut c = FrameClock::new();
        let start = c.last;
        assert_eq!(c.tick_at(start + Duration::from_millis(16)).frame_index, 0);
        assert_eq!(c.tick_at(start + Duration::from_millis(32)).frame_index, 1);
    }

    #[test]
    fn dt_is_measured_between_ticks() {
        let mut c = FrameClock::new();
        let start = c.last;
        let ft = c.tick_at(start + Duration::from_millis(20));
        assert!((ft.dt - 0.020).abs() < 1e-6);
    }

    #[test]
    fn dt_is_clamped() {
        let mut c = FrameClock::new();
        let start = c.last;
        assert!((c.tick_at(start + Duration::from_secs(5)).dt - 0.25).abs() < 1e-6);
        let again = c.last;
        assert!((c.tick_at(again).dt - 0.0001).abs() < 1e-7);
    }
}
