/// Frame-time accumulator deciding when the driving loop should step.
/// At most one step is released per frame.
#[derive(Clone, Debug)]
pub struct Ticker {
    pub steps_per_second: f32,
    update_timer: f32,
}

impl Ticker {
    pub const MIN_RATE: f32 = 1.0;
    pub const MAX_RATE: f32 = 120.0;
    pub const DEFAULT_RATE: f32 = 60.0;

    /// Rates outside the allowed range are clamped; NaN falls back to the default
    pub fn new(steps_per_second: f32) -> Self {
        let steps_per_second = if steps_per_second.is_nan() {
            Self::DEFAULT_RATE
        } else {
            steps_per_second.clamp(Self::MIN_RATE, Self::MAX_RATE)
        };
        Self { steps_per_second, update_timer: 0.0 }
    }

    /// Adjust simulation speed
    pub fn adjust_speed(&mut self, delta: f32) {
        self.steps_per_second = (self.steps_per_second + delta).clamp(Self::MIN_RATE, Self::MAX_RATE);
    }

    /// Accumulate `delta_time` seconds; true when a step is due
    pub fn ready(&mut self, delta_time: f32) -> bool {
        self.update_timer += delta_time;
        if self.update_timer >= 1.0 / self.steps_per_second {
            self.update_timer = 0.0;
            true
        } else {
            false
        }
    }

    /// Drop accumulated time, e.g. when the simulation is paused
    pub fn reset(&mut self) {
        self.update_timer = 0.0;
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_releases_after_interval() {
        let mut ticker = Ticker::new(10.0);
        assert!(!ticker.ready(0.05));
        assert!(ticker.ready(0.06));
        assert!(!ticker.ready(0.01));
    }

    #[test]
    fn test_one_step_per_frame() {
        let mut ticker = Ticker::new(60.0);
        // A long frame still yields a single step
        assert!(ticker.ready(1.0));
        assert!(!ticker.ready(0.001));
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut ticker = Ticker::new(500.0);
        assert_eq!(ticker.steps_per_second, Ticker::MAX_RATE);
        ticker.adjust_speed(-1000.0);
        assert_eq!(ticker.steps_per_second, Ticker::MIN_RATE);
    }

    #[test]
    fn test_nan_rate_still_steps() {
        let mut ticker = Ticker::new(f32::NAN);
        assert_eq!(ticker.steps_per_second, Ticker::DEFAULT_RATE);
        assert!(ticker.ready(1.0));

        assert_eq!(Ticker::new(f32::INFINITY).steps_per_second, Ticker::MAX_RATE);
    }
}
