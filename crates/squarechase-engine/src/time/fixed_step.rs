use std::time::Duration;

/// Fixed-timestep accumulator.
///
/// Frame time is added to an accumulator and drained in whole steps, at most
/// `max_steps` per frame. Time left over past the cap stays accumulated and is
/// worked off on later frames.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: Duration,
    max_steps: u32,
    accumulator: Duration,
}

impl FixedStep {
    /// `rate` updates per second, at most `max_steps` per frame.
    ///
    /// # Panics
    ///
    /// If `rate` is zero.
    pub fn new(rate: u32, max_steps: u32) -> Self {
        assert!(rate > 0, "FixedStep::new: rate must be positive");
        Self {
            step: Duration::from_secs(1) / rate,
            max_steps,
            accumulator: Duration::ZERO,
        }
    }

    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Step length in seconds, the `dt` handed to each update.
    #[inline]
    pub fn step_secs(&self) -> f32 {
        self.step.as_secs_f32()
    }

    #[inline]
    pub fn accumulated(&self) -> Duration {
        self.accumulator
    }

    /// Adds `elapsed` and returns how many steps to run this frame.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut steps = 0;
        while steps < self.max_steps && self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_hz_step() {
        let fs = FixedStep::new(60, 5);
        assert_eq!(fs.step(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn short_frames_accumulate_until_a_step() {
        let mut fs = FixedStep::new(100, 5);
        assert_eq!(fs.advance(Duration::from_millis(6)), 0);
        assert_eq!(fs.advance(Duration::from_millis(6)), 1);
        assert_eq!(fs.accumulated(), Duration::from_millis(2));
    }

    #[test]
    fn steps_are_capped_and_the_rest_is_kept() {
        let mut fs = FixedStep::new(100, 5);
        assert_eq!(fs.advance(Duration::from_millis(80)), 5);
        assert_eq!(fs.accumulated(), Duration::from_millis(30));
        assert_eq!(fs.advance(Duration::ZERO), 3);
        assert_eq!(fs.accumulated(), Duration::ZERO);
    }

    #[test]
    #[should_panic(expected = "rate must be positive")]
    fn zero_rate_panics() {
        FixedStep::new(0, 5);
    }
}
