//! Fixed-rate tick throttle

use std::time::{Duration, Instant};

use crate::config::GameConfig;

/// Blocks the loop so consecutive ticks are at least one period apart.
///
/// A late tick is not made up for: the next period starts from the moment
/// the late tick ended.
#[derive(Debug, Clone)]
pub struct FixedRate {
    period: Duration,
    last_tick: Option<Instant>,
}

impl FixedRate {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_tick: None,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.tick_duration())
    }

    /// No throttling at all (headless runs, tests)
    pub fn unthrottled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// How long to wait at `now` before the next tick may start
    pub fn delay(&mut self, now: Instant) -> Duration {
        let delay = match self.last_tick {
            Some(last) => self.period.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        };
        self.last_tick = Some(now + delay);
        delay
    }

    /// Sleep until the next tick boundary
    pub fn wait(&mut self) {
        let delay = self.delay(Instant::now());
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_immediate() {
        let mut rate = FixedRate::new(Duration::from_millis(16));
        assert_eq!(rate.delay(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn test_waits_out_remaining_period() {
        let start = Instant::now();
        let mut rate = FixedRate::new(Duration::from_millis(20));
        rate.delay(start);
        assert_eq!(
            rate.delay(start + Duration::from_millis(5)),
            Duration::from_millis(15)
        );
        // The next period counts from the end of that wait
        assert_eq!(
            rate.delay(start + Duration::from_millis(30)),
            Duration::from_millis(10)
        );
    }

    #[test]
    fn test_late_tick_does_not_accumulate() {
        let start = Instant::now();
        let mut rate = FixedRate::new(Duration::from_millis(20));
        rate.delay(start);
        assert_eq!(rate.delay(start + Duration::from_millis(100)), Duration::ZERO);
        assert_eq!(
            rate.delay(start + Duration::from_millis(110)),
            Duration::from_millis(10)
        );
    }

    #[test]
    fn test_from_config() {
        let rate = FixedRate::from_config(&GameConfig::default());
        assert_eq!(rate.period(), Duration::from_secs_f64(1.0 / 60.0));
        assert_eq!(FixedRate::unthrottled().period(), Duration::ZERO);
    }
}
