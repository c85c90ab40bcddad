//! Fixed-period tick schedule.

use std::time::{Duration, Instant};

use crate::types::MAX_CATCH_UP_TICKS;

/// Deadline-based tick timer polled by the event loop.
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    next: Instant,
}

impl TickClock {
    /// First tick is due one period after `now`.
    pub fn new(period: Duration, now: Instant) -> Self {
        let period = period.max(Duration::from_micros(1));
        Self {
            period,
            next: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_deadline(&self) -> Instant {
        self.next
    }

    /// Number of ticks due at `now`, advancing the schedule past them.
    ///
    /// When more than [`MAX_CATCH_UP_TICKS`] are owed the schedule is rebased
    /// onto `now` instead of trying to catch up.
    pub fn due(&mut self, now: Instant) -> u32 {
        if now < self.next {
            return 0;
        }

        let behind = now.duration_since(self.next).as_nanos() / self.period.as_nanos();
        let owed = behind.saturating_add(1);
        if owed > u128::from(MAX_CATCH_UP_TICKS) {
            self.next = now + self.period;
            return MAX_CATCH_UP_TICKS;
        }

        let owed = owed as u32;
        self.next += self.period * owed;
        owed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn nothing_due_before_first_period() {
        let t0 = Instant::now();
        let mut clock = TickClock::new(ms(10), t0);
        assert_eq!(clock.due(t0), 0);
        assert_eq!(clock.due(t0 + ms(9)), 0);
        assert_eq!(clock.due(t0 + ms(10)), 1);
        assert_eq!(clock.next_deadline(), t0 + ms(20));
    }

    #[test]
    fn late_poll_runs_owed_ticks_on_schedule() {
        let t0 = Instant::now();
        let mut clock = TickClock::new(ms(10), t0);
        assert_eq!(clock.due(t0 + ms(35)), 3);
        assert_eq!(clock.next_deadline(), t0 + ms(40));
    }

    #[test]
    fn long_stall_is_capped_and_rebased() {
        let t0 = Instant::now();
        let mut clock = TickClock::new(ms(10), t0);
        assert_eq!(clock.due(t0 + ms(1000)), MAX_CATCH_UP_TICKS);
        assert_eq!(clock.next_deadline(), t0 + ms(1010));
    }
}
