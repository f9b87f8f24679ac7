/// Fixed-rate schedule polled against a wall clock, in seconds.
///
/// Behaves like a browser `setInterval` driven from a render loop:
/// - the first firing happens one period after the first poll
/// - at most one firing per poll; missed periods are skipped, not replayed
/// - a backward clock jump larger than one period re-arms the schedule
/// - a cancelled interval never fires again
#[derive(Debug, Clone)]
pub struct Interval {
    period: f64,
    next_due: Option<f64>,
    cancelled: bool,
}

impl Interval {
    /// Creates an interval with the given period in seconds.
    ///
    /// Non-positive or non-finite periods produce an interval that never fires.
    pub fn new(period_secs: f64) -> Self {
        let period = if period_secs > 0.0 && period_secs.is_finite() {
            period_secs
        } else {
            f64::INFINITY
        };
        Self {
            period,
            next_due: None,
            cancelled: false,
        }
    }

    /// Creates an interval firing `hz` times per second.
    pub fn from_hz(hz: f64) -> Self {
        Self::new(1.0 / hz)
    }

    #[inline]
    pub fn period(&self) -> f64 {
        self.period
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stops the interval permanently.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.next_due = None;
    }

    /// Returns `true` when the interval is due at `now`, and schedules the next firing.
    pub fn poll(&mut self, now: f64) -> bool {
        if self.cancelled || !now.is_finite() || !self.period.is_finite() {
            return false;
        }

        let Some(due) = self.next_due else {
            self.next_due = Some(now + self.period);
            return false;
        };

        if due - now > self.period {
            self.next_due = Some(now + self.period);
            return false;
        }

        if now < due {
            return false;
        }

        let missed = ((now - due) / self.period).floor();
        self.next_due = Some(due + (missed + 1.0) * self.period);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_only_arms() {
        let mut iv = Interval::new(0.1);
        assert!(!iv.poll(10.0));
        assert!(!iv.poll(10.05));
        assert!(iv.poll(10.11));
    }

    #[test]
    fn fires_once_per_period() {
        let mut iv = Interval::new(0.1);
        iv.poll(0.0);
        assert!(iv.poll(0.11));
        assert!(!iv.poll(0.15));
        assert!(iv.poll(0.21));
    }

    #[test]
    fn stall_skips_missed_periods() {
        let mut iv = Interval::new(0.1);
        iv.poll(0.0);
        // Ten periods late: a single firing, then back on the original grid.
        assert!(iv.poll(1.05));
        assert!(!iv.poll(1.08));
        assert!(iv.poll(1.12));
    }

    #[test]
    fn backward_clock_rearms() {
        let mut iv = Interval::new(0.1);
        iv.poll(100.0);
        assert!(!iv.poll(50.0));
        assert!(!iv.poll(50.05));
        assert!(iv.poll(50.12));
    }

    #[test]
    fn cancelled_never_fires() {
        let mut iv = Interval::from_hz(15.0);
        iv.poll(0.0);
        iv.cancel();
        assert!(iv.is_cancelled());
        assert!(!iv.poll(1.0));
        assert!(!iv.poll(2.0));
    }

    #[test]
    fn invalid_period_never_fires() {
        let mut iv = Interval::from_hz(0.0);
        iv.poll(0.0);
        assert!(!iv.poll(1.0e9));
    }

    #[test]
    fn non_finite_now_is_ignored() {
        let mut iv = Interval::new(0.1);
        iv.poll(0.0);
        assert!(!iv.poll(f64::NAN));
        assert!(iv.poll(0.11));
    }
}
