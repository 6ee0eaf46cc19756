use std::time::{Duration, Instant};

/// Delay between refresh ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Self-rescheduling one-shot deadline for the refresh tick.
///
/// Each tick is responsible for arming the next one; there is no background
/// ticking mechanism. The deadline is derived from the instant of arming,
/// so late wakeups are not compensated and drift accumulates over long
/// runs. That matches the behavior this clock replaces and is acceptable
/// at one-second granularity.
#[derive(Debug, Clone)]
pub struct TickSchedule {
    interval: Duration,
    deadline: Option<Instant>,
}

impl TickSchedule {
    pub fn new(interval: Duration) -> Self {
        Self { interval, deadline: None }
    }

    /// Arms the next tick relative to `now` and returns its deadline.
    pub fn arm(&mut self, now: Instant) -> Instant {
        let deadline = now + self.interval;
        self.deadline = Some(deadline);
        deadline
    }

    /// Currently armed deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the armed deadline has passed.
    ///
    /// An unarmed schedule is never due.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arming_sets_deadline_one_interval_ahead() {
        let mut schedule = TickSchedule::default();
        let now = Instant::now();
        let deadline = schedule.arm(now);
        assert_eq!(deadline, now + TICK_INTERVAL);
        assert_eq!(schedule.deadline(), Some(deadline));
    }

    #[test]
    fn unarmed_schedule_is_never_due() {
        let schedule = TickSchedule::default();
        assert!(!schedule.is_due(Instant::now()));
    }

    #[test]
    fn due_exactly_at_and_after_the_deadline() {
        let mut schedule = TickSchedule::default();
        let now = Instant::now();
        let deadline = schedule.arm(now);
        assert!(!schedule.is_due(now));
        assert!(schedule.is_due(deadline));
        assert!(schedule.is_due(deadline + Duration::from_millis(1)));
    }

    #[test]
    fn late_arming_is_not_compensated() {
        // Re-arming from a late wakeup moves the whole cadence back; the
        // schedule never tries to catch up to the original phase.
        let mut schedule = TickSchedule::new(Duration::from_millis(1000));
        let start = Instant::now();
        let first = schedule.arm(start);

        let late_wakeup = first + Duration::from_millis(250);
        let second = schedule.arm(late_wakeup);
        assert_eq!(second, late_wakeup + Duration::from_millis(1000));
        assert!(second > first + Duration::from_millis(1000));
    }
}
