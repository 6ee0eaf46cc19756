use chrono::{Local, Timelike};

/// Wall-clock reading with one-second resolution.
///
/// Ephemeral by design: read fresh on every tick, overwritten on the next,
/// never compared against a previous value.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Timestamp {
    /// Hour in 0..=23.
    pub hour: u8,
    /// Minute in 0..=59.
    pub minute: u8,
    /// Second in 0..=59.
    pub second: u8,
}

impl Timestamp {
    /// Creates a timestamp from raw components.
    ///
    /// Returns `None` if any component is out of range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self { hour, minute, second })
    }

    /// Reads the current local wall-clock time.
    ///
    /// Leap seconds are folded into second 59; chrono reports them as
    /// second 60 via the nanosecond field, which we ignore at this
    /// resolution.
    pub fn now_local() -> Self {
        let now = Local::now();
        Self {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second().min(59) as u8,
        }
    }
}

/// Source of the current time.
///
/// The display loop reads time through this seam so it can be driven by a
/// fixed clock in tests.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// The real system clock. Reading it is treated as infallible.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range_components() {
        assert!(Timestamp::new(24, 0, 0).is_none());
        assert!(Timestamp::new(0, 60, 0).is_none());
        assert!(Timestamp::new(0, 0, 60).is_none());
        assert!(Timestamp::new(23, 59, 59).is_some());
    }

    #[test]
    fn system_clock_yields_valid_components() {
        let ts = SystemClock.now();
        assert!(ts.hour <= 23);
        assert!(ts.minute <= 59);
        assert!(ts.second <= 59);
    }
}
