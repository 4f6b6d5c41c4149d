use core::fmt;

/// An unsigned, monotonically non-decreasing event counter.
///
/// A counter records the number of occurrences of its event since the last
/// counter reset. It wraps on overflow, so the difference between two
/// observations of the same counter is taken with [`Counter::wrapping_delta`].
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct Counter(pub u64);

impl Counter {
    /// A counter that has recorded no events.
    pub const ZERO: Counter = Counter(0);

    /// Construct a counter from a raw value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Counter(raw)
    }

    /// Get the raw value.
    #[inline]
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Record one occurrence of the event.
    #[inline]
    pub fn inc(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Record `cnt` occurrences of the event.
    #[inline]
    pub fn add(&mut self, cnt: u64) {
        self.0 = self.0.wrapping_add(cnt);
    }

    /// Field-wise sum of two counters, wrapping on overflow.
    ///
    /// Used when merging instances of the same counter kept by different
    /// event sources, such as per-CPU copies of one record.
    #[inline]
    pub const fn wrapping_add(self, other: Counter) -> Counter {
        Counter(self.0.wrapping_add(other.0))
    }

    /// Events recorded since the `earlier` observation of this counter.
    ///
    /// The result is correct across at most one wrap of the raw value.
    #[inline]
    pub const fn wrapping_delta(self, earlier: Counter) -> u64 {
        self.0.wrapping_sub(earlier.0)
    }
}

impl From<u64> for Counter {
    #[inline]
    fn from(raw: u64) -> Counter {
        Counter(raw)
    }
}

impl From<Counter> for u64 {
    #[inline]
    fn from(c: Counter) -> u64 {
        c.0
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_inc_and_add() {
        let mut c = Counter::ZERO;
        c.inc();
        c.add(41);
        assert_eq!(c.raw(), 42);
    }

    #[test]
    fn counter_wraps_on_overflow() {
        let mut c = Counter::new(u64::MAX);
        c.inc();
        assert_eq!(c, Counter::ZERO);

        let mut c = Counter::new(u64::MAX - 1);
        c.add(5);
        assert_eq!(c.raw(), 3);
    }

    #[test]
    fn counter_delta_across_wrap() {
        let earlier = Counter::new(u64::MAX - 2);
        let later = Counter::new(7);
        assert_eq!(later.wrapping_delta(earlier), 10);

        // No events in between.
        assert_eq!(earlier.wrapping_delta(earlier), 0);
    }
}
