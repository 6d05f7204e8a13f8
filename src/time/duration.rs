use super::Instant;
use crate::task::Sleep;
use std::future::IntoFuture;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A Duration type to represent a span of time, typically used for system
/// timeouts.
///
/// This type wraps `std::time::Duration` so we can implement traits on it
/// without coherence issues, just like if we were implementing this in the
/// stdlib.
#[derive(Debug, PartialEq, PartialOrd, Ord, Eq, Hash, Clone, Copy)]
pub struct Duration(pub(crate) std::time::Duration);

impl Duration {
    /// Creates a new `Duration` from the specified number of whole seconds and
    /// additional nanoseconds.
    #[must_use]
    #[inline]
    pub fn new(secs: u64, nanos: u32) -> Duration {
        std::time::Duration::new(secs, nanos).into()
    }

    /// Creates a new `Duration` from the specified number of whole seconds.
    #[must_use]
    #[inline]
    pub fn from_secs(secs: u64) -> Duration {
        std::time::Duration::from_secs(secs).into()
    }

    /// Creates a new `Duration` from the specified number of milliseconds.
    #[must_use]
    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        std::time::Duration::from_millis(millis).into()
    }

    /// Creates a new `Duration` from the specified number of microseconds.
    #[must_use]
    #[inline]
    pub fn from_micros(micros: u64) -> Self {
        std::time::Duration::from_micros(micros).into()
    }

    /// Creates a new `Duration` from the specified number of nanoseconds.
    #[must_use]
    #[inline]
    pub fn from_nanos(nanos: u64) -> Self {
        std::time::Duration::from_nanos(nanos).into()
    }

    /// Creates a new `Duration` from the specified number of seconds represented
    /// as `f64`.
    ///
    /// # Panics
    /// This constructor will panic if `secs` is not finite, negative or overflows `Duration`.
    ///
    /// # Examples
    /// ```
    /// use lull::time::Duration;
    ///
    /// let dur = Duration::from_secs_f64(2.7);
    /// assert_eq!(dur, Duration::new(2, 700_000_000));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_secs_f64(secs: f64) -> Duration {
        std::time::Duration::from_secs_f64(secs).into()
    }

    /// Creates a new `Duration` from the specified number of seconds represented
    /// as `f32`.
    ///
    /// # Panics
    /// This constructor will panic if `secs` is not finite, negative or overflows `Duration`.
    #[must_use]
    #[inline]
    pub fn from_secs_f32(secs: f32) -> Duration {
        std::time::Duration::from_secs_f32(secs).into()
    }

    /// Returns the number of whole seconds contained by this `Duration`.
    #[must_use]
    #[inline]
    pub const fn as_secs(&self) -> u64 {
        self.0.as_secs()
    }

    /// Returns the number of whole milliseconds contained by this `Duration`.
    #[must_use]
    #[inline]
    pub const fn as_millis(&self) -> u128 {
        self.0.as_millis()
    }

    /// Returns the number of whole microseconds contained by this `Duration`.
    #[must_use]
    #[inline]
    pub const fn as_micros(&self) -> u128 {
        self.0.as_micros()
    }

    /// Returns the total number of nanoseconds contained by this `Duration`.
    #[must_use]
    #[inline]
    pub const fn as_nanos(&self) -> u128 {
        self.0.as_nanos()
    }
}

impl From<std::time::Duration> for Duration {
    fn from(inner: std::time::Duration) -> Self {
        Self(inner)
    }
}

impl From<Duration> for std::time::Duration {
    fn from(duration: Duration) -> Self {
        duration.0
    }
}

impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign<Duration> for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        *self = Self(self.0 + rhs.0)
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign<Duration> for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = Self(self.0 - rhs.0)
    }
}

impl IntoFuture for Duration {
    type Output = Instant;

    type IntoFuture = Sleep;

    fn into_future(self) -> Self::IntoFuture {
        crate::task::sleep(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_as() {
        assert_eq!(Duration::new(123, 456789012).as_secs(), 123);
        assert_eq!(Duration::new(123, 456789012).as_millis(), 123456);
        assert_eq!(Duration::new(123, 456789012).as_micros(), 123456789);
        assert_eq!(Duration::new(123, 456789012).as_nanos(), 123456789012);

        assert_eq!(Duration::from_secs(86400).as_secs(), 86400);
        assert_eq!(Duration::from_secs(86400).as_millis(), 86400_000);
        assert_eq!(Duration::from_secs(86400).as_nanos(), 86400_000000000);

        assert_eq!(Duration::from_millis(2500).as_secs(), 2);
        assert_eq!(Duration::from_millis(2500).as_millis(), 2500);
        assert_eq!(Duration::from_millis(2500).as_micros(), 2500_000);

        assert_eq!(Duration::from_micros(1234567).as_secs(), 1);
        assert_eq!(Duration::from_micros(1234567).as_millis(), 1234);
        assert_eq!(Duration::from_micros(1234567).as_nanos(), 1234567_000);

        assert_eq!(Duration::from_nanos(987654321).as_secs(), 0);
        assert_eq!(Duration::from_nanos(987654321).as_millis(), 987);
        assert_eq!(Duration::from_nanos(987654321).as_micros(), 987654);
        assert_eq!(Duration::from_nanos(987654321).as_nanos(), 987654321);
    }

    #[test]
    fn test_from_secs_float() {
        assert_eq!(Duration::from_secs_f64(2.75).as_millis(), 2750);
        assert_eq!(Duration::from_secs_f32(2.75).as_millis(), 2750);
        assert_eq!(Duration::from_secs_f64(0.5).as_micros(), 500_000);
        assert_eq!(Duration::from_secs_f32(0.5).as_nanos(), 500_000_000);
    }

    #[test]
    fn test_std_round_trip() {
        let inner = std::time::Duration::from_millis(1500);
        let dur = Duration::from(inner);
        assert_eq!(dur, Duration::new(1, 500_000_000));
        assert_eq!(std::time::Duration::from(dur), inner);

        assert_eq!(
            std::time::Duration::from(Duration::new(7, 21)),
            std::time::Duration::new(7, 21)
        );
    }
}
