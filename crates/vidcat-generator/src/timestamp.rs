use crate::clock::{Clock, SystemClock};
use crate::Generator;
use parking_lot::Mutex;
use vidcat_core::VideoId;

/// Generates ids from the wall clock, in milliseconds since the Unix epoch.
///
/// Ids are strictly increasing: when the clock has not moved past the last
/// issued id (several ids within one millisecond, or the clock stepping
/// backwards) the next id is the last one plus one.
pub struct TimestampGenerator<C: Clock> {
    clock: C,
    last: Mutex<Option<u64>>,
}

impl TimestampGenerator<SystemClock> {
    /// Creates a generator backed by the real system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimestampGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimestampGenerator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            last: Mutex::new(None),
        }
    }

    fn next_millis(&self) -> u64 {
        // Instants before the epoch are treated as the epoch itself.
        let now = u64::try_from(self.clock.now().as_millisecond()).unwrap_or(0);
        let mut last = self.last.lock();
        let next = match *last {
            Some(previous) if now <= previous => previous + 1,
            _ => now,
        };
        *last = Some(next);
        next
    }
}

impl<C: Clock + 'static> Generator for TimestampGenerator<C> {
    fn generate(&self) -> VideoId {
        VideoId::new(self.next_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::test_clock::TestClock;
    use jiff::{SignedDuration, Timestamp};

    fn make_generator(millis: i64) -> (TimestampGenerator<TestClock>, TestClock) {
        let clock = TestClock::new(Timestamp::from_millisecond(millis).unwrap());
        (TimestampGenerator::with_clock(clock.clone()), clock)
    }

    #[test]
    fn id_is_current_millisecond() {
        let (gen, _) = make_generator(1_700_000_000_123);
        assert_eq!(gen.generate(), VideoId::new(1_700_000_000_123));
    }

    #[test]
    fn same_millisecond_bumps_id() {
        let (gen, _) = make_generator(1_000);
        assert_eq!(gen.generate().get(), 1_000);
        assert_eq!(gen.generate().get(), 1_001);
        assert_eq!(gen.generate().get(), 1_002);
    }

    #[test]
    fn follows_clock_once_it_moves_ahead() {
        let (gen, clock) = make_generator(1_000);
        gen.generate();
        gen.generate();
        clock.advance(SignedDuration::from_millis(50));
        assert_eq!(gen.generate().get(), 1_050);
    }

    #[test]
    fn clock_moving_backwards_never_repeats() {
        let (gen, clock) = make_generator(5_000);
        let first = gen.generate();
        clock.rewind(SignedDuration::from_secs(2));
        let second = gen.generate();
        assert!(second > first);
    }

    #[test]
    fn system_clock_ids_are_unique() {
        let gen = TimestampGenerator::new();
        let mut ids: Vec<_> = (0..1_000).map(|_| gen.generate()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 1_000);
    }
}
