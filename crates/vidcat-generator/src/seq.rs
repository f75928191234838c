use crate::Generator;
use std::sync::atomic::{AtomicU64, Ordering};
use vidcat_core::VideoId;

/// A sequential id generator.
///
/// Produces `start`, `start + 1`, ... and guarantees uniqueness within a
/// single instance.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
}

impl SeqGenerator {
    /// Creates a generator whose first id is `1`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first id is `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            counter: AtomicU64::new(start),
        }
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for SeqGenerator {
    fn generate(&self) -> VideoId {
        VideoId::new(self.counter.fetch_add(1, Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_sequential_ids() {
        let generator = SeqGenerator::new();

        assert_eq!(generator.generate().get(), 1);
        assert_eq!(generator.generate().get(), 2);
        assert_eq!(generator.generate().get(), 3);
    }

    #[test]
    fn starts_at_offset() {
        let generator = SeqGenerator::starting_at(1000);

        assert_eq!(generator.generate().get(), 1000);
        assert_eq!(generator.generate().get(), 1001);
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeqGenerator>();
    }
}
