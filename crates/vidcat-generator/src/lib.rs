pub mod clock;
pub mod seq;
pub mod timestamp;

pub use clock::{Clock, SystemClock};
pub use seq::SeqGenerator;
pub use timestamp::TimestampGenerator;

use vidcat_core::VideoId;

/// Trait for generating record ids.
///
/// Implementations are pure generators that don't interact with storage,
/// and are responsible for never handing out the same id twice.
pub trait Generator: Send + Sync + 'static {
    /// Generates the next unique id.
    fn generate(&self) -> VideoId;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&self) -> VideoId {
        (**self).generate()
    }
}
