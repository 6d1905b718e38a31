use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Polled by the search loop between frontier pops and between route
/// reconstructions, so a caller can abort a search already in progress
/// without the core depending on any particular async runtime or executor.
pub trait CancellationSignal {
    fn is_cancelled(&self) -> bool;
}

/// A [`CancellationSignal`] a caller can hold onto and flip from another
/// thread. Cloning shares the same underlying flag.
#[derive(Clone, Default)]
pub struct AtomicCancellationToken(Arc<AtomicBool>);

impl AtomicCancellationToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl CancellationSignal for AtomicCancellationToken {
    fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// A signal that never fires, for callers that do not need cancellation.
pub struct NeverCancelled;

impl CancellationSignal for NeverCancelled {
    fn is_cancelled(&self) -> bool {
        false
    }
}
