use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::info;

/// Counter shared between threads.
///
/// Clones point at the same value. `increment` is the only mutator and runs
/// entirely under the lock, including its log line, so printed values are
/// strictly increasing.
#[derive(Clone, Default)]
pub struct SharedCounter {
    inner: Arc<Mutex<usize>>,
}

impl SharedCounter {
    pub fn new() -> Self {
        SharedCounter::default()
    }

    /// Adds one and returns the new value.
    pub fn increment(&self) -> usize {
        let mut count = self.lock();
        *count += 1;
        info!("Counter: {}", *count);
        *count
    }

    pub fn value(&self) -> usize {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, usize> {
        // A panic elsewhere cannot leave a half-written usize behind.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SharedCounter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SharedCounter {{ count {:?} }}", self.value())
    }
}
