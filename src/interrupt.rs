use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::{Result, SyncError};

struct InterruptImpl {
    interrupted: Mutex<bool>,
    condition: Condvar,
}

impl InterruptImpl {
    fn flag(&self) -> MutexGuard<'_, bool> {
        self.interrupted.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Per-task interruption token.
///
/// Every simulated-work sleep of a task goes through [`Interrupt::sleep`], so
/// another thread holding a clone can cut the sleep short. Once set the flag
/// stays set: the owning task is expected to stop.
#[derive(Clone)]
pub struct Interrupt {
    inner: Arc<InterruptImpl>,
}

impl Interrupt {
    pub fn new() -> Self {
        Interrupt {
            inner: Arc::new(InterruptImpl {
                interrupted: Mutex::new(false),
                condition: Condvar::new(),
            }),
        }
    }

    pub fn interrupt(&self) {
        let mut interrupted = self.inner.flag();
        *interrupted = true;
        self.inner.condition.notify_all();
    }

    pub fn is_interrupted(&self) -> bool {
        *self.inner.flag()
    }

    /// Blocks for `duration` unless interrupted first.
    ///
    /// Returns [`SyncError::Interrupted`] tagged with `label` when the token
    /// was set before or during the sleep.
    pub fn sleep(&self, label: &str, duration: Duration) -> Result<()> {
        let interrupted = self.inner.flag();
        let (interrupted, _) = self
            .inner
            .condition
            .wait_timeout_while(interrupted, duration, |interrupted| !*interrupted)
            .unwrap_or_else(PoisonError::into_inner);
        if *interrupted {
            return Err(SyncError::Interrupted {
                label: label.to_owned(),
            });
        }
        Ok(())
    }
}

impl Default for Interrupt {
    fn default() -> Self {
        Interrupt::new()
    }
}

impl fmt::Debug for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Interrupt {{ interrupted {:?} }}", *self.inner.flag())
    }
}
