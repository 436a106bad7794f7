use std::thread::{self, JoinHandle};

use tracing::error;

use crate::{Result, SyncError};

/// A named thread whose result is collected with [`Task::join`].
pub struct Task<T> {
    label: String,
    handle: JoinHandle<T>,
}

impl<T> Task<T> {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Waits for the thread to finish. A panic inside it is reported as
    /// [`SyncError::TaskPanicked`].
    pub fn join(self) -> Result<T> {
        let label = self.label;
        self.handle
            .join()
            .map_err(|_| SyncError::TaskPanicked { label })
    }
}

/// Starts `body` on a new thread named `label`.
pub fn spawn<F, T>(label: &str, body: F) -> Result<Task<T>>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let handle = thread::Builder::new()
        .name(label.to_owned())
        .spawn(body)
        .map_err(|source| SyncError::Spawn {
            label: label.to_owned(),
            source,
        })?;
    Ok(Task {
        label: label.to_owned(),
        handle,
    })
}

/// Logs a failed task result and swallows it.
///
/// Task bodies end here so a failure stays inside the thread that hit it.
pub fn log_failure<T>(result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            error!(error = ?err, "{}", err);
            None
        }
    }
}
