use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("{label} was interrupted while sleeping")]
    Interrupted { label: String },

    #[error("Notifier was dropped before sending the signal")]
    NotifierDropped,

    #[error("Listener was dropped before it started waiting")]
    ListenerDropped,

    #[error("{label} panicked")]
    TaskPanicked { label: String },

    #[error("Failed to spawn {label}: {source}")]
    Spawn {
        label: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SyncError>;
