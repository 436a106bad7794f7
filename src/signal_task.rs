use std::time::Duration;

use tracing::info;

use crate::{Interrupt, Notifier, Result};

/// Holds the gate across a simulated delay and then wakes the listener.
pub struct SignalTask {
    label: String,
    delay: Duration,
    notifier: Notifier,
    interrupt: Interrupt,
}

impl SignalTask {
    pub fn new(label: &str, delay: Duration, notifier: Notifier) -> Self {
        SignalTask {
            label: label.to_owned(),
            delay,
            notifier,
            interrupt: Interrupt::new(),
        }
    }

    pub fn interrupt(&self) -> Interrupt {
        self.interrupt.clone()
    }

    /// If the delay is interrupted the notifier is dropped unsent and the
    /// listener fails instead of hanging.
    pub fn run(mut self) -> Result<()> {
        let mut gate = self.notifier.hold()?;
        info!(
            "{} started, will notify main thread in {} seconds.",
            self.label,
            self.delay.as_secs_f64()
        );
        self.interrupt.sleep(&self.label, self.delay)?;
        gate.notify();
        info!("{} finished, notified main thread.", self.label);
        Ok(())
    }
}
