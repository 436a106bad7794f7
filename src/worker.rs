use std::time::Duration;

use tracing::info;

use crate::{Interrupt, Result};

/// Plain task: announce, pretend to work, announce again.
pub struct Worker {
    label: String,
    work: Duration,
    interrupt: Interrupt,
}

impl Worker {
    pub fn new(label: &str, work: Duration) -> Self {
        Worker {
            label: label.to_owned(),
            work,
            interrupt: Interrupt::new(),
        }
    }

    /// Handle that cuts the simulated work short.
    pub fn interrupt(&self) -> Interrupt {
        self.interrupt.clone()
    }

    pub fn run(&self) -> Result<()> {
        info!("{} started.", self.label);
        self.interrupt.sleep(&self.label, self.work)?;
        info!("{} finished.", self.label);
        Ok(())
    }
}
