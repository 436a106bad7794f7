use std::time::Duration;

use crate::{Interrupt, Result, SharedCounter};

/// Increments a [`SharedCounter`] a fixed number of times, pausing after
/// each increment.
pub struct CounterTask {
    label: String,
    counter: SharedCounter,
    increments: usize,
    pause: Duration,
    interrupt: Interrupt,
}

impl CounterTask {
    pub fn new(label: &str, counter: SharedCounter, increments: usize, pause: Duration) -> Self {
        CounterTask {
            label: label.to_owned(),
            counter,
            increments,
            pause,
            interrupt: Interrupt::new(),
        }
    }

    pub fn interrupt(&self) -> Interrupt {
        self.interrupt.clone()
    }

    /// Returns the counter values produced by this task's own increments.
    /// An interrupted pause ends the run after the increment it followed.
    pub fn run(&self) -> Result<Vec<usize>> {
        let mut seen = Vec::with_capacity(self.increments);
        for _ in 0..self.increments {
            seen.push(self.counter.increment());
            self.interrupt.sleep(&self.label, self.pause)?;
        }
        Ok(seen)
    }
}
