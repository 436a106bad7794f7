use std::time::Duration;

/// Durations and counts of the demo scenario.
///
/// `Timings::default()` reproduces the classic run: one second of worker
/// "work", five increments half a second apart, and a two second delay
/// before the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub worker_work: Duration,
    pub counter_pause: Duration,
    pub increments_per_task: usize,
    pub signal_delay: Duration,
}

impl Timings {
    /// Divides every duration by `divisor`, keeping the increment count.
    pub fn scaled(divisor: u32) -> Self {
        let base = Timings::default();
        let divisor = divisor.max(1);
        Timings {
            worker_work: base.worker_work / divisor,
            counter_pause: base.counter_pause / divisor,
            increments_per_task: base.increments_per_task,
            signal_delay: base.signal_delay / divisor,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Timings {
            worker_work: Duration::from_millis(1000),
            counter_pause: Duration::from_millis(500),
            increments_per_task: 5,
            signal_delay: Duration::from_millis(2000),
        }
    }
}
