use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::task::{self, log_failure, Task};
use crate::{CounterTask, Result, SharedCounter, SignalGate, SignalTask, Timings, Worker};

/// What a finished run observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub final_count: usize,
    /// Values seen by each counter task, `None` for a task that failed.
    pub counter_runs: Vec<Option<Vec<usize>>>,
    pub notified: bool,
    /// Time the main thread spent waiting for the notification.
    pub waited: Duration,
}

fn spawn_worker(label: &str, timings: &Timings) -> Result<Task<Option<()>>> {
    let worker = Worker::new(label, timings.worker_work);
    task::spawn(label, move || log_failure(worker.run()))
}

fn spawn_counter(
    label: &str,
    counter: &SharedCounter,
    timings: &Timings,
) -> Result<Task<Option<Vec<usize>>>> {
    let counter_task = CounterTask::new(
        label,
        counter.clone(),
        timings.increments_per_task,
        timings.counter_pause,
    );
    task::spawn(label, move || log_failure(counter_task.run()))
}

/// Runs the whole demo on the calling thread.
///
/// Task failures are logged by the tasks themselves and only show up here as
/// `None` entries or `notified == false`. The returned error is reserved for
/// threads that could not be spawned or that panicked.
pub fn run(timings: &Timings) -> Result<Report> {
    let first = spawn_worker("Thread-1", timings)?;
    let second = spawn_worker("Thread-2", timings)?;

    let counter = SharedCounter::new();
    let third = spawn_counter("Thread-3", &counter, timings)?;
    let fourth = spawn_counter("Thread-4", &counter, timings)?;
    let counter_runs = vec![third.join()?, fourth.join()?];

    let (notifier, mut listener) = SignalGate::new().split();
    let signal_task = SignalTask::new("Thread-5", timings.signal_delay, notifier);
    let fifth = task::spawn("Thread-5", move || log_failure(signal_task.run()))?;

    let started = Instant::now();
    let notified = match listener.wait() {
        Ok(()) => {
            info!("Main thread received notification from {}.", fifth.label());
            true
        }
        Err(err) => {
            error!(error = ?err, "Main thread was not notified: {}", err);
            false
        }
    };
    let waited = started.elapsed();

    first.join()?;
    second.join()?;
    fifth.join()?;

    info!("Main thread execution finished.");
    Ok(Report {
        final_count: counter.value(),
        counter_runs,
        notified,
        waited,
    })
}
