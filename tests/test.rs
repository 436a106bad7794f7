use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use sync_demo::{
    CounterTask, Interrupt, SharedCounter, SignalGate, SignalTask, SyncError, Timings, WaiterState,
    Worker,
};

const ATTEMPTS: usize = 20; // number of attempts for searching races and deadlocks
const THREADS_NUMBER: usize = 100;
const INCREMENTS_PER_TASK: usize = 5;
const EXPECTED_AFTER_TWO_TASKS: usize = 10;
const SHORT_PAUSE: Duration = Duration::from_millis(1);
const SIGNAL_DELAY: Duration = Duration::from_millis(30);
const LONG_WORK: Duration = Duration::from_secs(10);

#[test]
fn shared_counter_loses_no_updates() {
    for _ in 0..ATTEMPTS {
        let counter = SharedCounter::new();

        let thread_handlers = (0..THREADS_NUMBER)
            .map(|_| {
                let counter = counter.clone();
                thread::spawn(move || counter.increment())
            })
            .collect::<Vec<_>>();

        let mut seen = thread_handlers
            .into_iter()
            .map(|handler| handler.join().unwrap())
            .collect::<Vec<_>>();
        seen.sort_unstable();

        assert_eq!(counter.value(), THREADS_NUMBER);
        assert_eq!(seen, (1..=THREADS_NUMBER).collect::<Vec<_>>());
    }
}

#[test]
fn shared_counter_under_rayon_pool() {
    let pool = ThreadPoolBuilder::new().num_threads(4).build().unwrap();
    let counter = SharedCounter::new();

    pool.install(|| {
        (0..1000).into_par_iter().for_each(|_| {
            counter.increment();
        })
    });

    assert_eq!(counter.value(), 1000);
}

#[test]
fn two_counter_tasks_reach_ten() {
    for _ in 0..ATTEMPTS {
        let counter = SharedCounter::new();
        let third = CounterTask::new("Thread-3", counter.clone(), INCREMENTS_PER_TASK, SHORT_PAUSE);
        let fourth = CounterTask::new("Thread-4", counter.clone(), INCREMENTS_PER_TASK, SHORT_PAUSE);

        let third = thread::spawn(move || third.run());
        let fourth = thread::spawn(move || fourth.run());
        let third = third.join().unwrap().unwrap();
        let fourth = fourth.join().unwrap().unwrap();

        // Each join returns only after all of that task's increments
        assert_eq!(third.len(), INCREMENTS_PER_TASK);
        assert_eq!(fourth.len(), INCREMENTS_PER_TASK);
        for seen in [&third, &fourth].iter() {
            assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
        }

        let mut all = third.into_iter().chain(fourth).collect::<Vec<_>>();
        all.sort_unstable();
        assert_eq!(all, (1..=EXPECTED_AFTER_TWO_TASKS).collect::<Vec<_>>());
        assert_eq!(counter.value(), EXPECTED_AFTER_TWO_TASKS);
    }
}

#[test]
fn interrupted_counter_task_stops_early() {
    let counter = SharedCounter::new();
    let counter_task = CounterTask::new("Thread-3", counter.clone(), INCREMENTS_PER_TASK, LONG_WORK);
    counter_task.interrupt().interrupt();

    let result = counter_task.run();

    assert!(matches!(result, Err(SyncError::Interrupted { ref label }) if label == "Thread-3"));
    assert_eq!(counter.value(), 1);
}

#[test]
fn worker_finishes_after_its_work() {
    let worker = Worker::new("Thread-1", SHORT_PAUSE * 10);
    let started = Instant::now();

    worker.run().unwrap();

    assert!(started.elapsed() >= SHORT_PAUSE * 10);
}

#[test]
fn interrupted_worker_terminates_early() {
    let worker = Worker::new("Thread-1", LONG_WORK);
    let interrupt = worker.interrupt();
    let started = Instant::now();

    let handler = thread::spawn(move || worker.run());
    thread::sleep(SHORT_PAUSE * 20);
    interrupt.interrupt();
    let result = handler.join().unwrap();

    assert!(matches!(result, Err(SyncError::Interrupted { ref label }) if label == "Thread-1"));
    assert!(started.elapsed() < LONG_WORK);
}

#[test]
fn interrupt_before_sleep_fails_immediately() {
    let interrupt = Interrupt::new();
    interrupt.interrupt();

    assert!(interrupt.is_interrupted());
    assert!(interrupt.sleep("sleeper", LONG_WORK).is_err());
}

#[test]
fn listener_resumes_only_after_signal_delay() {
    for _ in 0..ATTEMPTS {
        let (notifier, mut listener) = SignalGate::new().split();
        let signal_task = SignalTask::new("Thread-5", SIGNAL_DELAY, notifier);
        assert_eq!(listener.state(), WaiterState::Idle);

        let started = Instant::now();
        let handler = thread::spawn(move || signal_task.run());
        listener.wait().unwrap();

        assert!(started.elapsed() >= SIGNAL_DELAY);
        assert_eq!(listener.state(), WaiterState::Resumed);
        handler.join().unwrap().unwrap();
    }
}

#[test]
fn notification_never_precedes_will_notify() {
    for _ in 0..ATTEMPTS {
        let events = Arc::new(Mutex::new(Vec::new()));
        let (mut notifier, mut listener) = SignalGate::new().split();

        let handler = {
            let events = Arc::clone(&events);
            thread::spawn(move || {
                let mut gate = notifier.hold().unwrap();
                assert_eq!(gate.waiter(), WaiterState::Waiting);
                events.lock().unwrap().push("will notify");
                thread::sleep(SHORT_PAUSE);
                gate.notify();
                events.lock().unwrap().push("notified");
            })
        };

        listener.wait().unwrap();
        events.lock().unwrap().push("received notification");
        handler.join().unwrap();

        // The listener resumes only once the gate guard is released
        assert_eq!(
            *events.lock().unwrap(),
            vec!["will notify", "notified", "received notification"]
        );
    }
}

#[test]
fn signal_sent_before_waiting_is_not_lost() {
    let (notifier, mut listener) = SignalGate::new().split();

    notifier.notify();
    assert_eq!(listener.state(), WaiterState::Signaled);

    listener.wait().unwrap();
    assert_eq!(listener.state(), WaiterState::Resumed);
    // Waiting again after resuming returns at once
    listener.wait().unwrap();
}

#[test]
fn dropped_notifier_unblocks_listener() {
    let (notifier, mut listener) = SignalGate::new().split();

    let handler = thread::spawn(move || {
        thread::sleep(SHORT_PAUSE * 10);
        drop(notifier);
    });

    assert!(matches!(listener.wait(), Err(SyncError::NotifierDropped)));
    handler.join().unwrap();
}

#[test]
fn dropped_listener_fails_rendezvous() {
    let (mut notifier, listener) = SignalGate::new().split();
    drop(listener);

    assert!(matches!(notifier.hold(), Err(SyncError::ListenerDropped)));
}

#[test]
fn interrupted_signal_task_releases_listener() {
    let (notifier, mut listener) = SignalGate::new().split();
    let signal_task = SignalTask::new("Thread-5", LONG_WORK, notifier);
    let interrupt = signal_task.interrupt();

    let handler = thread::spawn(move || signal_task.run());
    let interrupter = thread::spawn(move || {
        thread::sleep(SHORT_PAUSE * 20);
        interrupt.interrupt();
    });

    assert!(matches!(listener.wait(), Err(SyncError::NotifierDropped)));
    assert!(matches!(
        handler.join().unwrap(),
        Err(SyncError::Interrupted { .. })
    ));
    interrupter.join().unwrap();
}

#[test]
fn panicking_task_is_reported_on_join() {
    let task = sync_demo::spawn("Thread-9", || -> usize { panic!("boom") }).unwrap();

    assert_eq!(task.label(), "Thread-9");
    assert!(matches!(task.join(), Err(SyncError::TaskPanicked { ref label }) if label == "Thread-9"));
}

#[test]
fn log_failure_keeps_only_successes() {
    assert_eq!(sync_demo::log_failure(Ok(3)), Some(3));
    assert_eq!(
        sync_demo::log_failure::<()>(Err(SyncError::NotifierDropped)),
        None
    );
}

#[test]
fn default_timings_match_the_classic_run() {
    let timings = Timings::default();

    assert_eq!(timings.worker_work, Duration::from_millis(1000));
    assert_eq!(timings.counter_pause, Duration::from_millis(500));
    assert_eq!(timings.increments_per_task, 5);
    assert_eq!(timings.signal_delay, Duration::from_millis(2000));
    assert_eq!(Timings::scaled(100).signal_delay, Duration::from_millis(20));
}

#[test]
fn whole_run_terminates_with_ten() {
    let timings = Timings::scaled(100);
    let started = Instant::now();

    let report = sync_demo::run(&timings).unwrap();

    assert_eq!(report.final_count, EXPECTED_AFTER_TWO_TASKS);
    assert!(report.notified);
    assert!(report.waited >= timings.signal_delay);
    for run in &report.counter_runs {
        assert_eq!(run.as_ref().map(Vec::len), Some(INCREMENTS_PER_TASK));
    }
    // Generous bound: counter phase plus signal delay plus scheduling slack
    assert!(started.elapsed() < Duration::from_secs(5));
}
