use std::thread;
use std::time::Instant;

use sync_demo::{SignalGate, SignalTask, Timings};

fn main() {
    tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_target(false)
        .init();

    let timings = Timings::scaled(4);
    let (notifier, mut listener) = SignalGate::new().split();
    let signal_task = SignalTask::new("Thread-5", timings.signal_delay, notifier);

    let started = Instant::now();
    let handler = thread::spawn(move || signal_task.run());
    listener.wait().unwrap();
    println!("woke after {:?} in state {:?}", started.elapsed(), listener.state());

    handler.join().unwrap().unwrap();
}
