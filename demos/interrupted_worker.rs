use std::thread;
use std::time::Duration;

use sync_demo::{log_failure, Worker};

fn main() {
    tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_target(false)
        .init();

    let worker = Worker::new("Thread-1", Duration::from_secs(60));
    let interrupt = worker.interrupt();
    let handler = thread::spawn(move || log_failure(worker.run()));

    thread::sleep(Duration::from_millis(100)); //emulation of a change of plans
    interrupt.interrupt();

    assert!(handler.join().unwrap().is_none()); //"Thread-1 finished." is never printed
}
