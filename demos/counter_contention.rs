use sync_demo::{log_failure, CounterTask, SharedCounter, Timings};

use rayon::ThreadPoolBuilder;

const TASKS: usize = 8;

fn main() {
    tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_target(false)
        .init();

    let pool = ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .unwrap();

    let timings = Timings::scaled(50);
    let counter = SharedCounter::new();

    pool.scope(|scope| {
        for i in 0..TASKS {
            let counter_task = CounterTask::new(
                &format!("Counter-{}", i),
                counter.clone(),
                timings.increments_per_task,
                timings.counter_pause,
            );
            scope.spawn(move |_| {
                log_failure(counter_task.run());
            });
        }
    });

    println!("{}", counter.value()); //40
}
