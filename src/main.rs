use sync_demo::Timings;
use tracing::error;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_thread_names(true)
        .with_target(false)
        .init();

    if let Err(err) = sync_demo::run(&Timings::default()) {
        error!(error = ?err, "{}", err);
    }
}
