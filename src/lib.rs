pub use counter_task::CounterTask;
pub use interrupt::Interrupt;
pub use orchestrator::{run, Report};
pub use shared_counter::SharedCounter;
pub use signal_gate::{GateGuard, Listener, Notifier, SignalGate, WaiterState};
pub use signal_task::SignalTask;
pub use sync_error::{Result, SyncError};
pub use task::{log_failure, spawn, Task};
pub use timings::Timings;
pub use worker::Worker;

mod counter_task;
mod interrupt;
mod orchestrator;
mod shared_counter;
mod signal_gate;
mod signal_task;
mod sync_error;
mod task;
mod timings;
mod worker;
