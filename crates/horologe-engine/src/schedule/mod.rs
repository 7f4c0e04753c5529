//! Cancellable periodic tasks for redraw scheduling.
//!
//! The scheduler is polled by the host loop on the thread that draws:
//! - `start()` returns a `TaskToken`; the first tick is due immediately
//! - `run_due()` fires due tasks and re-arms each one *after* its callback returns
//! - `stop()` removes a task; its callback is never invoked again
//! - `next_deadline()` tells the host how long it may sleep

mod scheduler;

pub use scheduler::{
    DEFAULT_REDRAW_INTERVAL, Scheduler, SchedulerId, TaskToken, Tick, TickControl,
};
