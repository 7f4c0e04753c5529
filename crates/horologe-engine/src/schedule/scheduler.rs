use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use slotmap::{SlotMap, new_key_type};

use crate::time::{Monotonic, SystemMonotonic};

/// Redraw cadence used by clock views unless overridden (~100 Hz).
pub const DEFAULT_REDRAW_INTERVAL: Duration = Duration::from_millis(10);

new_key_type! {
    /// Handle returned by [`Scheduler::start`].
    ///
    /// Tokens are generational: a token for a stopped task never matches a
    /// task started later in the same slot.
    pub struct TaskToken;
}

/// Identity of one [`Scheduler`] instance.
///
/// Task tokens are only meaningful to the scheduler that issued them; hosts
/// holding tokens from several schedulers compare ids before calling `stop`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SchedulerId(u64);

static NEXT_SCHEDULER_ID: AtomicU64 = AtomicU64::new(0);

/// Directive returned by task callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Passed to a task callback on every firing.
#[derive(Debug, Copy, Clone)]
pub struct Tick {
    pub token: TaskToken,
    /// Monotonic time the tick was dispatched at.
    pub now: Instant,
    /// Number of previous firings of this task.
    pub index: u64,
}

type TaskFn = Box<dyn FnMut(&Tick) -> TickControl>;

struct PeriodicTask {
    interval: Duration,
    /// `None` once `now + interval` no longer fits in an `Instant`.
    next_due: Option<Instant>,
    fired: u64,
    callback: TaskFn,
}

/// Single-threaded scheduler of self-re-arming periodic tasks.
pub struct Scheduler<C: Monotonic = SystemMonotonic> {
    id: SchedulerId,
    clock: C,
    tasks: SlotMap<TaskToken, PeriodicTask>,
}

impl Scheduler<SystemMonotonic> {
    pub fn new() -> Self {
        Self::with_clock(SystemMonotonic)
    }
}

impl Default for Scheduler<SystemMonotonic> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Monotonic> Scheduler<C> {
    pub fn with_clock(clock: C) -> Self {
        let id = SchedulerId(NEXT_SCHEDULER_ID.fetch_add(1, Ordering::Relaxed));
        Self { id, clock, tasks: SlotMap::with_key() }
    }

    pub fn id(&self) -> SchedulerId {
        self.id
    }

    /// Registers a periodic task. The first tick is due immediately.
    pub fn start<F>(&mut self, interval: Duration, callback: F) -> TaskToken
    where
        F: FnMut(&Tick) -> TickControl + 'static,
    {
        let token = self.tasks.insert(PeriodicTask {
            interval,
            next_due: Some(self.clock.now()),
            fired: 0,
            callback: Box::new(callback),
        });
        log::debug!("scheduler: started {token:?} every {interval:?}");
        token
    }

    /// Cancels a task. Returns `false` if the token was already stopped.
    ///
    /// Once this returns, the task's callback will not run again.
    pub fn stop(&mut self, token: TaskToken) -> bool {
        let removed = self.tasks.remove(token);
        if let Some(task) = &removed {
            log::debug!("scheduler: stopped {token:?} after {} ticks", task.fired);
        }
        removed.is_some()
    }

    pub fn is_active(&self, token: TaskToken) -> bool {
        self.tasks.contains_key(token)
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Earliest pending deadline, or `None` when nothing is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.values().filter_map(|t| t.next_due).min()
    }

    /// Time until the earliest deadline, saturating at zero.
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.next_deadline().map(|due| due.saturating_duration_since(now))
    }

    /// Fires every task whose deadline has passed, at most once each.
    ///
    /// A task is re-armed at `clock.now() + interval` read after its callback
    /// returns, so a slow tick pushes the next one back and a late poll never
    /// replays missed ticks. An interval too large to add to `now` parks the
    /// task: it stays registered but never fires again. Returns the number of
    /// callbacks invoked.
    pub fn run_due(&mut self) -> usize {
        let now = self.clock.now();

        let mut due: Vec<(Instant, TaskToken)> = self
            .tasks
            .iter()
            .filter_map(|(token, task)| {
                task.next_due.filter(|&due| due <= now).map(|due| (due, token))
            })
            .collect();
        due.sort();

        let mut fired = 0;
        for (_, token) in due {
            let Some(task) = self.tasks.get_mut(token) else {
                continue;
            };

            let tick = Tick { token, now, index: task.fired };
            let control = (task.callback)(&tick);
            task.fired += 1;
            fired += 1;

            match control {
                TickControl::Continue => {
                    task.next_due = self.clock.now().checked_add(task.interval);
                    if task.next_due.is_none() {
                        log::warn!("scheduler: {token:?} interval {:?} overflows; parked", task.interval);
                    }
                    log::trace!("scheduler: {token:?} tick {} re-armed", tick.index);
                }
                TickControl::Stop => {
                    self.tasks.remove(token);
                    log::debug!("scheduler: {token:?} stopped itself after {} ticks", tick.index + 1);
                }
            }
        }

        fired
    }
}

impl<C: Monotonic> fmt::Debug for Scheduler<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("id", &self.id)
            .field("tasks", &self.tasks.len())
            .field("next_deadline", &self.next_deadline())
            .finish()
    }
}
