//! Deferred, cancellable tasks.
//!
//! The controller schedules exactly one kind of task (removing the
//! `theme-changing` class) and cancels the pending one before scheduling the
//! next. [`ManualScheduler`] runs tasks against a virtual clock for tests;
//! `TimeoutScheduler` uses browser timers.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::RefCell;
use std::rc::Rc;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Handle to a scheduled task.
pub trait TaskHandle {
    /// Cancel the task if it has not run yet. Cancelling a task that already
    /// ran does nothing.
    fn cancel(self);
}

pub trait Scheduler {
    type Handle: TaskHandle;

    /// Run `task` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle;
}

struct PendingTask {
    id: u64,
    due_ms: u64,
    task: Task,
}

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    next_id: u64,
    pending: Vec<PendingTask>,
}

/// Virtual-clock scheduler. Nothing runs until [`ManualScheduler::advance`].
/// Clones share the same clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    /// Number of tasks scheduled and not yet run or cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward, running due tasks in deadline order. Each task
    /// runs with the clock set to its own deadline.
    pub fn advance(&self, ms: u64) {
        let until = self.clock.borrow().now_ms + ms;
        while let Some(task) = self.pop_due(until) {
            task();
        }
        self.clock.borrow_mut().now_ms = until;
    }

    fn pop_due(&self, until: u64) -> Option<Task> {
        let mut clock = self.clock.borrow_mut();
        let index = clock
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due_ms <= until)
            .min_by_key(|(_, pending)| (pending.due_ms, pending.id))
            .map(|(index, _)| index)?;
        let due = clock.pending.remove(index);
        clock.now_ms = due.due_ms;
        Some(due.task)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Task) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due_ms = clock.now_ms + u64::from(delay_ms);
        clock.pending.push(PendingTask { id, due_ms, task });
        ManualHandle { id, clock: Rc::clone(&self.clock) }
    }
}

pub struct ManualHandle {
    id: u64,
    clock: Rc<RefCell<ManualClock>>,
}

impl TaskHandle for ManualHandle {
    fn cancel(self) {
        self.clock.borrow_mut().pending.retain(|pending| pending.id != self.id);
    }
}

/// Browser timers via `setTimeout`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

/// Owns the pending `setTimeout`; dropping it clears the timer.
#[cfg(feature = "hydrate")]
pub struct TimeoutHandle {
    timeout: gloo_timers::callback::Timeout,
}

#[cfg(feature = "hydrate")]
impl Scheduler for TimeoutScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay_ms: u32, task: Task) -> TimeoutHandle {
        TimeoutHandle { timeout: gloo_timers::callback::Timeout::new(delay_ms, task) }
    }
}

#[cfg(feature = "hydrate")]
impl TaskHandle for TimeoutHandle {
    fn cancel(self) {
        drop(self.timeout);
    }
}
