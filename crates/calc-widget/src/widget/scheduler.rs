//! Deferred tasks on a logical millisecond clock
//!
//! The widget uses this to clear error messages after a delay. Time only
//! moves when [`Scheduler::advance`] is called, which keeps tests
//! deterministic and leaves real timers to whoever hosts the widget.

use serde::{Deserialize, Serialize};

/// Handle returned by [`Scheduler::schedule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct ScheduledTask<T> {
    handle: TaskHandle,
    due_ms: u64,
    task: T,
}

/// Cancellable deferred tasks
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_id: u64,
    tasks: Vec<ScheduledTask<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Creates a scheduler at time zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            tasks: Vec::new(),
        }
    }

    /// Current logical time
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of tasks not yet fired or cancelled
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// True if `handle` is still scheduled
    #[must_use]
    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    /// Schedules `task` to fire `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: u64, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            handle,
            due_ms: self.now_ms.saturating_add(delay_ms),
            task,
        });
        handle
    }

    /// Cancels a task; returns false if it already fired or was cancelled
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    /// Advances time and returns the tasks that came due, in due order
    ///
    /// Tasks due at the same instant fire in scheduling order.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<T> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let now = self.now_ms;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|t| t.due_ms <= now);
        self.tasks = waiting;

        due.sort_by_key(|t| (t.due_ms, t.handle.0));
        due.into_iter().map(|t| t.task).collect()
    }
}
