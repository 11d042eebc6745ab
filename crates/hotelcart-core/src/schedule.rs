//! # Deferred Task Queue
//!
//! A single-threaded, virtual-time queue of one-shot tasks.
//!
//! Entering edit mode has to wait a moment before the date pickers can attach
//! to their inputs. Instead of a fire-and-forget timer, the card schedules a
//! task here and keeps the [`TaskHandle`]; tearing the card down cancels the
//! handle, so nothing fires against a card that no longer exists.
//!
//! ```text
//! t=0ms   toggle_edit   ──► schedule(50ms, InitPickers)  → handle #1
//! t=20ms  toggle_edit   ──► cancel(#1)                    (left edit mode)
//! t=50ms  advance       ──► nothing due
//! ```
//!
//! The owner drives time with [`DeferredQueue::advance`]; no threads or real
//! clocks are involved.

use std::time::Duration;

/// Identifies a scheduled task. Cancelling twice, or after it fired, is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Pending<T> {
    handle: TaskHandle,
    due: Duration,
    payload: T,
}

/// Virtual-time one-shot task queue.
#[derive(Debug)]
pub struct DeferredQueue<T> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        DeferredQueue {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time since the queue was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `payload` to become due `delay` from now.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due: self.now.saturating_add(delay),
            payload,
        });
        handle
    }

    /// Cancels a pending task. Returns `true` if it was still pending.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    /// Number of tasks still waiting.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Moves the clock forward by `by` and returns every task now due,
    /// ordered by due time, then by scheduling order.
    ///
    /// ## Example
    /// ```rust
    /// use std::time::Duration;
    /// use hotelcart_core::schedule::DeferredQueue;
    ///
    /// let mut queue = DeferredQueue::new();
    /// let late = queue.schedule(Duration::from_millis(50), "late");
    /// queue.schedule(Duration::from_millis(10), "early");
    ///
    /// assert!(queue.advance(Duration::from_millis(5)).is_empty());
    ///
    /// let fired: Vec<&str> = queue
    ///     .advance(Duration::from_millis(100))
    ///     .into_iter()
    ///     .map(|(_, payload)| payload)
    ///     .collect();
    /// assert_eq!(fired, ["early", "late"]);
    /// assert!(!queue.cancel(late));
    /// ```
    ///
    /// The clock stops at `Duration::MAX` rather than overflowing.
    pub fn advance(&mut self, by: Duration) -> Vec<(TaskHandle, T)> {
        self.now = self.now.saturating_add(by);
        let now = self.now;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;

        due.sort_by_key(|p| (p.due, p.handle));
        due.into_iter().map(|p| (p.handle, p.payload)).collect()
    }
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        DeferredQueue::new()
    }
}
