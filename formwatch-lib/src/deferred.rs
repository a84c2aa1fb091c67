//! One-shot deferred tasks on a virtual clock.

use std::collections::VecDeque;
use std::time::Duration;

/// Identifier of a scheduled task, unique within one queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeferredId(u64);

#[derive(Debug)]
struct Deferred<T> {
    id: DeferredId,
    due: Duration,
    task: T,
}

/// Queue of one-shot tasks that fire after a fixed delay.
///
/// Time only moves when the owner calls [`advance`](Self::advance). Tasks
/// cannot be cancelled or rescheduled once queued; each fires exactly once
/// when the clock reaches its due time, regardless of what happened in
/// between.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use formwatch_lib::deferred::DeferredQueue;
///
/// let mut queue = DeferredQueue::new();
/// queue.schedule(Duration::from_millis(2000), "reset");
///
/// assert!(queue.advance(Duration::from_millis(1999)).is_empty());
/// assert_eq!(queue.advance(Duration::from_millis(1)), vec!["reset"]);
/// ```
#[derive(Debug)]
pub struct DeferredQueue<T> {
    now: Duration,
    next_id: u64,
    /// Sorted by due time, then by schedule order.
    pending: VecDeque<Deferred<T>>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DeferredQueue<T> {
    /// Creates an empty queue with the clock at zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: VecDeque::new(),
        }
    }

    /// Schedules `task` to fire `delay` after the current clock.
    pub fn schedule(&mut self, delay: Duration, task: T) -> DeferredId {
        let id = DeferredId(self.next_id);
        self.next_id += 1;

        let due = self.now.saturating_add(delay);
        // Equal due times keep schedule order
        let at = self.pending.partition_point(|d| d.due <= due);
        self.pending.insert(at, Deferred { id, due, task });
        log::debug!("deferred {:?} scheduled for {:?}", id, due);
        id
    }

    /// Moves the clock forward and returns every task that became due, in
    /// firing order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        self.now = self.now.saturating_add(elapsed);

        let mut fired = Vec::new();
        while self.pending.front().is_some_and(|d| d.due <= self.now) {
            if let Some(deferred) = self.pending.pop_front() {
                log::debug!("deferred {:?} fired at {:?}", deferred.id, self.now);
                fired.push(deferred.task);
            }
        }
        fired
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Due time of the next pending task.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.front().map(|d| d.due)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_at_due_time() {
        let mut queue = DeferredQueue::new();
        queue.schedule(ms(100), 1);

        assert!(queue.advance(ms(99)).is_empty());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.advance(ms(1)), vec![1]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_orders_by_due_then_schedule_order() {
        let mut queue = DeferredQueue::new();
        queue.schedule(ms(50), "late");
        queue.schedule(ms(10), "first");
        queue.schedule(ms(10), "second");

        assert_eq!(queue.next_due(), Some(ms(10)));
        assert_eq!(queue.advance(ms(100)), vec!["first", "second", "late"]);
    }

    #[test]
    fn test_delay_is_relative_to_current_clock() {
        let mut queue = DeferredQueue::new();
        queue.advance(ms(1000));
        queue.schedule(ms(500), ());

        assert_eq!(queue.next_due(), Some(ms(1500)));
        assert!(queue.advance(ms(499)).is_empty());
        assert_eq!(queue.advance(ms(1)).len(), 1);
        assert_eq!(queue.now(), ms(1500));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut queue = DeferredQueue::new();
        let a = queue.schedule(ms(1), ());
        let b = queue.schedule(ms(1), ());
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut queue = DeferredQueue::new();
        queue.schedule(Duration::ZERO, 7);
        assert_eq!(queue.advance(Duration::ZERO), vec![7]);
    }
}
