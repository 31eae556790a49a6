//! Priority work queue shared by the search workers.
//!
//! Tasks come out shortest path first, which keeps the exploration close to
//! best-first even though many workers pull from it at once.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use parking_lot::{Condvar, Mutex};
use tracing::warn;

/// Broadcast stop signal observed by every worker.
#[derive(Debug, Default)]
pub(super) struct CancelToken(AtomicBool);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::SeqCst)
    }
}

/// One pending exploration: the path walked so far, ending at the word to
/// expand next. Every task owns its own copy of the path.
#[derive(Debug)]
pub(super) struct Task {
    carry: Vec<String>,
    weight: u32,
    sequence: u64,
}

impl Task {
    pub fn carry(&self) -> &[String] {
        &self.carry
    }

    /// The word this task expands.
    pub fn word(&self) -> &str {
        self.carry.last().map(String::as_str).unwrap_or_default()
    }
}

impl Ord for Task {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: shorter paths, then heavier words, then
        // older tasks compare greater.
        other
            .carry
            .len()
            .cmp(&self.carry.len())
            .then_with(|| self.weight.cmp(&other.weight))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
    }
}

impl Eq for Task {}

#[derive(Debug, Default)]
struct QueueState {
    heap: BinaryHeap<Task>,
    /// Tasks popped but not yet finished.
    active: usize,
    closed: bool,
    sequence: u64,
    executed: usize,
    dropped: usize,
}

/// Counters reported once a search ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct QueueStats {
    pub executed: usize,
    pub dropped: usize,
}

pub(super) struct WorkQueue {
    state: Mutex<QueueState>,
    available: Condvar,
    capacity: usize,
}

impl WorkQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(QueueState::default()),
            available: Condvar::new(),
            capacity,
        }
    }

    /// Enqueue a path for expansion. Returns false when the queue is closed
    /// or full and the task was dropped.
    pub fn push(&self, carry: Vec<String>, weight: u32) -> bool {
        let mut state = self.state.lock();
        if state.closed {
            return false;
        }
        if state.heap.len() >= self.capacity {
            if state.dropped == 0 {
                warn!(capacity = self.capacity, "work queue full, dropping tasks");
            }
            state.dropped += 1;
            return false;
        }

        let sequence = state.sequence;
        state.sequence += 1;
        state.heap.push(Task {
            carry,
            weight,
            sequence,
        });
        drop(state);

        self.available.notify_one();
        true
    }

    /// Block until a task is available. Returns `None` once the queue is
    /// closed or the search has been cancelled.
    pub fn pop(&self, cancel: &CancelToken) -> Option<Task> {
        let mut state = self.state.lock();
        loop {
            if state.closed || cancel.is_cancelled() {
                return None;
            }
            if let Some(task) = state.heap.pop() {
                state.active += 1;
                state.executed += 1;
                return Some(task);
            }
            self.available.wait(&mut state);
        }
    }

    /// Mark a popped task as done. Must follow every successful `pop`.
    pub fn finish(&self) {
        let mut state = self.state.lock();
        state.active = state.active.saturating_sub(1);
    }

    /// Close the queue and wake every blocked worker.
    pub fn close(&self) {
        self.state.lock().closed = true;
        self.available.notify_all();
    }

    /// True when nothing is queued and no popped task is still running.
    pub fn is_idle(&self) -> bool {
        let state = self.state.lock();
        state.heap.is_empty() && state.active == 0
    }

    pub fn stats(&self) -> QueueStats {
        let state = self.state.lock();
        QueueStats {
            executed: state.executed,
            dropped: state.dropped,
        }
    }
}
