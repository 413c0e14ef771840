// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-animation-frame coalescing of DOM-visible writes.
//!
//! Scroll and resize handlers run passively and may request many updates
//! within one frame. Position and size writes must land as a single batch per
//! animation frame: a new request issued while one is pending merges into it
//! rather than queueing a duplicate, so the host flushes at most once per
//! frame no matter how many callers asked.
//!
//! The scheduler is deliberately clock-free. The host owns the frame source
//! (`requestAnimationFrame`, a compositor vsync, a test loop) and calls
//! [`CommitScheduler::take`] from its frame callback.

/// A pending update that can absorb a newer one.
pub trait MergeCommit {
    /// Merges `newer` into `self`; `self` keeps representing both requests.
    fn merge(&mut self, newer: Self);
}

/// Unit commits carry no payload; merging is a no-op. Useful when the flush
/// itself recomputes everything from current state.
impl MergeCommit for () {
    fn merge(&mut self, (): Self) {}
}

/// Coalesces update requests into at most one pending batch.
///
/// ```rust
/// use shelfside_virtual::{CommitScheduler, MergeCommit};
///
/// /// Positions to rewrite on the next frame.
/// #[derive(Debug, PartialEq)]
/// struct Moves(Vec<(u32, f64)>);
///
/// impl MergeCommit for Moves {
///     fn merge(&mut self, newer: Self) {
///         self.0.extend(newer.0);
///     }
/// }
///
/// let mut scheduler = CommitScheduler::new();
///
/// // First request within a frame: the host must schedule a callback.
/// assert!(scheduler.request(Moves(vec![(1, 10.0)])));
/// // Later requests in the same frame merge; nothing new to schedule.
/// assert!(!scheduler.request(Moves(vec![(2, 20.0)])));
///
/// // The frame callback drains one merged batch.
/// assert_eq!(scheduler.take(), Some(Moves(vec![(1, 10.0), (2, 20.0)])));
/// assert_eq!(scheduler.take(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CommitScheduler<T> {
    pending: Option<T>,
}

impl<T: MergeCommit> CommitScheduler<T> {
    /// Creates a scheduler with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Requests an update for the next frame.
    ///
    /// Returns `true` when the caller must schedule a frame callback (this is
    /// the first request since the last flush); `false` when the update was
    /// merged into an already-pending batch.
    pub fn request(&mut self, update: T) -> bool {
        match &mut self.pending {
            Some(pending) => {
                pending.merge(update);
                false
            }
            None => {
                self.pending = Some(update);
                true
            }
        }
    }

    /// Returns `true` if a batch is waiting for the next frame.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drains the pending batch; called from the host's frame callback.
    ///
    /// At most one batch comes out per frame. After a drain, the next
    /// [`CommitScheduler::request`] starts a new batch and asks for a new
    /// callback.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }
}
