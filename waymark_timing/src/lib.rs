// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Timing: host-agnostic "run before the next repaint" callbacks.
//!
//! Browser code reaches for `requestAnimationFrame`; native code usually has
//! a redraw request plus a frame callback. This crate models the part both
//! share, without owning any event loop:
//!
//! - [`FrameQueue`]: one-shot payloads registered for the next frame, each
//!   identified by a [`FrameId`] that can be revoked before it fires.
//! - [`FrameSlot`]: a coalescing slot that keeps at most one payload of a
//!   kind pending, the "already scheduled" flag of a frame-throttled update.
//!
//! The host calls [`FrameQueue::take_frame`] once per display refresh and
//! dispatches the returned payloads in order. Payloads requested while a
//! frame is being dispatched land in the following frame.
//!
//! ## Example
//!
//! ```rust
//! use waymark_timing::{FrameQueue, FrameSlot};
//!
//! #[derive(Debug, PartialEq)]
//! enum Task {
//!     Repaint,
//!     Step,
//! }
//!
//! let mut queue = FrameQueue::new();
//! let mut repaint = FrameSlot::new();
//!
//! // Many requests within one frame coalesce into one.
//! assert!(repaint.request(&mut queue, Task::Repaint));
//! assert!(!repaint.request(&mut queue, Task::Repaint));
//!
//! // A revoked callback never fires.
//! let step = queue.request(Task::Step);
//! assert_eq!(queue.cancel(step), Some(Task::Step));
//!
//! let frame: Vec<_> = queue.take_frame().collect();
//! assert_eq!(frame.len(), 1);
//! let (id, task) = &frame[0];
//! assert_eq!(*task, Task::Repaint);
//! assert!(repaint.fire(*id));
//! assert!(!repaint.is_pending());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::{IntoIter, Vec};

/// Handle to a payload registered with a [`FrameQueue`].
///
/// Handles are never reused by the queue that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(u64);

/// Queue of one-shot payloads to dispatch on the next frame.
#[derive(Clone, Debug)]
pub struct FrameQueue<T> {
    next_id: u64,
    pending: Vec<(FrameId, T)>,
}

impl<T> Default for FrameQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Registers `payload` for the next frame.
    pub fn request(&mut self, payload: T) -> FrameId {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.pending.push((id, payload));
        id
    }

    /// Revokes a pending payload, returning it if it had not fired yet.
    pub fn cancel(&mut self, id: FrameId) -> Option<T> {
        let index = self.pending.iter().position(|(pending, _)| *pending == id)?;
        Some(self.pending.remove(index).1)
    }

    /// Returns `true` if `id` is registered and has not fired or been revoked.
    #[must_use]
    pub fn is_pending(&self, id: FrameId) -> bool {
        self.pending.iter().any(|(pending, _)| *pending == id)
    }

    /// Number of payloads waiting for the next frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is waiting for the next frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Revokes every pending payload.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Takes everything registered so far, in registration order.
    ///
    /// Payloads requested after this call belong to the next frame.
    pub fn take_frame(&mut self) -> IntoIter<(FrameId, T)> {
        core::mem::take(&mut self.pending).into_iter()
    }
}

/// Keeps at most one payload of a kind pending in a [`FrameQueue`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSlot {
    pending: Option<FrameId>,
}

impl FrameSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Registers `payload` unless this slot already has one pending.
    ///
    /// Returns `true` if a new payload was registered.
    pub fn request<T>(&mut self, queue: &mut FrameQueue<T>, payload: T) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(queue.request(payload));
        true
    }

    /// Marks the slot's payload as fired if `id` is the one it holds.
    ///
    /// Returns `false` for any other handle, which callers should treat as
    /// stale.
    pub fn fire(&mut self, id: FrameId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Revokes the pending payload, if any.
    pub fn cancel<T>(&mut self, queue: &mut FrameQueue<T>) {
        if let Some(id) = self.pending.take() {
            queue.cancel(id);
        }
    }

    /// Returns `true` while a payload is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle of the pending payload, if any.
    #[must_use]
    pub fn id(&self) -> Option<FrameId> {
        self.pending
    }
}
