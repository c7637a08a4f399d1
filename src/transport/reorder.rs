//! Receive-side reordering buffer.
//!
//! Arrived frames are held here, newest first, until the owner drains
//! them for dispatch in chronological order.

use std::collections::VecDeque;

use super::frame::Frame;

/// Received frames pending dispatch, ordered most recent first.
///
/// Frames usually arrive close to in order, so the insertion point is
/// searched from the most recent end; the common case inserts at the
/// front without scanning the whole buffer.
#[derive(Debug, Default)]
pub struct RecvQueue {
    frames: VecDeque<Frame>,
}

impl RecvQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames awaiting dispatch.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frames are awaiting dispatch.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Insert a received frame, keeping the queue ordered most recent
    /// first.
    ///
    /// Duplicates are not filtered: a replayed sequence number is queued
    /// again, behind any frame already holding the same number.
    pub fn insert(&mut self, frame: Frame) {
        let at = self
            .frames
            .iter()
            .position(|queued| frame.seq().more_recent_than(queued.seq()))
            .unwrap_or(self.frames.len());
        self.frames.insert(at, frame);
    }

    /// Drain every pending frame, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = Frame> + '_ {
        self.frames.drain(..).rev()
    }
}
