//! Receive-side acknowledgment tracking.
//!
//! [`AckTracker`] is this side's record of the peer's traffic: the most
//! recent sequence number received plus a 32-bit bitmask covering the
//! packets immediately preceding it. The pair is stamped into the
//! `ack`/`ack_bits` fields of every outgoing frame, so acknowledgments
//! piggyback on whatever traffic is already flowing.

use crate::core::{ACK_WINDOW, SeqNum};

/// Sliding view of what this side has received from the peer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AckTracker {
    ack: SeqNum,
    ack_bits: u32,
}

impl AckTracker {
    /// Create a tracker with no traffic recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent sequence number received from the peer.
    pub fn ack(&self) -> SeqNum {
        self.ack
    }

    /// History bitmask for the packets preceding [`ack`](Self::ack).
    pub fn ack_bits(&self) -> u32 {
        self.ack_bits
    }

    /// Record the sequence number of a received frame.
    ///
    /// A more recent number slides the window forward, aging out packets
    /// more than [`ACK_WINDOW`] behind the new high-water mark. An older
    /// number within the window sets its history bit; anything further
    /// behind is too old to represent and is silently discarded.
    pub fn record(&mut self, seq: SeqNum) {
        if seq.more_recent_than(self.ack) {
            let delta = seq - self.ack;
            self.ack_bits = if delta < ACK_WINDOW {
                self.ack_bits >> delta
            } else {
                0
            };
            self.ack = seq;
        } else {
            let delta = self.ack - seq;
            if delta < ACK_WINDOW {
                self.ack_bits |= 1u32 << delta;
            }
        }
    }
}
