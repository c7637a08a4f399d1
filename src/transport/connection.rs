//! Per-peer connection state machine.
//!
//! [`Connection`] ties the pieces together for one peer: it stamps
//! outgoing frames with sequence numbers and acknowledgment state, keeps
//! sent frames in the ledger until the peer confirms or expires them,
//! and buffers received frames for in-order dispatch.
//!
//! Retransmission is driven by traffic, not timers: an unacknowledged
//! reliable frame is only retried once enough newer traffic has pushed it
//! outside the 32-wide acknowledgment window. A connection that stops
//! exchanging frames entirely will never retransmit; steady keep-alive or
//! application traffic is assumed.

use std::collections::VecDeque;
use std::io;
use std::net::SocketAddr;

use tracing::{debug, warn};

use crate::core::{Dispatch, SeqNum};

use super::ack::AckTracker;
use super::frame::Frame;
use super::ledger::SentLedger;
use super::reorder::RecvQueue;

/// A stamped datagram waiting for the external socket.
#[derive(Debug, Clone)]
pub struct Transmit {
    /// Sequence number stamped into the datagram's header.
    pub seq: SeqNum,
    /// The wire bytes to hand to the socket.
    pub bytes: Vec<u8>,
}

/// Reliability state for a single, already-established peer.
///
/// The connection never performs I/O and never blocks. Outgoing datagrams
/// queue up for [`poll_transmit`](Self::poll_transmit), the socket
/// reports transmission results back through
/// [`on_send_result`](Self::on_send_result), and received datagrams enter
/// through [`handle_receive`](Self::handle_receive).
///
/// All mutation goes through `&mut self`, which makes the borrow checker
/// the serialization discipline the state needs: to drive a connection
/// from both an application task and a socket completion context, wrap it
/// in a mutex or confine it to one task.
#[derive(Debug)]
pub struct Connection {
    peer: SocketAddr,
    local_seq: SeqNum,
    acks: AckTracker,
    ledger: SentLedger,
    queue: RecvQueue,
    outbox: VecDeque<Transmit>,
}

impl Connection {
    /// Create the reliability state for one peer.
    pub fn new(peer: SocketAddr) -> Self {
        Self {
            peer,
            local_seq: SeqNum::ZERO,
            acks: AckTracker::new(),
            ledger: SentLedger::new(),
            queue: RecvQueue::new(),
            outbox: VecDeque::new(),
        }
    }

    /// The peer this connection belongs to.
    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Frames sent but not yet acknowledged or expired.
    pub fn in_flight(&self) -> usize {
        self.ledger.len()
    }

    /// Received frames not yet handed to the dispatcher.
    pub fn pending_dispatch(&self) -> usize {
        self.queue.len()
    }

    /// Stamp a frame and queue it for transmission.
    ///
    /// Assigns the next local sequence number, stamps the current
    /// acknowledgment state into the header, queues the wire bytes for
    /// [`poll_transmit`](Self::poll_transmit), and records the frame in
    /// the sent ledger. Returns the assigned sequence number.
    pub fn send(&mut self, mut frame: Frame, reliable: bool) -> SeqNum {
        let seq = self.next_seq();
        frame.set_seq(seq);
        frame.set_ack(self.acks.ack());
        frame.set_ack_bits(self.acks.ack_bits());

        self.outbox.push_back(Transmit {
            seq,
            bytes: frame.as_bytes().to_vec(),
        });
        self.ledger.record(frame, reliable);
        seq
    }

    /// Next stamped datagram awaiting the socket, if any.
    pub fn poll_transmit(&mut self) -> Option<Transmit> {
        self.outbox.pop_front()
    }

    /// Socket completion report for the datagram carrying `seq`.
    ///
    /// A transmission failure abandons the ledger entry without retry: a
    /// transport-level failure is distinct from non-acknowledgment, and
    /// only the latter triggers retransmission.
    pub fn on_send_result(&mut self, seq: SeqNum, result: io::Result<()>) {
        if let Err(error) = result {
            warn!(%seq, %error, "send failed, abandoning frame");
            self.ledger.remove(seq);
        }
    }

    /// Fold one received frame into the connection state.
    ///
    /// Updates the acknowledgment tracker from the frame's sequence
    /// number, retires or expires ledger entries from its ack fields,
    /// then buffers the frame for in-order dispatch. Expired reliable
    /// frames go back out through the normal send path and pick up fresh
    /// sequence numbers.
    pub fn handle_receive(&mut self, frame: Frame) {
        self.acks.record(frame.seq());

        let outcome = self.ledger.process_peer_acks(frame.ack(), frame.ack_bits());
        for seq in &outcome.acked {
            debug!(%seq, "acknowledged");
        }
        if outcome.dropped > 0 {
            debug!(count = outcome.dropped, "expired unreliable frames dropped");
        }
        for expired in outcome.retransmit {
            debug!(seq = %expired.seq(), "expired unacknowledged, retransmitting");
            self.send(expired, true);
        }

        self.queue.insert(frame);
    }

    /// Deliver every buffered frame to `dispatcher`, oldest first.
    ///
    /// Dispatch order is a public guarantee: the dispatcher observes
    /// frames in ascending wraparound-adjusted sequence order, and the
    /// receive buffer is empty afterwards.
    pub fn dispatch_received<D: Dispatch>(&mut self, dispatcher: &mut D) {
        let peer = self.peer;
        for frame in self.queue.drain() {
            dispatcher.dispatch(peer, frame);
        }
    }

    fn next_seq(&mut self) -> SeqNum {
        let seq = self.local_seq;
        self.local_seq = seq.next();
        seq
    }
}
