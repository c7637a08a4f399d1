//! RADL Protocol - Transport layer.
//!
//! Everything between raw datagrams and the dispatcher:
//!
//! - **Frame encoding/decoding**: [`Frame`] and wire format handling
//! - **Acknowledgment tracking**: [`AckTracker`] for the receive-side
//!   ack/bitmask pair stamped into outgoing headers
//! - **Sent-frame bookkeeping**: [`SentLedger`] with expiry-driven
//!   retransmission of reliable frames
//! - **Receive reordering**: [`RecvQueue`] restoring chronological order
//! - **Connection state machine**: [`Connection`] tying it all together
//!   per peer
//! - **Async socket glue**: [`LinkSocket`] (requires the `transport`
//!   feature)
//!
//! # Architecture
//!
//! The transport layer sits between the UDP socket and whatever
//! dispatcher interprets payloads. It handles sequencing, acknowledgment,
//! and retransmission while remaining agnostic to payload contents.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            Dispatcher                   │
//! ├─────────────────────────────────────────┤
//! │         Transport Layer                 │  ← This module
//! │   frames, acks, ledger, reordering      │
//! ├─────────────────────────────────────────┤
//! │              UDP                        │
//! └─────────────────────────────────────────┘
//! ```

mod ack;
mod connection;
mod frame;
mod ledger;
mod reorder;
#[cfg(feature = "transport")]
mod socket;

pub use ack::AckTracker;
pub use connection::{Connection, Transmit};
pub use frame::Frame;
pub use ledger::{AckOutcome, SentLedger};
pub use reorder::RecvQueue;
#[cfg(feature = "transport")]
#[cfg_attr(docsrs, doc(cfg(feature = "transport")))]
pub use socket::{DEFAULT_RECV_BUFFER_SIZE, LinkSocket, LinkSocketBuilder};
