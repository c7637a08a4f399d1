//! # RADL Protocol
//!
//! **R**eliable **A**pplication **D**atagram **L**ayer
//!
//! RADL is a selective-acknowledgment and ordering layer on top of
//! unreliable, unordered UDP datagrams, the kind of mechanism real-time
//! applications (games, telemetry) use to get retransmission and in-order
//! delivery without the overhead of a full stream protocol. It provides:
//!
//! - **Acknowledgment**: every frame carries the latest received sequence
//!   number plus a 32-bit history bitmask, so acks piggyback on traffic
//! - **Retransmission**: reliable frames that expire unacknowledged are
//!   re-sent automatically, driven by traffic rather than timers
//! - **Ordering**: received frames are buffered and handed to the
//!   dispatcher in ascending sequence order
//! - **Simplicity**: one 10-byte header, no handshake, no negotiation
//!
//! ## Feature Flags
//!
//! - `transport` (default): tokio UDP socket glue ([`LinkSocket`])
//!
//! ## Modules
//!
//! - [`core`]: constants, sequence arithmetic, errors, and the dispatcher
//!   contract (always included)
//! - [`transport`]: frames, the per-peer connection state machine, and
//!   the socket glue
//!
//! ## Example Usage
//!
//! ```rust
//! use std::net::SocketAddr;
//! use radl_protocol::prelude::*;
//!
//! struct Printer;
//!
//! impl Dispatch for Printer {
//!     fn dispatch(&mut self, peer: SocketAddr, frame: Frame) {
//!         println!("{peer}: {} payload bytes", frame.payload().len());
//!     }
//! }
//!
//! # fn main() -> Result<(), FrameError> {
//! let peer: SocketAddr = "127.0.0.1:9000".parse().unwrap();
//! let mut conn = Connection::new(peer);
//!
//! // Wrap a payload and let the connection stamp the header.
//! let mut frame = Frame::outgoing(0x0001);
//! frame.append_payload(b"state update")?;
//! conn.send(frame, true);
//!
//! // Hand queued datagrams to whatever socket moves the bytes.
//! while let Some(transmit) = conn.poll_transmit() {
//!     let _ = transmit.bytes;
//! }
//!
//! // Incoming datagrams flow back in, then drain in order.
//! let mut printer = Printer;
//! conn.dispatch_received(&mut printer);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core module (always included)
pub mod core;

// Transport layer (socket glue feature-gated inside)
pub mod transport;

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types, errors, and constants
    pub use crate::core::*;

    // Transport types
    pub use crate::transport::{
        AckOutcome, AckTracker, Connection, Frame, RecvQueue, SentLedger, Transmit,
    };

    // Socket glue (when enabled)
    #[cfg(feature = "transport")]
    pub use crate::transport::{LinkSocket, LinkSocketBuilder};
}

// Re-export commonly used items at crate root
pub use crate::core::{Dispatch, FrameError, LinkError, LinkResult, SeqNum};
pub use crate::transport::{Connection, Frame, Transmit};

#[cfg(feature = "transport")]
pub use crate::transport::LinkSocket;
