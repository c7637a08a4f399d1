//! Core traits for the RADL protocol.
//!
//! These traits define the seams to the external collaborators that own
//! connections and interpret payloads.

use std::net::SocketAddr;

use crate::transport::Frame;

/// Consumer of delivered frames.
///
/// The dispatcher is the layer above the connection: it interprets frame
/// payloads according to their `protocol` tag and routes them onward.
/// [`Connection::dispatch_received`](crate::transport::Connection::dispatch_received)
/// invokes it once per buffered frame, oldest pending frame first, so the
/// dispatcher always observes ascending wraparound-adjusted sequence
/// order. There is no return contract back into the connection.
///
/// # Example
///
/// ```
/// use std::net::SocketAddr;
/// use radl_protocol::{Dispatch, Frame};
///
/// struct SeqLog(Vec<u16>);
///
/// impl Dispatch for SeqLog {
///     fn dispatch(&mut self, _peer: SocketAddr, frame: Frame) {
///         self.0.push(frame.seq().get());
///     }
/// }
/// ```
pub trait Dispatch {
    /// Handle one delivered frame from `peer`.
    fn dispatch(&mut self, peer: SocketAddr, frame: Frame);
}
