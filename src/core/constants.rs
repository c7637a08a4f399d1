//! Protocol constants for the RADL wire format.
//!
//! These values are fixed by the protocol and MUST NOT be changed.

// =============================================================================
// WIRE FORMAT
// =============================================================================

/// Wire header size in bytes (protocol + seq + ack + ack_bits).
pub const HEADER_SIZE: usize = 10;

/// Maximum total datagram size, header included.
pub const MAX_DATAGRAM_SIZE: usize = 512;

/// Maximum payload bytes a single frame can carry.
pub const MAX_PAYLOAD_SIZE: usize = MAX_DATAGRAM_SIZE - HEADER_SIZE;

// =============================================================================
// ACKNOWLEDGMENT WINDOW
// =============================================================================

/// Width of the acknowledgment history bitmask in packets.
///
/// One header acknowledges the latest received sequence number plus the
/// `ACK_WINDOW` numbers immediately preceding it.
pub const ACK_WINDOW: u16 = 32;

/// Half of the 16-bit sequence space.
///
/// Recency between two sequence numbers is only decidable while they are
/// at most this far apart; that is a protocol-level assumption, not
/// something the arithmetic enforces.
pub const HALF_SEQ_SPACE: u16 = 32768;
