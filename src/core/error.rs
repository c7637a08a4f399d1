//! Error types for the RADL protocol.

use std::io;

use thiserror::Error;

/// Errors that can occur constructing or parsing a wire frame.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Incoming bytes are shorter than the wire header.
    ///
    /// The datagram is malformed and must be discarded by the receive
    /// path; there is nothing meaningful to salvage from it.
    #[error("malformed frame: expected at least {expected} bytes, got {actual}")]
    TooShort {
        /// Minimum expected size (the header size).
        expected: usize,
        /// Actual size received.
        actual: usize,
    },

    /// Appending payload would push the frame past the datagram budget.
    #[error("payload too large: {actual} bytes exceeds the {limit}-byte datagram budget")]
    PayloadTooLarge {
        /// Maximum total frame size.
        limit: usize,
        /// Size the frame would have grown to.
        actual: usize,
    },
}

/// Top-level RADL errors.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Frame construction or parsing failed.
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    /// I/O error from the underlying socket.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for link operations.
pub type LinkResult<T> = Result<T, LinkError>;
