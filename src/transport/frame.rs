//! Frame encoding and decoding for the RADL wire format.
//!
//! A frame is one owned byte buffer: a fixed 10-byte header followed by
//! payload bytes, capped at 512 bytes total (the UDP payload budget for
//! this protocol). Header fields are decoded and encoded directly in the
//! buffer, so a header mutation is immediately visible in the bytes
//! handed to the socket.

use crate::core::{FrameError, HEADER_SIZE, MAX_DATAGRAM_SIZE, SeqNum};

/// Byte offsets of the header fields within the wire buffer.
mod offsets {
    /// Payload schema tag.
    pub const PROTOCOL: usize = 0;
    /// Sender-assigned sequence number.
    pub const SEQ: usize = 2;
    /// Most recent sequence number the sender received from its peer.
    pub const ACK: usize = 4;
    /// History bitmask for the packets preceding `ACK`.
    pub const ACK_BITS: usize = 6;
}

/// A single wire frame: header plus payload.
///
/// Wire format (all fields little-endian):
///
/// ```text
/// +----------+----------+----------+------------+---------------+
/// | protocol | seq      | ack      | ack_bits   | payload       |
/// | 2 bytes  | 2 bytes  | 2 bytes  | 4 bytes    | 0..=502 bytes |
/// +----------+----------+----------+------------+---------------+
/// ```
///
/// `ack_bits` bit *k* set means sequence number `ack - (k + 1)` was also
/// received by the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    // Everything that goes across the wire lives here.
    buffer: Vec<u8>,
}

impl Frame {
    /// Create an outgoing frame with the header reserved and `protocol`
    /// set.
    ///
    /// The remaining header fields stay zero until the connection stamps
    /// them at send time.
    pub fn outgoing(protocol: u16) -> Self {
        let mut buffer = Vec::with_capacity(MAX_DATAGRAM_SIZE);
        buffer.resize(HEADER_SIZE, 0);
        let mut frame = Self { buffer };
        frame.put_u16(offsets::PROTOCOL, protocol);
        frame
    }

    /// Wrap and validate incoming datagram bytes.
    ///
    /// Fails with [`FrameError::TooShort`] when the datagram cannot hold
    /// a header. The bytes are otherwise copied verbatim; interpreting
    /// the payload is the dispatcher's responsibility.
    pub fn parse(bytes: &[u8]) -> Result<Self, FrameError> {
        if bytes.len() < HEADER_SIZE {
            return Err(FrameError::TooShort {
                expected: HEADER_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            buffer: bytes.to_vec(),
        })
    }

    /// Append payload bytes after the header.
    ///
    /// Fails with [`FrameError::PayloadTooLarge`] when the frame would
    /// grow past [`MAX_DATAGRAM_SIZE`].
    pub fn append_payload(&mut self, data: &[u8]) -> Result<(), FrameError> {
        let total = self.buffer.len() + data.len();
        if total > MAX_DATAGRAM_SIZE {
            return Err(FrameError::PayloadTooLarge {
                limit: MAX_DATAGRAM_SIZE,
                actual: total,
            });
        }
        self.buffer.extend_from_slice(data);
        Ok(())
    }

    /// Payload schema tag.
    pub fn protocol(&self) -> u16 {
        self.get_u16(offsets::PROTOCOL)
    }

    /// Sender-assigned sequence number.
    pub fn seq(&self) -> SeqNum {
        SeqNum::new(self.get_u16(offsets::SEQ))
    }

    /// Stamp the sequence number.
    pub fn set_seq(&mut self, seq: SeqNum) {
        self.put_u16(offsets::SEQ, seq.get());
    }

    /// The most recent sequence number the sender had received from its
    /// peer when this frame was stamped.
    pub fn ack(&self) -> SeqNum {
        SeqNum::new(self.get_u16(offsets::ACK))
    }

    /// Stamp the acknowledgment high-water mark.
    pub fn set_ack(&mut self, ack: SeqNum) {
        self.put_u16(offsets::ACK, ack.get());
    }

    /// Acknowledgment history bitmask.
    pub fn ack_bits(&self) -> u32 {
        let at = offsets::ACK_BITS;
        u32::from_le_bytes([
            self.buffer[at],
            self.buffer[at + 1],
            self.buffer[at + 2],
            self.buffer[at + 3],
        ])
    }

    /// Stamp the acknowledgment history bitmask.
    pub fn set_ack_bits(&mut self, bits: u32) {
        let at = offsets::ACK_BITS;
        self.buffer[at..at + 4].copy_from_slice(&bits.to_le_bytes());
    }

    /// Payload bytes (everything after the header).
    pub fn payload(&self) -> &[u8] {
        &self.buffer[HEADER_SIZE..]
    }

    /// The full wire buffer, header first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    fn get_u16(&self, at: usize) -> u16 {
        u16::from_le_bytes([self.buffer[at], self.buffer[at + 1]])
    }

    fn put_u16(&mut self, at: usize, value: u16) {
        self.buffer[at..at + 2].copy_from_slice(&value.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_PAYLOAD_SIZE;

    #[test]
    fn test_outgoing_reserves_header() {
        let frame = Frame::outgoing(0x00A1);
        assert_eq!(frame.as_bytes().len(), HEADER_SIZE);
        assert_eq!(frame.protocol(), 0x00A1);
        assert_eq!(frame.seq(), SeqNum::ZERO);
        assert_eq!(frame.ack(), SeqNum::ZERO);
        assert_eq!(frame.ack_bits(), 0);
        assert!(frame.payload().is_empty());
    }

    #[test]
    fn test_wire_layout_is_little_endian() {
        let mut frame = Frame::outgoing(0x0102);
        frame.set_seq(SeqNum::new(0x0304));
        frame.set_ack(SeqNum::new(0x0506));
        frame.set_ack_bits(0x0708090A);
        frame.append_payload(&[0xFF]).unwrap();

        assert_eq!(hex::encode(frame.as_bytes()), "0201040306050a090807ff");
    }

    #[test]
    fn test_header_mutation_visible_in_buffer() {
        let mut frame = Frame::outgoing(0);
        frame.set_seq(SeqNum::new(0xBEEF));
        assert_eq!(&frame.as_bytes()[2..4], &0xBEEFu16.to_le_bytes());
    }

    #[test]
    fn test_roundtrip_header_fields() {
        let mut frame = Frame::outgoing(0x0042);
        frame.set_seq(SeqNum::new(65535));
        frame.set_ack(SeqNum::new(32768));
        frame.set_ack_bits(0xDEADBEEF);
        frame.append_payload(b"telemetry").unwrap();

        let parsed = Frame::parse(frame.as_bytes()).unwrap();
        assert_eq!(parsed.protocol(), frame.protocol());
        assert_eq!(parsed.seq(), frame.seq());
        assert_eq!(parsed.ack(), frame.ack());
        assert_eq!(parsed.ack_bits(), frame.ack_bits());
        assert_eq!(parsed.payload(), b"telemetry");
    }

    #[test]
    fn test_parse_rejects_short_buffers() {
        for len in 0..HEADER_SIZE {
            let bytes = vec![0u8; len];
            assert_eq!(
                Frame::parse(&bytes),
                Err(FrameError::TooShort {
                    expected: HEADER_SIZE,
                    actual: len,
                }),
                "length {len} should be rejected"
            );
        }
        assert!(Frame::parse(&[0u8; HEADER_SIZE]).is_ok());
    }

    #[test]
    fn test_payload_cap() {
        let mut frame = Frame::outgoing(1);
        frame.append_payload(&vec![0u8; MAX_PAYLOAD_SIZE]).unwrap();
        assert_eq!(frame.as_bytes().len(), MAX_DATAGRAM_SIZE);

        let err = frame.append_payload(&[0]).unwrap_err();
        assert_eq!(
            err,
            FrameError::PayloadTooLarge {
                limit: MAX_DATAGRAM_SIZE,
                actual: MAX_DATAGRAM_SIZE + 1,
            }
        );
    }

    #[test]
    fn test_parse_keeps_payload_verbatim() {
        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes.extend_from_slice(&[9, 8, 7]);
        let frame = Frame::parse(&bytes).unwrap();
        assert_eq!(frame.payload(), &[9, 8, 7]);
    }
}
