//! Async UDP socket glue for driving a [`Connection`].
//!
//! The connection itself never touches a socket. [`LinkSocket`] is the
//! provided tokio implementation of the transmission collaborator: it
//! moves queued datagrams onto the wire and feeds per-datagram results
//! back into the connection, and it receives and parses incoming
//! datagrams for the owner to route.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::UdpSocket;

use crate::core::LinkResult;

use super::connection::Connection;
use super::frame::Frame;

/// Default receive buffer size.
///
/// Comfortably larger than any valid frame, so an oversized datagram is
/// received whole rather than silently truncated at the socket.
pub const DEFAULT_RECV_BUFFER_SIZE: usize = 2048;

/// Async UDP socket wrapper for RADL frames.
#[derive(Debug)]
pub struct LinkSocket {
    /// The underlying UDP socket.
    socket: Arc<UdpSocket>,
    /// Receive buffer.
    recv_buffer: Vec<u8>,
}

impl LinkSocket {
    /// Bind to the given address.
    pub async fn bind(addr: SocketAddr) -> io::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        Ok(Self::from_socket(socket))
    }

    /// Wrap an existing UDP socket.
    pub fn from_socket(socket: UdpSocket) -> Self {
        Self {
            socket: Arc::new(socket),
            recv_buffer: vec![0u8; DEFAULT_RECV_BUFFER_SIZE],
        }
    }

    /// Local address the socket is bound to.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Connect to a remote address (for single-peer sockets).
    pub async fn connect(&self, addr: SocketAddr) -> io::Result<()> {
        self.socket.connect(addr).await
    }

    /// Send raw bytes to a specific address.
    pub async fn send_to(&self, data: &[u8], addr: SocketAddr) -> io::Result<usize> {
        self.socket.send_to(data, addr).await
    }

    /// Receive raw bytes and return the sender's address.
    pub async fn recv_from(&mut self) -> io::Result<(&[u8], SocketAddr)> {
        let (len, addr) = self.socket.recv_from(&mut self.recv_buffer).await?;
        Ok((&self.recv_buffer[..len], addr))
    }

    /// Transmit every datagram queued on `conn`, reporting each result
    /// back through [`Connection::on_send_result`].
    ///
    /// Returns the number of datagrams handed to the socket. Individual
    /// failures are absorbed by the connection (logged and abandoned),
    /// never surfaced here.
    pub async fn flush(&self, conn: &mut Connection) -> usize {
        let peer = conn.peer();
        let mut sent = 0;
        while let Some(transmit) = conn.poll_transmit() {
            match self.socket.send_to(&transmit.bytes, peer).await {
                Ok(_) => {
                    sent += 1;
                    conn.on_send_result(transmit.seq, Ok(()));
                }
                Err(error) => conn.on_send_result(transmit.seq, Err(error)),
            }
        }
        sent
    }

    /// Receive one datagram and parse it as a frame.
    ///
    /// Malformed datagrams surface as [`LinkError::Frame`]; the caller
    /// discards them and keeps receiving.
    ///
    /// [`LinkError::Frame`]: crate::core::LinkError::Frame
    pub async fn recv_frame(&mut self) -> LinkResult<(Frame, SocketAddr)> {
        let (len, from) = self.socket.recv_from(&mut self.recv_buffer).await?;
        let frame = Frame::parse(&self.recv_buffer[..len])?;
        Ok((frame, from))
    }

    /// Reference to the underlying socket.
    pub fn inner(&self) -> &UdpSocket {
        &self.socket
    }
}

/// Builder for creating link sockets with custom options.
#[derive(Debug, Clone)]
pub struct LinkSocketBuilder {
    recv_buffer_size: usize,
}

impl Default for LinkSocketBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkSocketBuilder {
    /// Create a new socket builder with default options.
    pub fn new() -> Self {
        Self {
            recv_buffer_size: DEFAULT_RECV_BUFFER_SIZE,
        }
    }

    /// Set the receive buffer size.
    pub fn recv_buffer_size(mut self, size: usize) -> Self {
        self.recv_buffer_size = size;
        self
    }

    /// Bind to the given address and create a socket.
    pub async fn bind(self, addr: SocketAddr) -> io::Result<LinkSocket> {
        let socket = UdpSocket::bind(addr).await?;
        Ok(self.from_socket(socket))
    }

    /// Create a socket from an existing UDP socket.
    pub fn from_socket(self, socket: UdpSocket) -> LinkSocket {
        LinkSocket {
            socket: Arc::new(socket),
            recv_buffer: vec![0u8; self.recv_buffer_size],
        }
    }
}
