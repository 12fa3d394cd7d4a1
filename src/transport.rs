//! Transports that carry framed messages between a client and a server.
use crate::constants::{HEADER_SIZE, MAX_MESSAGE_LEN};
use crate::error::{ErrorKind, Result};
use crate::header::Header;
use std::io::{Read, Write};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, TcpStream, UdpSocket};
use std::time::{Duration, Instant};

/// The transport protocol a connection runs over.
///
/// The discriminants are the IANA protocol numbers carried in `REQUESTED-TRANSPORT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportProtocol {
    Udp = 17,
    Tcp = 6,
}
impl TransportProtocol {
    /// Returns the IANA protocol number.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// A connection that exchanges whole messages.
pub trait Transport: Sized {
    /// Writes one encoded message.
    fn write_message(&mut self, bytes: &[u8]) -> Result<()>;

    /// Reads one encoded message.
    ///
    /// Fails with `ErrorKind::Timeout` if the read deadline elapses first.
    fn read_message(&mut self) -> Result<Vec<u8>>;

    /// Sets the instant after which reads fail, or `None` to block indefinitely.
    fn set_read_deadline(&mut self, deadline: Option<Instant>) -> Result<()>;

    /// Returns the protocol of the connection.
    fn protocol(&self) -> TransportProtocol;

    /// Opens a new connection to the same remote endpoint.
    fn redial(&self) -> Result<Self>;
}

/// Reads one message from a byte stream.
///
/// The 20-byte header is read first; its length field then tells how many
/// more bytes belong to the message.
///
/// # Errors
///
/// - header errors (see [`Header::decode`])
/// - `ErrorKind::Oversized` if the declared length exceeds 2048 bytes
/// - `ErrorKind::Timeout` or `ErrorKind::Io` from the underlying reader
///
/// [`Header::decode`]: ../header/struct.Header.html#method.decode
pub fn read_framed<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    track!(read_framed_with(reader, |_| Ok(())))
}

/// Like [`read_framed`], calling `before_read` ahead of the header read and
/// again ahead of the body read.
///
/// [`read_framed`]: ./fn.read_framed.html
pub fn read_framed_with<R, F>(reader: &mut R, mut before_read: F) -> Result<Vec<u8>>
where
    R: Read,
    F: FnMut(&mut R) -> Result<()>,
{
    let mut bytes = vec![0; HEADER_SIZE];
    track!(before_read(reader))?;
    track!(reader.read_exact(&mut bytes).map_err(crate::Error::from))?;
    let header = track!(Header::decode(&bytes))?;
    let length = header.length() as usize;
    track_assert!(length <= MAX_MESSAGE_LEN, ErrorKind::Oversized; length);

    bytes.resize(HEADER_SIZE + length, 0);
    track!(before_read(reader))?;
    track!(reader
        .read_exact(&mut bytes[HEADER_SIZE..])
        .map_err(crate::Error::from))?;
    Ok(bytes)
}

fn remaining(deadline: Option<Instant>) -> Result<Option<Duration>> {
    match deadline {
        None => Ok(None),
        Some(deadline) => {
            let now = Instant::now();
            track_assert!(deadline > now, ErrorKind::Timeout);
            Ok(Some(deadline - now))
        }
    }
}

fn unspecified(peer: &SocketAddr) -> SocketAddr {
    let ip = match peer {
        SocketAddr::V4(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        SocketAddr::V6(_) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
    };
    SocketAddr::new(ip, 0)
}

/// Message transport over a byte stream, usually a `TcpStream`.
#[derive(Debug)]
pub struct StreamTransport<S = TcpStream> {
    stream: S,
    deadline: Option<Instant>,
}
impl<S: Read + Write> StreamTransport<S> {
    /// Makes a new `StreamTransport` instance.
    pub fn new(stream: S) -> Self {
        StreamTransport {
            stream,
            deadline: None,
        }
    }

    /// Returns a reference to the underlying stream.
    pub fn stream_ref(&self) -> &S {
        &self.stream
    }

    /// Takes ownership of this instance, and returns the underlying stream.
    pub fn into_stream(self) -> S {
        self.stream
    }
}
impl StreamTransport<TcpStream> {
    /// Connects to `server` over TCP.
    pub fn connect(server: SocketAddr) -> Result<Self> {
        let stream = track!(TcpStream::connect(server).map_err(crate::Error::from); server)?;
        Ok(Self::new(stream))
    }
}
impl Transport for StreamTransport<TcpStream> {
    fn write_message(&mut self, bytes: &[u8]) -> Result<()> {
        track!(self.stream.write_all(bytes).map_err(crate::Error::from))?;
        Ok(())
    }

    fn read_message(&mut self) -> Result<Vec<u8>> {
        // The header read may use up part of the time left, so the timeout is
        // recomputed before the body is read.
        let deadline = self.deadline;
        track!(read_framed_with(&mut self.stream, |stream| {
            let timeout = track!(remaining(deadline))?;
            track!(stream.set_read_timeout(timeout).map_err(crate::Error::from))
        }))
    }

    fn set_read_deadline(&mut self, deadline: Option<Instant>) -> Result<()> {
        self.deadline = deadline;
        Ok(())
    }

    fn protocol(&self) -> TransportProtocol {
        TransportProtocol::Tcp
    }

    fn redial(&self) -> Result<Self> {
        let peer = track!(self.stream.peer_addr().map_err(crate::Error::from))?;
        track!(Self::connect(peer))
    }
}

/// Message transport over a connected `UdpSocket`, one datagram per message.
#[derive(Debug)]
pub struct DatagramTransport {
    socket: UdpSocket,
    deadline: Option<Instant>,
}
impl DatagramTransport {
    /// Makes a new `DatagramTransport` instance from a connected socket.
    pub fn new(socket: UdpSocket) -> Self {
        DatagramTransport {
            socket,
            deadline: None,
        }
    }

    /// Binds an ephemeral local port and connects it to `server`.
    pub fn connect(server: SocketAddr) -> Result<Self> {
        let socket =
            track!(UdpSocket::bind(unspecified(&server)).map_err(crate::Error::from); server)?;
        track!(socket.connect(server).map_err(crate::Error::from); server)?;
        Ok(Self::new(socket))
    }

    /// Returns a reference to the underlying socket.
    pub fn socket_ref(&self) -> &UdpSocket {
        &self.socket
    }
}
impl Transport for DatagramTransport {
    fn write_message(&mut self, bytes: &[u8]) -> Result<()> {
        let written = track!(self.socket.send(bytes).map_err(crate::Error::from))?;
        track_assert_eq!(written, bytes.len(), ErrorKind::Io);
        Ok(())
    }

    fn read_message(&mut self) -> Result<Vec<u8>> {
        let timeout = track!(remaining(self.deadline))?;
        track!(self
            .socket
            .set_read_timeout(timeout)
            .map_err(crate::Error::from))?;

        let mut buf = vec![0; HEADER_SIZE + MAX_MESSAGE_LEN];
        let size = track!(self.socket.recv(&mut buf).map_err(crate::Error::from))?;
        buf.truncate(size);
        Ok(buf)
    }

    fn set_read_deadline(&mut self, deadline: Option<Instant>) -> Result<()> {
        self.deadline = deadline;
        Ok(())
    }

    fn protocol(&self) -> TransportProtocol {
        TransportProtocol::Udp
    }

    fn redial(&self) -> Result<Self> {
        let peer = track!(self.socket.peer_addr().map_err(crate::Error::from))?;
        track!(Self::connect(peer))
    }
}
