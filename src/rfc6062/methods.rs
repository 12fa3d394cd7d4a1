//! Methods that are defined in [RFC 6062 -- 6.1. New STUN Methods].
//!
//! [RFC 6062 -- 6.1. New STUN Methods]: https://tools.ietf.org/html/rfc6062#section-6.1
use crate::method::Method;

/// Connect method.
///
/// Asks the server to open a TCP connection to a peer.
pub const CONNECT: Method = Method(0x00a);

/// ConnectionBind method.
///
/// Binds a freshly opened client connection to a peer connection.
pub const CONNECTION_BIND: Method = Method(0x00b);

/// ConnectionAttempt method.
///
/// Only indication semantics defined.
pub const CONNECTION_ATTEMPT: Method = Method(0x00c);
