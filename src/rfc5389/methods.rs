//! Methods that are defined in [RFC 5389].
//!
//! [RFC 5389]: https://tools.ietf.org/html/rfc5389
use crate::method::Method;

/// Binding method.
///
/// > In the Binding request/response transaction, a Binding request is
/// > sent from a STUN client to a STUN server.  When the Binding request
/// > arrives at the STUN server, it may have passed through one or more
/// > NATs between the STUN client and the STUN server.
/// >
/// > [RFC 5389 -- 3. Overview of Operation](https://tools.ietf.org/html/rfc5389#section-3)
pub const BINDING: Method = Method(0x001);
