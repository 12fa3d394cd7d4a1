//! Protocol constants.

/// The magic cookie value.
///
/// > The magic cookie field **MUST** contain the fixed value `0x2112A442` in
/// > network byte order.
/// > In [RFC 3489](https://tools.ietf.org/html/rfc3489), this field was part of
/// > the transaction ID; placing the magic cookie in this location allows
/// > a server to detect if the client will understand certain attributes
/// > that were added in this revised specification.  In addition, it aids
/// > in distinguishing STUN packets from packets of other protocols when
/// > STUN is multiplexed with those other protocols on the same port.
/// >
/// > ([RFC 5389 -- 6. STUN Message Structure](https://tools.ietf.org/html/rfc5389#section-6))
pub const MAGIC_COOKIE: u32 = 0x2112_A442;

/// Size of the fixed message header in bytes.
pub const HEADER_SIZE: usize = 20;

/// Size of an attribute TLV header (type and length) in bytes.
pub const ATTRIBUTE_HEADER_SIZE: usize = 4;

/// Largest message body accepted from a stream transport.
pub const MAX_MESSAGE_LEN: usize = 2048;

/// The value XOR'ed with the CRC-32 of a `FINGERPRINT` attribute ("STUN").
pub const FINGERPRINT_XOR: u32 = 0x5354_554e;

/// Upper bound of the value length of `REALM` and `NONCE` attributes.
pub const MAX_REALM_OR_NONCE_LEN: usize = 763;
