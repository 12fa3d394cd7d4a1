//! Attributes that are defined in [RFC 6062 -- 6.2. New STUN Attributes].
//!
//! [RFC 6062 -- 6.2. New STUN Attributes]: https://tools.ietf.org/html/rfc6062#section-6.2
use crate::attribute::{
    decode_u32, encode_u32, fixed_value_bytes, Attribute, AttributeType, DecodeContext,
    EncodeContext,
};
use crate::error::Result;

/// `CONNECTION-ID` attribute.
///
/// An opaque identifier the server assigns to a peer connection in a `Connect`
/// response, echoed by the client in the `ConnectionBind` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u32);
impl ConnectionId {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x002A;

    /// Makes a new `ConnectionId` instance.
    pub fn new(id: u32) -> Self {
        ConnectionId(id)
    }

    /// Returns the identifier.
    pub fn value(self) -> u32 {
        self.0
    }
}
impl Attribute for ConnectionId {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        4
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        Ok(encode_u32(self.0))
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(fixed_value_bytes(bytes, declared_len, 4))?;
        let id = track!(decode_u32(value))?;
        Ok(ConnectionId(id))
    }
}
