//! Attributes that are defined in [RFC 5766 -- 14. New STUN Attributes].
//!
//! [RFC 5766 -- 14. New STUN Attributes]: https://tools.ietf.org/html/rfc5766#section-14
use crate::attribute::{
    decode_u32, encode_u32, fixed_value_bytes, value_bytes, Attribute, AttributeType,
    DecodeContext, EncodeContext,
};
use crate::error::{ErrorKind, Result};
use byteorder::{BigEndian, ByteOrder};
use std::fmt;
use std::time::Duration;

/// `CHANNEL-NUMBER` attribute.
///
/// See [RFC 5766 -- 14.1. CHANNEL-NUMBER] about this attribute.
///
/// [RFC 5766 -- 14.1. CHANNEL-NUMBER]: https://tools.ietf.org/html/rfc5766#section-14.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelNumber(u16);
impl ChannelNumber {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x000C;

    /// Minimum channel number.
    pub const MIN: u16 = 0x4000;

    /// Maximum channel number.
    pub const MAX: u16 = 0x7FFF;

    /// Makes a new `ChannelNumber` instance.
    ///
    /// # Errors
    ///
    /// If `n` is not a number between `ChannelNumber::MIN` and `ChannelNumber::MAX`,
    /// this will return an `ErrorKind::InvalidInput` error.
    pub fn new(n: u16) -> Result<Self> {
        track_assert!(n >= Self::MIN, ErrorKind::InvalidInput; n);
        track_assert!(n <= Self::MAX, ErrorKind::InvalidInput; n);
        Ok(ChannelNumber(n))
    }

    /// Returns the channel number indicated by the attribute.
    pub fn value(self) -> u16 {
        self.0
    }
}
impl Attribute for ChannelNumber {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        4
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        Ok(encode_u32(u32::from(self.0) << 16))
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(fixed_value_bytes(bytes, declared_len, 4))?;
        let n = track!(decode_u32(value))?;
        track!(ChannelNumber::new((n >> 16) as u16))
    }
}
impl fmt::Display for ChannelNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// `LIFETIME` attribute.
///
/// See [RFC 5766 -- 14.2. LIFETIME] about this attribute.
///
/// [RFC 5766 -- 14.2. LIFETIME]: https://tools.ietf.org/html/rfc5766#section-14.2
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lifetime(Duration);
impl Lifetime {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x000D;

    /// Makes a new `Lifetime` instance.
    ///
    /// Note that the nanoseconds part of `lifetime` is ignored and always set to `0`.
    ///
    /// # Errors
    ///
    /// If the seconds part of `lifetime` is greater than `0xFFFF_FFFF`,
    /// this function will return an `ErrorKind::InvalidInput` error.
    pub fn new(lifetime: Duration) -> Result<Self> {
        let lifetime_seconds = lifetime.as_secs();
        track_assert!(lifetime_seconds <= 0xFFFF_FFFF, ErrorKind::InvalidInput);
        Ok(Lifetime(Duration::from_secs(lifetime_seconds)))
    }

    /// Returns the lifetime indicated by the attribute.
    pub fn lifetime(&self) -> Duration {
        self.0
    }
}
impl Attribute for Lifetime {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        4
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        Ok(encode_u32(self.0.as_secs() as u32))
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(fixed_value_bytes(bytes, declared_len, 4))?;
        let seconds = track!(decode_u32(value))?;
        Ok(Lifetime(Duration::from_secs(u64::from(seconds))))
    }
}

define_address_attribute!(
    /// `XOR-PEER-ADDRESS` attribute.
    ///
    /// See [RFC 5766 -- 14.3. XOR-PEER-ADDRESS] about this attribute.
    ///
    /// [RFC 5766 -- 14.3. XOR-PEER-ADDRESS]: https://tools.ietf.org/html/rfc5766#section-14.3
    XorPeerAddress,
    0x0012,
    xor
);

define_address_attribute!(
    /// `XOR-RELAYED-ADDRESS` attribute.
    ///
    /// See [RFC 5766 -- 14.5. XOR-RELAYED-ADDRESS] about this attribute.
    ///
    /// [RFC 5766 -- 14.5. XOR-RELAYED-ADDRESS]: https://tools.ietf.org/html/rfc5766#section-14.5
    XorRelayAddress,
    0x0016,
    xor
);

/// `DATA` attribute.
///
/// See [RFC 5766 -- 14.4. DATA] about this attribute.
///
/// [RFC 5766 -- 14.4. DATA]: https://tools.ietf.org/html/rfc5766#section-14.4
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Data(Vec<u8>);
impl Data {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x0013;

    /// Makes a new `Data` instance.
    ///
    /// # Errors
    ///
    /// If `data` does not fit in an attribute, this will return an `ErrorKind::InvalidInput` error.
    pub fn new(data: Vec<u8>) -> Result<Self> {
        track_assert!(data.len() <= 0xFFFF, ErrorKind::InvalidInput; data.len());
        Ok(Data(data))
    }

    /// Returns the data contained by the attribute.
    pub fn data(&self) -> &[u8] {
        &self.0
    }
}
impl Attribute for Data {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        self.0.len() as u16
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        Ok(self.0.clone())
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(value_bytes(bytes, declared_len))?;
        Ok(Data(value.to_vec()))
    }
}

/// `EVEN-PORT` attribute.
///
/// See [RFC 5766 -- 14.6. EVEN-PORT] about this attribute.
///
/// [RFC 5766 -- 14.6. EVEN-PORT]: https://tools.ietf.org/html/rfc5766#section-14.6
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvenPort(bool);
impl EvenPort {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x0018;

    /// Makes a new `EvenPort` instance.
    pub fn new(is_requested: bool) -> Self {
        EvenPort(is_requested)
    }

    /// Returns whether the client requested that the port in the relayed transport address be even.
    pub fn is_requested(&self) -> bool {
        self.0
    }
}
impl Attribute for EvenPort {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        1
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        Ok(vec![u8::from(self.0) << 7])
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(fixed_value_bytes(bytes, declared_len, 1))?;
        Ok(EvenPort((value[0] & 0b1000_0000) != 0))
    }
}

/// `REQUESTED-TRANSPORT` attribute.
///
/// The protocol number is followed by three reserved bytes.
///
/// See [RFC 5766 -- 14.7. REQUESTED-TRANSPORT] about this attribute.
///
/// [RFC 5766 -- 14.7. REQUESTED-TRANSPORT]: https://tools.ietf.org/html/rfc5766#section-14.7
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestedTransport(u8);
impl RequestedTransport {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x0019;

    /// Makes a new `RequestedTransport` instance.
    pub fn new(protocol: u8) -> Self {
        RequestedTransport(protocol)
    }

    /// Returns the transport protocol requested by the client.
    pub fn protocol(&self) -> u8 {
        self.0
    }
}
impl Attribute for RequestedTransport {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        4
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        Ok(encode_u32(u32::from(self.0) << 24))
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(fixed_value_bytes(bytes, declared_len, 4))?;
        let n = track!(decode_u32(value))?;
        Ok(RequestedTransport((n >> 24) as u8))
    }
}

/// `DONT-FRAGMENT` attribute.
///
/// See [RFC 5766 -- 14.8. DONT-FRAGMENT] about this attribute.
///
/// [RFC 5766 -- 14.8. DONT-FRAGMENT]: https://tools.ietf.org/html/rfc5766#section-14.8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DontFragment;
impl DontFragment {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x001A;
}
impl Attribute for DontFragment {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        0
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn decode(
        _attr_type: AttributeType,
        _bytes: &[u8],
        _declared_len: u16,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        Ok(DontFragment)
    }
}

/// `RESERVATION-TOKEN` attribute.
///
/// See [RFC 5766 -- 14.9. RESERVATION-TOKEN] about this attribute.
///
/// [RFC 5766 -- 14.9. RESERVATION-TOKEN]: https://tools.ietf.org/html/rfc5766#section-14.9
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReservationToken(u64);
impl ReservationToken {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x0022;

    /// Makes a new `ReservationToken` instance.
    pub fn new(token: u64) -> Self {
        ReservationToken(token)
    }

    /// Returns the token value contained by the attribute.
    pub fn token(&self) -> u64 {
        self.0
    }
}
impl Attribute for ReservationToken {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        8
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        let mut bytes = vec![0; 8];
        BigEndian::write_u64(&mut bytes, self.0);
        Ok(bytes)
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(fixed_value_bytes(bytes, declared_len, 8))?;
        let token = BigEndian::read_u64(value);
        Ok(ReservationToken(token))
    }
}
