//! Attribute framework: TLV framing, decode/encode contexts and the attribute registry.
use crate::attributes::AnyAttribute;
use crate::constants::{ATTRIBUTE_HEADER_SIZE, HEADER_SIZE};
use crate::credentials::Credentials;
use crate::error::{ErrorKind, Result};
use crate::header::Header;
use crate::message::Message;
use crate::TransactionId;
use bytecodec::bytes::Utf8Decoder;
use bytecodec::DecodeExt;
use byteorder::{BigEndian, ByteOrder};
use std::collections::HashMap;
use std::fmt;

/// STUN attribute.
///
/// > **Attribute**:  The STUN term for a Type-Length-Value (TLV) object that
/// > can be added to a STUN message. Attributes are divided into two
/// > types: comprehension-required and comprehension-optional. STUN
/// > agents can safely ignore comprehension-optional attributes they
/// > don't understand, but cannot successfully process a message if it
/// > contains comprehension-required attributes that are not
/// > understood.
/// >
/// > [RFC 5389 -- 5. Definitions]
///
/// [RFC 5389 -- 5. Definitions]: https://tools.ietf.org/html/rfc5389#section-5
pub trait Attribute: Sized + Clone {
    /// Returns the type of the attribute.
    fn get_type(&self) -> AttributeType;

    /// Returns the unpadded length of the value part, as written in the TLV length field.
    fn value_len(&self) -> u16;

    /// Encodes the value part of the attribute (without padding).
    ///
    /// `ctx` gives access to the enclosing message and the position of `self` in it.
    fn encode_value(&self, ctx: &EncodeContext) -> Result<Vec<u8>>;

    /// Decodes an attribute of type `attr_type` from `bytes`.
    ///
    /// `bytes` starts at the value part and may extend past it;
    /// `declared_len` is the length field of the TLV header.
    fn decode(
        attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        ctx: &mut DecodeContext,
    ) -> Result<Self>;
}

/// Attribute type.
///
/// > A STUN Attribute type is a hex number in the range 0x0000 - 0xFFFF.
/// > STUN attribute types in the range 0x0000 - 0x7FFF are considered
/// > comprehension-required; STUN attribute types in the range 0x8000 -
/// > 0xFFFF are considered comprehension-optional.
/// >
/// > [RFC 5389 -- 18.2. STUN Attribute Registry]
///
/// [RFC 5389 -- 18.2. STUN Attribute Registry]: https://tools.ietf.org/html/rfc5389#section-18.2
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct AttributeType(u16);
impl AttributeType {
    /// Makes a new `AttributeType` instance which corresponding to `codepoint`.
    pub fn new(codepoint: u16) -> Self {
        AttributeType(codepoint)
    }

    /// Returns the attribute codepoint corresponding this instance.
    pub fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns `true` if this is a comprehension-required type.
    pub fn is_comprehension_required(self) -> bool {
        self.0 < 0x8000
    }

    /// Returns `true` if this is a comprehension-optional type.
    pub fn is_comprehension_optional(self) -> bool {
        !self.is_comprehension_required()
    }
}
impl From<u16> for AttributeType {
    fn from(f: u16) -> Self {
        Self::new(f)
    }
}
impl fmt::Debug for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AttributeType({:#06x})", self.0)
    }
}

/// An attribute whose type is not understood, kept as raw value bytes.
///
/// Re-encoding it reproduces the original type and value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownAttribute {
    attr_type: AttributeType,
    value: Vec<u8>,
}
impl UnknownAttribute {
    /// Makes a new `UnknownAttribute` instance.
    pub fn new(attr_type: AttributeType, value: Vec<u8>) -> Self {
        UnknownAttribute { attr_type, value }
    }

    /// Returns a reference to the value bytes of the attribute.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Takes ownership of this instance, and returns the value bytes.
    pub fn into_value(self) -> Vec<u8> {
        self.value
    }
}
impl Attribute for UnknownAttribute {
    fn get_type(&self) -> AttributeType {
        self.attr_type
    }

    fn value_len(&self) -> u16 {
        self.value.len() as u16
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        Ok(self.value.clone())
    }

    fn decode(
        attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(value_bytes(bytes, declared_len))?;
        Ok(UnknownAttribute::new(attr_type, value.to_vec()))
    }
}

/// The view an attribute gets of its message while being encoded.
#[derive(Debug, Clone, Copy)]
pub struct EncodeContext<'a> {
    message: &'a Message,
    index: usize,
}
impl<'a> EncodeContext<'a> {
    pub(crate) fn new(message: &'a Message, index: usize) -> Self {
        EncodeContext { message, index }
    }

    /// Returns the message being encoded.
    pub fn message(&self) -> &'a Message {
        self.message
    }

    /// Returns the position of the attribute being encoded.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the transaction ID of the message, the XOR key of address attributes.
    pub fn transaction_id(&self) -> &'a TransactionId {
        self.message.header().transaction_id()
    }
}

/// The in-progress message an attribute gets while being decoded.
///
/// It holds the header, the attributes decoded so far and the credentials
/// that `REALM`, `NONCE` and `USERNAME` attributes update as they are seen.
#[derive(Debug, Clone)]
pub struct DecodeContext {
    message: Message,
    received: Vec<u8>,
    offset: usize,
}
impl DecodeContext {
    pub(crate) fn new(header: Header, credentials: Credentials) -> Self {
        DecodeContext {
            message: Message::new(header).with_credentials(credentials),
            received: Vec::new(),
            offset: 0,
        }
    }

    pub(crate) fn with_received(mut self, bytes: &[u8]) -> Self {
        self.received = bytes.to_vec();
        self
    }

    pub(crate) fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    /// Returns the received bytes preceding the attribute being decoded, with
    /// the header length patched to end right after that attribute.
    ///
    /// `value_len` is the unpadded value length of the attribute. This is the
    /// input of `MESSAGE-INTEGRITY` and `FINGERPRINT`; the bytes are taken as
    /// they arrived, padding included. `None` if the context was not built
    /// from received bytes.
    pub fn received_prefix(&self, value_len: u16) -> Option<Vec<u8>> {
        let mut bytes = self.received.get(..HEADER_SIZE + self.offset)?.to_vec();
        let length = self.offset + ATTRIBUTE_HEADER_SIZE + padded_len(value_len as usize);
        BigEndian::write_u16(&mut bytes[2..4], length as u16);
        Some(bytes)
    }

    /// Returns the message decoded so far.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Returns the transaction ID from the header being decoded.
    pub fn transaction_id(&self) -> &TransactionId {
        self.message.header().transaction_id()
    }

    /// Returns the credentials known so far.
    ///
    /// These start as the caller supplied ones and pick up the `REALM`,
    /// `NONCE` and `USERNAME` attributes preceding the current one.
    pub fn credentials(&self) -> &Credentials {
        self.message.credentials()
    }

    /// Replaces the credentials with the result of `f`.
    pub fn update_credentials<F>(&mut self, f: F)
    where
        F: FnOnce(Credentials) -> Credentials,
    {
        let credentials = f(self.message.credentials().clone());
        self.message.set_credentials(credentials);
    }

    pub(crate) fn push(&mut self, attribute: AnyAttribute) {
        self.message.add_attribute(attribute);
    }

    pub(crate) fn into_message(self) -> Message {
        self.message
    }
}

type DecodeFn = fn(AttributeType, &[u8], u16, &mut DecodeContext) -> Result<AnyAttribute>;

fn decode_as<T>(
    attr_type: AttributeType,
    bytes: &[u8],
    declared_len: u16,
    ctx: &mut DecodeContext,
) -> Result<AnyAttribute>
where
    T: Attribute + Into<AnyAttribute>,
{
    let attribute = track!(T::decode(attr_type, bytes, declared_len, ctx))?;
    Ok(attribute.into())
}

/// The set of attribute types a decoder understands.
///
/// Types that are not registered decode as [`UnknownAttribute`].
///
/// [`UnknownAttribute`]: ./struct.UnknownAttribute.html
#[derive(Clone, Default)]
pub struct AttributeSet {
    decoders: HashMap<u16, DecodeFn>,
}
impl AttributeSet {
    /// Makes an empty `AttributeSet` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the attributes defined in RFC 5389.
    pub fn stun() -> Self {
        use crate::rfc5389::attributes::*;
        let mut set = Self::new();
        set.register::<MappedAddress>(MappedAddress::CODEPOINT);
        set.register::<XorMappedAddress>(XorMappedAddress::CODEPOINT);
        set.register::<Username>(Username::CODEPOINT);
        set.register::<Realm>(Realm::CODEPOINT);
        set.register::<Nonce>(Nonce::CODEPOINT);
        set.register::<Software>(Software::CODEPOINT);
        set.register::<ErrorCode>(ErrorCode::CODEPOINT);
        set.register::<MessageIntegrity>(MessageIntegrity::CODEPOINT);
        set.register::<Fingerprint>(Fingerprint::CODEPOINT);
        set.register::<UnknownAttributes>(UnknownAttributes::CODEPOINT);
        set.register::<AlternateServer>(AlternateServer::CODEPOINT);
        set
    }

    /// Returns the STUN attributes plus the relay attributes of RFC 5766 and RFC 6062.
    pub fn turn() -> Self {
        use crate::rfc5766::attributes::*;
        use crate::rfc6062::attributes::ConnectionId;
        let mut set = Self::stun();
        set.register::<ChannelNumber>(ChannelNumber::CODEPOINT);
        set.register::<Lifetime>(Lifetime::CODEPOINT);
        set.register::<XorPeerAddress>(XorPeerAddress::CODEPOINT);
        set.register::<Data>(Data::CODEPOINT);
        set.register::<XorRelayAddress>(XorRelayAddress::CODEPOINT);
        set.register::<EvenPort>(EvenPort::CODEPOINT);
        set.register::<RequestedTransport>(RequestedTransport::CODEPOINT);
        set.register::<DontFragment>(DontFragment::CODEPOINT);
        set.register::<ReservationToken>(ReservationToken::CODEPOINT);
        set.register::<ConnectionId>(ConnectionId::CODEPOINT);
        set
    }

    /// Registers `T` as the decoder of the attribute type `codepoint`.
    pub fn register<T>(&mut self, codepoint: u16) -> &mut Self
    where
        T: Attribute + Into<AnyAttribute>,
    {
        self.decoders.insert(codepoint, decode_as::<T>);
        self
    }

    /// Returns `true` if the attribute type `codepoint` has a registered decoder.
    pub fn contains(&self, codepoint: u16) -> bool {
        self.decoders.contains_key(&codepoint)
    }

    /// Decodes the attribute at the start of `bytes`.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::Truncated` if `bytes` cannot hold the TLV header or the value
    /// - `ErrorKind::LengthMismatch` if the decoded value length differs from the declared one
    /// - any error of the attribute's own decoder
    pub fn decode_attribute(&self, bytes: &[u8], ctx: &mut DecodeContext) -> Result<AnyAttribute> {
        track_assert!(bytes.len() >= ATTRIBUTE_HEADER_SIZE, ErrorKind::Truncated; bytes.len());
        let attr_type = AttributeType::new(BigEndian::read_u16(&bytes[0..2]));
        let declared_len = BigEndian::read_u16(&bytes[2..4]);
        let value = &bytes[ATTRIBUTE_HEADER_SIZE..];

        let attribute = if let Some(decode) = self.decoders.get(&attr_type.as_u16()) {
            track!(decode(attr_type, value, declared_len, ctx); attr_type)?
        } else {
            let unknown = track!(UnknownAttribute::decode(
                attr_type,
                value,
                declared_len,
                ctx
            ))?;
            AnyAttribute::from(unknown)
        };
        track_assert_eq!(
            attribute.value_len(),
            declared_len,
            ErrorKind::LengthMismatch; attr_type
        );
        Ok(attribute)
    }
}
impl fmt::Debug for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut codepoints = self.decoders.keys().collect::<Vec<_>>();
        codepoints.sort();
        write!(f, "AttributeSet({:04x?})", codepoints)
    }
}

/// Returns the 4-byte TLV header of `attribute`: type followed by the unpadded value length.
pub fn attribute_header<A: Attribute>(attribute: &A) -> [u8; 4] {
    let mut header = [0; 4];
    BigEndian::write_u16(&mut header[0..2], attribute.get_type().as_u16());
    BigEndian::write_u16(&mut header[2..4], attribute.value_len());
    header
}

/// Encodes `attribute` as a TLV (header and unpadded value).
pub fn encode_attribute<A: Attribute>(attribute: &A, ctx: &EncodeContext) -> Result<Vec<u8>> {
    let value = track!(attribute.encode_value(ctx))?;
    track_assert_eq!(
        value.len(),
        attribute.value_len() as usize,
        ErrorKind::LengthMismatch; attribute.get_type()
    );
    let mut bytes = Vec::with_capacity(ATTRIBUTE_HEADER_SIZE + value.len());
    bytes.extend_from_slice(&attribute_header(attribute));
    bytes.extend_from_slice(&value);
    Ok(bytes)
}

/// Rounds `len` up to the next multiple of 4.
pub fn padded_len(len: usize) -> usize {
    (len + 3) / 4 * 4
}

/// Returns the first `declared_len` bytes of `bytes`.
///
/// Fails with `ErrorKind::Truncated` if fewer are available.
pub fn value_bytes(bytes: &[u8], declared_len: u16) -> Result<&[u8]> {
    let len = declared_len as usize;
    track_assert!(bytes.len() >= len, ErrorKind::Truncated; bytes.len(), declared_len);
    Ok(&bytes[..len])
}

/// Returns the first `len` bytes of the value part of a fixed-size attribute.
///
/// Fails with `ErrorKind::Truncated` if the declared length or the available bytes are shorter.
pub(crate) fn fixed_value_bytes(bytes: &[u8], declared_len: u16, len: usize) -> Result<&[u8]> {
    let value = track!(value_bytes(bytes, declared_len))?;
    track_assert!(value.len() >= len, ErrorKind::Truncated; value.len(), len);
    Ok(&value[..len])
}

pub(crate) fn decode_u16(bytes: &[u8]) -> Result<u16> {
    track_assert!(bytes.len() >= 2, ErrorKind::Truncated; bytes.len());
    Ok(BigEndian::read_u16(bytes))
}

pub(crate) fn decode_u32(bytes: &[u8]) -> Result<u32> {
    track_assert!(bytes.len() >= 4, ErrorKind::Truncated; bytes.len());
    Ok(BigEndian::read_u32(bytes))
}

pub(crate) fn encode_u32(value: u32) -> Vec<u8> {
    let mut bytes = vec![0; 4];
    BigEndian::write_u32(&mut bytes, value);
    bytes
}

pub(crate) fn decode_utf8(bytes: &[u8]) -> Result<String> {
    let mut decoder: Utf8Decoder = Utf8Decoder::default();
    let text = track!(decoder.decode_from_bytes(bytes))?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::{Class, Method, MessageType};
    use crate::rfc5389::attributes::{Realm, Software};

    fn context() -> DecodeContext {
        let header = Header::new(
            MessageType::new(Method::from(1), Class::Request),
            TransactionId::new([3; 12]),
        );
        DecodeContext::new(header, Credentials::default())
    }

    #[test]
    fn padded_len_rounds_up_to_four() {
        assert_eq!(padded_len(0), 0);
        assert_eq!(padded_len(1), 4);
        assert_eq!(padded_len(4), 4);
        assert_eq!(padded_len(5), 8);
        assert_eq!(padded_len(763), 764);
    }

    #[test]
    fn attribute_header_works() {
        let software = Software::new("foo".to_owned()).unwrap();
        assert_eq!(attribute_header(&software), [0x80, 0x22, 0x00, 0x03]);
    }

    #[test]
    fn unknown_attribute_is_kept_verbatim() {
        let mut ctx = context();
        let bytes = [0x7f, 0xff, 0x00, 0x05, 1, 2, 3, 4, 5, 0, 0, 0];
        let attribute = AttributeSet::turn()
            .decode_attribute(&bytes, &mut ctx)
            .unwrap();
        assert_eq!(attribute.get_type().as_u16(), 0x7fff);
        assert_eq!(attribute.value_len(), 5);

        let message = ctx.into_message();
        let encoded = encode_attribute(&attribute, &EncodeContext::new(&message, 0)).unwrap();
        assert_eq!(encoded, &bytes[..9]);
    }

    #[test]
    fn unregistered_type_falls_back_to_unknown() {
        let mut ctx = context();
        let bytes = [0x00, 0x14, 0x00, 0x01, b'x', 0, 0, 0];
        let attribute = AttributeSet::new()
            .decode_attribute(&bytes, &mut ctx)
            .unwrap();
        assert!(matches!(attribute, AnyAttribute::Unknown(_)));

        let mut ctx = context();
        let attribute = AttributeSet::stun()
            .decode_attribute(&bytes, &mut ctx)
            .unwrap();
        assert!(matches!(attribute, AnyAttribute::Realm(_)));
        assert_eq!(ctx.credentials().realm(), "x");
    }

    #[test]
    fn decode_attribute_rejects_truncated_input() {
        let mut ctx = context();
        let e = AttributeSet::turn()
            .decode_attribute(&[0x00, 0x14, 0x00], &mut ctx)
            .err()
            .unwrap();
        assert_eq!(*e.kind(), ErrorKind::Truncated);

        let e = AttributeSet::turn()
            .decode_attribute(&[0x00, 0x14, 0x00, 0x08, b'a', b'b'], &mut ctx)
            .err()
            .unwrap();
        assert_eq!(*e.kind(), ErrorKind::Truncated);
    }

    #[test]
    fn decode_attribute_rejects_length_mismatch() {
        // LIFETIME is four bytes long; a declared length of eight is not.
        let mut ctx = context();
        let bytes = [0x00, 0x0d, 0x00, 0x08, 0, 0, 0x02, 0x58, 0, 0, 0, 0];
        let e = AttributeSet::turn()
            .decode_attribute(&bytes, &mut ctx)
            .err()
            .unwrap();
        assert_eq!(*e.kind(), ErrorKind::LengthMismatch);
    }

    #[test]
    fn received_prefix_patches_header_length() {
        let mut received = vec![0x00, 0x01, 0x00, 0x1c, 0x21, 0x12, 0xa4, 0x42];
        received.extend_from_slice(&[3; 12]);
        received.extend_from_slice(&[0x80, 0x22, 0x00, 0x03, b'a', b'b', b'c', 0xff]);
        received.extend_from_slice(&[0x80, 0x28, 0x00, 0x04, 0, 0, 0, 0]);
        received.extend_from_slice(&[0x80, 0x28, 0x00, 0x04, 0, 0, 0, 0]);

        let mut ctx = context().with_received(&received);
        ctx.set_offset(8);
        let prefix = ctx.received_prefix(4).unwrap();
        assert_eq!(prefix.len(), 28);
        assert_eq!(&prefix[2..4], &[0x00, 0x10]);
        // Padding is kept as received.
        assert_eq!(prefix[27], 0xff);
        assert_eq!(&prefix[4..], &received[4..28]);

        ctx.set_offset(40);
        assert_eq!(ctx.received_prefix(4), None);
        assert_eq!(context().received_prefix(4), None);
    }

    #[test]
    fn numeric_values_are_big_endian() {
        assert_eq!(encode_u32(0x0102_0304), [1, 2, 3, 4]);
        assert_eq!(decode_u32(&[1, 2, 3, 4]).unwrap(), 0x0102_0304);
        assert_eq!(decode_u16(&[0xab, 0xcd]).unwrap(), 0xabcd);

        let e = decode_u16(&[1]).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::Truncated);
        let e = decode_u32(&[1, 2, 3]).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::Truncated);
    }

    #[test]
    fn custom_sets_can_be_assembled() {
        let mut set = AttributeSet::new();
        set.register::<Realm>(Realm::CODEPOINT);
        assert!(set.contains(Realm::CODEPOINT));
        assert!(!set.contains(Software::CODEPOINT));
    }
}
