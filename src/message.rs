//! STUN message.
//!
//! > All STUN messages MUST start with a 20-byte header followed by zero
//! > or more Attributes.
//! >
//! > [RFC 5389 -- 6. STUN Message Structure]
//!
//! [RFC 5389 -- 6. STUN Message Structure]: https://tools.ietf.org/html/rfc5389#section-6
use crate::attribute::{
    encode_attribute, padded_len, Attribute, AttributeSet, AttributeType, DecodeContext,
    EncodeContext, UnknownAttribute,
};
use crate::attributes::AnyAttribute;
use crate::constants::{ATTRIBUTE_HEADER_SIZE, HEADER_SIZE};
use crate::convert::TryAsRef;
use crate::credentials::Credentials;
use crate::error::{ErrorKind, Result};
use crate::header::Header;
use crate::method::{Class, MessageType, Method};
use crate::rfc5389::attributes::{ErrorCode, Fingerprint, MessageIntegrity};
use crate::TransactionId;
use byteorder::{BigEndian, ByteOrder};

/// STUN message.
///
/// The header length is recomputed whenever the message is serialized.
///
/// A parsed message also keeps the received bytes its `MESSAGE-INTEGRITY`
/// covers, so that [`Message::verify_integrity`] checks what was actually sent.
///
/// [`Message::verify_integrity`]: #method.verify_integrity
#[derive(Debug, Clone)]
pub struct Message {
    header: Header,
    credentials: Credentials,
    attributes: Vec<AnyAttribute>,
    integrity_input: Option<Vec<u8>>,
}
impl Message {
    /// Makes a new `Message` instance without attributes.
    pub fn new(header: Header) -> Self {
        Message {
            header,
            credentials: Credentials::default(),
            attributes: Vec::new(),
            integrity_input: None,
        }
    }

    /// Makes a new request message with a random transaction ID.
    pub fn request(method: Method) -> Self {
        let message_type = MessageType::new(method, Class::Request);
        Message::new(Header::new(message_type, TransactionId::random()))
    }

    /// Makes a new indication message with a random transaction ID.
    pub fn indication(method: Method) -> Self {
        let message_type = MessageType::new(method, Class::Indication);
        Message::new(Header::new(message_type, TransactionId::random()))
    }

    /// Returns a copy of this message that signs with `credentials`.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Returns a copy of this message with `attribute` appended.
    pub fn with_attribute<A: Into<AnyAttribute>>(mut self, attribute: A) -> Self {
        self.add_attribute(attribute);
        self
    }

    pub(crate) fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    /// Returns the header of the message.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the method of the message.
    pub fn method(&self) -> Method {
        self.header.message_type().method()
    }

    /// Returns the class of the message.
    pub fn class(&self) -> Class {
        self.header.message_type().class()
    }

    /// Returns the transaction ID of the message.
    pub fn transaction_id(&self) -> &TransactionId {
        self.header.transaction_id()
    }

    /// Returns the credentials of the message.
    ///
    /// For a parsed message these include the realm, nonce and username it carried.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Appends `attribute` to the message.
    pub fn add_attribute<A: Into<AnyAttribute>>(&mut self, attribute: A) {
        self.attributes.push(attribute.into());
    }

    /// Returns the attributes of the message, in order.
    pub fn attributes(&self) -> &[AnyAttribute] {
        &self.attributes
    }

    /// Returns the first attribute of type `attr_type`.
    pub fn get_attribute(&self, attr_type: AttributeType) -> Option<&AnyAttribute> {
        self.attributes
            .iter()
            .find(|a| a.get_type() == attr_type)
    }

    /// Returns the first attribute of type `T`.
    pub fn get<T>(&self) -> Option<&T>
    where
        AnyAttribute: TryAsRef<T>,
    {
        self.attributes.iter().filter_map(|a| a.try_as_ref()).next()
    }

    /// Returns the `ERROR-CODE` attribute, if any.
    pub fn error_code(&self) -> Option<&ErrorCode> {
        self.get::<ErrorCode>()
    }

    /// Encodes the message into bytes.
    ///
    /// Every attribute value is padded to a multiple of four bytes and the
    /// header length is set to the padded body length.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::MisplacedAttribute` if anything follows `FINGERPRINT`, or
    ///   anything but `FINGERPRINT` follows `MESSAGE-INTEGRITY`
    /// - attribute encoding errors, such as `ErrorKind::MissingCredentials`
    ///   from a `MESSAGE-INTEGRITY` without key material
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut last_integrity = None;
        for attribute in &self.attributes {
            track!(check_placement(last_integrity, attribute.get_type()))?;
            if is_integrity(attribute.get_type()) {
                last_integrity = Some(attribute.get_type());
            }
        }

        let mut body = Vec::new();
        for (index, attribute) in self.attributes.iter().enumerate() {
            let ctx = EncodeContext::new(self, index);
            let bytes = track!(encode_attribute(attribute, &ctx))?;
            let padded = ATTRIBUTE_HEADER_SIZE + padded_len(attribute.value_len() as usize);
            body.extend_from_slice(&bytes);
            body.resize(body.len() + padded - bytes.len(), 0);
        }
        track_assert!(body.len() <= 0xFFFF, ErrorKind::InvalidInput; body.len());

        let mut bytes = track!(self.header.with_length(body.len() as u16).encode())?;
        bytes.extend_from_slice(&body);
        Ok(bytes)
    }

    /// Decodes a message, resolving attribute types with `registry`.
    ///
    /// `credentials` seed the decode context; `REALM`, `NONCE` and `USERNAME`
    /// attributes update them, and a `MESSAGE-INTEGRITY` is verified when they
    /// carry key material. The result is available via [`Message::credentials`].
    ///
    /// # Errors
    ///
    /// - header errors (see [`Header::decode`])
    /// - `ErrorKind::LengthMismatch` if the body length differs from the header length
    /// - `ErrorKind::MisplacedAttribute` if an attribute follows `FINGERPRINT`, or
    ///   an attribute other than `FINGERPRINT` follows `MESSAGE-INTEGRITY`
    /// - attribute decoding errors
    ///
    /// [`Message::credentials`]: #method.credentials
    /// [`Header::decode`]: ../header/struct.Header.html#method.decode
    pub fn parse(bytes: &[u8], credentials: &Credentials, registry: &AttributeSet) -> Result<Self> {
        let header = track!(Header::decode(bytes))?;
        let body = &bytes[HEADER_SIZE..];
        track_assert_eq!(
            body.len(),
            header.length() as usize,
            ErrorKind::LengthMismatch
        );

        let mut ctx = DecodeContext::new(header, credentials.clone()).with_received(bytes);
        let mut integrity_input = None;
        let mut last_integrity = None;
        let mut offset = 0;
        while offset < body.len() {
            // The body length is a multiple of four, so a TLV header always fits.
            let attr_type = AttributeType::new(BigEndian::read_u16(&body[offset..]));
            track!(check_placement(last_integrity, attr_type); offset)?;

            ctx.set_offset(offset);
            let attribute = track!(registry.decode_attribute(&body[offset..], &mut ctx); offset)?;
            if attr_type.as_u16() == MessageIntegrity::CODEPOINT {
                integrity_input = ctx.received_prefix(attribute.value_len());
            }
            if is_integrity(attr_type) {
                last_integrity = Some(attr_type);
            }

            offset += ATTRIBUTE_HEADER_SIZE + padded_len(attribute.value_len() as usize);
            ctx.push(attribute);
        }

        let mut message = ctx.into_message();
        message.integrity_input = integrity_input;
        Ok(message)
    }

    /// Returns the bytes an integrity attribute at `index` is computed over.
    ///
    /// The attributes preceding `index` are serialized together with a
    /// zero-filled placeholder of type `placeholder_type` and length
    /// `placeholder_len`, so that the header length already accounts for it;
    /// the placeholder itself is then cut off.
    pub fn partial_bytes(
        &self,
        index: usize,
        placeholder_type: AttributeType,
        placeholder_len: u16,
    ) -> Result<Vec<u8>> {
        track_assert!(index <= self.attributes.len(), ErrorKind::InvalidInput; index);
        let mut partial = Message {
            header: self.header.clone(),
            credentials: self.credentials.clone(),
            attributes: self.attributes[..index].to_vec(),
            integrity_input: None,
        };
        let placeholder = vec![0; placeholder_len as usize];
        partial.add_attribute(UnknownAttribute::new(placeholder_type, placeholder));

        let mut bytes = track!(partial.serialize())?;
        let footprint = ATTRIBUTE_HEADER_SIZE + padded_len(placeholder_len as usize);
        bytes.truncate(bytes.len() - footprint);
        Ok(bytes)
    }

    /// Verifies the `MESSAGE-INTEGRITY` attribute of the message against `credentials`.
    ///
    /// The transmitted value is checked, whether the attribute was decoded as
    /// [`MessageIntegrity`] or kept as an unknown attribute. Only a
    /// `MessageIntegrity::new()` added locally is computed with the
    /// credentials of the message first.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::MissingAttribute` if the message has no `MESSAGE-INTEGRITY`
    /// - `ErrorKind::MissingCredentials` if `credentials` have no key material
    /// - `ErrorKind::LengthMismatch` if the attribute value is not 20 bytes long
    /// - `ErrorKind::IntegrityMismatch` if the value does not match
    ///
    /// [`MessageIntegrity`]: ../rfc5389/attributes/struct.MessageIntegrity.html
    pub fn verify_integrity(&self, credentials: &Credentials) -> Result<()> {
        let index = track_assert_some!(
            self.attributes
                .iter()
                .position(|a| a.get_type().as_u16() == MessageIntegrity::CODEPOINT),
            ErrorKind::MissingAttribute
        );
        let hmac = match self.attributes[index] {
            AnyAttribute::MessageIntegrity(ref a) => match a.hmac_sha1() {
                Some(hmac) => hmac,
                None => track!(MessageIntegrity::compute(self, index))?,
            },
            AnyAttribute::Unknown(ref a) => {
                track_assert_eq!(a.value().len(), 20, ErrorKind::LengthMismatch);
                let mut hmac = [0; 20];
                hmac.copy_from_slice(a.value());
                hmac
            }
            ref other => track_panic!(ErrorKind::InvalidInput, "Unexpected attribute: {:?}", other),
        };
        let input = match self.integrity_input {
            Some(ref input) => input.clone(),
            None => {
                let ty = AttributeType::new(MessageIntegrity::CODEPOINT);
                track!(self.partial_bytes(index, ty, 20))?
            }
        };
        track!(MessageIntegrity::verify_input(credentials, &input, &hmac))
    }
}
impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header
            && self.credentials == other.credentials
            && self.attributes == other.attributes
    }
}
impl Eq for Message {}

fn is_integrity(attr_type: AttributeType) -> bool {
    let codepoint = attr_type.as_u16();
    codepoint == MessageIntegrity::CODEPOINT || codepoint == Fingerprint::CODEPOINT
}

/// Checks that `next` may follow the last integrity attribute seen so far.
///
/// `FINGERPRINT` must be the last attribute, and only `FINGERPRINT` may
/// follow `MESSAGE-INTEGRITY`.
fn check_placement(last_integrity: Option<AttributeType>, next: AttributeType) -> Result<()> {
    let last = match last_integrity {
        None => return Ok(()),
        Some(last) => last.as_u16(),
    };
    if last == Fingerprint::CODEPOINT {
        track_panic!(ErrorKind::MisplacedAttribute, "{:?} follows FINGERPRINT", next);
    }
    if next.as_u16() != Fingerprint::CODEPOINT {
        track_panic!(
            ErrorKind::MisplacedAttribute,
            "{:?} follows MESSAGE-INTEGRITY",
            next
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc5389::attributes::{Fingerprint, Realm, Software, Username, XorMappedAddress};
    use crate::rfc5389::methods::BINDING;
    use crate::rfc5766::attributes::{Lifetime, RequestedTransport};
    use crate::rfc5766::methods::ALLOCATE;
    use std::time::Duration;

    fn credentials() -> Credentials {
        Credentials::new("u".to_owned(), "p".to_owned()).with_realm("r".to_owned())
    }

    #[test]
    fn binding_request_round_trip() {
        let request = Message::request(BINDING);
        let bytes = request.serialize().unwrap();
        assert_eq!(bytes.len(), 20);

        let parsed = Message::parse(&bytes, &Credentials::default(), &AttributeSet::stun()).unwrap();
        assert_eq!(parsed.header().message_type().as_u16(), 0x0001);
        assert_eq!(parsed.transaction_id(), request.transaction_id());
        assert!(parsed.attributes().is_empty());
    }

    #[test]
    fn header_length_is_sum_of_padded_attributes() {
        let message = Message::request(ALLOCATE)
            .with_attribute(Software::new("abcde".to_owned()).unwrap())
            .with_attribute(RequestedTransport::new(6))
            .with_attribute(Realm::new("r".to_owned()).unwrap());
        let bytes = message.serialize().unwrap();

        let length = BigEndian::read_u16(&bytes[2..4]);
        assert_eq!(length % 4, 0);
        assert_eq!(length as usize, (4 + 8) + (4 + 4) + (4 + 4));
        assert_eq!(bytes.len(), 20 + length as usize);
    }

    #[test]
    fn unknown_attributes_are_reproduced_exactly() {
        let message = Message::request(BINDING)
            .with_attribute(UnknownAttribute::new(AttributeType::new(0x7777), vec![1, 2, 3]))
            .with_attribute(Software::new("x".to_owned()).unwrap())
            .with_attribute(UnknownAttribute::new(AttributeType::new(0xc001), vec![9; 8]));
        let bytes = message.serialize().unwrap();

        let parsed = Message::parse(&bytes, &Credentials::default(), &AttributeSet::stun()).unwrap();
        assert_eq!(parsed.attributes().len(), 3);
        assert_eq!(parsed.serialize().unwrap(), bytes);
    }

    #[test]
    fn parse_rejects_length_mismatch() {
        let mut bytes = Message::request(BINDING)
            .with_attribute(Lifetime::new(Duration::from_secs(60)).unwrap())
            .serialize()
            .unwrap();
        bytes.truncate(bytes.len() - 4);
        let e = Message::parse(&bytes, &Credentials::default(), &AttributeSet::turn())
            .err()
            .unwrap();
        assert_eq!(*e.kind(), ErrorKind::LengthMismatch);
    }

    #[test]
    fn xor_mapped_address_round_trip() {
        let addr = "[2001:db8::42]:3478".parse().unwrap();
        let bytes = Message::request(BINDING)
            .with_attribute(XorMappedAddress::new(addr))
            .serialize()
            .unwrap();
        let parsed = Message::parse(&bytes, &Credentials::default(), &AttributeSet::stun()).unwrap();
        assert_eq!(
            parsed.get::<XorMappedAddress>().map(|a| a.address()),
            Some(addr)
        );
    }

    #[test]
    fn integrity_is_verified_with_same_credentials() {
        let message = Message::request(ALLOCATE)
            .with_credentials(credentials())
            .with_attribute(RequestedTransport::new(6))
            .with_attribute(Username::new("u".to_owned()).unwrap())
            .with_attribute(Realm::new("r".to_owned()).unwrap())
            .with_attribute(MessageIntegrity::new());
        assert!(message.verify_integrity(&credentials()).is_ok());

        let wrong = Credentials::new("u".to_owned(), "wrong".to_owned()).with_realm("r".to_owned());
        let e = message.verify_integrity(&wrong).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::IntegrityMismatch);

        // The same holds for the message as it comes off the wire.
        let bytes = message.serialize().unwrap();
        let parsed = Message::parse(&bytes, &Credentials::default(), &AttributeSet::turn()).unwrap();
        assert!(parsed.verify_integrity(&credentials()).is_ok());
        let e = parsed.verify_integrity(&wrong).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::IntegrityMismatch);
    }

    #[test]
    fn parse_verifies_integrity_when_password_is_known() {
        let bytes = Message::request(ALLOCATE)
            .with_credentials(credentials())
            .with_attribute(Username::new("u".to_owned()).unwrap())
            .with_attribute(Realm::new("r".to_owned()).unwrap())
            .with_attribute(MessageIntegrity::new())
            .serialize()
            .unwrap();

        let client = Credentials::new("u".to_owned(), "p".to_owned());
        assert!(Message::parse(&bytes, &client, &AttributeSet::turn()).is_ok());

        let client = Credentials::new("u".to_owned(), "wrong".to_owned());
        let e = Message::parse(&bytes, &client, &AttributeSet::turn())
            .err()
            .unwrap();
        assert_eq!(*e.kind(), ErrorKind::IntegrityMismatch);
    }

    #[test]
    fn integrity_requires_credentials() {
        let e = Message::request(ALLOCATE)
            .with_attribute(MessageIntegrity::new())
            .serialize()
            .err()
            .unwrap();
        assert_eq!(*e.kind(), ErrorKind::MissingCredentials);

        let e = Message::request(ALLOCATE)
            .verify_integrity(&credentials())
            .err()
            .unwrap();
        assert_eq!(*e.kind(), ErrorKind::MissingAttribute);
    }

    #[test]
    fn fingerprint_detects_tampering() {
        let bytes = Message::request(BINDING)
            .with_credentials(credentials())
            .with_attribute(Software::new("abc".to_owned()).unwrap())
            .with_attribute(MessageIntegrity::new())
            .with_attribute(Fingerprint::new())
            .serialize()
            .unwrap();
        assert!(Message::parse(&bytes, &Credentials::default(), &AttributeSet::stun()).is_ok());

        // transaction ID, SOFTWARE value and padding, MESSAGE-INTEGRITY value
        // and FINGERPRINT value
        let positions = (8..20).chain(24..28).chain(32..52).chain(56..60);
        for i in positions {
            let mut tampered = bytes.clone();
            tampered[i] ^= 0x01;
            let e = Message::parse(&tampered, &Credentials::default(), &AttributeSet::stun())
                .err()
                .unwrap();
            assert_eq!(*e.kind(), ErrorKind::FingerprintMismatch, "byte {}", i);
        }
    }

    #[test]
    fn integrity_covers_received_padding() {
        let bytes = Message::request(BINDING)
            .with_credentials(credentials())
            .with_attribute(Software::new("abc".to_owned()).unwrap())
            .with_attribute(MessageIntegrity::new())
            .serialize()
            .unwrap();
        let parsed = Message::parse(&bytes, &credentials(), &AttributeSet::stun()).unwrap();
        assert!(parsed.verify_integrity(&credentials()).is_ok());

        // The last byte of the SOFTWARE attribute is padding.
        let mut tampered = bytes.clone();
        tampered[27] = 0xff;
        let e = Message::parse(&tampered, &credentials(), &AttributeSet::stun())
            .err()
            .unwrap();
        assert_eq!(*e.kind(), ErrorKind::IntegrityMismatch);

        let parsed =
            Message::parse(&tampered, &Credentials::default(), &AttributeSet::stun()).unwrap();
        let e = parsed.verify_integrity(&credentials()).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::IntegrityMismatch);
    }

    #[test]
    fn unknown_integrity_is_checked_as_transmitted() {
        let bytes = Message::request(ALLOCATE)
            .with_credentials(credentials())
            .with_attribute(Username::new("u".to_owned()).unwrap())
            .with_attribute(Realm::new("r".to_owned()).unwrap())
            .with_attribute(MessageIntegrity::new())
            .serialize()
            .unwrap();
        let mut registry = AttributeSet::new();
        registry.register::<Username>(Username::CODEPOINT);
        registry.register::<Realm>(Realm::CODEPOINT);

        let parsed = Message::parse(&bytes, &Credentials::default(), &registry).unwrap();
        assert!(matches!(parsed.attributes()[2], AnyAttribute::Unknown(_)));
        assert!(parsed.verify_integrity(&credentials()).is_ok());

        // A zeroed MESSAGE-INTEGRITY value must not verify.
        let mut forged = bytes.clone();
        for b in &mut forged[40..60] {
            *b = 0;
        }
        let parsed = Message::parse(&forged, &Credentials::default(), &registry).unwrap();
        let e = parsed.verify_integrity(&credentials()).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::IntegrityMismatch);
    }

    #[test]
    fn serialize_rejects_attributes_after_fingerprint() {
        let e = Message::request(BINDING)
            .with_attribute(Fingerprint::new())
            .with_attribute(Software::new("x".to_owned()).unwrap())
            .serialize()
            .err()
            .unwrap();
        assert_eq!(*e.kind(), ErrorKind::MisplacedAttribute);

        let e = Message::request(BINDING)
            .with_attribute(Fingerprint::new())
            .with_attribute(Fingerprint::new())
            .serialize()
            .err()
            .unwrap();
        assert_eq!(*e.kind(), ErrorKind::MisplacedAttribute);
    }

    #[test]
    fn serialize_allows_only_fingerprint_after_integrity() {
        let message = Message::request(BINDING)
            .with_credentials(credentials())
            .with_attribute(MessageIntegrity::new());
        assert!(message.clone().with_attribute(Fingerprint::new()).serialize().is_ok());

        let e = message
            .with_attribute(Software::new("x".to_owned()).unwrap())
            .serialize()
            .err()
            .unwrap();
        assert_eq!(*e.kind(), ErrorKind::MisplacedAttribute);
    }

    fn append_software(mut bytes: Vec<u8>) -> Vec<u8> {
        bytes.extend_from_slice(&[0x80, 0x22, 0x00, 0x04, b'a', b'b', b'c', b'd']);
        let length = BigEndian::read_u16(&bytes[2..4]) + 8;
        BigEndian::write_u16(&mut bytes[2..4], length);
        bytes
    }

    #[test]
    fn parse_rejects_attributes_after_fingerprint() {
        let bytes = Message::request(BINDING)
            .with_attribute(Fingerprint::new())
            .serialize()
            .unwrap();
        let e = Message::parse(
            &append_software(bytes),
            &Credentials::default(),
            &AttributeSet::stun(),
        )
        .err()
        .unwrap();
        assert_eq!(*e.kind(), ErrorKind::MisplacedAttribute);
    }

    #[test]
    fn parse_rejects_attributes_after_integrity() {
        let bytes = Message::request(BINDING)
            .with_credentials(credentials())
            .with_attribute(MessageIntegrity::new())
            .serialize()
            .unwrap();
        let e = Message::parse(
            &append_software(bytes),
            &Credentials::default(),
            &AttributeSet::stun(),
        )
        .err()
        .unwrap();
        assert_eq!(*e.kind(), ErrorKind::MisplacedAttribute);
    }

    #[test]
    fn rfc5769_sample_request_verifies() {
        // RFC 5769 -- 2.1. Sample Request
        let bytes = [
            0x00, 0x01, 0x00, 0x58, 0x21, 0x12, 0xa4, 0x42, 0xb7, 0xe7, 0xa7, 0x01, 0xbc, 0x34,
            0xd6, 0x86, 0xfa, 0x87, 0xdf, 0xae, 0x80, 0x22, 0x00, 0x10, 0x53, 0x54, 0x55, 0x4e,
            0x20, 0x74, 0x65, 0x73, 0x74, 0x20, 0x63, 0x6c, 0x69, 0x65, 0x6e, 0x74, 0x00, 0x24,
            0x00, 0x04, 0x6e, 0x00, 0x01, 0xff, 0x80, 0x29, 0x00, 0x08, 0x93, 0x2f, 0xf9, 0xb1,
            0x51, 0x26, 0x3b, 0x36, 0x00, 0x06, 0x00, 0x09, 0x65, 0x76, 0x74, 0x6a, 0x3a, 0x68,
            0x36, 0x76, 0x59, 0x20, 0x20, 0x20, 0x00, 0x08, 0x00, 0x14, 0x9a, 0xea, 0xa7, 0x0c,
            0xbf, 0xd8, 0xcb, 0x56, 0x78, 0x1e, 0xf2, 0xb5, 0xb2, 0xd3, 0xf2, 0x49, 0xc1, 0xb5,
            0x71, 0xa2, 0x80, 0x28, 0x00, 0x04, 0xe5, 0x7a, 0x3b, 0xcf,
        ];
        let parsed = Message::parse(&bytes, &Credentials::default(), &AttributeSet::stun()).unwrap();
        assert_eq!(parsed.get::<Fingerprint>().and_then(|a| a.crc32()), Some(0xe57a_3bcf));
        assert_eq!(
            parsed.get::<Software>().map(|a| a.description()),
            Some("STUN test client")
        );
        assert_eq!(parsed.credentials().username(), "evtj:h6vY");

        // Short-term credentials: the key is the password itself.
        let short_term = Credentials::new(String::new(), "VOkJxbRl1RmTxUk/WvJxBt".to_owned());
        assert!(parsed.verify_integrity(&short_term).is_ok());
        let wrong = Credentials::new(String::new(), "wrong".to_owned());
        let e = parsed.verify_integrity(&wrong).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::IntegrityMismatch);

        // The USERNAME padding (three spaces) is zero-filled on re-encoding.
        let reencoded = parsed.serialize().unwrap();
        assert_eq!(reencoded.len(), bytes.len());
        assert_eq!(&reencoded[73..76], &[0, 0, 0]);
    }
}
