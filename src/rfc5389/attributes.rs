//! Attributes that are defined in [RFC 5389].
//!
//! [RFC 5389]: https://tools.ietf.org/html/rfc5389
use crate::attribute::{
    decode_u16, decode_u32, decode_utf8, encode_u32, fixed_value_bytes, value_bytes, Attribute,
    AttributeType, DecodeContext, EncodeContext,
};
use crate::constants::{FINGERPRINT_XOR, MAX_REALM_OR_NONCE_LEN};
use crate::credentials::Credentials;
use crate::error::{ErrorKind, Result};
use crate::message::Message;
use hmac::{Hmac, Mac};
use sha1::Sha1;

define_address_attribute!(
    /// `MAPPED-ADDRESS` attribute.
    ///
    /// See [RFC 5389 -- 15.1. MAPPED-ADDRESS] about this attribute.
    ///
    /// [RFC 5389 -- 15.1. MAPPED-ADDRESS]: https://tools.ietf.org/html/rfc5389#section-15.1
    MappedAddress,
    0x0001,
    plain
);

define_address_attribute!(
    /// `XOR-MAPPED-ADDRESS` attribute.
    ///
    /// See [RFC 5389 -- 15.2. XOR-MAPPED-ADDRESS] about this attribute.
    ///
    /// [RFC 5389 -- 15.2. XOR-MAPPED-ADDRESS]: https://tools.ietf.org/html/rfc5389#section-15.2
    XorMappedAddress,
    0x0020,
    xor
);

define_address_attribute!(
    /// `ALTERNATE-SERVER` attribute.
    ///
    /// See [RFC 5389 -- 15.11. ALTERNATE-SERVER] about this attribute.
    ///
    /// [RFC 5389 -- 15.11. ALTERNATE-SERVER]: https://tools.ietf.org/html/rfc5389#section-15.11
    AlternateServer,
    0x8023,
    plain
);

/// `USERNAME` attribute.
///
/// See [RFC 5389 -- 15.3. USERNAME] about this attribute.
///
/// [RFC 5389 -- 15.3. USERNAME]: https://tools.ietf.org/html/rfc5389#section-15.3
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username {
    name: String,
}
impl Username {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x0006;

    /// Makes a new `Username` instance.
    ///
    /// # Errors
    ///
    /// The length of `name` must be less then `513` bytes.
    /// If it is too long, this will return an `ErrorKind::InvalidInput` error.
    pub fn new(name: String) -> Result<Self> {
        track_assert!(name.len() < 513, ErrorKind::InvalidInput; name);
        Ok(Username { name })
    }

    /// Returns the name of this instance.
    pub fn name(&self) -> &str {
        &self.name
    }
}
impl Attribute for Username {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        self.name.len() as u16
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        Ok(self.name.as_bytes().to_vec())
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(value_bytes(bytes, declared_len))?;
        let name = track!(decode_utf8(value))?;
        ctx.update_credentials(|c| c.with_username(name.clone()));
        Ok(Username { name })
    }
}

/// `REALM` attribute.
///
/// See [RFC 5389 -- 15.7. REALM] about this attribute.
///
/// [RFC 5389 -- 15.7. REALM]: https://tools.ietf.org/html/rfc5389#section-15.7
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Realm {
    text: String,
}
impl Realm {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x0014;

    /// Makes a new `Realm` instance.
    ///
    /// # Errors
    ///
    /// If `text` is longer than 763 bytes, this will return an `ErrorKind::TooLong` error.
    pub fn new(text: String) -> Result<Self> {
        track_assert!(text.len() <= MAX_REALM_OR_NONCE_LEN, ErrorKind::TooLong; text.len());
        Ok(Realm { text })
    }

    /// Returns the text of this instance.
    pub fn text(&self) -> &str {
        &self.text
    }
}
impl Attribute for Realm {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        self.text.len() as u16
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        Ok(self.text.as_bytes().to_vec())
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(value_bytes(bytes, declared_len))?;
        track_assert!(value.len() <= MAX_REALM_OR_NONCE_LEN, ErrorKind::TooLong; value.len());
        let text = track!(decode_utf8(value))?;
        ctx.update_credentials(|c| c.with_realm(text.clone()));
        Ok(Realm { text })
    }
}

/// `NONCE` attribute.
///
/// The value is kept as opaque bytes and echoed verbatim.
///
/// See [RFC 5389 -- 15.8. NONCE] about this attribute.
///
/// [RFC 5389 -- 15.8. NONCE]: https://tools.ietf.org/html/rfc5389#section-15.8
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nonce {
    value: Vec<u8>,
}
impl Nonce {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x0015;

    /// Makes a new `Nonce` instance.
    ///
    /// # Errors
    ///
    /// If `value` is longer than 763 bytes, this will return an `ErrorKind::TooLong` error.
    pub fn new(value: Vec<u8>) -> Result<Self> {
        track_assert!(value.len() <= MAX_REALM_OR_NONCE_LEN, ErrorKind::TooLong; value.len());
        Ok(Nonce { value })
    }

    /// Returns the value of this instance.
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}
impl Attribute for Nonce {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        self.value.len() as u16
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        Ok(self.value.clone())
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(value_bytes(bytes, declared_len))?;
        let nonce = track!(Nonce::new(value.to_vec()))?;
        ctx.update_credentials(|c| c.with_nonce(nonce.value.clone()));
        Ok(nonce)
    }
}

/// `SOFTWARE` attribute.
///
/// See [RFC 5389 -- 15.10. SOFTWARE] about this attribute.
///
/// [RFC 5389 -- 15.10. SOFTWARE]: https://tools.ietf.org/html/rfc5389#section-15.10
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Software {
    description: String,
}
impl Software {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x8022;

    /// Makes a new `Software` instance.
    ///
    /// # Errors
    ///
    /// The length of `description` must be less than `128` characters.
    /// If it is too long, this will return an `ErrorKind::InvalidInput` error.
    pub fn new(description: String) -> Result<Self> {
        track_assert!(description.chars().count() < 128, ErrorKind::InvalidInput; description);
        Ok(Software { description })
    }

    /// Returns the description of this instance.
    pub fn description(&self) -> &str {
        &self.description
    }
}
impl Attribute for Software {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        self.description.len() as u16
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        Ok(self.description.as_bytes().to_vec())
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(value_bytes(bytes, declared_len))?;
        let description = track!(decode_utf8(value))?;
        track!(Software::new(description))
    }
}

/// `ERROR-CODE` attribute.
///
/// See [RFC 5389 -- 15.6. ERROR-CODE] about this attribute.
///
/// [RFC 5389 -- 15.6. ERROR-CODE]: https://tools.ietf.org/html/rfc5389#section-15.6
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    code: u16,
    reason_phrase: String,
}
impl ErrorCode {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x0009;

    /// Makes a new `ErrorCode` instance.
    ///
    /// # Errors
    ///
    /// Note that the value of `code` must be in range of `300..700`.
    /// If the value is out-of-range this will return an `ErrorKind::InvalidInput` error.
    pub fn new(code: u16, reason_phrase: String) -> Result<Self> {
        track_assert!((300..700).contains(&code), ErrorKind::InvalidInput; code, reason_phrase);
        Ok(ErrorCode {
            code,
            reason_phrase,
        })
    }

    pub(crate) fn from_static(code: u16, reason_phrase: &'static str) -> Self {
        ErrorCode {
            code,
            reason_phrase: reason_phrase.to_owned(),
        }
    }

    /// Returns the code of this error (`class * 100 + number`).
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Returns the reason phrase of this error.
    pub fn reason_phrase(&self) -> &str {
        &self.reason_phrase
    }
}
impl Attribute for ErrorCode {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        4 + self.reason_phrase.len() as u16
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        let class = u32::from(self.code / 100);
        let number = u32::from(self.code % 100);
        let mut bytes = encode_u32((class << 8) | number);
        bytes.extend_from_slice(self.reason_phrase.as_bytes());
        Ok(bytes)
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(value_bytes(bytes, declared_len))?;
        track_assert!(value.len() >= 4, ErrorKind::Truncated; value.len());
        let reserved = track!(decode_u16(&value[0..2]))?;
        track_assert_eq!(reserved, 0, ErrorKind::InvalidReservedBytes);

        let class = value[2];
        let number = value[3];
        track_assert!((3..=6).contains(&class), ErrorKind::InvalidClass; class);
        track_assert!(number <= 99, ErrorKind::InvalidNumber; number);

        let reason_phrase = track!(decode_utf8(&value[4..]))?;
        Ok(ErrorCode {
            code: u16::from(class) * 100 + u16::from(number),
            reason_phrase,
        })
    }
}

/// `UNKNOWN-ATTRIBUTES` attribute.
///
/// See [RFC 5389 -- 15.9. UNKNOWN-ATTRIBUTES] about this attribute.
///
/// [RFC 5389 -- 15.9. UNKNOWN-ATTRIBUTES]: https://tools.ietf.org/html/rfc5389#section-15.9
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownAttributes {
    unknowns: Vec<AttributeType>,
}
impl UnknownAttributes {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x000A;

    /// Makes a new `UnknownAttributes` instance.
    pub fn new(unknowns: Vec<AttributeType>) -> Self {
        UnknownAttributes { unknowns }
    }

    /// Returns the unknown attribute types of this instance.
    pub fn unknowns(&self) -> &[AttributeType] {
        &self.unknowns
    }
}
impl Attribute for UnknownAttributes {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        self.unknowns.len() as u16 * 2
    }

    fn encode_value(&self, _ctx: &EncodeContext) -> Result<Vec<u8>> {
        Ok(self
            .unknowns
            .iter()
            .flat_map(|t| t.as_u16().to_be_bytes().to_vec())
            .collect())
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(value_bytes(bytes, declared_len))?;
        let mut unknowns = Vec::with_capacity(value.len() / 2);
        for chunk in value.chunks_exact(2) {
            unknowns.push(AttributeType::new(track!(decode_u16(chunk))?));
        }
        Ok(UnknownAttributes { unknowns })
    }
}

/// `MESSAGE-INTEGRITY` attribute.
///
/// An instance made by [`MessageIntegrity::new`] computes its HMAC-SHA1 over
/// the partial message when it is encoded, using the key derived from the
/// credentials of the message.
/// A decoded instance keeps the received value and re-encodes it unchanged.
///
/// See [RFC 5389 -- 15.4. MESSAGE-INTEGRITY] about this attribute.
///
/// [`MessageIntegrity::new`]: #method.new
/// [RFC 5389 -- 15.4. MESSAGE-INTEGRITY]: https://tools.ietf.org/html/rfc5389#section-15.4
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct MessageIntegrity {
    hmac_sha1: Option<[u8; 20]>,
}
impl MessageIntegrity {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x0008;

    /// Makes a new `MessageIntegrity` instance whose value is computed on encoding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the HMAC-SHA1 value, if it is known.
    pub fn hmac_sha1(&self) -> Option<[u8; 20]> {
        self.hmac_sha1
    }

    /// Computes the HMAC-SHA1 of a `MESSAGE-INTEGRITY` placed at `index` in `message`.
    ///
    /// # Errors
    ///
    /// If the credentials of `message` have no key material,
    /// this will return an `ErrorKind::MissingCredentials` error.
    pub fn compute(message: &Message, index: usize) -> Result<[u8; 20]> {
        let key = track_assert_some!(message.credentials().key(), ErrorKind::MissingCredentials);
        let bytes =
            track!(message.partial_bytes(index, AttributeType::new(Self::CODEPOINT), 20))?;
        let mac = track!(hmac_sha1(&key, &bytes))?;
        let mut hmac = [0; 20];
        hmac.copy_from_slice(&mac.finalize().into_bytes());
        Ok(hmac)
    }

    /// Checks `hmac` against a `MESSAGE-INTEGRITY` placed at `index` in `message`.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::MissingCredentials` if the credentials of `message` have no key material
    /// - `ErrorKind::IntegrityMismatch` if the values differ
    pub fn verify(message: &Message, index: usize, hmac: &[u8; 20]) -> Result<()> {
        let input =
            track!(message.partial_bytes(index, AttributeType::new(Self::CODEPOINT), 20))?;
        track!(Self::verify_input(message.credentials(), &input, hmac))
    }

    /// Checks `hmac` against `input`, the message bytes preceding the attribute
    /// with the header length already covering it.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::MissingCredentials` if `credentials` have no key material
    /// - `ErrorKind::IntegrityMismatch` if the values differ
    pub fn verify_input(credentials: &Credentials, input: &[u8], hmac: &[u8; 20]) -> Result<()> {
        let key = track_assert_some!(credentials.key(), ErrorKind::MissingCredentials);
        let mac = track!(hmac_sha1(&key, input))?;
        if mac.verify_slice(&hmac[..]).is_err() {
            track_panic!(ErrorKind::IntegrityMismatch);
        }
        Ok(())
    }
}
impl Attribute for MessageIntegrity {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        20
    }

    fn encode_value(&self, ctx: &EncodeContext) -> Result<Vec<u8>> {
        let hmac = match self.hmac_sha1 {
            Some(hmac) => hmac,
            None => track!(Self::compute(ctx.message(), ctx.index()))?,
        };
        Ok(hmac.to_vec())
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(fixed_value_bytes(bytes, declared_len, 20))?;
        let mut hmac = [0; 20];
        hmac.copy_from_slice(value);
        if ctx.credentials().has_key() {
            let input = match ctx.received_prefix(20) {
                Some(input) => input,
                None => {
                    let index = ctx.message().attributes().len();
                    let ty = AttributeType::new(Self::CODEPOINT);
                    track!(ctx.message().partial_bytes(index, ty, 20))?
                }
            };
            track!(Self::verify_input(ctx.credentials(), &input, &hmac))?;
        }
        Ok(MessageIntegrity {
            hmac_sha1: Some(hmac),
        })
    }
}

fn hmac_sha1(key: &[u8], message: &[u8]) -> Result<Hmac<Sha1>> {
    let mut mac: Hmac<Sha1> = match Mac::new_from_slice(key) {
        Ok(mac) => mac,
        Err(e) => track_panic!(ErrorKind::Other, "Invalid HMAC key: {}", e),
    };
    mac.update(message);
    Ok(mac)
}

/// `FINGERPRINT` attribute.
///
/// Like [`MessageIntegrity`], an instance made by [`Fingerprint::new`] computes
/// its CRC-32 when it is encoded.
///
/// See [RFC 5389 -- 15.5. FINGERPRINT] about this attribute.
///
/// [`MessageIntegrity`]: ./struct.MessageIntegrity.html
/// [`Fingerprint::new`]: #method.new
/// [RFC 5389 -- 15.5. FINGERPRINT]: https://tools.ietf.org/html/rfc5389#section-15.5
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    crc32: Option<u32>,
}
impl Fingerprint {
    /// The codepoint of the type of the attribute.
    pub const CODEPOINT: u16 = 0x8028;

    /// Makes a new `Fingerprint` instance whose value is computed on encoding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the CRC-32 value, if it is known.
    pub fn crc32(&self) -> Option<u32> {
        self.crc32
    }

    /// Computes the value of a `FINGERPRINT` placed at `index` in `message`.
    pub fn compute(message: &Message, index: usize) -> Result<u32> {
        let bytes = track!(message.partial_bytes(index, AttributeType::new(Self::CODEPOINT), 4))?;
        Ok(Self::checksum(&bytes))
    }

    fn checksum(input: &[u8]) -> u32 {
        crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC).checksum(input) ^ FINGERPRINT_XOR
    }
}
impl Attribute for Fingerprint {
    fn get_type(&self) -> AttributeType {
        AttributeType::new(Self::CODEPOINT)
    }

    fn value_len(&self) -> u16 {
        4
    }

    fn encode_value(&self, ctx: &EncodeContext) -> Result<Vec<u8>> {
        let crc32 = match self.crc32 {
            Some(crc32) => crc32,
            None => track!(Self::compute(ctx.message(), ctx.index()))?,
        };
        Ok(encode_u32(crc32))
    }

    fn decode(
        _attr_type: AttributeType,
        bytes: &[u8],
        declared_len: u16,
        ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let value = track!(fixed_value_bytes(bytes, declared_len, 4))?;
        let crc32 = track!(decode_u32(value))?;
        let expected = match ctx.received_prefix(4) {
            Some(input) => Self::checksum(&input),
            None => track!(Self::compute(ctx.message(), ctx.message().attributes().len()))?,
        };
        track_assert_eq!(crc32, expected, ErrorKind::FingerprintMismatch);
        Ok(Fingerprint { crc32: Some(crc32) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeSet;
    use crate::header::Header;
    use crate::method::{Class, MessageType};
    use crate::rfc5389::methods::BINDING;
    use crate::TransactionId;

    fn context() -> DecodeContext {
        let header = Header::new(
            MessageType::new(BINDING, Class::SuccessResponse),
            TransactionId::new([
                0xb7, 0xe7, 0xa7, 0x01, 0xbc, 0x34, 0xd6, 0x86, 0xfa, 0x87, 0xdf, 0xae,
            ]),
        );
        DecodeContext::new(header, Credentials::default())
    }

    #[test]
    fn mapped_address_rejects_bad_family() {
        let e = MappedAddress::decode(
            AttributeType::new(MappedAddress::CODEPOINT),
            &[0, 9, 0, 80, 127, 0, 0, 1],
            8,
            &mut context(),
        )
        .err()
        .unwrap();
        assert_eq!(*e.kind(), ErrorKind::BadFamily);
    }

    #[test]
    fn xor_mapped_address_uses_transaction_id() {
        // RFC 5769 -- 2.2. Sample IPv4 Response
        let bytes = [0x00, 0x01, 0xa1, 0x47, 0xe1, 0x12, 0xa6, 0x43];
        let attr = XorMappedAddress::decode(
            AttributeType::new(XorMappedAddress::CODEPOINT),
            &bytes,
            8,
            &mut context(),
        )
        .unwrap();
        assert_eq!(attr.address(), "192.0.2.1:32853".parse().unwrap());
    }

    #[test]
    fn realm_and_nonce_update_credentials() {
        let mut ctx = context();
        let set = AttributeSet::stun();
        set.decode_attribute(&[0x00, 0x14, 0x00, 0x02, b'r', b'1', 0, 0], &mut ctx)
            .unwrap();
        set.decode_attribute(&[0x00, 0x15, 0x00, 0x03, b'a', b'b', b'c', 0], &mut ctx)
            .unwrap();
        assert_eq!(ctx.credentials().realm(), "r1");
        assert_eq!(ctx.credentials().nonce(), Some(&b"abc"[..]));
    }

    #[test]
    fn realm_and_nonce_are_bounded() {
        let long = vec![b'a'; 764];
        let e = Nonce::decode(
            AttributeType::new(Nonce::CODEPOINT),
            &long,
            764,
            &mut context(),
        )
        .err()
        .unwrap();
        assert_eq!(*e.kind(), ErrorKind::TooLong);

        let e = Realm::decode(
            AttributeType::new(Realm::CODEPOINT),
            &long,
            764,
            &mut context(),
        )
        .err()
        .unwrap();
        assert_eq!(*e.kind(), ErrorKind::TooLong);

        assert!(Nonce::new(vec![b'a'; 763]).is_ok());
    }

    #[test]
    fn error_code_decode_works() {
        let mut value = vec![0, 0, 4, 1];
        value.extend_from_slice(b"Unauthorized");
        let attr = ErrorCode::decode(
            AttributeType::new(ErrorCode::CODEPOINT),
            &value,
            value.len() as u16,
            &mut context(),
        )
        .unwrap();
        assert_eq!(attr.code(), 401);
        assert_eq!(attr.reason_phrase(), "Unauthorized");
        assert_eq!(attr.value_len() as usize, value.len());
    }

    #[test]
    fn error_code_decode_rejects_invalid_fields() {
        let decode = |value: &[u8]| {
            ErrorCode::decode(
                AttributeType::new(ErrorCode::CODEPOINT),
                value,
                value.len() as u16,
                &mut context(),
            )
            .err()
            .map(|e| *e.kind())
        };
        assert_eq!(decode(&[0, 1, 4, 1]), Some(ErrorKind::InvalidReservedBytes));
        assert_eq!(decode(&[0, 0, 2, 1]), Some(ErrorKind::InvalidClass));
        assert_eq!(decode(&[0, 0, 7, 1]), Some(ErrorKind::InvalidClass));
        assert_eq!(decode(&[0, 0, 4, 100]), Some(ErrorKind::InvalidNumber));
        assert_eq!(decode(&[0, 0, 4]), Some(ErrorKind::Truncated));
        assert_eq!(decode(&[0, 0, 4, 42]), None);
    }

    #[test]
    fn unknown_attributes_works() {
        let attr = UnknownAttributes::decode(
            AttributeType::new(UnknownAttributes::CODEPOINT),
            &[0x00, 0x2a, 0x80, 0x30],
            4,
            &mut context(),
        )
        .unwrap();
        assert_eq!(
            attr.unknowns(),
            &[AttributeType::new(0x002a), AttributeType::new(0x8030)]
        );
        assert_eq!(attr.value_len(), 4);
    }
}
