//! The fixed 20-byte message header.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |0 0|     STUN Message Type     |         Message Length        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         Magic Cookie                          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                                                               |
//! |                     Transaction ID (96 bits)                  |
//! |                                                               |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
use crate::constants::{HEADER_SIZE, MAGIC_COOKIE};
use crate::error::{ErrorKind, Result};
use crate::method::MessageType;
use crate::TransactionId;
use bytecodec::bytes::{BytesEncoder, CopyableBytesDecoder};
use bytecodec::fixnum::{U16beDecoder, U16beEncoder, U32beDecoder, U32beEncoder};
use bytecodec::{ByteCount, Decode, DecodeExt, Encode, EncodeExt, Eos, SizedEncode};
use std::fmt;

/// Message header.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Header {
    message_type: MessageType,
    length: u16,
    transaction_id: TransactionId,
}
impl Header {
    /// Makes a new `Header` instance with a zero body length.
    pub fn new(message_type: MessageType, transaction_id: TransactionId) -> Self {
        Header {
            message_type,
            length: 0,
            transaction_id,
        }
    }

    /// Returns the type of the message.
    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// Returns the body length in bytes.
    pub fn length(&self) -> u16 {
        self.length
    }

    /// Returns the transaction ID of the message.
    pub fn transaction_id(&self) -> &TransactionId {
        &self.transaction_id
    }

    pub(crate) fn with_length(&self, length: u16) -> Self {
        Header {
            message_type: self.message_type,
            length,
            transaction_id: self.transaction_id,
        }
    }

    /// Encodes this header into its 20-byte wire representation.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let bytes = track!(HeaderEncoder::default().encode_into_bytes(self.clone()))?;
        Ok(bytes)
    }

    /// Decodes a header from the first 20 bytes of `bytes`.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::ShortHeader` if fewer than 20 bytes are given
    /// - `ErrorKind::MalformedType` if the first two bits are not zero
    /// - `ErrorKind::BadMagic` if the magic cookie does not match
    /// - `ErrorKind::UnalignedLength` if the length is not a multiple of 4
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        track_assert!(bytes.len() >= HEADER_SIZE, ErrorKind::ShortHeader; bytes.len());
        let (message_type, length, magic_cookie, transaction_id) =
            track!(HeaderDecoder::default().decode_from_bytes(&bytes[..HEADER_SIZE]))?;
        let message_type = track!(MessageType::from_u16(message_type))?;
        track_assert_eq!(magic_cookie, MAGIC_COOKIE, ErrorKind::BadMagic);
        track_assert_eq!(length % 4, 0, ErrorKind::UnalignedLength; length);
        Ok(Header {
            message_type,
            length,
            transaction_id: TransactionId::new(transaction_id),
        })
    }
}
impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Header {{ type: {:?}, length: {}, transaction_id: {:02x?} }}",
            self.message_type,
            self.length,
            self.transaction_id.as_bytes()
        )
    }
}

/// Raw header decoder.
///
/// Its items are the unvalidated `(type, length, magic cookie, transaction id)` fields.
#[derive(Debug, Default)]
pub struct HeaderDecoder {
    message_type: U16beDecoder,
    message_len: U16beDecoder,
    magic_cookie: U32beDecoder,
    transaction_id: CopyableBytesDecoder<[u8; 12]>,
}
impl Decode for HeaderDecoder {
    type Item = (u16, u16, u32, [u8; 12]);

    fn decode(&mut self, buf: &[u8], eos: Eos) -> bytecodec::Result<usize> {
        let mut offset = 0;
        bytecodec_try_decode!(self.message_type, offset, buf, eos);
        bytecodec_try_decode!(self.message_len, offset, buf, eos);
        bytecodec_try_decode!(self.magic_cookie, offset, buf, eos);
        bytecodec_try_decode!(self.transaction_id, offset, buf, eos);
        Ok(offset)
    }

    fn finish_decoding(&mut self) -> bytecodec::Result<Self::Item> {
        let message_type = track!(self.message_type.finish_decoding())?;
        let message_len = track!(self.message_len.finish_decoding())?;
        let magic_cookie = track!(self.magic_cookie.finish_decoding())?;
        let transaction_id = track!(self.transaction_id.finish_decoding())?;
        Ok((message_type, message_len, magic_cookie, transaction_id))
    }

    fn requiring_bytes(&self) -> ByteCount {
        self.message_type
            .requiring_bytes()
            .add_for_decoding(self.message_len.requiring_bytes())
            .add_for_decoding(self.magic_cookie.requiring_bytes())
            .add_for_decoding(self.transaction_id.requiring_bytes())
    }

    fn is_idle(&self) -> bool {
        self.transaction_id.is_idle()
    }
}

/// Header encoder.
#[derive(Debug, Default)]
pub struct HeaderEncoder {
    message_type: U16beEncoder,
    message_len: U16beEncoder,
    magic_cookie: U32beEncoder,
    transaction_id: BytesEncoder<[u8; 12]>,
}
impl Encode for HeaderEncoder {
    type Item = Header;

    fn encode(&mut self, buf: &mut [u8], eos: Eos) -> bytecodec::Result<usize> {
        let mut offset = 0;
        bytecodec_try_encode!(self.message_type, offset, buf, eos);
        bytecodec_try_encode!(self.message_len, offset, buf, eos);
        bytecodec_try_encode!(self.magic_cookie, offset, buf, eos);
        bytecodec_try_encode!(self.transaction_id, offset, buf, eos);
        Ok(offset)
    }

    fn start_encoding(&mut self, item: Self::Item) -> bytecodec::Result<()> {
        track!(self.message_type.start_encoding(item.message_type.as_u16()))?;
        track!(self.message_len.start_encoding(item.length))?;
        track!(self.magic_cookie.start_encoding(MAGIC_COOKIE))?;
        track!(self
            .transaction_id
            .start_encoding(*item.transaction_id.as_bytes()))?;
        Ok(())
    }

    fn requiring_bytes(&self) -> ByteCount {
        ByteCount::Finite(self.exact_requiring_bytes())
    }

    fn is_idle(&self) -> bool {
        self.message_type.is_idle()
            && self.message_len.is_idle()
            && self.magic_cookie.is_idle()
            && self.transaction_id.is_idle()
    }
}
impl SizedEncode for HeaderEncoder {
    fn exact_requiring_bytes(&self) -> u64 {
        self.message_type.exact_requiring_bytes()
            + self.message_len.exact_requiring_bytes()
            + self.magic_cookie.exact_requiring_bytes()
            + self.transaction_id.exact_requiring_bytes()
    }
}
