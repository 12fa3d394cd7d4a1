use crate::error::{ErrorKind, Result};
use std::fmt;

/// STUN method.
///
/// > All STUN messages start with a fixed header that includes a **method**, a
/// > class, and the transaction ID.  The **method** indicates which of the
/// > various requests or indications this is;
/// >
/// > [RFC 5389 -- 3. Overview of Operation]
///
/// [RFC 5389 -- 3. Overview of Operation]: https://tools.ietf.org/html/rfc5389#section-3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Method(pub(crate) u16);
impl Method {
    /// Makes a new `Method` instance with the given codepoint.
    ///
    /// # Errors
    ///
    /// If `codepoint` is greater than `0xFFF`, this will return an `ErrorKind::InvalidInput` error.
    pub fn new(codepoint: u16) -> Result<Self> {
        track_assert!(codepoint < 0x1000, ErrorKind::InvalidInput; codepoint);
        Ok(Method(codepoint))
    }

    /// Returns the codepoint corresponding this method.
    pub fn as_u16(self) -> u16 {
        self.0
    }
}
impl From<u8> for Method {
    fn from(f: u8) -> Self {
        Method(u16::from(f))
    }
}

/// The class of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Request,
    Indication,
    SuccessResponse,
    ErrorResponse,
}
impl Class {
    /// Returns a `Class` instance which is corresponding to `value`.
    ///
    /// > A class of `0b00` is a request, a class of `0b01` is an
    /// > indication, a class of `0b10` is a success response, and a class of
    /// > `0b11` is an error response.
    /// >
    /// > [RFC 5389 -- 6. STUN Message Structure](https://tools.ietf.org/html/rfc5389#section-6)
    ///
    /// If no such instance exists, this will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stun_turn::method::Class;
    ///
    /// assert_eq!(Class::from_u8(0), Some(Class::Request));
    /// assert_eq!(Class::from_u8(9), None);
    /// ```
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0b00 => Some(Class::Request),
            0b01 => Some(Class::Indication),
            0b10 => Some(Class::SuccessResponse),
            0b11 => Some(Class::ErrorResponse),
            _ => None,
        }
    }

    fn as_u16(self) -> u16 {
        match self {
            Class::Request => 0b00,
            Class::Indication => 0b01,
            Class::SuccessResponse => 0b10,
            Class::ErrorResponse => 0b11,
        }
    }
}

/// The 16-bit message type field, packing a method and a class.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageType(u16);
impl MessageType {
    /// Packs `method` and `class` into a message type.
    pub fn new(method: Method, class: Class) -> Self {
        let class = class.as_u16();
        let method = method.as_u16();
        MessageType(
            (method & 0b0000_0000_1111)
                | ((class & 0b01) << 4)
                | ((method & 0b0000_0111_0000) << 1)
                | ((class & 0b10) << 7)
                | ((method & 0b1111_1000_0000) << 2),
        )
    }

    /// Makes a `MessageType` from its wire representation.
    ///
    /// # Errors
    ///
    /// If either of the two most significant bits is set, this will return an
    /// `ErrorKind::MalformedType` error.
    pub fn from_u16(value: u16) -> Result<Self> {
        track_assert!(
            value >> 14 == 0,
            ErrorKind::MalformedType,
            "First two-bits of STUN message must be 0: {:#06x}",
            value
        );
        Ok(MessageType(value))
    }

    /// Returns the wire representation of this type.
    pub fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns the method part of this type.
    pub fn method(self) -> Method {
        let value = self.0;
        Method(
            (value & 0b0000_0000_1111)
                | ((value >> 1) & 0b0000_0111_0000)
                | ((value >> 2) & 0b1111_1000_0000),
        )
    }

    /// Returns the class part of this type.
    pub fn class(self) -> Class {
        let class = ((self.0 >> 4) & 0b01) | ((self.0 >> 7) & 0b10);
        match class {
            0b00 => Class::Request,
            0b01 => Class::Indication,
            0b10 => Class::SuccessResponse,
            _ => Class::ErrorResponse,
        }
    }
}
impl fmt::Debug for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "MessageType({:#06x}, {:?} {:#05x})",
            self.0,
            self.class(),
            self.method().as_u16()
        )
    }
}
