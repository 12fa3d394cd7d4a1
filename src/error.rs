use std::io;
use trackable::error::{ErrorKind as TrackableErrorKind, ErrorKindExt, TrackableError};

/// This crate specific `Result` type.
pub type Result<T> = std::result::Result<T, Error>;

/// This crate specific `Error` type.
#[derive(Debug, Clone, TrackableError)]
#[trackable(error_kind = "ErrorKind")]
pub struct Error(TrackableError<ErrorKind>);
impl From<io::Error> for Error {
    fn from(f: io::Error) -> Self {
        let kind = match f.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => ErrorKind::Timeout,
            _ => ErrorKind::Io,
        };
        kind.cause(f).into()
    }
}
impl From<bytecodec::Error> for Error {
    fn from(f: bytecodec::Error) -> Self {
        let kind = match *f.kind() {
            bytecodec::ErrorKind::UnexpectedEos => ErrorKind::Truncated,
            bytecodec::ErrorKind::InvalidInput => ErrorKind::InvalidInput,
            _ => ErrorKind::Other,
        };
        kind.takes_over(f).into()
    }
}

/// Possible error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A transaction ID was not exactly 12 bytes long.
    InvalidTransactionId,

    /// Fewer than 20 bytes were available for a message header.
    ShortHeader,

    /// The first two bits of the message type were not zero.
    MalformedType,

    /// The magic cookie did not match `0x2112A442`.
    BadMagic,

    /// The message length was not a multiple of 4.
    UnalignedLength,

    /// A declared length disagreed with the actual number of bytes.
    LengthMismatch,

    /// An attribute ended before its declared (or minimum) length.
    Truncated,

    /// An attribute value exceeded its protocol limit.
    TooLong,

    /// An address family other than IPv4 (1) or IPv6 (2).
    BadFamily,

    /// The reserved bytes of an `ERROR-CODE` attribute were not zero.
    InvalidReservedBytes,

    /// The class of an `ERROR-CODE` attribute was outside `3..=6`.
    InvalidClass,

    /// The number of an `ERROR-CODE` attribute was greater than 99.
    InvalidNumber,

    /// A `MESSAGE-INTEGRITY` attribute was encoded without any key material.
    MissingCredentials,

    /// The HMAC of a `MESSAGE-INTEGRITY` attribute did not verify.
    IntegrityMismatch,

    /// The CRC of a `FINGERPRINT` attribute did not verify.
    FingerprintMismatch,

    /// An attribute followed `FINGERPRINT`, or an attribute other than
    /// `FINGERPRINT` followed `MESSAGE-INTEGRITY`.
    MisplacedAttribute,

    /// A framed message declared a body larger than the accepted maximum.
    Oversized,

    /// A response of an unexpected type (or for another transaction) arrived.
    UnexpectedResponse,

    /// The server answered with an error response carrying this status code.
    ErrorResponse(u16),

    /// A Connect response did not carry a `CONNECTION-ID` attribute.
    MissingConnectionId,

    /// A response lacked an attribute required to proceed.
    MissingAttribute,

    /// Input data is invalid.
    InvalidInput,

    /// A read deadline elapsed.
    Timeout,

    /// An I/O error reported by the transport.
    Io,

    /// Other errors.
    Other,
}
impl TrackableErrorKind for ErrorKind {}
