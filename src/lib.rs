//! STUN ([RFC 5389]) and TURN ([RFC 5766], [RFC 6062]) message codec and client.
//!
//! # Examples
//!
//! ```
//! use stun_turn::attribute::AttributeSet;
//! use stun_turn::rfc5389::attributes::Software;
//! use stun_turn::{requests, Credentials, Message};
//!
//! # fn main() -> stun_turn::Result<()> {
//! let request = requests::binding().with_attribute(Software::new("foo".to_owned())?);
//! let bytes = request.serialize()?;
//!
//! let decoded = Message::parse(&bytes, &Credentials::default(), &AttributeSet::stun())?;
//! assert_eq!(decoded.transaction_id(), request.transaction_id());
//! assert_eq!(decoded.get::<Software>().map(|a| a.description()), Some("foo"));
//! # Ok(())
//! # }
//! ```
//!
//! [RFC 5389]: https://tools.ietf.org/html/rfc5389
//! [RFC 5766]: https://tools.ietf.org/html/rfc5766
//! [RFC 6062]: https://tools.ietf.org/html/rfc6062
#[macro_use]
extern crate bytecodec;
#[macro_use]
extern crate trackable;

pub use credentials::Credentials;
pub use error::{Error, ErrorKind, Result};
pub use message::Message;
pub use transaction_id::TransactionId;

#[macro_use]
mod macros;

pub mod attribute;
pub mod attributes;
pub mod client;
pub mod constants;
pub mod convert;
pub mod credentials;
pub mod header;
pub mod message;
pub mod method;
pub mod net;
pub mod requests;
pub mod rfc5389;
pub mod rfc5766;
pub mod rfc6062;
pub mod transport;

mod error;
mod transaction_id;
