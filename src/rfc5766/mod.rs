//! [RFC 5766(TURN)][RFC 5766] specific components.
//!
//! [RFC 5766]: https://tools.ietf.org/html/rfc5766
pub mod attributes;
pub mod errors;
pub mod methods;
