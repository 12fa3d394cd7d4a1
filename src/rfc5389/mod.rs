//! [RFC 5389] specific components.
//!
//! [RFC 5389]: https://tools.ietf.org/html/rfc5389
pub mod attributes;
pub mod errors;
pub mod methods;
