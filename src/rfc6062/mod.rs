//! [RFC 6062(TURN Extensions for TCP Allocations)][RFC 6062] specific components.
//!
//! [RFC 6062]: https://tools.ietf.org/html/rfc6062
pub mod attributes;
pub mod errors;
pub mod methods;
