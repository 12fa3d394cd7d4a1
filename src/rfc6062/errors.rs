//! Error codes that are defined in [RFC 6062 -- 6.3. New STUN Error Codes].
//!
//! [RFC 6062 -- 6.3. New STUN Error Codes]: https://tools.ietf.org/html/rfc6062#section-6.3

define_error_code!(
    /// `446`: "Connection Already Exists".
    ConnectionAlreadyExists,
    446,
    "Connection Already Exists"
);

define_error_code!(
    /// `447`: "Connection Timeout or Failure".
    ConnectionTimeoutOrFailure,
    447,
    "Connection Timeout or Failure"
);
