//! Error codes that are defined in [RFC 5389 -- 15.6 ERROR-CODE].
//!
//! [RFC 5389 -- 15.6 ERROR-CODE]: https://tools.ietf.org/html/rfc5389#section-15.6

define_error_code!(
    /// `300`: "Try Alternate".
    ///
    /// > The client should contact an alternate server for
    /// > this request.
    /// >
    /// > [RFC 5389 -- 15.6 ERROR-CODE]
    ///
    /// [RFC 5389 -- 15.6 ERROR-CODE]: https://tools.ietf.org/html/rfc5389#section-15.6
    TryAlternate,
    300,
    "Try Alternate"
);

define_error_code!(
    /// `400`: "Bad Request".
    ///
    /// > The request was malformed.  The client SHOULD NOT
    /// > retry the request without modification from the previous
    /// > attempt.
    /// >
    /// > [RFC 5389 -- 15.6 ERROR-CODE]
    ///
    /// [RFC 5389 -- 15.6 ERROR-CODE]: https://tools.ietf.org/html/rfc5389#section-15.6
    BadRequest,
    400,
    "Bad Request"
);

define_error_code!(
    /// `401`: "Unauthorized".
    ///
    /// > The request did not contain the correct
    /// > credentials to proceed.  The client should retry the request
    /// > with proper credentials.
    /// >
    /// > [RFC 5389 -- 15.6 ERROR-CODE]
    ///
    /// [RFC 5389 -- 15.6 ERROR-CODE]: https://tools.ietf.org/html/rfc5389#section-15.6
    Unauthorized,
    401,
    "Unauthorized"
);

define_error_code!(
    /// `420`: "Unknown Attribute".
    ///
    /// > The server received a STUN packet containing
    /// > a comprehension-required attribute that it did not understand.
    /// >
    /// > [RFC 5389 -- 15.6 ERROR-CODE]
    ///
    /// [RFC 5389 -- 15.6 ERROR-CODE]: https://tools.ietf.org/html/rfc5389#section-15.6
    UnknownAttribute,
    420,
    "Unknown Attribute"
);

define_error_code!(
    /// `438`: "Stale Nonce".
    ///
    /// > The NONCE used by the client was no longer
    /// > valid.  The client should retry, using the NONCE provided in
    /// > the response.
    /// >
    /// > [RFC 5389 -- 15.6 ERROR-CODE]
    ///
    /// [RFC 5389 -- 15.6 ERROR-CODE]: https://tools.ietf.org/html/rfc5389#section-15.6
    StaleNonce,
    438,
    "Stale Nonce"
);

define_error_code!(
    /// `500`: "Server Error".
    ///
    /// > The server has suffered a temporary error.  The
    /// > client should try again.
    /// >
    /// > [RFC 5389 -- 15.6 ERROR-CODE]
    ///
    /// [RFC 5389 -- 15.6 ERROR-CODE]: https://tools.ietf.org/html/rfc5389#section-15.6
    ServerError,
    500,
    "Server Error"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc5389::attributes::ErrorCode;

    #[test]
    fn converts_into_error_code() {
        let attr: ErrorCode = Unauthorized.into();
        assert_eq!(attr.code(), 401);
        assert_eq!(attr.reason_phrase(), "Unauthorized");

        let attr: ErrorCode = StaleNonce.into();
        assert_eq!(attr.code(), StaleNonce::CODEPOINT);
    }
}
