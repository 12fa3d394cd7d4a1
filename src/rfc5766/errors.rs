//! Error codes that are defined in [RFC 5766 -- 15. New STUN Error Response Codes].
//!
//! [RFC 5766 -- 15. New STUN Error Response Codes]: https://tools.ietf.org/html/rfc5766#section-15

define_error_code!(
    /// `403`: "Forbidden".
    ///
    /// > The request was valid but cannot be performed due to administrative or similar restrictions.
    Forbidden,
    403,
    "Forbidden"
);

define_error_code!(
    /// `437`: "Allocation Mismatch".
    ///
    /// > A request was received by the server that requires an allocation to be in place, but no allocation exists,
    /// > or a request was received that requires no allocation, but an allocation exists.
    AllocationMismatch,
    437,
    "Allocation Mismatch"
);

define_error_code!(
    /// `441`: "Wrong Credentials".
    ///
    /// > The credentials in the (non-Allocate) request do not match those used to create the allocation.
    WrongCredentials,
    441,
    "Wrong Credentials"
);

define_error_code!(
    /// `442`: "Unsupported Transport Protocol".
    ///
    /// > The Allocate request asked the server to use a transport protocol between the server and the peer
    /// > that the server does not support.
    UnsupportedTransportProtocol,
    442,
    "Unsupported Transport Protocol"
);

define_error_code!(
    /// `486`: "Allocation Quota Reached".
    ///
    /// > No more allocations using this username can be created at the present time.
    AllocationQuotaReached,
    486,
    "Allocation Quota Reached"
);

define_error_code!(
    /// `508`: "Insufficient Capacity".
    ///
    /// > The server is unable to carry out the request due to some capacity limit being reached.
    InsufficientCapacity,
    508,
    "Insufficient Capacity"
);
