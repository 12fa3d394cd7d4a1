use crate::error::{ErrorKind, Result};
use rand::RngCore;

/// Transaction ID.
///
/// > STUN is a client-server protocol.  It supports two types of
/// > transactions.  One is a request/response transaction in which a
/// > client sends a request to a server, and the server returns a
/// > response.  The second is an indication transaction in which either
/// > agent -- client or server -- sends an indication that generates no
/// > response.  Both types of transactions include a **transaction ID**, which
/// > is a randomly selected 96-bit number.  For request/response
/// > transactions, this transaction ID allows the client to associate the
/// > response with the request that generated it; for indications, the
/// > transaction ID serves as a debugging aid.
/// >
/// > ([RFC 5389 -- 3. Overview of Operation](https://tools.ietf.org/html/rfc5389#section-3))
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId([u8; 12]);
impl TransactionId {
    /// Makes a new `TransactionId` instance.
    pub fn new(id: [u8; 12]) -> Self {
        TransactionId(id)
    }

    /// Makes a new `TransactionId` filled with random bytes.
    pub fn random() -> Self {
        let mut id = [0; 12];
        rand::thread_rng().fill_bytes(&mut id);
        TransactionId(id)
    }

    /// Makes a new `TransactionId` from a byte slice.
    ///
    /// # Errors
    ///
    /// If the length of `bytes` is not exactly 12, this will return an
    /// `ErrorKind::InvalidTransactionId` error.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        track_assert_eq!(bytes.len(), 12, ErrorKind::InvalidTransactionId);
        let mut id = [0; 12];
        id.copy_from_slice(bytes);
        Ok(TransactionId(id))
    }

    /// Returns a reference to the bytes that represents the identifier.
    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }
}
impl AsRef<[u8]> for TransactionId {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_requires_twelve_bytes() {
        assert!(TransactionId::from_slice(&[7; 12]).is_ok());

        let e = TransactionId::from_slice(&[7; 11]).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::InvalidTransactionId);

        let e = TransactionId::from_slice(&[7; 13]).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::InvalidTransactionId);
    }

    #[test]
    fn random_ids_differ() {
        assert_ne!(TransactionId::random(), TransactionId::random());
    }
}
