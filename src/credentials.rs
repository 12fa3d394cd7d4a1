//! Long-term credentials.
use std::fmt;

/// The state of the long-term credential mechanism for one connection.
///
/// `Credentials` is a value type: the `with_*` methods return updated copies.
///
/// See [RFC 5389 -- 10.2. Long-Term Credential Mechanism].
///
/// [RFC 5389 -- 10.2. Long-Term Credential Mechanism]: https://tools.ietf.org/html/rfc5389#section-10.2
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Credentials {
    username: String,
    realm: String,
    password: String,
    nonce: Option<Vec<u8>>,
}
impl Credentials {
    /// Makes a new `Credentials` instance from a username and a password.
    ///
    /// The realm and the nonce are learned from the server's challenge.
    pub fn new(username: String, password: String) -> Self {
        Credentials {
            username,
            password,
            ..Default::default()
        }
    }

    /// Returns a copy of this instance with `realm` set.
    pub fn with_realm(self, realm: String) -> Self {
        Credentials { realm, ..self }
    }

    /// Returns a copy of this instance with `nonce` set.
    pub fn with_nonce(self, nonce: Vec<u8>) -> Self {
        Credentials {
            nonce: Some(nonce),
            ..self
        }
    }

    /// Returns a copy of this instance with `username` set.
    pub fn with_username(self, username: String) -> Self {
        Credentials { username, ..self }
    }

    /// Returns the credentials to use on a new connection to the same server.
    ///
    /// Nonces are issued per connection, so only the username, the realm and
    /// the password are carried over.
    pub fn for_new_connection(&self) -> Self {
        Credentials {
            username: self.username.clone(),
            realm: self.realm.clone(),
            password: self.password.clone(),
            nonce: None,
        }
    }

    /// Returns the username; empty until one is configured or learned.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the realm; empty until the server's challenge supplies one.
    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// Returns the password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the most recent nonce, if any.
    pub fn nonce(&self) -> Option<&[u8]> {
        self.nonce.as_ref().map(|n| &n[..])
    }

    /// Returns `true` if this instance can produce a `MESSAGE-INTEGRITY` key,
    /// that is, if a password is set.
    pub fn has_key(&self) -> bool {
        !self.password.is_empty()
    }

    /// Derives the HMAC key.
    ///
    /// - with a username and a password: `MD5(username ":" realm ":" password)`
    /// - with only a password: the password bytes
    /// - otherwise `None`
    pub fn key(&self) -> Option<Vec<u8>> {
        if self.password.is_empty() {
            None
        } else if !self.username.is_empty() {
            let digest = md5::compute(
                format!("{}:{}:{}", self.username, self.realm, self.password).as_bytes(),
            );
            Some(digest.0.to_vec())
        } else {
            Some(self.password.as_bytes().to_vec())
        }
    }
}
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("realm", &self.realm)
            .field("password", &"<redacted>")
            .field("nonce", &self.nonce.as_ref().map(|n| String::from_utf8_lossy(n)))
            .finish()
    }
}
