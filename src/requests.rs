//! Factories for the requests and indications a TURN client sends.
//!
//! Unauthenticated requests carry only their method specific attributes.
//! [`authenticate`] appends the long-term credential attributes:
//! `USERNAME`, `REALM`, `NONCE` and a `MESSAGE-INTEGRITY` computed from the
//! credentials of the message.
//!
//! [`authenticate`]: ./fn.authenticate.html
use crate::credentials::Credentials;
use crate::error::{ErrorKind, Result};
use crate::message::Message;
use crate::rfc5389::attributes::{Fingerprint, MessageIntegrity, Nonce, Realm, Username};
use crate::rfc5389::methods::BINDING;
use crate::rfc5766::attributes::{Data, RequestedTransport, XorPeerAddress};
use crate::rfc5766::methods::{ALLOCATE, CREATE_PERMISSION, SEND};
use crate::rfc6062::attributes::ConnectionId;
use crate::rfc6062::methods::{CONNECT, CONNECTION_BIND};
use crate::transport::TransportProtocol;
use std::net::SocketAddr;

/// Makes a Binding request.
pub fn binding() -> Message {
    Message::request(BINDING)
}

/// Makes an Allocate request for a relay of the given protocol.
pub fn allocate(protocol: TransportProtocol) -> Message {
    Message::request(ALLOCATE).with_attribute(RequestedTransport::new(protocol.as_u8()))
}

/// Makes a CreatePermission request for the host part of `peer`.
///
/// Permissions are per IP address, so the port is sent as zero.
pub fn create_permission(peer: SocketAddr) -> Message {
    let host = SocketAddr::new(peer.ip(), 0);
    Message::request(CREATE_PERMISSION).with_attribute(XorPeerAddress::new(host))
}

/// Makes a Connect request towards `peer`.
pub fn connect(peer: SocketAddr) -> Message {
    Message::request(CONNECT).with_attribute(XorPeerAddress::new(peer))
}

/// Makes a ConnectionBind request for the connection `id`.
pub fn connection_bind(id: ConnectionId) -> Message {
    Message::request(CONNECTION_BIND).with_attribute(id)
}

/// Makes a Send indication relaying `data` to `peer`.
pub fn send_indication(peer: SocketAddr, data: Vec<u8>) -> Result<Message> {
    let data = track!(Data::new(data))?;
    Ok(Message::indication(SEND)
        .with_attribute(XorPeerAddress::new(peer))
        .with_attribute(data))
}

/// Signs `message` with `credentials`.
///
/// # Errors
///
/// - `ErrorKind::MissingCredentials` if `credentials` have no password
/// - `ErrorKind::TooLong` or `ErrorKind::InvalidInput` if a credential is
///   too long for its attribute
pub fn authenticate(message: Message, credentials: &Credentials) -> Result<Message> {
    track_assert!(credentials.has_key(), ErrorKind::MissingCredentials);
    let mut message = message.with_credentials(credentials.clone());
    if !credentials.username().is_empty() {
        message.add_attribute(track!(Username::new(credentials.username().to_owned()))?);
    }
    if !credentials.realm().is_empty() {
        message.add_attribute(track!(Realm::new(credentials.realm().to_owned()))?);
    }
    if let Some(nonce) = credentials.nonce() {
        message.add_attribute(track!(Nonce::new(nonce.to_vec()))?);
    }
    message.add_attribute(MessageIntegrity::new());
    Ok(message)
}

/// Appends a `FINGERPRINT`, which must be the last attribute.
pub fn fingerprint(message: Message) -> Message {
    message.with_attribute(Fingerprint::new())
}
