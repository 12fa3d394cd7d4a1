//! A blocking TURN client.
//!
//! One [`Client`] drives one transport connection: each request is written,
//! then exactly one response is read back before the call returns.
//!
//! [`Client`]: ./struct.Client.html
use crate::attribute::AttributeSet;
use crate::credentials::Credentials;
use crate::error::{ErrorKind, Result};
use crate::message::Message;
use crate::method::{Class, Method};
use crate::requests;
use crate::rfc5389::attributes::{MappedAddress, Software, XorMappedAddress};
use crate::rfc5389::errors::Unauthorized;
use crate::rfc5389::methods::BINDING;
use crate::rfc5766::attributes::XorRelayAddress;
use crate::rfc5766::methods::{ALLOCATE, CREATE_PERMISSION};
use crate::rfc6062::attributes::ConnectionId;
use crate::rfc6062::methods::{CONNECT, CONNECTION_BIND};
use crate::transport::Transport;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub use self::dialer::RelayDialer;

mod dialer;

/// Client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// How long to wait for each response; `None` waits indefinitely.
    ///
    /// Every response that arrives pushes the deadline forward by this amount.
    pub timeout: Option<Duration>,

    /// `SOFTWARE` attribute added to every outgoing message.
    pub software: Option<Software>,

    /// Whether outgoing messages end with a `FINGERPRINT` attribute.
    pub fingerprint: bool,
}
impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            timeout: None,
            software: None,
            fingerprint: true,
        }
    }
}

/// TURN client over a transport `T`.
#[derive(Debug)]
pub struct Client<T> {
    transport: T,
    credentials: Credentials,
    config: ClientConfig,
    registry: AttributeSet,
    deadline: Option<Instant>,
}
impl<T: Transport> Client<T> {
    /// Makes a new `Client` instance with the default configuration.
    pub fn new(transport: T) -> Self {
        Client {
            transport,
            credentials: Credentials::default(),
            config: ClientConfig::default(),
            registry: AttributeSet::turn(),
            deadline: None,
        }
    }

    /// Returns this client with `config` applied.
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns this client with `credentials` set.
    ///
    /// Needed for `request_permission` or `connect` on a client whose
    /// allocation was not made by `allocate`.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Returns the session credentials, including a learned realm and nonce.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the configuration of this client.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns a reference to the underlying transport.
    pub fn transport_ref(&self) -> &T {
        &self.transport
    }

    /// Returns a mutable reference to the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Takes ownership of this instance, and returns the underlying transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Learns the address the server sees this connection coming from.
    pub fn bind(&mut self) -> Result<SocketAddr> {
        let response = track!(self.transact(requests::binding(), false))?;
        let response = track!(check_success(response, BINDING))?;
        if let Some(a) = response.get::<MappedAddress>() {
            Ok(a.address())
        } else {
            let a = track_assert_some!(
                response.get::<XorMappedAddress>(),
                ErrorKind::MissingAttribute,
                "No mapped address"
            );
            Ok(a.address())
        }
    }

    /// Allocates a relayed address on the server and returns it.
    ///
    /// Unless `credentials` already carry a nonce, an unauthenticated request
    /// is sent first to learn the realm and the nonce of the server.
    ///
    /// # Errors
    ///
    /// An error response surfaces as `ErrorKind::ErrorResponse(code)`;
    /// `442` means the server does not relay the requested transport.
    pub fn allocate(&mut self, credentials: Credentials) -> Result<SocketAddr> {
        self.credentials = credentials;
        let protocol = self.transport.protocol();

        if self.credentials.nonce().is_none() {
            let response = track!(self.transact(requests::allocate(protocol), false))?;
            self.learn_challenge(&response);
            if response.class() != Class::ErrorResponse || !is_unauthorized(&response) {
                let response = track!(check_success(response, ALLOCATE))?;
                return track!(relayed_address(&response));
            }
        }

        let response = track!(self.transact(requests::allocate(protocol), true))?;
        let response = track!(check_success(response, ALLOCATE))?;
        track!(relayed_address(&response))
    }

    /// Allows the relay to exchange data with the IP address of `peer`.
    pub fn request_permission(&mut self, peer: SocketAddr) -> Result<()> {
        let response = track!(self.transact(requests::create_permission(peer), true))?;
        track!(check_success(response, CREATE_PERMISSION))?;
        info!(peer = %peer, "permission created");
        Ok(())
    }

    /// Opens a relayed TCP connection to `peer`.
    ///
    /// A new connection to the server is made and bound to the peer
    /// connection; it is returned as a raw data pipe once bound.
    /// The derived connection is closed if binding fails.
    pub fn connect(&mut self, peer: SocketAddr) -> Result<T> {
        let response = track!(self.transact(requests::connect(peer), true))?;
        let response = track!(check_success(response, CONNECT))?;
        let id = *track_assert_some!(
            response.get::<ConnectionId>(),
            ErrorKind::MissingConnectionId
        );

        let mut data = track!(self.derive())?;
        track!(data.bind_connection(id))?;
        info!(peer = %peer, connection_id = id.value(), "data connection bound");
        Ok(data.into_transport())
    }

    /// Relays `data` to `peer` with a Send indication.
    ///
    /// Indications have no response.
    pub fn send_indication(&mut self, peer: SocketAddr, data: Vec<u8>) -> Result<()> {
        let indication = track!(requests::send_indication(peer, data))?;
        track!(self.send(indication, false))?;
        Ok(())
    }

    fn derive(&self) -> Result<Self> {
        let transport = track!(self.transport.redial())?;
        let config = ClientConfig {
            timeout: None,
            software: self.config.software.clone(),
            fingerprint: self.config.fingerprint,
        };
        Ok(Client {
            transport,
            credentials: self.credentials.for_new_connection(),
            config,
            registry: self.registry.clone(),
            deadline: None,
        })
    }

    fn bind_connection(&mut self, id: ConnectionId) -> Result<()> {
        let response = track!(self.transact(requests::connection_bind(id), false))?;
        self.learn_challenge(&response);
        if response.class() != Class::ErrorResponse || !is_unauthorized(&response) {
            track!(check_success(response, CONNECTION_BIND))?;
            return Ok(());
        }

        let response = track!(self.transact(requests::connection_bind(id), true))?;
        track!(check_success(response, CONNECTION_BIND))?;
        Ok(())
    }

    fn learn_challenge(&mut self, response: &Message) {
        let learned = response.credentials();
        if !learned.realm().is_empty() {
            self.credentials = self
                .credentials
                .clone()
                .with_realm(learned.realm().to_owned());
        }
        if let Some(nonce) = learned.nonce() {
            debug!(realm = learned.realm(), "nonce captured");
            self.credentials = self.credentials.clone().with_nonce(nonce.to_vec());
        }
    }

    fn transact(&mut self, request: Message, authenticated: bool) -> Result<Message> {
        let transaction_id = *request.transaction_id();
        track!(self.send(request, authenticated))?;
        let response = track!(self.read_response())?;
        track_assert_eq!(
            response.transaction_id(),
            &transaction_id,
            ErrorKind::UnexpectedResponse
        );
        Ok(response)
    }

    fn send(&mut self, mut message: Message, authenticated: bool) -> Result<()> {
        if let Some(software) = self.config.software.clone() {
            message.add_attribute(software);
        }
        if authenticated {
            message = track!(requests::authenticate(message, &self.credentials))?;
        }
        if self.config.fingerprint {
            message = requests::fingerprint(message);
        }
        let bytes = track!(message.serialize())?;
        debug!(
            method = message.method().as_u16(),
            class = ?message.class(),
            transaction_id = ?message.transaction_id(),
            "sending"
        );
        track!(self.transport.write_message(&bytes))?;
        Ok(())
    }

    fn read_response(&mut self) -> Result<Message> {
        if let Some(timeout) = self.config.timeout {
            if self.deadline.is_none() {
                self.deadline = Some(Instant::now() + timeout);
            }
            track!(self.transport.set_read_deadline(self.deadline))?;
        }
        let bytes = track!(self.transport.read_message())?;
        if let Some(timeout) = self.config.timeout {
            self.deadline = Some(Instant::now() + timeout);
        }

        let response = track!(Message::parse(&bytes, &self.credentials, &self.registry))?;
        debug!(
            method = response.method().as_u16(),
            class = ?response.class(),
            transaction_id = ?response.transaction_id(),
            "received"
        );
        Ok(response)
    }
}

fn is_unauthorized(response: &Message) -> bool {
    response.error_code().map(|e| e.code()) == Some(Unauthorized::CODEPOINT)
}

fn check_success(response: Message, method: Method) -> Result<Message> {
    if response.class() == Class::ErrorResponse {
        let error = track_assert_some!(response.error_code(), ErrorKind::UnexpectedResponse);
        warn!(
            method = method.as_u16(),
            code = error.code(),
            reason = error.reason_phrase(),
            "request rejected"
        );
        track_panic!(
            ErrorKind::ErrorResponse(error.code()),
            "{}",
            error.reason_phrase()
        );
    }
    track_assert_eq!(response.class(), Class::SuccessResponse, ErrorKind::UnexpectedResponse);
    track_assert_eq!(response.method(), method, ErrorKind::UnexpectedResponse);
    Ok(response)
}

fn relayed_address(response: &Message) -> Result<SocketAddr> {
    let a = track_assert_some!(
        response.get::<XorRelayAddress>(),
        ErrorKind::MissingAttribute,
        "No relayed address"
    );
    info!(relayed = %a.address(), "allocation created");
    Ok(a.address())
}
