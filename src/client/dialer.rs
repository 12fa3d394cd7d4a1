use super::{Client, ClientConfig};
use crate::credentials::Credentials;
use crate::error::Result;
use crate::transport::Transport;
use std::net::SocketAddr;

/// Dials peers through a TURN relay.
///
/// The allocation is made when the dialer is created; each `dial` grants a
/// permission for the peer and opens a relayed connection to it.
#[derive(Debug)]
pub struct RelayDialer<T> {
    client: Client<T>,
    relayed_address: SocketAddr,
}
impl<T: Transport> RelayDialer<T> {
    /// Allocates a relay over `transport` with `credentials`.
    pub fn new(transport: T, credentials: Credentials) -> Result<Self> {
        track!(Self::with_config(transport, credentials, ClientConfig::default()))
    }

    /// Like [`RelayDialer::new`], with a custom client configuration.
    ///
    /// [`RelayDialer::new`]: #method.new
    pub fn with_config(transport: T, credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let mut client = Client::new(transport).with_config(config);
        let relayed_address = track!(client.allocate(credentials))?;
        Ok(RelayDialer {
            client,
            relayed_address,
        })
    }

    /// Returns the relayed address of the allocation.
    pub fn relayed_address(&self) -> SocketAddr {
        self.relayed_address
    }

    /// Returns a reference to the control client.
    pub fn client_ref(&self) -> &Client<T> {
        &self.client
    }

    /// Opens a relayed connection to `peer`.
    pub fn dial(&mut self, peer: SocketAddr) -> Result<T> {
        track!(self.client.request_permission(peer); peer)?;
        track!(self.client.connect(peer); peer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{allocate_handler, relay, reply, signed, user, MockTransport};
    use crate::error::ErrorKind;
    use crate::method::Class;
    use crate::rfc5766::methods::CREATE_PERMISSION;
    use crate::rfc6062::attributes::ConnectionId;
    use crate::rfc6062::methods::{CONNECT, CONNECTION_BIND};

    #[test]
    fn dial_grants_permission_then_connects() {
        let transport = MockTransport::new(|_, request| {
            let method = request.method();
            if method == CREATE_PERMISSION || method == CONNECTION_BIND {
                return Some(signed(reply(request, Class::SuccessResponse)));
            }
            if method == CONNECT {
                return Some(signed(
                    reply(request, Class::SuccessResponse).with_attribute(ConnectionId::new(1)),
                ));
            }
            Some(allocate_handler(request))
        });
        let mut dialer = RelayDialer::new(transport, user()).unwrap();
        assert_eq!(dialer.relayed_address(), relay());

        let data = dialer.dial("198.51.100.2:8080".parse().unwrap()).unwrap();
        assert_eq!(data.connection(), 1);

        let methods = dialer
            .client_ref()
            .transport_ref()
            .received()
            .into_iter()
            .map(|(_, m)| m.method())
            .collect::<Vec<_>>();
        assert_eq!(
            methods,
            [
                crate::rfc5766::methods::ALLOCATE,
                crate::rfc5766::methods::ALLOCATE,
                CREATE_PERMISSION,
                CONNECT,
                CONNECTION_BIND
            ]
        );
    }

    #[test]
    fn dial_fails_without_permission() {
        let transport = MockTransport::new(|_, request| {
            if request.method() == CREATE_PERMISSION {
                return Some(reply(request, Class::ErrorResponse).with_attribute(
                    crate::rfc5389::attributes::ErrorCode::from(
                        crate::rfc5766::errors::Forbidden,
                    ),
                ));
            }
            Some(allocate_handler(request))
        });
        let mut dialer = RelayDialer::new(transport, user()).unwrap();
        let e = dialer
            .dial("198.51.100.2:8080".parse().unwrap())
            .err()
            .unwrap();
        assert_eq!(*e.kind(), ErrorKind::ErrorResponse(403));
    }
}
