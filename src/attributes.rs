//! The closed set of attributes this crate understands.
use crate::attribute::Attribute;
use crate::rfc5389::attributes::{
    AlternateServer, ErrorCode, Fingerprint, MappedAddress, MessageIntegrity, Nonce, Realm,
    Software, UnknownAttributes, Username, XorMappedAddress,
};
use crate::rfc5766::attributes::{
    ChannelNumber, Data, DontFragment, EvenPort, Lifetime, RequestedTransport, ReservationToken,
    XorPeerAddress, XorRelayAddress,
};
use crate::rfc6062::attributes::ConnectionId;

define_attribute_enums!(
    AnyAttribute,
    [
        MappedAddress,
        XorMappedAddress,
        Username,
        Realm,
        Nonce,
        Software,
        ErrorCode,
        MessageIntegrity,
        Fingerprint,
        UnknownAttributes,
        AlternateServer,
        RequestedTransport,
        XorPeerAddress,
        XorRelayAddress,
        ConnectionId,
        ChannelNumber,
        Lifetime,
        Data,
        EvenPort,
        DontFragment,
        ReservationToken
    ]
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{AttributeType, DecodeContext, UnknownAttribute};
    use crate::convert::TryAsRef;
    use crate::credentials::Credentials;
    use crate::header::Header;
    use crate::method::{Class, Method, MessageType};
    use crate::TransactionId;

    #[test]
    fn dispatches_on_codepoint() {
        let header = Header::new(
            MessageType::new(Method::from(3), Class::SuccessResponse),
            TransactionId::new([0; 12]),
        );
        let mut ctx = DecodeContext::new(header, Credentials::default());

        let lifetime = AnyAttribute::decode(
            AttributeType::new(Lifetime::CODEPOINT),
            &[0, 0, 0x02, 0x58],
            4,
            &mut ctx,
        )
        .unwrap();
        let lifetime: Option<&Lifetime> = lifetime.try_as_ref();
        assert_eq!(
            lifetime.map(|l| l.lifetime()),
            Some(std::time::Duration::from_secs(600))
        );

        let unknown = AnyAttribute::decode(AttributeType::new(0x8fff), &[1, 2], 2, &mut ctx)
            .unwrap();
        let unknown: Option<&UnknownAttribute> = unknown.try_as_ref();
        assert_eq!(unknown.map(|u| u.value()), Some(&[1, 2][..]));
    }
}
