/// Defines a closed attribute enum over the given attribute types.
///
/// Each variant is named after the type it wraps and the types must be in scope.
/// The enum also gets an `Unknown` variant holding an `UnknownAttribute`, and
/// implements `Attribute` by dispatching on the variant (or, when decoding,
/// on the `CODEPOINT` of each type).
macro_rules! define_attribute_enums {
    ($attr:ident, [$($variant:ident),*]) => {
        /// Attribute set.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $attr {
            $($variant($variant),)*
            Unknown($crate::attribute::UnknownAttribute),
        }
        $(impl From<$variant> for $attr {
            fn from(f: $variant) -> Self {
                $attr::$variant(f)
            }
        })*
        impl From<$crate::attribute::UnknownAttribute> for $attr {
            fn from(f: $crate::attribute::UnknownAttribute) -> Self {
                $attr::Unknown(f)
            }
        }
        $(impl $crate::convert::TryAsRef<$variant> for $attr {
            fn try_as_ref(&self) -> Option<&$variant> {
                if let $attr::$variant(a) = self {
                    Some(a)
                } else {
                    None
                }
            }
        })*
        impl $crate::convert::TryAsRef<$crate::attribute::UnknownAttribute> for $attr {
            fn try_as_ref(&self) -> Option<&$crate::attribute::UnknownAttribute> {
                if let $attr::Unknown(a) = self {
                    Some(a)
                } else {
                    None
                }
            }
        }
        impl $crate::attribute::Attribute for $attr {
            fn get_type(&self) -> $crate::attribute::AttributeType {
                match self {
                    $($attr::$variant(a) => a.get_type(),)*
                    $attr::Unknown(a) => a.get_type(),
                }
            }

            fn value_len(&self) -> u16 {
                match self {
                    $($attr::$variant(a) => a.value_len(),)*
                    $attr::Unknown(a) => a.value_len(),
                }
            }

            fn encode_value(
                &self,
                ctx: &$crate::attribute::EncodeContext,
            ) -> $crate::error::Result<Vec<u8>> {
                match self {
                    $($attr::$variant(a) => track!(a.encode_value(ctx), "attr={}", stringify!($variant)),)*
                    $attr::Unknown(a) => track!(a.encode_value(ctx)),
                }
            }

            fn decode(
                attr_type: $crate::attribute::AttributeType,
                bytes: &[u8],
                declared_len: u16,
                ctx: &mut $crate::attribute::DecodeContext,
            ) -> $crate::error::Result<Self> {
                let attribute = match attr_type.as_u16() {
                    $($variant::CODEPOINT => {
                        let a = track!(
                            $variant::decode(attr_type, bytes, declared_len, ctx),
                            "attr={}",
                            stringify!($variant)
                        )?;
                        $attr::$variant(a)
                    })*
                    _ => {
                        let a = track!($crate::attribute::UnknownAttribute::decode(
                            attr_type,
                            bytes,
                            declared_len,
                            ctx
                        ))?;
                        $attr::Unknown(a)
                    }
                };
                Ok(attribute)
            }
        }
    };
}

/// Defines a socket address attribute.
///
/// `xor` attributes obfuscate the address with the magic cookie and the
/// transaction ID of the enclosing message; `plain` ones carry it as is.
macro_rules! define_address_attribute {
    ($(#[$meta:meta])* $name:ident, $codepoint:expr, plain) => {
        define_address_attribute!(@impl $(#[$meta])* $name, $codepoint, |addr, _| addr);
    };
    ($(#[$meta:meta])* $name:ident, $codepoint:expr, xor) => {
        define_address_attribute!(@impl $(#[$meta])* $name, $codepoint, $crate::net::socket_addr_xor);
    };
    (@impl $(#[$meta:meta])* $name:ident, $codepoint:expr, $transform:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(::std::net::SocketAddr);
        impl $name {
            /// The codepoint of the type of the attribute.
            pub const CODEPOINT: u16 = $codepoint;

            #[allow(missing_docs)]
            pub fn new(addr: ::std::net::SocketAddr) -> Self {
                $name(addr)
            }

            /// Returns the address of this instance.
            pub fn address(&self) -> ::std::net::SocketAddr {
                self.0
            }

            fn transform(
                addr: ::std::net::SocketAddr,
                transaction_id: &$crate::TransactionId,
            ) -> ::std::net::SocketAddr {
                let transform: fn(::std::net::SocketAddr, &$crate::TransactionId) -> ::std::net::SocketAddr =
                    $transform;
                transform(addr, transaction_id)
            }
        }
        impl $crate::attribute::Attribute for $name {
            fn get_type(&self) -> $crate::attribute::AttributeType {
                $crate::attribute::AttributeType::new(Self::CODEPOINT)
            }

            fn value_len(&self) -> u16 {
                $crate::net::socket_addr_len(&self.0)
            }

            fn encode_value(
                &self,
                ctx: &$crate::attribute::EncodeContext,
            ) -> $crate::error::Result<Vec<u8>> {
                let addr = Self::transform(self.0, ctx.transaction_id());
                track!($crate::net::encode_socket_addr(addr))
            }

            fn decode(
                _attr_type: $crate::attribute::AttributeType,
                bytes: &[u8],
                declared_len: u16,
                ctx: &mut $crate::attribute::DecodeContext,
            ) -> $crate::error::Result<Self> {
                let value = track!($crate::attribute::value_bytes(bytes, declared_len))?;
                let addr = track!($crate::net::decode_socket_addr(value))?;
                Ok($name(Self::transform(addr, ctx.transaction_id())))
            }
        }
    };
}

/// Defines an error code as a unit struct convertible into an `ErrorCode` attribute.
macro_rules! define_error_code {
    ($(#[$meta:meta])* $name:ident, $code:expr, $reason:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name;
        impl $name {
            /// The codepoint of the error.
            pub const CODEPOINT: u16 = $code;
        }
        impl From<$name> for $crate::rfc5389::attributes::ErrorCode {
            fn from(_: $name) -> Self {
                $crate::rfc5389::attributes::ErrorCode::from_static($name::CODEPOINT, $reason)
            }
        }
    };
}
