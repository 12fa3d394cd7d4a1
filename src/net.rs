//! Socket address related components.
//!
//! # Binary Format of Socket Address
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |0 0 0 0 0 0 0 0|    Family     |           Port                |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                                                               |
//! |                 Address (32 bits or 128 bits)                 |
//! |                                                               |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!
//! Family: IPv4=1, IPv6=2
//! ```
use crate::constants::MAGIC_COOKIE;
use crate::error::{ErrorKind, Result};
use crate::TransactionId;
use bytecodec::bytes::BytesEncoder;
use bytecodec::fixnum::{U16beEncoder, U8Encoder};
use bytecodec::{ByteCount, Encode, EncodeExt, Eos, SizedEncode};
use byteorder::{BigEndian, ByteOrder};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

const FAMILY_IPV4: u8 = 1;
const FAMILY_IPV6: u8 = 2;

/// Applies the XOR obfuscation of `XOR-*-ADDRESS` attributes to `addr`.
///
/// The port and the first four address octets are XOR'ed with the magic cookie,
/// the remaining twelve octets of an IPv6 address with `transaction_id`.
/// Applying it twice yields the original address.
pub fn socket_addr_xor(addr: SocketAddr, transaction_id: &TransactionId) -> SocketAddr {
    let xor_port = addr.port() ^ (MAGIC_COOKIE >> 16) as u16;
    let mut cookie = [0; 4];
    BigEndian::write_u32(&mut cookie, MAGIC_COOKIE);
    match addr.ip() {
        IpAddr::V4(ip) => {
            let mut octets = ip.octets();
            for (b, c) in octets.iter_mut().zip(cookie.iter()) {
                *b ^= c;
            }
            SocketAddr::new(IpAddr::V4(Ipv4Addr::from(octets)), xor_port)
        }
        IpAddr::V6(ip) => {
            let mut octets = ip.octets();
            let mask = cookie.iter().chain(transaction_id.as_bytes().iter());
            for (b, m) in octets.iter_mut().zip(mask) {
                *b ^= m;
            }
            SocketAddr::new(IpAddr::V6(Ipv6Addr::from(octets)), xor_port)
        }
    }
}

/// Returns the number of bytes `addr` occupies in an address attribute value.
pub fn socket_addr_len(addr: &SocketAddr) -> u16 {
    if addr.is_ipv4() {
        8
    } else {
        20
    }
}

/// Encodes `addr` into the address attribute value format.
pub fn encode_socket_addr(addr: SocketAddr) -> Result<Vec<u8>> {
    let bytes = track!(SocketAddrEncoder::default().encode_into_bytes(addr))?;
    Ok(bytes)
}

/// Decodes an address attribute value.
///
/// # Errors
///
/// - `ErrorKind::Truncated` if `value` is shorter than the family requires
/// - `ErrorKind::BadFamily` if the family is neither IPv4 nor IPv6
pub fn decode_socket_addr(value: &[u8]) -> Result<SocketAddr> {
    track_assert!(value.len() >= 4, ErrorKind::Truncated; value.len());
    let ip_len = match value[1] {
        FAMILY_IPV4 => 4,
        FAMILY_IPV6 => 16,
        family => track_panic!(ErrorKind::BadFamily, "Unknown address family: {}", family),
    };
    track_assert!(value.len() >= 4 + ip_len, ErrorKind::Truncated; value.len(), ip_len);

    let port = BigEndian::read_u16(&value[2..4]);
    let ip = if ip_len == 4 {
        let mut octets = [0; 4];
        octets.copy_from_slice(&value[4..8]);
        IpAddr::V4(Ipv4Addr::from(octets))
    } else {
        let mut octets = [0; 16];
        octets.copy_from_slice(&value[4..20]);
        IpAddr::V6(Ipv6Addr::from(octets))
    };
    Ok(SocketAddr::new(ip, port))
}

/// Socket address encoder.
#[derive(Debug, Default)]
pub struct SocketAddrEncoder {
    unused: U8Encoder,
    family: U8Encoder,
    port: U16beEncoder,
    ip: BytesEncoder<IpBytes>,
}
impl Encode for SocketAddrEncoder {
    type Item = SocketAddr;

    fn encode(&mut self, buf: &mut [u8], eos: Eos) -> bytecodec::Result<usize> {
        let mut offset = 0;
        bytecodec_try_encode!(self.unused, offset, buf, eos);
        bytecodec_try_encode!(self.family, offset, buf, eos);
        bytecodec_try_encode!(self.port, offset, buf, eos);
        bytecodec_try_encode!(self.ip, offset, buf, eos);
        Ok(offset)
    }

    fn start_encoding(&mut self, item: Self::Item) -> bytecodec::Result<()> {
        track!(self.unused.start_encoding(0))?;
        let family = if item.is_ipv4() {
            FAMILY_IPV4
        } else {
            FAMILY_IPV6
        };
        track!(self.family.start_encoding(family))?;
        track!(self.port.start_encoding(item.port()))?;
        track!(self.ip.start_encoding(IpBytes::new(item.ip())))?;
        Ok(())
    }

    fn requiring_bytes(&self) -> ByteCount {
        ByteCount::Finite(self.exact_requiring_bytes())
    }

    fn is_idle(&self) -> bool {
        self.ip.is_idle()
    }
}
impl SizedEncode for SocketAddrEncoder {
    fn exact_requiring_bytes(&self) -> u64 {
        self.unused.exact_requiring_bytes()
            + self.family.exact_requiring_bytes()
            + self.port.exact_requiring_bytes()
            + self.ip.exact_requiring_bytes()
    }
}

#[derive(Debug)]
enum IpBytes {
    V4([u8; 4]),
    V6([u8; 16]),
}
impl IpBytes {
    fn new(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(ip) => IpBytes::V4(ip.octets()),
            IpAddr::V6(ip) => IpBytes::V6(ip.octets()),
        }
    }
}
impl AsRef<[u8]> for IpBytes {
    fn as_ref(&self) -> &[u8] {
        match self {
            IpBytes::V4(bytes) => bytes,
            IpBytes::V6(bytes) => bytes,
        }
    }
}
