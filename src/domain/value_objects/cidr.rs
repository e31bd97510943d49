//! CIDR value object
//!
//! An IP network written as `address/prefix`. The address is kept exactly as
//! given so that a persisted document round-trips; `is_network_address`
//! reports whether host bits are set.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// CIDR parse errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CidrError {
    #[error("invalid CIDR address: {0}")]
    MissingPrefix(String),

    #[error("invalid CIDR address: {0}")]
    InvalidAddress(String),

    #[error("invalid CIDR prefix length in {input}: must be at most {max}")]
    PrefixTooLong { input: String, max: u8 },
}

/// An IPv4 or IPv6 network in CIDR notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cidr {
    addr: IpAddr,
    prefix: u8,
}

impl Cidr {
    /// Create a CIDR, rejecting prefixes wider than the address family
    pub fn new(addr: IpAddr, prefix: u8) -> Result<Self, CidrError> {
        let max = address_bits(&addr);
        if prefix > max {
            return Err(CidrError::PrefixTooLong {
                input: format!("{}/{}", addr, prefix),
                max,
            });
        }
        Ok(Self { addr, prefix })
    }

    /// IPv4 constructor for compile-time constants; the prefix is clamped to 32
    pub const fn ipv4(a: u8, b: u8, c: u8, d: u8, prefix: u8) -> Self {
        Self {
            addr: IpAddr::V4(Ipv4Addr::new(a, b, c, d)),
            prefix: if prefix > 32 { 32 } else { prefix },
        }
    }

    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// 32 for IPv4, 128 for IPv6
    pub fn address_bits(&self) -> u8 {
        address_bits(&self.addr)
    }

    pub fn is_ipv4(&self) -> bool {
        self.addr.is_ipv4()
    }

    /// The address with all host bits cleared
    pub fn network(&self) -> IpAddr {
        match self.addr {
            IpAddr::V4(v4) => {
                let bits = u32::from(v4) & v4_mask(self.prefix);
                IpAddr::V4(Ipv4Addr::from(bits))
            }
            IpAddr::V6(v6) => {
                let bits = u128::from(v6) & v6_mask(self.prefix);
                IpAddr::V6(Ipv6Addr::from(bits))
            }
        }
    }

    /// True when no host bits are set
    pub fn is_network_address(&self) -> bool {
        self.network() == self.addr
    }

    /// Check whether `ip` falls inside this network
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (self.network(), ip) {
            (IpAddr::V4(net), IpAddr::V4(ip)) => {
                u32::from(ip) & v4_mask(self.prefix) == u32::from(net)
            }
            (IpAddr::V6(net), IpAddr::V6(ip)) => {
                u128::from(ip) & v6_mask(self.prefix) == u128::from(net)
            }
            _ => false,
        }
    }

    /// Check whether two networks share any address
    pub fn overlaps(&self, other: &Cidr) -> bool {
        self.contains(other.network()) || other.contains(self.network())
    }
}

fn address_bits(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

fn v4_mask(prefix: u8) -> u32 {
    if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix))
    }
}

fn v6_mask(prefix: u8) -> u128 {
    if prefix == 0 {
        0
    } else {
        u128::MAX << (128 - u32::from(prefix))
    }
}

impl FromStr for Cidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = s
            .split_once('/')
            .ok_or_else(|| CidrError::MissingPrefix(s.to_string()))?;
        let addr: IpAddr = addr
            .parse()
            .map_err(|_| CidrError::InvalidAddress(s.to_string()))?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| CidrError::InvalidAddress(s.to_string()))?;
        Cidr::new(addr, prefix).map_err(|_| CidrError::PrefixTooLong {
            input: s.to_string(),
            max: address_bits(&addr),
        })
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Cidr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
