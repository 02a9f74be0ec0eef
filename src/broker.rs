//! MQTT broker endpoint.
//!
//! The broker is addressed by four octets plus a 16-bit port, both fixed at
//! load time. A freshly built [`BrokerAddress`] starts at the 0.0.0.0
//! placeholder and fails validation until the deployer supplies a real
//! address, so a device cannot ship pointing at nothing.

use core::fmt;
use core::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Standard unencrypted MQTT port.
pub const DEFAULT_MQTT_PORT: u16 = 1883;

/// IPv4 endpoint of the MQTT broker.
///
/// Octet range ([0,255] each) is guaranteed by the representation; the port
/// invariant (non-zero) is enforced by [`validate`](Self::validate) at load
/// time. Immutable once constructed: read accessors only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerAddress {
    host: Ipv4Addr,
    port: u16,
}

impl BrokerAddress {
    /// Placeholder endpoint: host 0.0.0.0, port [`DEFAULT_MQTT_PORT`].
    /// Valid to hold, invalid to load (see [`validate`](Self::validate)).
    pub const UNSET: Self = Self {
        host: Ipv4Addr::UNSPECIFIED,
        port: DEFAULT_MQTT_PORT,
    };

    pub const fn new(host: Ipv4Addr, port: u16) -> Self {
        Self { host, port }
    }

    /// Broker host address.
    pub const fn host(&self) -> Ipv4Addr {
        self.host
    }

    /// Host as raw octets, most significant first.
    pub const fn octets(&self) -> [u8; 4] {
        self.host.octets()
    }

    /// Broker TCP port.
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// True while the host is still the 0.0.0.0 placeholder.
    pub fn is_unset(&self) -> bool {
        self.host.is_unspecified()
    }

    /// Checks the invariants a connectable endpoint must satisfy:
    /// a supplied (non-placeholder) host and a non-zero port.
    pub fn validate(&self) -> Result<()> {
        if self.is_unset() {
            return Err(ConfigError::BrokerUnset);
        }
        if self.port == 0 {
            return Err(ConfigError::PortReserved);
        }
        Ok(())
    }
}

impl Default for BrokerAddress {
    fn default() -> Self {
        Self::UNSET
    }
}

impl fmt::Display for BrokerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
