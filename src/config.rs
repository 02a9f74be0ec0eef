//! MQTT connectivity configuration.
//!
//! All connection parameters for the siren: broker endpoint and the
//! subscription topic table. Built-in values cover everything except the
//! broker host, which the deployer supplies through a small TOML overlay
//! (see `cfg.sample.toml` at the repository root).

use core::net::Ipv4Addr;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::broker::{BrokerAddress, DEFAULT_MQTT_PORT};
use crate::error::{ConfigError, Result};
use crate::topics::TopicTable;

// ───────────────────────────────────────────────────────────────
// Deployer overlay schema
// ───────────────────────────────────────────────────────────────

/// Shape of the deployer-supplied TOML, before validation.
#[derive(Deserialize)]
struct RawConfig {
    /// Dotted-quad IPv4, e.g. `"192.168.1.40"`.
    mqtt_host: String,
    /// Omitted: [`DEFAULT_MQTT_PORT`].
    mqtt_port: Option<u16>,
    /// Omitted: keep the built-in subscription list.
    mqtt_topics: Option<Vec<String>>,
}

// ───────────────────────────────────────────────────────────────
// Config store
// ───────────────────────────────────────────────────────────────

/// The siren's MQTT connectivity settings.
///
/// Constructed once at startup, then read-only: fields are private and
/// every accessor returns an immutable view, so the store can be shared
/// across tasks without synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MqttConfig {
    broker: BrokerAddress,
    topics: TopicTable,
}

impl MqttConfig {
    /// Compiled-in table: placeholder broker (port 1883) and the three
    /// built-in alarm topics. Fails [`validate`](Self::validate) until a
    /// deployer supplies the broker host.
    pub fn builtin() -> Self {
        Self {
            broker: BrokerAddress::UNSET,
            topics: TopicTable::builtin(),
        }
    }

    /// Parses and validates a deployer TOML overlay.
    ///
    /// The crate does no file I/O: callers embed their `cfg.toml` (for
    /// example with `include_str!`) and pass the text here. Every rule
    /// violation maps to a dedicated [`ConfigError`]; nothing partially
    /// constructed ever escapes.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(text).map_err(|e| ConfigError::Malformed(e.to_string()))?;

        let host: Ipv4Addr = raw
            .mqtt_host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost(raw.mqtt_host.clone()))?;
        let port = raw.mqtt_port.unwrap_or(DEFAULT_MQTT_PORT);
        let broker = BrokerAddress::new(host, port);

        let topics = match &raw.mqtt_topics {
            Some(names) => TopicTable::from_names(names.as_slice())?,
            None => TopicTable::builtin(),
        };

        let config = Self { broker, topics };
        config.validate()?;

        info!(
            "MQTT config loaded: broker {}, {} topic(s)",
            config.broker,
            config.topics.len()
        );
        for (i, topic) in config.topics.iter().enumerate() {
            debug!("  topic[{i}] {topic}");
        }

        Ok(config)
    }

    /// Broker endpoint (host and port together).
    pub const fn broker(&self) -> BrokerAddress {
        self.broker
    }

    /// Broker TCP port; shorthand for `broker().port()`.
    pub const fn broker_port(&self) -> u16 {
        self.broker.port()
    }

    /// Populated subscription topics, in order. Unused capacity is never
    /// surfaced.
    pub const fn topics(&self) -> &TopicTable {
        &self.topics
    }

    /// Checks every load-time invariant: broker host supplied, port
    /// non-zero. Topic rules hold already, `TopicTable` cannot store a
    /// violation.
    pub fn validate(&self) -> Result<()> {
        self.broker.validate()
    }
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
