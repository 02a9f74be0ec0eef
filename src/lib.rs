//! MQTT connectivity configuration for the siren firmware.
//!
//! One broker endpoint and a bounded table of subscription topics, loaded
//! once at startup and immutable afterwards. The firmware's MQTT client
//! reads everything it needs from here; this crate owns no sockets, no
//! protocol state and no persistence.
//!
//! Pure logic throughout: every module builds and tests on the host.
//!
//! ```
//! use siren_config::MqttConfig;
//!
//! let config = MqttConfig::from_toml_str("mqtt_host = \"192.168.1.40\"\n")?;
//! assert_eq!(config.broker_port(), 1883);
//! assert_eq!(config.topics().len(), 3);
//! # Ok::<(), siren_config::ConfigError>(())
//! ```

#![deny(unused_must_use)]

pub mod broker;
pub mod config;
pub mod error;
pub mod topics;

pub use broker::{BrokerAddress, DEFAULT_MQTT_PORT};
pub use config::MqttConfig;
pub use error::{ConfigError, Result};
pub use topics::{DEFAULT_TOPICS, MAX_TOPICS, TOPIC_MAX_LEN, Topic, TopicTable};
