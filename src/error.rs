//! Error types for configuration loading.
//!
//! A single `ConfigError` enum that every load and validation path funnels
//! into, keeping the caller's error handling uniform. Each variant names one
//! failure class a deployer can actually cause, and `Display` renders the
//! message they need to fix it.

use core::fmt;

/// Every fallible operation in this crate funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration text failed TOML deserialization.
    /// The `String` retains the parser's message (line/column included).
    Malformed(String),
    /// `mqtt_host` is not a dotted-quad IPv4 address.
    /// The `String` is the offending value as supplied.
    InvalidHost(String),
    /// `mqtt_host` was left at the 0.0.0.0 placeholder.
    BrokerUnset,
    /// `mqtt_port` is 0, which is reserved and never routable.
    PortReserved,
    /// A topic string is empty.
    EmptyTopic,
    /// A topic exceeds [`TOPIC_MAX_LEN`](crate::topics::TOPIC_MAX_LEN)
    /// bytes; the payload is the rejected length.
    TopicTooLong(usize),
    /// A topic contains U+0000, which MQTT forbids in topic names.
    TopicHasNul,
    /// The same topic appears twice in the table.
    DuplicateTopic,
    /// More topics were supplied than the table's capacity;
    /// the payload is the rejected count.
    TooManyTopics(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(msg) => write!(f, "malformed config: {msg}"),
            Self::InvalidHost(host) => {
                write!(f, "mqtt_host {host:?} is not an IPv4 address")
            }
            Self::BrokerUnset => {
                write!(f, "mqtt_host is unset (0.0.0.0), supply your broker's address")
            }
            Self::PortReserved => write!(f, "mqtt_port 0 is reserved, use 1-65535"),
            Self::EmptyTopic => write!(f, "topics must not be empty"),
            Self::TopicTooLong(len) => {
                write!(
                    f,
                    "topic is {len} bytes, limit is {} bytes",
                    crate::topics::TOPIC_MAX_LEN
                )
            }
            Self::TopicHasNul => write!(f, "topics must not contain NUL (U+0000)"),
            Self::DuplicateTopic => write!(f, "topics must not repeat"),
            Self::TooManyTopics(count) => {
                write!(
                    f,
                    "{count} topics supplied, table holds at most {}",
                    crate::topics::MAX_TOPICS
                )
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, ConfigError>;
