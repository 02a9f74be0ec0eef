//! Subscription topic table.
//!
//! A [`Topic`] is a validated MQTT topic name held in a fixed-size buffer;
//! a [`TopicTable`] is the ordered, bounded set of topics the siren
//! subscribes to. Both are plain data: no heap in the stored form, no
//! mutation path once the table has been handed to a consumer.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Longest accepted topic name, in bytes.
pub const TOPIC_MAX_LEN: usize = 63;

/// Declared capacity of the subscription table.
pub const MAX_TOPICS: usize = 5;

/// Presence/identification channel of the alarm bus.
pub const WHO_TOPIC: &str = "diy/system/who";
/// Panic alarm channel.
pub const PANIC_TOPIC: &str = "diy/system/panic";
/// Fire alarm channel.
pub const FIRE_TOPIC: &str = "diy/system/fire";

/// Topics the siren subscribes to out of the box, in subscription order.
pub const DEFAULT_TOPICS: [&str; 3] = [WHO_TOPIC, PANIC_TOPIC, FIRE_TOPIC];

// ───────────────────────────────────────────────────────────────
// Topic
// ───────────────────────────────────────────────────────────────

/// A validated MQTT topic name.
///
/// Holding a `Topic` means the name is non-empty, at most
/// [`TOPIC_MAX_LEN`] bytes, and free of U+0000 (which MQTT forbids in
/// topic names). Every construction path, serde included, runs the same
/// checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Topic(heapless::String<TOPIC_MAX_LEN>);

impl Topic {
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(ConfigError::EmptyTopic);
        }
        if name.len() > TOPIC_MAX_LEN {
            return Err(ConfigError::TopicTooLong(name.len()));
        }
        if name.contains('\0') {
            return Err(ConfigError::TopicHasNul);
        }
        let mut buf = heapless::String::new();
        buf.push_str(name)
            .map_err(|_| ConfigError::TopicTooLong(name.len()))?;
        Ok(Self(buf))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Length in bytes (1..=[`TOPIC_MAX_LEN`]).
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for Topic {
    type Error = ConfigError;

    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

impl TryFrom<String> for Topic {
    type Error = ConfigError;

    fn try_from(name: String) -> Result<Self> {
        Self::new(&name)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ───────────────────────────────────────────────────────────────
// TopicTable
// ───────────────────────────────────────────────────────────────

/// Ordered subscription table, bounded at [`MAX_TOPICS`] entries.
///
/// Only populated entries exist: iteration, slices and `len()` never
/// surface unused capacity. Duplicate names are rejected on insertion,
/// a doubled subscription in a table this small is an authoring mistake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "heapless::Vec<Topic, MAX_TOPICS>")]
pub struct TopicTable(heapless::Vec<Topic, MAX_TOPICS>);

impl TopicTable {
    /// Declared capacity, independent of how many entries are populated.
    pub const CAPACITY: usize = MAX_TOPICS;

    /// Empty table.
    pub const fn new() -> Self {
        Self(heapless::Vec::new())
    }

    /// Table pre-populated with [`DEFAULT_TOPICS`].
    pub fn builtin() -> Self {
        // Three short literal names: cannot violate any table rule.
        Self::from_names(&DEFAULT_TOPICS).expect("built-in topics are valid")
    }

    /// Builds a table from raw names, validating each and keeping order.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        if names.len() > MAX_TOPICS {
            return Err(ConfigError::TooManyTopics(names.len()));
        }
        let mut table = Self::new();
        for name in names {
            table.push(Topic::new(name.as_ref())?)?;
        }
        Ok(table)
    }

    /// Appends a topic, preserving order.
    pub fn push(&mut self, topic: Topic) -> Result<()> {
        if self.contains(topic.as_str()) {
            return Err(ConfigError::DuplicateTopic);
        }
        self.0
            .push(topic)
            .map_err(|_| ConfigError::TooManyTopics(MAX_TOPICS + 1))?;
        Ok(())
    }

    /// Populated entry count (`<= CAPACITY` by construction).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|t| t.as_str() == name)
    }

    pub fn get(&self, index: usize) -> Option<&Topic> {
        self.0.get(index)
    }

    /// Populated entries, in subscription order.
    pub fn iter(&self) -> core::slice::Iter<'_, Topic> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Topic] {
        self.0.as_slice()
    }
}

impl Default for TopicTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<heapless::Vec<Topic, MAX_TOPICS>> for TopicTable {
    type Error = ConfigError;

    fn try_from(topics: heapless::Vec<Topic, MAX_TOPICS>) -> Result<Self> {
        let mut table = Self::new();
        for topic in topics {
            table.push(topic)?;
        }
        Ok(table)
    }
}

impl<'a> IntoIterator for &'a TopicTable {
    type Item = &'a Topic;
    type IntoIter = core::slice::Iter<'a, Topic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
