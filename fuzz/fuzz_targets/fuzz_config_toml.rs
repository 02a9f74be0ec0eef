//! Fuzz target: `MqttConfig::from_toml_str`
//!
//! Drives arbitrary text through the deployer TOML parser and asserts
//! that it never panics, that parsing is pure, and that every accepted
//! configuration satisfies the table invariants.
//!
//! cargo fuzz run fuzz_config_toml

#![no_main]

use libfuzzer_sys::fuzz_target;
use siren_config::{MqttConfig, TOPIC_MAX_LEN, TopicTable};

fuzz_target!(|text: &str| {
    let first = MqttConfig::from_toml_str(text);

    // Same text, same outcome.
    assert_eq!(first, MqttConfig::from_toml_str(text));

    if let Ok(config) = first {
        assert!(config.validate().is_ok(), "accepted config must validate");
        assert_ne!(config.broker_port(), 0, "port 0 must never load");
        assert!(
            !config.broker().is_unset(),
            "placeholder host must never load"
        );

        let topics = config.topics();
        assert!(topics.len() <= TopicTable::CAPACITY, "table above capacity");
        for topic in topics {
            assert!(!topic.as_str().is_empty(), "empty topic stored");
            assert!(topic.len() <= TOPIC_MAX_LEN, "overlong topic stored");
        }
    }
});
