//! Integration tests for the public configuration API.
//!
//! Everything runs on the host and drives `MqttConfig` end to end, from
//! deployer TOML text to the immutable store: the shipped sample file,
//! overlays that override parts of the table, and every rejection class.

use core::net::Ipv4Addr;

use siren_config::{BrokerAddress, ConfigError, MqttConfig, Topic, TopicTable};

/// The sample shipped at the repository root is the canonical overlay.
const SAMPLE: &str = include_str!("../cfg.sample.toml");

fn names(config: &MqttConfig) -> Vec<&str> {
    config.topics().iter().map(Topic::as_str).collect()
}

// ── Happy path ───────────────────────────────────────────────

#[test]
fn sample_fixture_loads() {
    let config = MqttConfig::from_toml_str(SAMPLE).unwrap();
    assert_eq!(
        config.broker(),
        BrokerAddress::new(Ipv4Addr::new(192, 168, 1, 40), 1883)
    );
    assert_eq!(config.broker().octets(), [192, 168, 1, 40]);
    assert_eq!(config.broker_port(), 1883);
    assert!(config.validate().is_ok());
}

#[test]
fn sample_keeps_builtin_topics_in_order() {
    let config = MqttConfig::from_toml_str(SAMPLE).unwrap();
    assert_eq!(
        names(&config),
        ["diy/system/who", "diy/system/panic", "diy/system/fire"]
    );
}

#[test]
fn omitted_port_defaults_to_1883() {
    let config = MqttConfig::from_toml_str("mqtt_host = \"10.0.0.7\"\n").unwrap();
    assert_eq!(config.broker_port(), 1883);
}

#[test]
fn port_override_is_honoured() {
    let config =
        MqttConfig::from_toml_str("mqtt_host = \"10.0.0.7\"\nmqtt_port = 8883\n").unwrap();
    assert_eq!(config.broker_port(), 8883);
}

#[test]
fn topics_override_replaces_builtin_list() {
    let text = r#"
        mqtt_host = "10.0.0.7"
        mqtt_topics = ["alarm/zone1", "alarm/zone2"]
    "#;
    let config = MqttConfig::from_toml_str(text).unwrap();
    assert_eq!(names(&config), ["alarm/zone1", "alarm/zone2"]);
}

#[test]
fn full_capacity_table_is_accepted() {
    let text = r#"
        mqtt_host = "10.0.0.7"
        mqtt_topics = ["t/1", "t/2", "t/3", "t/4", "t/5"]
    "#;
    let config = MqttConfig::from_toml_str(text).unwrap();
    assert_eq!(config.topics().len(), TopicTable::CAPACITY);
}

#[test]
fn host_octets_span_the_full_range() {
    let config = MqttConfig::from_toml_str("mqtt_host = \"255.255.255.255\"\n").unwrap();
    assert_eq!(config.broker().octets(), [255, 255, 255, 255]);
}

// ── Idempotence ──────────────────────────────────────────────

#[test]
fn loading_twice_yields_identical_configs() {
    let first = MqttConfig::from_toml_str(SAMPLE).unwrap();
    let second = MqttConfig::from_toml_str(SAMPLE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn builtin_is_stable_across_calls() {
    assert_eq!(MqttConfig::builtin(), MqttConfig::builtin());
    assert_eq!(MqttConfig::builtin(), MqttConfig::default());
}

// ── Rejection classes ────────────────────────────────────────

#[test]
fn garbage_text_is_malformed() {
    match MqttConfig::from_toml_str("]]not toml[[") {
        Err(ConfigError::Malformed(msg)) => assert!(!msg.is_empty()),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn missing_host_is_malformed() {
    assert!(matches!(
        MqttConfig::from_toml_str("mqtt_port = 1883\n"),
        Err(ConfigError::Malformed(_))
    ));
}

#[test]
fn hostname_is_not_an_address() {
    let err = MqttConfig::from_toml_str("mqtt_host = \"broker.example.com\"\n");
    assert_eq!(
        err,
        Err(ConfigError::InvalidHost("broker.example.com".into()))
    );
}

#[test]
fn placeholder_host_is_rejected() {
    assert_eq!(
        MqttConfig::from_toml_str("mqtt_host = \"0.0.0.0\"\n"),
        Err(ConfigError::BrokerUnset)
    );
}

#[test]
fn port_zero_is_rejected() {
    assert_eq!(
        MqttConfig::from_toml_str("mqtt_host = \"10.0.0.7\"\nmqtt_port = 0\n"),
        Err(ConfigError::PortReserved)
    );
}

#[test]
fn six_topics_overflow_the_table() {
    let text = r#"
        mqtt_host = "10.0.0.7"
        mqtt_topics = ["t/1", "t/2", "t/3", "t/4", "t/5", "t/6"]
    "#;
    assert_eq!(
        MqttConfig::from_toml_str(text),
        Err(ConfigError::TooManyTopics(6))
    );
}

#[test]
fn overlong_topic_is_rejected() {
    let long = "a".repeat(64);
    let text = format!("mqtt_host = \"10.0.0.7\"\nmqtt_topics = [\"{long}\"]\n");
    assert_eq!(
        MqttConfig::from_toml_str(&text),
        Err(ConfigError::TopicTooLong(64))
    );
}

#[test]
fn empty_topic_is_rejected() {
    let text = "mqtt_host = \"10.0.0.7\"\nmqtt_topics = [\"\"]\n";
    assert_eq!(MqttConfig::from_toml_str(text), Err(ConfigError::EmptyTopic));
}

#[test]
fn duplicate_topic_is_rejected() {
    let text = "mqtt_host = \"10.0.0.7\"\nmqtt_topics = [\"a/b\", \"a/b\"]\n";
    assert_eq!(
        MqttConfig::from_toml_str(text),
        Err(ConfigError::DuplicateTopic)
    );
}
