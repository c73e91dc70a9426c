//! Tests for controller configuration.

use rowform::config::{RowsConfig, ZeroPosition};

#[test]
fn test_defaults() {
    let config = RowsConfig::default();
    assert_eq!(config.name, "rows");
    assert_eq!(config.zero_position, ZeroPosition::SourceIndex);
}

#[test]
fn test_builder() {
    let config = RowsConfig::new("contacts")
        .zero_position(ZeroPosition::Front)
        .name("addresses");
    assert_eq!(config.name, "addresses");
    assert_eq!(config.zero_position, ZeroPosition::Front);
}

#[test]
fn test_load_from_json() {
    let config: RowsConfig =
        serde_json::from_str(r#"{ "name": "lines", "zero_position": "front" }"#).unwrap();
    assert_eq!(config, RowsConfig::new("lines").zero_position(ZeroPosition::Front));
}

#[test]
fn test_missing_fields_use_defaults() {
    let config: RowsConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, RowsConfig::default());
}
