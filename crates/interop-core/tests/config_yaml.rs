use std::io::Write;

use interop_core::base::Base;
use interop_core::config::JsonConfig;
use interop_core::errors::InteropError;

#[test]
fn defaults_match_documented_values() {
    let config = JsonConfig::default();
    assert_eq!(config.numeral_base, Base::BASE10);
    assert!(config.legible_floats);
    assert!(config.add_class_tags);
}

#[test]
fn partial_yaml_fills_defaults() {
    let config = JsonConfig::from_yaml_str("legible_floats: false\n").unwrap();
    assert!(!config.legible_floats);
    assert!(config.add_class_tags);
    assert_eq!(config.numeral_base, Base::BASE10);
}

#[test]
fn yaml_base_is_validated() {
    let config = JsonConfig::from_yaml_str("numeral_base:\n  radix: 16\n").unwrap();
    assert_eq!(config.number_format().write_i64(255), "16rff");

    let err = JsonConfig::from_yaml_str("numeral_base:\n  radix: 64\n").unwrap_err();
    assert!(matches!(err, InteropError::Config(_)));
}

#[test]
fn config_roundtrips_through_file() {
    let config = JsonConfig {
        numeral_base: Base::BASE36.with_uppercase(true),
        legible_floats: false,
        add_class_tags: false,
    };
    let yaml = config.to_yaml_string().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let loaded = JsonConfig::from_path(file.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    let err = JsonConfig::from_path(&path).unwrap_err();
    assert_eq!(err.info().code, "config-read");
    assert!(err.info().context.contains_key("path"));
}
