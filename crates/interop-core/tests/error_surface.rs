use interop_core::errors::{require, ErrorInfo, InteropError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("type", "IntList")
        .with_context("reason", "example")
}

#[test]
fn invalid_argument_surface() {
    let err = InteropError::InvalidArgument(sample_info("missing-argument", "source absent"));
    assert_eq!(err.info().code, "missing-argument");
    assert!(err.info().context.contains_key("type"));
}

#[test]
fn unsupported_conversion_surface() {
    let err = InteropError::UnsupportedConversion(sample_info("X001", "no counterpart"));
    assert_eq!(err.info().code, "X001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn codec_surface() {
    let err = InteropError::codec("number-parse", "bad digit");
    assert_eq!(err.info().code, "number-parse");
    assert!(err.to_string().starts_with("codec error:"));
}

#[test]
fn config_surface() {
    let err = InteropError::Config(sample_info("yaml-deserialize", "bad yaml").with_hint("check indentation"));
    assert_eq!(err.info().hint.as_deref(), Some("check indentation"));
    assert!(err.to_string().contains("hint: check indentation"));
}

#[test]
fn require_rejects_absent_argument() {
    let missing: Option<&Vec<i32>> = None;
    let err = require(missing, "source").unwrap_err();
    assert!(matches!(err, InteropError::InvalidArgument(_)));
    assert_eq!(err.info().context.get("argument").map(String::as_str), Some("source"));

    let present = vec![1, 2, 3];
    assert_eq!(require(Some(&present), "source").unwrap(), &present);
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = InteropError::Codec(sample_info("missing-codec", "no codec for type"));
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["family"], "Codec");
    assert_eq!(json["detail"]["code"], "missing-codec");
    let back: InteropError = serde_json::from_value(json).unwrap();
    assert_eq!(back, err);
}

#[test]
fn display_lists_context_in_key_order() {
    let info = sample_info("number-parse", "bad digit").with_hint("use 0-9a-z");
    assert_eq!(
        info.to_string(),
        "bad digit (code: number-parse) | context: [reason=example, type=IntList] | hint: use 0-9a-z"
    );
    assert_eq!(ErrorInfo::new("x", "plain").to_string(), "plain (code: x)");
}
