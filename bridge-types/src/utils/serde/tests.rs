use super::*;

#[derive(Debug, Deserialize)]
struct Timeout {
    #[serde(default, deserialize_with = "maybe_stringified")]
    timeout: Option<u32>,
}

fn parse(json: &str) -> Option<u32> {
    serde_json::from_str::<Timeout>(json)
        .expect("failed to parse")
        .timeout
}

#[test]
fn from_integer_representations() {
    assert_eq!(parse(r#"{"timeout": 60000}"#), Some(60000));
    assert_eq!(parse(r#"{"timeout": "60000"}"#), Some(60000));
    assert_eq!(parse(r#"{"timeout": 0}"#), Some(0));
}

#[test]
fn from_float_representations() {
    assert_eq!(parse(r#"{"timeout": 1800.0}"#), Some(1800));
    assert_eq!(parse(r#"{"timeout": 1800.1234}"#), Some(1800));
    assert_eq!(parse(r#"{"timeout": 1.0e-308}"#), Some(0));
    assert_eq!(parse(r#"{"timeout": "1800.5"}"#), Some(1800));
}

#[test]
fn missing_values_are_absent() {
    assert_eq!(parse(r#"{"timeout": null}"#), None);
    assert_eq!(parse(r#"{}"#), None);
}

#[test]
fn unrepresentable_values_are_rejected() {
    for json in [
        r#"{"timeout": -5}"#,
        r#"{"timeout": 5000000000}"#,
        r#"{"timeout": 1e20}"#,
        r#"{"timeout": "soon"}"#,
        r#"{"timeout": "-1"}"#,
        r#"{"timeout": true}"#,
    ] {
        let err = serde_json::from_str::<Timeout>(json).expect_err(json);
        assert!(err.is_data(), "{json}: {err}");
    }
}
