use rand::RngCore;

use super::*;

fn random_vec(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut data);
    data
}

#[test]
fn empty_input() {
    assert_eq!(base64url(&[]), "");
    assert_eq!(try_from_base64url(""), Ok(Vec::new()));
}

#[test]
fn every_byte_value_survives() {
    let all: Vec<u8> = (0..=u8::MAX).collect();
    let encoded = base64url(&all);
    assert_eq!(try_from_base64url(&encoded), Ok(all));
}

#[test]
fn random_buffers_survive() {
    for len in 0..70 {
        let data = random_vec(len);
        let encoded = base64url(&data);
        assert!(
            !encoded.contains(['+', '/', '=']),
            "{encoded} is not url safe"
        );
        assert_eq!(try_from_base64url(&encoded), Ok(data));
    }
}

#[test]
fn known_vectors() {
    assert_eq!(base64url(&[1, 2, 3]), "AQID");
    assert_eq!(base64url(&[4, 5, 6]), "BAUG");
    assert_eq!(base64url(&[9, 9]), "CQk");
    assert_eq!(base64url(&[0xfb, 0xff, 0xbf]), "-_-_");
    assert_eq!(try_from_base64url("CQk"), Ok(vec![9, 9]));
}

#[test]
fn canonical_tokens_reencode_identically() {
    for token in ["", "AA", "AAA", "AQID", "-_-_", "ZcPUob9wS72YNHkRPnFypA"] {
        let decoded = try_from_base64url(token).expect("canonical token");
        assert_eq!(base64url(&decoded), token);
    }
}

#[test]
fn padding_is_tolerated() {
    assert_eq!(try_from_base64url("CQk="), Ok(vec![9, 9]));
    assert_eq!(try_from_base64url("AQ=="), Ok(vec![1]));
    assert_eq!(try_from_base64url("AQ="), Ok(vec![1]));
}

#[test]
fn standard_alphabet_is_accepted() {
    assert_eq!(try_from_base64url("+/+/"), Ok(vec![0xfb, 0xff, 0xbf]));
    assert_eq!(try_from_base64url("-/+_"), try_from_base64url("-_-_"));
}

#[test]
fn length_four_k_plus_one_is_rejected() {
    for token in [
        "A",
        "AQIDB",
        "AQIDBAUGC",
        "AQIDBAUGC==",
        "AQID=",
        "AQI==",
        "AQIDB=",
    ] {
        let err = try_from_base64url(token).expect_err("impossible length");
        assert_eq!(err.kind, MalformedTokenKind::Length, "{token}");
        assert_eq!(err.field, None);
    }
}

#[test]
fn invalid_symbols_are_rejected() {
    let err = try_from_base64url("AQ*D").expect_err("invalid symbol");
    assert_eq!(err.kind, MalformedTokenKind::Symbol);
    assert_eq!(err.position, 2);

    let err = try_from_base64url("AQ=D").expect_err("padding in the middle");
    assert_eq!(err.position, 2);

    try_from_base64url("AQ ID").expect_err("whitespace is not part of a token");
}

#[test]
fn over_padding_is_rejected() {
    for token in ["AQ=====", "AQID====", "AQ===", "AQID==", "CQk=="] {
        let err = try_from_base64url(token).expect_err("too much padding");
        assert_eq!(err.kind, MalformedTokenKind::Length, "{token}");
    }
}
