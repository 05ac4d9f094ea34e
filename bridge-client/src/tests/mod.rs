use super::*;
use bridge_types::{
    webauthn::{
        AuthenticatedPublicKeyCredential, AuthenticatorAssertionResponse,
        AuthenticatorAttestationResponse, AuthenticatorTransport, CreatedPublicKeyCredential,
        CredentialCreationOptions, CredentialRequestOptions, PublicKeyCredentialType,
    },
    Bytes, MalformedTokenKind,
};
use serde_json::json;

fn creation_options(value: serde_json::Value) -> CredentialCreationOptions<Base64Url> {
    serde_json::from_value(value).expect("could not deserialize creation options")
}

fn request_options(value: serde_json::Value) -> CredentialRequestOptions<Base64Url> {
    serde_json::from_value(value).expect("could not deserialize request options")
}

fn created_credential() -> CreatedPublicKeyCredential {
    CreatedPublicKeyCredential {
        id: "cred1".into(),
        raw_id: Bytes::from([9, 9]),
        ty: PublicKeyCredentialType::PublicKey,
        response: AuthenticatorAttestationResponse {
            attestation_object: Bytes::from([1, 1]),
            client_data_json: Bytes::from([2, 2]),
            transports: None,
        },
    }
}

fn authenticated_credential(user_handle: Option<Bytes>) -> AuthenticatedPublicKeyCredential {
    AuthenticatedPublicKeyCredential {
        id: "cred1".into(),
        raw_id: Bytes::from([9, 9]),
        ty: PublicKeyCredentialType::PublicKey,
        response: AuthenticatorAssertionResponse {
            authenticator_data: Bytes::from([3, 3]),
            client_data_json: Bytes::from([2, 2]),
            signature: Bytes::from([4, 4, 4]),
            user_handle,
        },
    }
}

fn minimal_creation_request() -> serde_json::Value {
    json!({
        "publicKey": {
            "challenge": "AQID",
            "user": { "id": "BAUG", "name": "alice" }
        }
    })
}

#[tokio::test]
async fn register_decodes_invokes_and_encodes() {
    let mut platform = MockPlatformAuthenticator::new();
    platform
        .expect_create()
        .withf(|options| {
            options.public_key.challenge == Bytes::from([1, 2, 3])
                && options.public_key.user.id == Bytes::from([4, 5, 6])
                && options.public_key.user.name == "alice"
        })
        .returning(|_| Ok(created_credential()))
        .once();
    let client = Client::new(platform);

    let credential = client
        .register(creation_options(minimal_creation_request()))
        .await
        .expect("registration succeeds");

    assert_eq!(
        serde_json::to_value(credential).expect("could not serialize"),
        json!({
            "id": "cred1",
            "rawId": "CQk",
            "type": "public-key",
            "response": {
                "attestationObject": "AQE",
                "clientDataJSON": "AgI"
            }
        })
    );
}

#[tokio::test]
async fn register_passes_excluded_credentials_in_order() {
    let mut platform = MockPlatformAuthenticator::new();
    platform
        .expect_create()
        .withf(|options| {
            let Some(excluded) = options.public_key.exclude_credentials.as_ref() else {
                return false;
            };
            let ids: Vec<Vec<u8>> = excluded.iter().map(|d| d.id.to_vec()).collect();
            ids == vec![vec![1, 1], vec![2, 2]]
                && excluded[0].transports == Some(vec![AuthenticatorTransport::Usb])
        })
        .returning(|_| Ok(created_credential()))
        .once();
    let client = Client::new(platform);

    let request = creation_options(json!({
        "publicKey": {
            "rp": { "id": "example.com", "name": "Example" },
            "challenge": "AQID",
            "user": { "id": "BAUG", "name": "alice", "displayName": "Alice" },
            "pubKeyCredParams": [{ "type": "public-key", "alg": -7 }],
            "excludeCredentials": [
                { "type": "public-key", "id": "AQE", "transports": ["usb"] },
                { "type": "public-key", "id": "AgI" }
            ]
        }
    }));

    client.register(request).await.expect("registration succeeds");
}

#[tokio::test]
async fn malformed_request_never_reaches_the_platform() {
    let mut platform = MockPlatformAuthenticator::new();
    platform.expect_create().times(0);
    platform.expect_get().times(0);
    let client = Client::new(platform);

    let err = client
        .register(creation_options(json!({
            "publicKey": {
                "challenge": "AQ*D",
                "user": { "id": "BAUG", "name": "alice" }
            }
        })))
        .await
        .expect_err("challenge is malformed");
    let WebauthnError::MalformedToken(token) = err else {
        panic!("expected a malformed token, got {err:?}");
    };
    assert_eq!(token.field.as_deref(), Some("publicKey.challenge"));
    assert_eq!(token.kind, MalformedTokenKind::Symbol);

    let err = client
        .authenticate(request_options(json!({
            "publicKey": {
                "challenge": "AQID",
                "allowCredentials": [{ "type": "public-key", "id": "A" }]
            }
        })))
        .await
        .expect_err("allowed id is malformed");
    let WebauthnError::MalformedToken(token) = err else {
        panic!("expected a malformed token, got {err:?}");
    };
    assert_eq!(
        token.field.as_deref(),
        Some("publicKey.allowCredentials[0].id")
    );
    assert!(!WebauthnError::MalformedToken(token).is_user_dismissal());
}

#[tokio::test]
async fn platform_rejection_is_propagated_unchanged() {
    let rejection = AuthenticatorError::with_message(
        AuthenticatorErrorKind::CredentialExcluded,
        "a credential in the exclude list is present",
    );
    let expected = rejection.clone();

    let mut platform = MockPlatformAuthenticator::new();
    platform
        .expect_create()
        .returning(move |_| Err(rejection.clone()))
        .once();
    let client = Client::new(platform);

    let err = client
        .register(creation_options(minimal_creation_request()))
        .await
        .expect_err("platform rejects");

    assert_eq!(err, WebauthnError::Authenticator(expected));
    assert!(!err.is_user_dismissal());
}

#[tokio::test]
async fn user_cancellation_is_a_dismissal() {
    let mut platform = MockPlatformAuthenticator::new();
    platform
        .expect_get()
        .returning(|_| Err(AuthenticatorErrorKind::Cancelled.into()))
        .once();
    let client = Client::new(platform);

    let err = client
        .authenticate(request_options(json!({ "publicKey": { "challenge": "AQID" } })))
        .await
        .expect_err("user cancels");

    assert!(err.is_user_dismissal());
    assert_eq!(err.to_string(), "the user cancelled the ceremony");
}

#[tokio::test]
async fn authenticate_without_user_handle() {
    let mut platform = MockPlatformAuthenticator::new();
    platform
        .expect_get()
        .withf(|options| {
            options.public_key.challenge == Bytes::from([1, 2, 3])
                && options.public_key.allow_credentials.is_none()
                && options.public_key.rp_id.as_deref() == Some("example.com")
        })
        .returning(|_| Ok(authenticated_credential(None)))
        .once();
    let client = Client::new(platform);

    let assertion = client
        .authenticate(request_options(json!({
            "publicKey": { "challenge": "AQID", "rpId": "example.com" }
        })))
        .await
        .expect("authentication succeeds");

    assert_eq!(
        serde_json::to_value(assertion).expect("could not serialize"),
        json!({
            "id": "cred1",
            "rawId": "CQk",
            "type": "public-key",
            "response": {
                "authenticatorData": "AwM",
                "clientDataJSON": "AgI",
                "signature": "BAQE",
                "userHandle": null
            }
        })
    );
}

#[tokio::test]
async fn authenticate_with_allowed_credentials_and_user_handle() {
    let mut platform = MockPlatformAuthenticator::new();
    platform
        .expect_get()
        .withf(|options| {
            options
                .public_key
                .allow_credentials
                .as_ref()
                .is_some_and(|allowed| {
                    allowed.len() == 2
                        && allowed[0].id == Bytes::from([1, 1])
                        && allowed[1].id == Bytes::from([2, 2])
                        && !allowed[1].is_known()
                })
        })
        .returning(|_| Ok(authenticated_credential(Some(Bytes::from([4, 5, 6])))))
        .once();
    let client = Client::new(platform);

    let assertion = client
        .authenticate(request_options(json!({
            "publicKey": {
                "challenge": "AQID",
                "allowCredentials": [
                    { "type": "public-key", "id": "AQE" },
                    { "type": "future-key", "id": "AgI" }
                ]
            }
        })))
        .await
        .expect("authentication succeeds");

    assert_eq!(
        assertion.response.user_handle,
        Some(Base64Url::from("BAUG"))
    );
}

#[tokio::test]
async fn json_ceremonies() {
    let mut platform = MockPlatformAuthenticator::new();
    platform
        .expect_create()
        .returning(|_| Ok(created_credential()))
        .once();
    platform
        .expect_get()
        .returning(|_| Ok(authenticated_credential(None)))
        .once();
    let client = Client::new(platform);

    let created = client
        .register_json(&minimal_creation_request().to_string())
        .await
        .expect("registration succeeds");
    let created: serde_json::Value = serde_json::from_str(&created).expect("output is JSON");
    assert_eq!(created["rawId"], "CQk");
    assert_eq!(created["response"]["attestationObject"], "AQE");

    let asserted = client
        .authenticate_json(r#"{"publicKey":{"challenge":"AQID"}}"#)
        .await
        .expect("authentication succeeds");
    let asserted: serde_json::Value = serde_json::from_str(&asserted).expect("output is JSON");
    assert_eq!(asserted["response"]["signature"], "BAQE");
    assert!(asserted["response"]["userHandle"].is_null());
}

#[tokio::test]
async fn invalid_json_never_reaches_the_platform() {
    let mut platform = MockPlatformAuthenticator::new();
    platform.expect_create().times(0);
    platform.expect_get().times(0);
    let client = Client::new(platform);

    let err = client
        .register_json("{\"publicKey\":")
        .await
        .expect_err("truncated JSON");
    assert!(matches!(err, WebauthnError::InvalidJson(_)));

    let err = client
        .authenticate_json(r#"{"publicKey":{}}"#)
        .await
        .expect_err("challenge is missing");
    assert!(matches!(err, WebauthnError::InvalidJson(_)));
}

#[tokio::test]
async fn concurrent_ceremonies_are_independent() {
    let mut platform = MockPlatformAuthenticator::new();
    platform
        .expect_get()
        .withf(|options| options.public_key.challenge == Bytes::from([1, 2, 3]))
        .returning(|_| Ok(authenticated_credential(Some(Bytes::from([1])))))
        .once();
    platform
        .expect_get()
        .withf(|options| options.public_key.challenge == Bytes::from([4, 5, 6]))
        .returning(|_| Err(AuthenticatorErrorKind::NoCredentials.into()))
        .once();
    let client = Client::new(platform);

    let (first, second) = tokio::join!(
        client.authenticate(request_options(json!({ "publicKey": { "challenge": "AQID" } }))),
        client.authenticate(request_options(json!({ "publicKey": { "challenge": "BAUG" } }))),
    );

    let first = first.expect("first ceremony succeeds");
    assert_eq!(first.response.user_handle, Some(Base64Url::from("AQ")));
    assert_eq!(
        second,
        Err(WebauthnError::Authenticator(
            AuthenticatorErrorKind::NoCredentials.into()
        ))
    );
}

#[test]
fn dom_exceptions_map_to_kinds() {
    let cases = [
        ("NotAllowedError", AuthenticatorErrorKind::NotAllowed),
        ("TimeoutError", AuthenticatorErrorKind::TimedOut),
        ("InvalidStateError", AuthenticatorErrorKind::CredentialExcluded),
        ("SecurityError", AuthenticatorErrorKind::SecurityViolation),
        ("NotSupportedError", AuthenticatorErrorKind::NotSupported),
        ("ConstraintError", AuthenticatorErrorKind::NotSupported),
        ("AbortError", AuthenticatorErrorKind::Aborted),
        ("UnknownError", AuthenticatorErrorKind::Other),
    ];

    for (name, kind) in cases {
        assert_eq!(AuthenticatorErrorKind::from_dom_exception(name), kind, "{name}");
    }
}

#[test]
fn authenticator_error_display_and_serialization() {
    let bare = AuthenticatorError::new(AuthenticatorErrorKind::TimedOut);
    assert_eq!(bare.to_string(), "the ceremony timed out");
    assert_eq!(
        serde_json::to_value(&bare).expect("could not serialize"),
        json!({ "kind": "timedOut" })
    );

    let detailed =
        AuthenticatorError::with_message(AuthenticatorErrorKind::Other, "bluetooth is off");
    assert_eq!(
        detailed.to_string(),
        "the platform authenticator failed: bluetooth is off"
    );

    let parsed: AuthenticatorError =
        serde_json::from_value(json!({ "kind": "securityViolation", "message": "bad rp id" }))
            .expect("could not deserialize");
    assert_eq!(parsed.kind, AuthenticatorErrorKind::SecurityViolation);
    assert_eq!(parsed.message.as_deref(), Some("bad rp id"));
}

#[test]
fn webauthn_error_serializes_tagged() {
    let err = WebauthnError::InvalidJson("oops".into());
    assert_eq!(
        serde_json::to_value(&err).expect("could not serialize"),
        json!({ "type": "InvalidJson", "content": "oops" })
    );
}

#[tokio::test]
async fn padded_token_of_impossible_length_is_malformed() {
    let mut platform = MockPlatformAuthenticator::new();
    platform.expect_create().times(0);
    let client = Client::new(platform);

    let err = client
        .register_json(
            r#"{"publicKey":{"challenge":"AQID=","user":{"id":"BAUG","name":"alice"}}}"#,
        )
        .await
        .expect_err("five characters cannot be base64");
    let WebauthnError::MalformedToken(token) = err else {
        panic!("expected a malformed token, got {err:?}");
    };
    assert_eq!(token.field.as_deref(), Some("publicKey.challenge"));
    assert_eq!(token.kind, MalformedTokenKind::Length);
}

#[tokio::test]
async fn unrepresentable_timeout_is_invalid_json() {
    let mut platform = MockPlatformAuthenticator::new();
    platform.expect_get().times(0);
    let client = Client::new(platform);

    for timeout in ["-5", "5000000000", "\"soon\""] {
        let request = format!(r#"{{"publicKey":{{"challenge":"AQID","timeout":{timeout}}}}}"#);
        let err = client
            .authenticate_json(&request)
            .await
            .expect_err("timeout does not fit");
        assert!(matches!(err, WebauthnError::InvalidJson(_)), "{timeout}");
    }
}

#[tokio::test]
async fn stringified_timeout_reaches_the_platform() {
    let mut platform = MockPlatformAuthenticator::new();
    platform
        .expect_get()
        .withf(|options| options.public_key.timeout == Some(60000))
        .returning(|_| Ok(authenticated_credential(None)))
        .once();
    let client = Client::new(platform);

    client
        .authenticate_json(r#"{"publicKey":{"challenge":"AQID","timeout":"60000"}}"#)
        .await
        .expect("authentication succeeds");
}
