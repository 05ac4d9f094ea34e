//! Sample App for the WebAuthn bridge
use std::sync::Mutex;

use webauthn_bridge::{
    client::{
        AuthenticatorError, AuthenticatorErrorKind, Client, PlatformAuthenticator, WebauthnError,
    },
    time::{LocalTimeFormatter, TimeFormatter, TimestampStyle},
    types::{encoding::base64url, webauthn::*, Bytes},
};

struct StoredCredential {
    raw_id: Bytes,
    user_handle: Bytes,
    rp_name: String,
    created: i64,
}

// SoftwarePlatform is a stand in for the browser or OS passkey provider. It does not sign
// anything, it only remembers which credentials it handed out.
struct SoftwarePlatform {
    clock: LocalTimeFormatter,
    credentials: Mutex<Vec<StoredCredential>>,
}

#[async_trait::async_trait]
impl PlatformAuthenticator for SoftwarePlatform {
    async fn create(
        &self,
        options: CredentialCreationOptions,
    ) -> Result<CreatedPublicKeyCredential, AuthenticatorError> {
        let options = options.public_key;
        let mut credentials = self.credentials.lock().expect("demo lock is never poisoned");

        let excluded = options.exclude_credentials.unwrap_or_default();
        if credentials
            .iter()
            .any(|stored| excluded.iter().any(|descriptor| descriptor.id == stored.raw_id))
        {
            return Err(AuthenticatorErrorKind::CredentialExcluded.into());
        }

        let raw_id = Bytes::from(options.challenge.iter().rev().copied().collect::<Vec<u8>>());
        credentials.push(StoredCredential {
            raw_id: raw_id.clone(),
            user_handle: options.user.id,
            rp_name: options.rp.map(|rp| rp.name).unwrap_or_default(),
            created: self.clock.current_timestamp(),
        });

        Ok(CreatedPublicKeyCredential {
            id: base64url(&raw_id),
            raw_id,
            ty: PublicKeyCredentialType::PublicKey,
            response: AuthenticatorAttestationResponse {
                attestation_object: Bytes::from([0xa0]),
                client_data_json: Bytes::from(br#"{"type":"webauthn.create"}"#.as_slice()),
                transports: Some(vec![AuthenticatorTransport::Internal]),
            },
        })
    }

    async fn get(
        &self,
        options: CredentialRequestOptions,
    ) -> Result<AuthenticatedPublicKeyCredential, AuthenticatorError> {
        let options = options.public_key;
        let credentials = self.credentials.lock().expect("demo lock is never poisoned");

        let allowed = options.allow_credentials.unwrap_or_default();
        let stored = credentials
            .iter()
            .find(|stored| {
                allowed.is_empty()
                    || allowed.iter().any(|descriptor| descriptor.id == stored.raw_id)
            })
            .ok_or(AuthenticatorError::from(AuthenticatorErrorKind::NoCredentials))?;

        println!(
            "Using the {} credential created {}",
            stored.rp_name,
            self.clock.format_timestamp(stored.created, TimestampStyle::Full)
        );

        Ok(AuthenticatedPublicKeyCredential {
            id: base64url(&stored.raw_id),
            raw_id: stored.raw_id.clone(),
            ty: PublicKeyCredentialType::PublicKey,
            response: AuthenticatorAssertionResponse {
                authenticator_data: Bytes::from([0; 37]),
                client_data_json: Bytes::from(br#"{"type":"webauthn.get"}"#.as_slice()),
                signature: options.challenge,
                user_handle: Some(stored.user_handle.clone()),
            },
        })
    }
}

fn report(label: &str, result: &Result<String, WebauthnError>) {
    match result {
        Ok(json) => println!("{label}:\n\n{json}\n"),
        Err(err) if err.is_user_dismissal() => println!("{label}: dismissed by the user\n"),
        Err(err) => println!("{label} failed: {err}\n"),
    }
}

#[tokio::main]
async fn main() -> Result<(), WebauthnError> {
    let client = Client::new(SoftwarePlatform {
        clock: LocalTimeFormatter::default(),
        credentials: Mutex::new(Vec::new()),
    });

    // These would usually be fetched from the Relying Party.
    let registration = serde_json::json!({
        "publicKey": {
            "rp": { "id": "example.com", "name": "Example" },
            "user": { "id": "dXNlci0x", "name": "alice@example.com", "displayName": "Alice" },
            "challenge": "AQIDBAUGBwg",
            "pubKeyCredParams": [{ "type": "public-key", "alg": -7 }],
            "timeout": "60000"
        }
    });
    let created = client.register_json(&registration.to_string()).await;
    report("Webauthn credential created", &created);
    let created: serde_json::Value = serde_json::from_str(&created?)?;

    let authentication = serde_json::json!({
        "publicKey": {
            "challenge": "CQoLDA0ODxA",
            "rpId": "example.com",
            "allowCredentials": [{ "type": "public-key", "id": created["rawId"] }],
            "userVerification": "preferred"
        },
        "mediation": "optional"
    });
    let asserted = client.authenticate_json(&authentication.to_string()).await;
    report("Webauthn credential auth'ed", &asserted);

    let registration = serde_json::json!({
        "publicKey": {
            "user": { "id": "dXNlci0x", "name": "alice@example.com" },
            "challenge": "AQIDBAUGBwg",
            "excludeCredentials": [{ "type": "public-key", "id": created["rawId"] }]
        }
    })
    .to_string();
    let again = client.register_json(&registration).await;
    report("Second registration", &again);

    let malformed = client
        .authenticate_json(r#"{"publicKey":{"challenge":"AQ*D"}}"#)
        .await;
    report("Malformed request", &malformed);

    Ok(())
}
