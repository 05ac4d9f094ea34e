//! # WebAuthn Bridge
//!
//! Web pages and Relying Parties exchange WebAuthn options and credentials as JSON, where every
//! binary member (challenges, user handles, credential ids, attestation objects, signatures) is a
//! `base64url` string. Platform credential APIs want raw bytes instead. This library sits between
//! the two. It is comprised of three sub-libraries:
//!
//! - `bridge-types` - the [WebAuthn Level 3][webauthn-3] types and the `base64url` codec, usable as [`types`].
//! - `bridge-client` - the ceremony adapter, usable as [`client`], which decodes requests, invokes a platform authenticator and encodes its results.
//! - `bridge-time` - timestamp formatting for showing users when credentials were created or used, usable as [`time`].
//!
//! Much of the type naming refers directly to the terms used in the [WebAuthn][webauthn-3]
//! standard, being familiar with its terminology will greatly aid your understanding of this
//! library.
//!
//! How requests reach the bridge and how results get back to the Relying Party is up to the
//! application, the bridge performs no networking.
//!
//! ## Basic Concepts
//!
//! Every type in [`types::webauthn`] is generic over the representation of its binary members:
//! [`Base64Url`](types::Base64Url) on the Relying Party side and [`Bytes`](types::Bytes) on the
//! platform side. Requests are decoded, never modified in place, and credentials are encoded.
//!
//! RelyingParty <-> [`Client`](client::Client) <-> [`PlatformAuthenticator`](client::PlatformAuthenticator)
//!
//! The [`Client`](client::Client) provides the following API:
//!
//! - [`register()`](client::Client::register()) - create a credential, `navigator.credentials.create()`.
//! - [`authenticate()`](client::Client::authenticate()) - produce an assertion, `navigator.credentials.get()`.
//!
//! Both come in a `_json` flavour taking and returning the JSON text exchanged with the Relying
//! Party. A malformed `base64url` member fails the ceremony before the platform is involved and
//! names the offending member, e.g. `publicKey.excludeCredentials[1].id`.
//!
//! A runnable demonstration binary is provided in `bridge/examples/usage.rs`.
//!
//! [webauthn-3]: https://www.w3.org/TR/webauthn-3/
//!
//! ### Example: Registering a credential
//!
//! ```
//! use webauthn_bridge::{
//!     client::{AuthenticatorError, Client, PlatformAuthenticator},
//!     types::{webauthn::*, Bytes},
//! };
//! #
//! # // A platform which hands back a fixed credential.
//! # struct MyPlatform;
//! # #[async_trait::async_trait]
//! # impl PlatformAuthenticator for MyPlatform {
//! #     async fn create(
//! #         &self,
//! #         options: CredentialCreationOptions,
//! #     ) -> Result<CreatedPublicKeyCredential, AuthenticatorError> {
//! #         assert_eq!(options.public_key.challenge, Bytes::from([1, 2, 3]));
//! #         Ok(CreatedPublicKeyCredential {
//! #             id: "cred1".into(),
//! #             raw_id: Bytes::from([9, 9]),
//! #             ty: PublicKeyCredentialType::PublicKey,
//! #             response: AuthenticatorAttestationResponse {
//! #                 attestation_object: Bytes::from([1, 1]),
//! #                 client_data_json: Bytes::from([2, 2]),
//! #                 transports: None,
//! #             },
//! #         })
//! #     }
//! #
//! #     async fn get(
//! #         &self,
//! #         _options: CredentialRequestOptions,
//! #     ) -> Result<AuthenticatedPublicKeyCredential, AuthenticatorError> {
//! #         unreachable!()
//! #     }
//! # }
//!
//! # tokio_test::block_on(async {
//! let client = Client::new(MyPlatform);
//!
//! // This would usually come from the Relying Party.
//! let request = r#"{
//!     "publicKey": {
//!         "challenge": "AQID",
//!         "user": { "id": "BAUG", "name": "alice" }
//!     }
//! }"#;
//!
//! let credential = client.register_json(request).await?;
//! assert_eq!(
//!     credential,
//!     r#"{"id":"cred1","rawId":"CQk","type":"public-key","response":{"attestationObject":"AQE","clientDataJSON":"AgI"}}"#
//! );
//! # Ok::<(), webauthn_bridge::client::WebauthnError>(())
//! # }).unwrap();
//! ```

pub use bridge_client as client;
pub use bridge_time as time;
pub use bridge_types as types;
