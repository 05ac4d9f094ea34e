//! Types used for public key authentication

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::{
    utils::serde::maybe_stringified,
    webauthn::{
        common::decode_descriptors, AuthenticatedPublicKeyCredential, PublicKeyCredential,
        PublicKeyCredentialDescriptor, PublicKeyCredentialHints, UserVerificationRequirement,
    },
    Base64Url, Bytes, MalformedToken,
};

#[cfg(doc)]
use crate::webauthn::PublicKeyCredentialUserEntity;

/// This is the expected input to [`navigator.credentials.get`] when wanting to authenticate with
/// a webauthn credential.
///
/// <https://w3c.github.io/webauthn/#sctn-credentialrequestoptions-extension>
///
/// [`navigator.credentials.get`]: https://developer.mozilla.org/en-US/docs/Web/API/CredentialsContainer/get
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "B: Deserialize<'de>"))]
#[typeshare]
pub struct CredentialRequestOptions<B = Bytes> {
    /// The key defining that this is a request for a webauthn credential.
    pub public_key: PublicKeyCredentialRequestOptions<B>,

    /// Other members of the request, such as `mediation`, kept in their original order.
    #[serde(flatten)]
    pub unknown_keys: IndexMap<String, serde_json::Value>,
}

impl CredentialRequestOptions<Base64Url> {
    /// Build the platform representation of this request, see
    /// [`PublicKeyCredentialRequestOptions::decode`].
    pub fn decode(&self) -> Result<CredentialRequestOptions<Bytes>, MalformedToken> {
        Ok(CredentialRequestOptions {
            public_key: self
                .public_key
                .decode()
                .map_err(|err| err.within("publicKey"))?,
            unknown_keys: self.unknown_keys.clone(),
        })
    }
}

/// This type supplies `get()` requests with the data it needs to generate an assertion.
/// Its `challenge` member MUST be present, while its other members are OPTIONAL.
///
/// <https://w3c.github.io/webauthn/#dictdef-publickeycredentialrequestoptions>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "B: Deserialize<'de>"))]
#[typeshare]
pub struct PublicKeyCredentialRequestOptions<B = Bytes> {
    /// This member specifies a challenge that the authenticator signs, along with other data, when
    /// producing an authentication assertion. See the [Cryptographic Challenges] security consideration.
    ///
    /// [Cryptographic Challenges]: https://w3c.github.io/webauthn/#sctn-cryptographic-challenges
    pub challenge: B,

    /// This OPTIONAL member specifies a time, in milliseconds, that the Relying Party is willing to
    /// wait for the call to complete. The value is treated as a hint, honoured by the platform.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "maybe_stringified"
    )]
    pub timeout: Option<u32>,

    /// This OPTIONAL member specifies the [RP ID] claimed by the [Relying Party].
    ///
    /// If omitted, its value will be the requesting origin's [effective domain].
    ///
    /// [RP ID]: https://w3c.github.io/webauthn/#rp-id
    /// [Relying Party]: https://w3c.github.io/webauthn/#relying-party
    /// [effective domain]: https://html.spec.whatwg.org/multipage/browsers.html#concept-origin-effective-domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rp_id: Option<String>,

    /// This OPTIONAL member is used by the client to find authenticators eligible for this
    /// authentication ceremony.
    ///
    /// The list is ordered in descending order of preference: the first item in the list is the
    /// most preferred credential, and the last is the least preferred. An absent or empty list lets
    /// the user pick any discoverable credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<Vec<PublicKeyCredentialDescriptor<B>>>,

    /// This OPTIONAL member specifies the Relying Party's requirements regarding user verification
    /// for the `get()` operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<UserVerificationRequirement>,

    /// This OPTIONAL member contains zero or more elements from [`PublicKeyCredentialHints`] to
    /// guide the user agent in interacting with the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<PublicKeyCredentialHints>>,

    /// Client extension inputs, handed to the platform untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,

    /// Members unknown to this library, kept in their original order.
    #[serde(flatten)]
    pub unknown_keys: IndexMap<String, serde_json::Value>,
}

impl PublicKeyCredentialRequestOptions<Base64Url> {
    /// Build the platform representation of this request.
    ///
    /// The challenge and the id of every allowed credential are decoded into bytes. All other
    /// members are copied unchanged, `self` is left untouched.
    pub fn decode(&self) -> Result<PublicKeyCredentialRequestOptions<Bytes>, MalformedToken> {
        let challenge = self
            .challenge
            .decode()
            .map_err(|err| err.within("challenge"))?;
        let allow_credentials =
            decode_descriptors(self.allow_credentials.as_deref(), "allowCredentials")?;

        Ok(PublicKeyCredentialRequestOptions {
            challenge,
            timeout: self.timeout,
            rp_id: self.rp_id.clone(),
            allow_credentials,
            user_verification: self.user_verification.clone(),
            hints: self.hints.clone(),
            extensions: self.extensions.clone(),
            unknown_keys: self.unknown_keys.clone(),
        })
    }
}

/// The [`AuthenticatorAssertionResponse`] represents an authenticator's response to a client’s
/// request for generation of a new authentication assertion given the Relying Party's challenge
/// and OPTIONAL list of credentials it is aware of. This response contains a cryptographic
/// signature proving possession of the credential private key, and optionally evidence of user
/// consent to a specific transaction.
///
/// <https://w3c.github.io/webauthn/#iface-authenticatorassertionresponse>
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "B: Deserialize<'de>"))]
#[typeshare]
pub struct AuthenticatorAssertionResponse<B = Bytes> {
    /// This attribute contains the authenticator data returned by the authenticator.
    pub authenticator_data: B,

    /// This attribute contains the JSON serialization of the client data passed to the
    /// authenticator by the client in order to generate this assertion. The exact bytes MUST be
    /// preserved, as the hash of the serialized client data has been computed over it.
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: B,

    /// This attribute contains the raw signature returned from the authenticator.
    pub signature: B,

    /// This attribute contains the user handle returned from the authenticator, or null if the
    /// authenticator did not return a user handle. It mirrors [`PublicKeyCredentialUserEntity::id`]
    /// from registration.
    ///
    /// Always serialized, as `null` when absent.
    #[serde(default)]
    pub user_handle: Option<B>,
}

impl AuthenticatorAssertionResponse<Bytes> {
    /// Encode every binary member to `base64url`, an absent user handle stays absent.
    pub fn encode(&self) -> AuthenticatorAssertionResponse<Base64Url> {
        AuthenticatorAssertionResponse {
            authenticator_data: Base64Url::encode(&self.authenticator_data),
            client_data_json: Base64Url::encode(&self.client_data_json),
            signature: Base64Url::encode(&self.signature),
            user_handle: self.user_handle.as_ref().map(Base64Url::from),
        }
    }
}

impl AuthenticatedPublicKeyCredential {
    /// Build the Relying Party representation of an assertion.
    ///
    /// The id and type are copied verbatim, the raw id and the response are `base64url` encoded.
    pub fn encode(&self) -> AuthenticatedPublicKeyCredential<Base64Url> {
        PublicKeyCredential {
            id: self.id.clone(),
            raw_id: Base64Url::encode(&self.raw_id),
            ty: self.ty.clone(),
            response: self.response.encode(),
        }
    }
}
