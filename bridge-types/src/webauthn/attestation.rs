//! Types specific to public key credential creation
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::{
    utils::serde::maybe_stringified,
    webauthn::{
        common::decode_descriptors, AuthenticatorAttachment, AuthenticatorTransport,
        PublicKeyCredential, PublicKeyCredentialDescriptor, PublicKeyCredentialHints,
        CreatedPublicKeyCredential, PublicKeyCredentialType, UserVerificationRequirement,
    },
    Base64Url, Bytes, MalformedToken,
};

/// This is the expected input to [`navigator.credentials.create`] when wanting to create a webauthn
/// credential.
///
/// <https://w3c.github.io/webauthn/#sctn-credentialcreationoptions-extension>
///
/// [`navigator.credentials.create`]: https://developer.mozilla.org/en-US/docs/Web/API/CredentialsContainer/create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "B: Deserialize<'de>"))]
#[typeshare]
pub struct CredentialCreationOptions<B = Bytes> {
    /// The key defining that this is a request for a webauthn credential.
    pub public_key: PublicKeyCredentialCreationOptions<B>,

    /// Other members of the request, such as `mediation`, kept in their original order.
    #[serde(flatten)]
    pub unknown_keys: IndexMap<String, serde_json::Value>,
}

impl CredentialCreationOptions<Base64Url> {
    /// Build the platform representation of this request, see
    /// [`PublicKeyCredentialCreationOptions::decode`].
    pub fn decode(&self) -> Result<CredentialCreationOptions<Bytes>, MalformedToken> {
        Ok(CredentialCreationOptions {
            public_key: self
                .public_key
                .decode()
                .map_err(|err| err.within("publicKey"))?,
            unknown_keys: self.unknown_keys.clone(),
        })
    }
}

/// This defines the request for creating a [`PublicKeyCredential`].
///
/// <https://w3c.github.io/webauthn/#dictdef-publickeycredentialcreationoptions>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "B: Deserialize<'de>"))]
#[typeshare]
pub struct PublicKeyCredentialCreationOptions<B = Bytes> {
    /// This member contains a name and an identifier for the [Relying Party] responsible for the request.
    ///
    /// [Relying Party]: https://w3c.github.io/webauthn/#relying-party
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rp: Option<PublicKeyCredentialRpEntity>,

    /// This member contains names and an identifier for the user account performing the registration.
    pub user: PublicKeyCredentialUserEntity<B>,

    /// This member specifies a challenge that the authenticator signs, along with other data,
    /// when producing an attestation for the newly created credential.
    ///
    /// See the [Cryptographic Challenges] security consideration.
    ///
    /// [Cryptographic Challenges]: https://w3c.github.io/webauthn/#sctn-cryptographic-challenges
    pub challenge: B,

    /// This member lists the key types and signature algorithms the Relying Party supports, ordered
    /// from most preferred to least preferred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_key_cred_params: Option<Vec<PublicKeyCredentialParameters>>,

    /// This OPTIONAL member specifies a time, in milliseconds, that the Relying Party is willing to
    /// wait for the call to complete. This is treated as a hint, honoured by the platform.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "maybe_stringified"
    )]
    pub timeout: Option<u32>,

    /// The Relying Party SHOULD use this OPTIONAL member to list any existing credentials mapped to
    /// this user account (as identified by [`PublicKeyCredentialUserEntity::id`]). This ensures that
    /// the new credential is not created on an authenticator that already contains a credential
    /// mapped to this user account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_credentials: Option<Vec<PublicKeyCredentialDescriptor<B>>>,

    /// The Relying Party MAY use this OPTIONAL member to specify capabilities and settings that the
    /// authenticator MUST or SHOULD satisfy to participate in the `create()` operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_selection: Option<AuthenticatorSelectionCriteria>,

    /// This OPTIONAL member contains zero or more elements from [`PublicKeyCredentialHints`] to
    /// guide the user agent in interacting with the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<PublicKeyCredentialHints>>,

    /// The Relying Party MAY use this OPTIONAL member to specify a preference regarding attestation
    /// conveyance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestation: Option<AttestationConveyancePreference>,

    /// The Relying Party MAY use this OPTIONAL member to specify a preference regarding the attestation
    /// statement format used by the authenticator, from the IANA "WebAuthn Attestation Statement
    /// Format Identifiers" registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestation_formats: Option<Vec<String>>,

    /// Client extension inputs, handed to the platform untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,

    /// Members unknown to this library, kept in their original order.
    #[serde(flatten)]
    pub unknown_keys: IndexMap<String, serde_json::Value>,
}

impl PublicKeyCredentialCreationOptions<Base64Url> {
    /// Build the platform representation of this request.
    ///
    /// The challenge, the user id and the id of every excluded credential are decoded into bytes.
    /// All other members are copied unchanged, `self` is left untouched.
    pub fn decode(&self) -> Result<PublicKeyCredentialCreationOptions<Bytes>, MalformedToken> {
        let challenge = self
            .challenge
            .decode()
            .map_err(|err| err.within("challenge"))?;
        let user = self.user.decode().map_err(|err| err.within("user"))?;
        let exclude_credentials =
            decode_descriptors(self.exclude_credentials.as_deref(), "excludeCredentials")?;

        Ok(PublicKeyCredentialCreationOptions {
            rp: self.rp.clone(),
            user,
            challenge,
            pub_key_cred_params: self.pub_key_cred_params.clone(),
            timeout: self.timeout,
            exclude_credentials,
            authenticator_selection: self.authenticator_selection.clone(),
            hints: self.hints.clone(),
            attestation: self.attestation.clone(),
            attestation_formats: self.attestation_formats.clone(),
            extensions: self.extensions.clone(),
            unknown_keys: self.unknown_keys.clone(),
        })
    }
}

/// This type is used to supply additional Relying Party attributes when creating a new credential.
///
/// <https://w3c.github.io/webauthn/#dictdef-publickeycredentialrpentity>
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[typeshare]
pub struct PublicKeyCredentialRpEntity {
    /// A unique identifier for the [Relying Party] entity, which sets the [RP ID].
    ///
    /// If omitted, its value will be the requesting origin's [effective domain]
    ///
    /// [Relying Party]: https://w3c.github.io/webauthn/#relying-party
    /// [RP ID]: https://w3c.github.io/webauthn/#rp-id
    /// [effective domain]: https://html.spec.whatwg.org/multipage/browsers.html#concept-origin-effective-domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// A human palatable identifier for the Relying Party, intended only for display.
    pub name: String,

    /// Members unknown to this library, kept in their original order.
    #[serde(flatten)]
    pub unknown_keys: IndexMap<String, serde_json::Value>,
}

/// This type is used to supply additional user account attributes when creating a new credential.
///
/// <https://w3c.github.io/webauthn/#dictdef-publickeycredentialuserentity>
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[typeshare]
pub struct PublicKeyCredentialUserEntity<B = Bytes> {
    /// The user handle of the user account. A user handle is an opaque byte sequence with a maximum
    /// size of 64 bytes, and is not meant to be displayed to the user.
    pub id: B,

    /// A human-palatable identifier for a user account, intended only for display.
    pub name: String,

    /// A human-palatable name for the user account, intended only for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Members unknown to this library, kept in their original order.
    #[serde(flatten)]
    pub unknown_keys: IndexMap<String, serde_json::Value>,
}

impl PublicKeyCredentialUserEntity<Base64Url> {
    /// Decode [`Self::id`] into bytes, every other member is copied as is.
    pub fn decode(&self) -> Result<PublicKeyCredentialUserEntity<Bytes>, MalformedToken> {
        Ok(PublicKeyCredentialUserEntity {
            id: self.id.decode().map_err(|err| err.within("id"))?,
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            unknown_keys: self.unknown_keys.clone(),
        })
    }
}

/// This type is used to supply additional parameters when creating a new credential.
///
/// <https://w3c.github.io/webauthn/#dictdef-publickeycredentialparameters>
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[typeshare]
pub struct PublicKeyCredentialParameters {
    /// This member specifies the type of credential to be created.
    #[serde(rename = "type")]
    pub ty: PublicKeyCredentialType,

    /// The [COSEAlgorithmIdentifier] of the cryptographic signature algorithm with which the newly
    /// generated credential will be used, e.g. `-7` for ES256.
    ///
    /// [COSEAlgorithmIdentifier]: https://w3c.github.io/webauthn/#typedefdef-cosealgorithmidentifier
    #[typeshare(serialized_as = "I54")] // because i64 fails for js
    pub alg: i64,
}

/// [Relying Parties] may use this type to specify their requirements regarding authenticator attributes.
///
/// <https://w3c.github.io/webauthn/#dictdef-authenticatorselectioncriteria>
///
/// [Relying Parties]: https://w3c.github.io/webauthn/#webauthn-relying-party
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[typeshare]
pub struct AuthenticatorSelectionCriteria {
    /// If this member is present, eligible authenticators are filtered to be only those
    /// authenticators attached with the specified [`AuthenticatorAttachment`] modality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_attachment: Option<AuthenticatorAttachment>,

    /// Specifies the extent to which the Relying Party desires to create a client-side
    /// [discoverable credential].
    ///
    /// [discoverable credential]: https://w3c.github.io/webauthn/#client-side-discoverable-credential
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident_key: Option<ResidentKeyRequirement>,

    /// This member is retained for backwards compatibility with WebAuthn Level 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_resident_key: Option<bool>,

    /// This member specifies the Relying Party's requirements regarding [user verification] for the
    /// `create()` operation.
    ///
    /// [user verification]: https://w3c.github.io/webauthn/#user-verification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<UserVerificationRequirement>,

    /// Members unknown to this library, kept in their original order.
    #[serde(flatten)]
    pub unknown_keys: IndexMap<String, serde_json::Value>,
}

/// This enumeration’s values describe the Relying Party's requirements for client-side
/// [discoverable credentials] (formerly known as resident credentials or resident keys).
///
/// <https://w3c.github.io/webauthn/#enumdef-residentkeyrequirement>
///
/// [discoverable credentials]: https://w3c.github.io/webauthn/#client-side-discoverable-credential
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[typeshare(serialized_as = "String")]
pub enum ResidentKeyRequirement {
    /// The Relying Party prefers creating a server-side credential, but will accept a client-side
    /// discoverable credential.
    Discouraged,

    /// The Relying Party strongly prefers creating a client-side discoverable credential, but will
    /// accept a server-side credential.
    Preferred,

    /// The Relying Party requires a client-side discoverable credential.
    Required,

    /// Any other value, kept verbatim.
    #[serde(untagged)]
    Unknown(String),
}

/// Relying Parties may use this enumeration to specify their preference regarding
/// [attestation conveyance] during credential generation.
///
/// <https://w3c.github.io/webauthn/#enumdef-attestationconveyancepreference>
///
/// [attestation conveyance]: https://w3c.github.io/webauthn/#attestation-conveyance
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[typeshare(serialized_as = "String")]
pub enum AttestationConveyancePreference {
    /// The Relying Party is not interested in authenticator attestation.
    None,

    /// The Relying Party wants to receive a verifiable attestation statement, but allows the client
    /// to decide how to obtain such an attestation statement.
    Indirect,

    /// The Relying Party wants to receive the attestation statement as generated by the authenticator.
    Direct,

    /// The Relying Party wants to receive an attestation statement that may include uniquely
    /// identifying information.
    Enterprise,

    /// Any other value, kept verbatim.
    #[serde(untagged)]
    Unknown(String),
}

/// The type represents the authenticator's response to a client’s request for the creation of a new
/// [`PublicKeyCredential`].
///
/// <https://w3c.github.io/webauthn/#iface-authenticatorattestationresponse>
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[typeshare]
pub struct AuthenticatorAttestationResponse<B = Bytes> {
    /// This attribute contains an attestation object, which is opaque to, and cryptographically
    /// protected against tampering by, the client.
    pub attestation_object: B,

    /// This attribute contains the JSON serialization of the client data passed to the
    /// authenticator by the client in order to generate this credential. The exact bytes MUST be
    /// preserved, as the hash of the serialized client data has been computed over it.
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: B,

    /// The transports the authenticator is believed to support, when the platform reports them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<AuthenticatorTransport>>,
}

impl AuthenticatorAttestationResponse<Bytes> {
    /// Encode every binary member to `base64url`.
    pub fn encode(&self) -> AuthenticatorAttestationResponse<Base64Url> {
        AuthenticatorAttestationResponse {
            attestation_object: Base64Url::encode(&self.attestation_object),
            client_data_json: Base64Url::encode(&self.client_data_json),
            transports: self.transports.clone(),
        }
    }
}

impl CreatedPublicKeyCredential {
    /// Build the Relying Party representation of a freshly created credential.
    ///
    /// The id and type are copied verbatim, the raw id and the response are `base64url` encoded.
    pub fn encode(&self) -> CreatedPublicKeyCredential<Base64Url> {
        PublicKeyCredential {
            id: self.id.clone(),
            raw_id: Base64Url::encode(&self.raw_id),
            ty: self.ty.clone(),
            response: self.response.encode(),
        }
    }
}
