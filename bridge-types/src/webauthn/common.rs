//! Common types used in both Attestation (registration) and Assertion (authentication).
//!
//! Enumerations in this module keep values they do not recognise in an `Unknown` variant, so that
//! the bridge hands the platform exactly what the Relying Party sent.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::{Base64Url, Bytes, MalformedToken};

#[cfg(doc)]
use crate::webauthn::{
    AuthenticatorAttestationResponse, PublicKeyCredential, PublicKeyCredentialCreationOptions,
    PublicKeyCredentialRequestOptions,
};

/// This enumeration defines the valid credential types. It is an extension point; values can be
/// added to it in the future, as more credential types are defined. The values of this enumeration
/// are used for versioning the Authentication Assertion and attestation structures according to the
/// type of the authenticator.
///
/// <https://w3c.github.io/webauthn/#enumdef-publickeycredentialtype>
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[typeshare(serialized_as = "String")]
pub enum PublicKeyCredentialType {
    /// Currently the only type defined is a `PublicKey` meaning the public conterpart of an
    /// asymmetric key pair.
    PublicKey,
    /// Any other value, kept verbatim.
    #[serde(untagged)]
    Unknown(String),
}

/// Identifies a specific public key credential. It is used in [`PublicKeyCredentialCreationOptions::exclude_credentials`]
/// to prevent creating duplicate credentials on the same authenticator, and in [`PublicKeyCredentialRequestOptions::allow_credentials`]
/// to determine if and how the credential can currently be reached by the client. It mirrors some
/// fields of the [`PublicKeyCredential`] object returned by the `create()` and `get()` operations.
///
/// <https://w3c.github.io/webauthn/#dictdef-publickeycredentialdescriptor>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[typeshare]
pub struct PublicKeyCredentialDescriptor<B = Bytes> {
    /// This member contains the type of the public key credential the caller is referring to.
    ///
    /// This mirrors the [`PublicKeyCredential::ty`] field.
    #[serde(rename = "type")]
    pub ty: PublicKeyCredentialType,

    /// This member contains the credential ID of the public key credential the caller is referring to.
    ///
    /// This mirrors the [`PublicKeyCredential::raw_id`] field.
    pub id: B,

    /// This OPTIONAL member contains a hint as to how the client might communicate with the managing
    /// authenticator of the [`PublicKeyCredential`] the caller is referring to.
    ///
    /// This mirrors the [`AuthenticatorAttestationResponse::transports`] field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<AuthenticatorTransport>>,

    /// Members unknown to this library, kept in their original order.
    #[serde(flatten)]
    pub unknown_keys: IndexMap<String, serde_json::Value>,
}

impl<B> PublicKeyCredentialDescriptor<B> {
    /// Checks whether [`Self::ty`] is not of value [`PublicKeyCredentialType::Unknown`]. This should
    /// be used for filtering a list of [`PublicKeyCredentialDescriptor`]s that are not of a known type.
    pub fn is_known(&self) -> bool {
        match self.ty {
            PublicKeyCredentialType::PublicKey => true,
            PublicKeyCredentialType::Unknown(_) => false,
        }
    }
}

impl PublicKeyCredentialDescriptor<Base64Url> {
    /// Decode [`Self::id`] into bytes, every other member is copied as is.
    pub fn decode(&self) -> Result<PublicKeyCredentialDescriptor<Bytes>, MalformedToken> {
        Ok(PublicKeyCredentialDescriptor {
            ty: self.ty.clone(),
            id: self.id.decode().map_err(|err| err.within("id"))?,
            transports: self.transports.clone(),
            unknown_keys: self.unknown_keys.clone(),
        })
    }
}

/// Decode every descriptor of an optional list, preserving its order and length.
///
/// Errors name the failing entry as `field[index].id`.
pub(crate) fn decode_descriptors(
    list: Option<&[PublicKeyCredentialDescriptor<Base64Url>]>,
    field: &str,
) -> Result<Option<Vec<PublicKeyCredentialDescriptor<Bytes>>>, MalformedToken> {
    list.map(|list| {
        list.iter()
            .enumerate()
            .map(|(index, descriptor)| {
                descriptor
                    .decode()
                    .map_err(|err| err.within(&format!("{field}[{index}]")))
            })
            .collect()
    })
    .transpose()
}

/// A Relying Party may require [user verification] for some of its operations but not for others,
/// and may use this type to express its needs.
///
/// <https://w3c.github.io/webauthn/#enumdef-userverificationrequirement>
///
/// [user verification]: https://w3c.github.io/webauthn/#user-verification
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[typeshare(serialized_as = "String")]
pub enum UserVerificationRequirement {
    /// The Relying Party requires user verification for the operation and will fail the overall
    /// ceremony if the response does not have the UV flag set.
    Required,

    /// The Relying Party prefers user verification for the operation if possible, but will not fail
    /// the operation if the response does not have the UV flag set.
    Preferred,

    /// The Relying Party does not want user verification employed during the operation
    /// (e.g., in the interest of minimizing disruption to the user interaction flow).
    Discouraged,

    /// Any other value, kept verbatim.
    #[serde(untagged)]
    Unknown(String),
}

/// Authenticators may implement various transports for communicating with clients. This enumeration
/// defines hints as to how clients might communicate with a particular authenticator in order to
/// obtain an assertion for a specific credential.
///
/// <https://w3c.github.io/webauthn/#enum-transport>
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[typeshare(serialized_as = "String")]
pub enum AuthenticatorTransport {
    /// Indicates the respective authenticator can be contacted over removable USB.
    Usb,

    /// Indicates the respective authenticator can be contacted over Near Field Communication (NFC).
    Nfc,

    /// Indicates the respective authenticator can be contacted over Bluetooth Smart
    /// (Bluetooth Low Energy / BLE).
    Ble,

    /// Indicates the respective authenticator can be contacted over ISO/IEC 7816 smart card with
    /// contacts.
    SmartCard,

    /// Indicates the respective authenticator can be contacted using a combination of (often
    /// separate) data-transport and proximity mechanisms.
    Hybrid,

    /// Indicates the respective authenticator is contacted using a client device-specific
    /// transport, i.e., it is a platform authenticator.
    Internal,

    /// Any other value, kept verbatim.
    #[serde(untagged)]
    Unknown(String),
}

/// This enumeration’s values describe [authenticators]' [attachment modalities].
///
/// <https://w3c.github.io/webauthn/#enumdef-authenticatorattachment>
///
/// [authenticators]: https://w3c.github.io/webauthn/#authenticator
/// [attachment modalities]: https://w3c.github.io/webauthn/#authenticator-attachment-modality
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[typeshare(serialized_as = "String")]
pub enum AuthenticatorAttachment {
    /// This value indicates [platform attachment].
    ///
    /// [platform attachment]: https://w3c.github.io/webauthn/#platform-attachment
    Platform,

    /// This value indicates [cross-platform attachment].
    ///
    /// [cross-platform attachment]: https://w3c.github.io/webauthn/#cross-platform-attachment
    CrossPlatform,

    /// Any other value, kept verbatim.
    #[serde(untagged)]
    Unknown(String),
}

/// Hints the Relying Party may give the user agent about how to interact with the user.
///
/// <https://w3c.github.io/webauthn/#enumdef-publickeycredentialhints>
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[typeshare(serialized_as = "String")]
pub enum PublicKeyCredentialHints {
    /// The Relying Party believes that users will satisfy this request with a physical security key.
    SecurityKey,

    /// The Relying Party believes that users will satisfy this request with a platform authenticator
    /// attached to the client device.
    ClientDevice,

    /// The Relying Party believes that users will satisfy this request with general-purpose
    /// authenticators such as smartphones.
    Hybrid,

    /// Any other value, kept verbatim.
    #[serde(untagged)]
    Unknown(String),
}
