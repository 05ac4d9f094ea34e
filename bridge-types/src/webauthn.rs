//! Implementation of the types defined in [WebAuthn Level 3] which the client bridges between the
//! Relying Party and the platform authenticator.
//!
//! Each type is generic over `B`, the representation of its binary members. The Relying Party side
//! uses [`Base64Url`](crate::Base64Url) and the platform side uses [`Bytes`], which is the default.
//!
//! [WebAuthn Level 3]: https://w3c.github.io/webauthn

use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::Bytes;

mod assertion;
mod attestation;
mod common;

// re-export types
pub use self::{assertion::*, attestation::*, common::*};

mod sealed {
    pub trait Sealed {}

    impl<B> Sealed for super::AuthenticatorAssertionResponse<B> {}
    impl<B> Sealed for super::AuthenticatorAttestationResponse<B> {}
}

/// Marker trait for response types
pub trait AuthenticatorResponse: sealed::Sealed {}

impl<B> AuthenticatorResponse for AuthenticatorAssertionResponse<B> {}
impl<B> AuthenticatorResponse for AuthenticatorAttestationResponse<B> {}

/// This is the response from a successful creation or assertion of a credential.
///
/// It is recommended to use the type aliases depending on which response you are expecting:
/// * Credential Creation: [CreatedPublicKeyCredential]
/// * Credential assertion: [AuthenticatedPublicKeyCredential]
///
/// <https://w3c.github.io/webauthn/#iface-pkcredential>
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[typeshare]
pub struct PublicKeyCredential<B, R: AuthenticatorResponse> {
    /// The id contains the credential ID, chosen by the authenticator. This is usually the base64url
    /// encoded data of [Self::raw_id].
    ///
    /// It is copied verbatim between representations.
    pub id: String,

    /// The raw byte containing the credential ID, see [Self::id] for more information.
    pub raw_id: B,

    /// The credential type, [`PublicKeyCredentialType::PublicKey`] in practice.
    #[serde(rename = "type")]
    pub ty: PublicKeyCredentialType,

    /// This contains the authenticator's response to the client's request to either:
    /// * create a public key in which case it is of type [AuthenticatorAttestationResponse] or
    /// * generate an authentication assertion in which case it is of type [AuthenticatorAssertionResponse]
    pub response: R,
}

/// The response to the successful creation of a [`PublicKeyCredential`]
pub type CreatedPublicKeyCredential<B = Bytes> =
    PublicKeyCredential<B, AuthenticatorAttestationResponse<B>>;

/// The response to the successful authentication of a [`PublicKeyCredential`]
pub type AuthenticatedPublicKeyCredential<B = Bytes> =
    PublicKeyCredential<B, AuthenticatorAssertionResponse<B>>;
