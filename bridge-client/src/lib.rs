//! # Bridge Client
//!
//! This crate defines a [`Client`] type which runs [WebAuthn] ceremonies on behalf of a Relying
//! Party that speaks JSON. The [`Client`] uses a [`PlatformAuthenticator`] to perform the actual
//! ceremony, while the Client itself marshals data to and from the structs received from the
//! Relying Party.
//!
//! Every ceremony goes through the same three steps:
//!
//! 1. the `base64url` members of the request are decoded into a fresh structure holding bytes,
//! 2. the platform authenticator is invoked with it and the user interacts with it,
//! 3. the binary members of the resulting credential are encoded back to `base64url`.
//!
//! Nothing is retried. A rejected or failed ceremony must be restarted with a fresh challenge from
//! the Relying Party.
//!
//! This crate does not provide any code to perform networking requests to and from Relying Parties.
//!
//! [WebAuthn]: https://w3c.github.io/webauthn/
use bridge_types::{webauthn, Base64Url, MalformedToken};
use typeshare::typeshare;

mod platform;

#[cfg(any(test, feature = "testable"))]
pub use self::platform::MockPlatformAuthenticator;
pub use self::platform::{AuthenticatorError, AuthenticatorErrorKind, PlatformAuthenticator};

#[cfg(test)]
mod tests;

#[typeshare]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, thiserror::Error)]
#[serde(tag = "type", content = "content")]
/// Errors produced by Webauthn Operations.
pub enum WebauthnError {
    /// A `base64url` member of the request could not be decoded. The platform was not invoked.
    #[error(transparent)]
    MalformedToken(#[from] MalformedToken),
    /// The platform authenticator rejected the ceremony.
    #[error(transparent)]
    Authenticator(#[from] AuthenticatorError),
    /// The request could not be parsed, or the result could not be serialized, as JSON.
    #[error("invalid ceremony JSON: {0}")]
    InvalidJson(String),
}

impl WebauthnError {
    /// Was the ceremony ended by the user rather than by a faulty request?
    pub fn is_user_dismissal(&self) -> bool {
        matches!(self, WebauthnError::Authenticator(err) if err.kind.is_user_dismissal())
    }
}

impl From<serde_json::Error> for WebauthnError {
    fn from(value: serde_json::Error) -> Self {
        WebauthnError::InvalidJson(value.to_string())
    }
}

/// A `Client` represents a Webauthn client. Users of this struct should supply a
/// [`PlatformAuthenticator`] performing the ceremonies.
///
/// The client holds no state between ceremonies, several may be started concurrently from the
/// same `Client`. Whether the platform lets more than one of them reach the user at a time is up
/// to the platform.
pub struct Client<A>
where
    A: PlatformAuthenticator + Sync,
{
    authenticator: A,
}

impl<A> Client<A>
where
    A: PlatformAuthenticator + Sync,
{
    /// Create a `Client` with a given `PlatformAuthenticator`.
    pub fn new(authenticator: A) -> Self {
        Self { authenticator }
    }

    /// Read access to the Client's `PlatformAuthenticator`.
    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    /// Write access to the Client's `PlatformAuthenticator`.
    pub fn authenticator_mut(&mut self) -> &mut A {
        &mut self.authenticator
    }

    /// Register a webauthn `request` received from the Relying Party.
    ///
    /// Returns either a [`webauthn::CreatedPublicKeyCredential`] ready to be sent back to the
    /// Relying Party on success or some [`WebauthnError`].
    pub async fn register(
        &self,
        request: webauthn::CredentialCreationOptions<Base64Url>,
    ) -> Result<webauthn::CreatedPublicKeyCredential<Base64Url>, WebauthnError> {
        let request = request.decode()?;
        log::debug!(
            "Decoded registration request with {} excluded credentials",
            request
                .public_key
                .exclude_credentials
                .as_ref()
                .map_or(0, Vec::len)
        );

        let credential = self
            .authenticator
            .create(request)
            .await
            .inspect_err(|err| log::warn!("Platform rejected credential creation: {err}"))?;
        log::debug!("Platform created a credential of type {:?}", credential.ty);

        Ok(credential.encode())
    }

    /// Authenticate a Webauthn request received from the Relying Party.
    ///
    /// Returns either an [`webauthn::AuthenticatedPublicKeyCredential`] ready to be sent back to
    /// the Relying Party on success or some [`WebauthnError`].
    pub async fn authenticate(
        &self,
        request: webauthn::CredentialRequestOptions<Base64Url>,
    ) -> Result<webauthn::AuthenticatedPublicKeyCredential<Base64Url>, WebauthnError> {
        let request = request.decode()?;
        log::debug!(
            "Decoded authentication request with {} allowed credentials",
            request
                .public_key
                .allow_credentials
                .as_ref()
                .map_or(0, Vec::len)
        );

        let assertion = self
            .authenticator
            .get(request)
            .await
            .inspect_err(|err| log::warn!("Platform rejected assertion: {err}"))?;
        log::debug!(
            "Platform produced an assertion, user handle present: {}",
            assertion.response.user_handle.is_some()
        );

        Ok(assertion.encode())
    }

    /// Same as [`Client::register`] for callers holding the raw JSON exchanged with the Relying
    /// Party.
    pub async fn register_json(&self, request: &str) -> Result<String, WebauthnError> {
        let request = serde_json::from_str(request)?;
        let credential = self.register(request).await?;
        Ok(serde_json::to_string(&credential)?)
    }

    /// Same as [`Client::authenticate`] for callers holding the raw JSON exchanged with the
    /// Relying Party.
    pub async fn authenticate_json(&self, request: &str) -> Result<String, WebauthnError> {
        let request = serde_json::from_str(request)?;
        let assertion = self.authenticate(request).await?;
        Ok(serde_json::to_string(&assertion)?)
    }
}
