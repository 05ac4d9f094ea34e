use std::fmt;

use bridge_types::webauthn::{
    AuthenticatedPublicKeyCredential, CreatedPublicKeyCredential, CredentialCreationOptions,
    CredentialRequestOptions,
};
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

#[cfg(doc)]
use crate::Client;

/// Pluggable trait for the [`Client`] to reach the platform's credential APIs, such as
/// `navigator.credentials` in a browser or the operating system's passkey provider.
///
/// Both operations receive options whose binary members are raw bytes and resolve once the user
/// has completed, refused or abandoned the ceremony. Implementations own timeouts and
/// cancellation: the `timeout` member of the options is theirs to honour.
#[cfg_attr(any(test, feature = "testable"), mockall::automock)]
#[async_trait::async_trait]
pub trait PlatformAuthenticator {
    /// Create a new credential, the equivalent of `navigator.credentials.create()`.
    async fn create(
        &self,
        options: CredentialCreationOptions,
    ) -> Result<CreatedPublicKeyCredential, AuthenticatorError>;

    /// Produce an assertion with an existing credential, the equivalent of
    /// `navigator.credentials.get()`.
    async fn get(
        &self,
        options: CredentialRequestOptions,
    ) -> Result<AuthenticatedPublicKeyCredential, AuthenticatorError>;
}

/// The platform authenticator rejected a ceremony.
///
/// This is the platform's own cause, the [`Client`] hands it back without translating it.
#[typeshare]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error(
    "{kind}{}",
    .message.as_deref().map(|message| format!(": {message}")).unwrap_or_default()
)]
pub struct AuthenticatorError {
    /// Category of the rejection.
    pub kind: AuthenticatorErrorKind,
    /// Platform specific detail, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuthenticatorError {
    /// An error of the given kind without further detail.
    pub fn new(kind: AuthenticatorErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// An error of the given kind with a platform specific message.
    pub fn with_message(kind: AuthenticatorErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }
}

impl From<AuthenticatorErrorKind> for AuthenticatorError {
    fn from(kind: AuthenticatorErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Why the platform authenticator rejected a ceremony.
#[typeshare]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthenticatorErrorKind {
    /// The user dismissed the ceremony.
    Cancelled,
    /// The ceremony did not complete within the platform's timeout.
    TimedOut,
    /// The platform refused without saying whether the user cancelled or the ceremony timed out,
    /// as browsers do with `NotAllowedError`.
    NotAllowed,
    /// None of the allowed credentials, nor any discoverable credential, is available.
    NoCredentials,
    /// The authenticator already holds one of the excluded credentials.
    CredentialExcluded,
    /// The request violates the platform's security policy, e.g. an RP ID that does not match the
    /// calling origin.
    SecurityViolation,
    /// None of the requested algorithms or options are supported.
    NotSupported,
    /// The caller aborted the ceremony.
    Aborted,
    /// Anything else.
    Other,
}

impl AuthenticatorErrorKind {
    /// Map the name of a `DOMException` thrown by `navigator.credentials` to a kind.
    pub fn from_dom_exception(name: &str) -> Self {
        match name {
            "NotAllowedError" => Self::NotAllowed,
            "TimeoutError" => Self::TimedOut,
            "InvalidStateError" => Self::CredentialExcluded,
            "SecurityError" => Self::SecurityViolation,
            "NotSupportedError" | "ConstraintError" => Self::NotSupported,
            "AbortError" => Self::Aborted,
            _ => Self::Other,
        }
    }

    /// Whether the user, rather than the platform or the request, ended the ceremony.
    pub fn is_user_dismissal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::TimedOut | Self::NotAllowed)
    }
}

impl fmt::Display for AuthenticatorErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Cancelled => "the user cancelled the ceremony",
            Self::TimedOut => "the ceremony timed out",
            Self::NotAllowed => "the ceremony was not allowed",
            Self::NoCredentials => "no eligible credential is available",
            Self::CredentialExcluded => "the authenticator holds an excluded credential",
            Self::SecurityViolation => "the request violates the platform security policy",
            Self::NotSupported => "the request is not supported by the platform",
            Self::Aborted => "the ceremony was aborted",
            Self::Other => "the platform authenticator failed",
        })
    }
}
