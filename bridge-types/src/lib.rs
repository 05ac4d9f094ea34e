//! # Bridge Types
//!
//! Rust type definitions for carrying [WebAuthn] ceremonies between a Relying Party speaking JSON
//! and a platform authenticator speaking raw bytes.
//!
//! Every option and credential type is generic over the representation of its binary members:
//!
//! * [`Base64Url`] is the text-safe form exchanged with the Relying Party.
//! * [`Bytes`] is the raw form handed to, and returned by, the platform authenticator.
//!
//! The [`encoding`] module holds the codec converting between the two.
//!
//! [WebAuthn]: https://w3c.github.io/webauthn/

mod error;
mod utils;

pub mod webauthn;

// Re-exports
pub use error::{MalformedToken, MalformedTokenKind};
pub use utils::{base64url::Base64Url, bytes::Bytes, encoding};
