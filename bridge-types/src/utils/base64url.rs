use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use super::encoding;
use crate::{Bytes, MalformedToken};

/// Binary data as it travels to and from the Relying Party: an unpadded `base64url` string.
///
/// The text is kept exactly as it was received. It is only checked when [decoded](Self::decode),
/// so that a malformed token is reported by the ceremony using it rather than by the JSON parser.
#[typeshare(transparent)]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Base64Url(String);

impl Base64Url {
    /// Encode raw bytes, the result never contains `+`, `/` or `=`.
    pub fn encode(data: &[u8]) -> Self {
        Self(encoding::base64url(data))
    }

    /// Decode the token back into raw bytes.
    pub fn decode(&self) -> Result<Bytes, MalformedToken> {
        encoding::try_from_base64url(&self.0).map(Bytes::from)
    }

    /// Borrow the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take back the token text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for Base64Url {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Base64Url {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Base64Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Base64Url {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Base64Url {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

impl From<&Bytes> for Base64Url {
    fn from(data: &Bytes) -> Self {
        Self::encode(data)
    }
}

impl From<Base64Url> for String {
    fn from(token: Base64Url) -> Self {
        token.0
    }
}

impl TryFrom<&Base64Url> for Bytes {
    type Error = MalformedToken;

    fn try_from(token: &Base64Url) -> Result<Self, Self::Error> {
        token.decode()
    }
}

impl PartialEq<str> for Base64Url {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Base64Url {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
