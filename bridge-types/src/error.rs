use std::fmt;

use serde::Serialize;
use typeshare::typeshare;

/// A `base64url` token could not be decoded into bytes.
///
/// When produced while decoding a structure, [`Self::field`] holds the JSON path of the offending
/// member, for example `publicKey.excludeCredentials[1].id`.
#[typeshare]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error(
    "malformed base64url token in `{}`: invalid {kind} at position {position}",
    .field.as_deref().unwrap_or("<token>")
)]
pub struct MalformedToken {
    /// Path of the member holding the token, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Offset into the token where decoding failed.
    #[typeshare(serialized_as = "u32")]
    pub position: usize,
    /// What was wrong with the token.
    pub kind: MalformedTokenKind,
}

impl MalformedToken {
    pub(crate) fn new(position: usize, kind: MalformedTokenKind) -> Self {
        Self {
            field: None,
            position,
            kind,
        }
    }

    /// Prefix the path of the failing member with `parent`.
    ///
    /// ```
    /// # use bridge_types::Base64Url;
    /// let err = Base64Url::from("A").decode().unwrap_err();
    /// let err = err.within("id").within("allowCredentials[0]");
    /// assert_eq!(err.field.as_deref(), Some("allowCredentials[0].id"));
    /// ```
    #[must_use]
    pub fn within(mut self, parent: &str) -> Self {
        self.field = Some(match self.field.take() {
            Some(field) => format!("{parent}.{field}"),
            None => parent.to_owned(),
        });
        self
    }
}

/// The reason a token failed to decode.
#[typeshare]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MalformedTokenKind {
    /// A character outside of the base64 and base64url alphabets.
    Symbol,
    /// The token cannot be padded to a valid base64 length.
    Length,
    /// Non-zero trailing bits.
    Trailing,
    /// Padding in an unexpected place.
    Padding,
}

impl fmt::Display for MalformedTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            MalformedTokenKind::Symbol => "symbol",
            MalformedTokenKind::Length => "length",
            MalformedTokenKind::Trailing => "trailing bits",
            MalformedTokenKind::Padding => "padding",
        })
    }
}
