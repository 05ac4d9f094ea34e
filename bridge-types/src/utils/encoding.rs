//! Functions for converting between raw bytes and the unpadded `base64url` text used to carry
//! binary WebAuthn members through JSON.

use std::sync::LazyLock;

use data_encoding::{DecodeKind, Encoding, BASE64URL_NOPAD};

use crate::{MalformedToken, MalformedTokenKind};

/// Padding character stripped by [`base64url`] and tolerated by [`try_from_base64url`].
const PADDING: char = '=';

/// A `base64url` decoder which also accepts the standard alphabet's `+` and `/` and does not
/// reject non-zero trailing bits.
static FORGIVING_BASE64URL: LazyLock<Encoding> = LazyLock::new(|| {
    let mut specs = BASE64URL_NOPAD.specification();
    specs.check_trailing_bits = false;
    specs.translate.from.push_str("+/");
    specs.translate.to.push_str("-_");
    // Relaxing a built-in encoding always yields a valid one.
    specs.encoding().unwrap()
});

/// Convert bytes to base64url without padding
pub fn base64url(data: &[u8]) -> String {
    BASE64URL_NOPAD.encode(data)
}

/// Try parsing from base64url with or without padding.
///
/// The input is first padded to a multiple of four characters, after which at most two padding
/// characters may end it. This fails for `4k + 1` characters, with or without padding, and for
/// over-padded input such as `AQID====`. Decoding also fails on characters outside of the base64
/// alphabets.
pub fn try_from_base64url(input: &str) -> Result<Vec<u8>, MalformedToken> {
    let sane_string = input.trim_end_matches(PADDING);
    let missing = (4 - input.len() % 4) % 4;
    let padding = input.len() - sane_string.len() + missing;
    if input.len() % 4 == 1 || padding > 2 {
        return Err(MalformedToken::new(
            sane_string.len(),
            MalformedTokenKind::Length,
        ));
    }

    FORGIVING_BASE64URL
        .decode(sane_string.as_bytes())
        .map_err(|err| MalformedToken::new(err.position, err.kind.into()))
}

impl From<DecodeKind> for MalformedTokenKind {
    fn from(kind: DecodeKind) -> Self {
        match kind {
            DecodeKind::Length => MalformedTokenKind::Length,
            DecodeKind::Symbol => MalformedTokenKind::Symbol,
            DecodeKind::Trailing => MalformedTokenKind::Trailing,
            DecodeKind::Padding => MalformedTokenKind::Padding,
        }
    }
}

#[cfg(test)]
mod tests;
