pub(crate) mod base64url;
pub(crate) mod bytes;
pub(crate) mod serde;

pub mod encoding;
