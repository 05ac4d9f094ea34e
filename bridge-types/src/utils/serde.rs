//! Utilities to be used in serde derives for more robust (de)serializations.

use serde::{
    de::{Error, Unexpected},
    Deserialize, Deserializer,
};

/// Some Relying Parties send numeric members such as `timeout` as strings or floats.
///
/// This accepts integers, floats (truncated) and strings holding either, mapping them to `u32`.
/// Values that do not fit, such as negative numbers or text, fail deserialization rather than
/// being dropped from the request.
pub(crate) fn maybe_stringified<'de, D>(de: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNum {
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Str(String),
    }

    fn from_float(value: f64) -> Option<u32> {
        if value.is_finite() && value >= 0.0 && value < 4_294_967_296.0 {
            // In range, so only the fractional part is dropped.
            #[allow(clippy::as_conversions)]
            let truncated = value as u32;
            Some(truncated)
        } else {
            None
        }
    }

    let Some(value) = Option::<StringOrNum>::deserialize(de)? else {
        return Ok(None);
    };
    let parsed = match &value {
        StringOrNum::Unsigned(value) => u32::try_from(*value).ok(),
        StringOrNum::Signed(value) => u32::try_from(*value).ok(),
        StringOrNum::Float(value) => from_float(*value),
        StringOrNum::Str(value) => value
            .trim()
            .parse::<u32>()
            .ok()
            .or_else(|| value.trim().parse::<f64>().ok().and_then(from_float)),
    };
    parsed.map(Some).ok_or_else(|| {
        let unexpected = match &value {
            StringOrNum::Unsigned(value) => Unexpected::Unsigned(*value),
            StringOrNum::Signed(value) => Unexpected::Signed(*value),
            StringOrNum::Float(value) => Unexpected::Float(*value),
            StringOrNum::Str(value) => Unexpected::Str(value),
        };
        D::Error::invalid_value(unexpected, &"a number of milliseconds fitting in 32 bits")
    })
}

#[cfg(test)]
mod tests;
