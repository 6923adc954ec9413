//! Serde representation of optional doubles that keeps NaN and infinities.
//!
//! JSON has no literal for non-finite numbers and serde_json writes them as
//! `null`, which reads back as an absent field. Non-finite values are written
//! as the strings `"NaN"`, `"inf"` and `"-inf"` instead.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(value: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match value {
        None => s.serialize_none(),
        Some(f) if f.is_finite() => s.serialize_some(f),
        Some(f) if f.is_nan() => s.serialize_some("NaN"),
        Some(f) if f.is_sign_positive() => s.serialize_some("inf"),
        Some(_) => s.serialize_some("-inf"),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    match Option::<Repr>::deserialize(d)? {
        None => Ok(None),
        Some(Repr::Number(f)) => Ok(Some(f)),
        Some(Repr::Text(text)) => match text.as_str() {
            "NaN" => Ok(Some(f64::NAN)),
            "inf" => Ok(Some(f64::INFINITY)),
            "-inf" => Ok(Some(f64::NEG_INFINITY)),
            other => Err(D::Error::custom(format!("expected a number, got `{}`", other))),
        },
    }
}
