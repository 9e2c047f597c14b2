use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use crate::errors::GuardError;

/// Serialize with a four-space indent.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, GuardError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| GuardError::Json(serde::ser::Error::custom(e)))
}
