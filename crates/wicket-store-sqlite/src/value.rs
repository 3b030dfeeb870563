//! SQLite-to-JSON value conversion for query rows.

use rusqlite::types::ValueRef;
use serde_json::Value;

/// Maps one SQLite column value to its JSON representation.
///
/// BLOBs do not occur in this schema; they map to null rather than
/// failing the whole row.
pub(crate) fn column_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(t) => Value::String(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(_) => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_maps_to_number() {
        assert_eq!(column_to_json(ValueRef::Integer(7)), Value::from(7));
    }

    #[test]
    fn real_maps_to_number() {
        assert_eq!(column_to_json(ValueRef::Real(1.5)), Value::from(1.5));
    }

    #[test]
    fn text_maps_to_string() {
        assert_eq!(
            column_to_json(ValueRef::Text(b"Kohli")),
            Value::String("Kohli".into())
        );
    }

    #[test]
    fn null_and_blob_map_to_null() {
        assert!(column_to_json(ValueRef::Null).is_null());
        assert!(column_to_json(ValueRef::Blob(&[1, 2])).is_null());
    }

    #[test]
    fn nan_maps_to_null() {
        assert!(column_to_json(ValueRef::Real(f64::NAN)).is_null());
    }
}
