//! Item records as returned by the REST backend.
//!
//! Backends disagree on the identifier key: some send `_id`, others `id`.
//! Records are normalized so callers can always read `_id`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PRIMARY_ID_FIELD: &str = "_id";
pub const ALTERNATE_ID_FIELD: &str = "id";

/// Loose truthiness: `null`, `false`, `0` and `""` do not count as an id.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn has_field(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).is_some_and(is_truthy)
}

/// Copy `id` into `_id` when `_id` is missing or falsy and `id` is set.
///
/// Non-objects, objects that already carry a usable `_id`, and objects with
/// neither field are returned unchanged.
pub fn normalize_id(value: Value) -> Value {
    match value {
        Value::Object(mut object) => {
            if !has_field(&object, PRIMARY_ID_FIELD) && has_field(&object, ALTERNATE_ID_FIELD) {
                if let Some(id) = object.get(ALTERNATE_ID_FIELD).cloned() {
                    object.insert(PRIMARY_ID_FIELD.to_string(), id);
                }
            }
            Value::Object(object)
        }
        other => other,
    }
}

/// Loosely typed backend record. All fields are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemRecord(pub Map<String, Value>);

impl ItemRecord {
    /// Normalize and wrap a decoded value; `None` unless it is a JSON object
    pub fn from_value(value: Value) -> Option<Self> {
        match normalize_id(value) {
            Value::Object(object) => Some(Self(object)),
            _ => None,
        }
    }

    /// Normalize every element of a decoded array; anything else is empty.
    ///
    /// Elements that are not JSON objects (`null`, numbers, strings) cannot be
    /// item records and are skipped.
    pub fn list_from_value(value: Option<Value>) -> Vec<Self> {
        match value {
            Some(Value::Array(values)) => values.into_iter().filter_map(Self::from_value).collect(),
            _ => Vec::new(),
        }
    }

    pub fn id(&self) -> Option<&Value> {
        self.0.get(PRIMARY_ID_FIELD).filter(|v| is_truthy(v))
    }

    /// Identifier rendered for URL segments (`"7"`, `"65f0c..."`)
    pub fn id_string(&self) -> Option<String> {
        match self.id()? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn quantity(&self) -> Option<f64> {
        self.0.get("qty").and_then(Value::as_f64)
    }

    pub fn price(&self) -> Option<f64> {
        self.0.get("price").and_then(Value::as_f64)
    }

    pub fn category(&self) -> Option<&str> {
        self.0.get("category").and_then(Value::as_str)
    }

    pub fn date(&self) -> Option<&str> {
        self.0.get("date").and_then(Value::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alternate_id_is_copied() {
        assert_eq!(
            normalize_id(json!({"id": 7, "name": "x"})),
            json!({"id": 7, "name": "x", "_id": 7})
        );
    }

    #[test]
    fn test_primary_id_is_identity() {
        let record = json!({"_id": "abc", "id": 7, "name": "x"});
        assert_eq!(normalize_id(record.clone()), record);

        let only_primary = json!({"_id": 3, "qty": 1});
        assert_eq!(normalize_id(only_primary.clone()), only_primary);
    }

    #[test]
    fn test_falsy_primary_id_takes_alternate() {
        assert_eq!(
            normalize_id(json!({"_id": 0, "id": 5})),
            json!({"_id": 5, "id": 5})
        );
        assert_eq!(
            normalize_id(json!({"_id": "", "id": "abc"})),
            json!({"_id": "abc", "id": "abc"})
        );
        assert_eq!(
            normalize_id(json!({"_id": null, "id": 9, "name": "x"})),
            json!({"_id": 9, "id": 9, "name": "x"})
        );

        // falsy alternate id is not copied
        let record = json!({"id": 0, "name": "cero"});
        assert_eq!(normalize_id(record.clone()), record);
    }

    #[test]
    fn test_missing_ids_pass_through() {
        let record = json!({"name": "sin id"});
        assert_eq!(normalize_id(record.clone()), record);
        assert_eq!(normalize_id(Value::Null), Value::Null);
        assert_eq!(normalize_id(json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn test_record_accessors() {
        let record = ItemRecord::from_value(json!({
            "id": "65f0",
            "name": "Tornillo",
            "qty": 4,
            "price": 1.5,
            "category": "Otros",
            "date": "01-02-2024"
        }))
        .unwrap();

        assert_eq!(record.id_string().as_deref(), Some("65f0"));
        assert_eq!(record.name(), Some("Tornillo"));
        assert_eq!(record.quantity(), Some(4.0));
        assert_eq!(record.price(), Some(1.5));
        assert_eq!(record.category(), Some("Otros"));
        assert_eq!(record.date(), Some("01-02-2024"));
    }

    #[test]
    fn test_list_from_value() {
        let list = ItemRecord::list_from_value(Some(json!([{"id": 1}, null, {"_id": 2}, 3, "x"])));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id(), Some(&json!(1)));
        assert_eq!(list[1].id_string().as_deref(), Some("2"));

        assert!(ItemRecord::list_from_value(Some(json!({"items": []}))).is_empty());
        assert!(ItemRecord::list_from_value(None).is_empty());
    }
}
