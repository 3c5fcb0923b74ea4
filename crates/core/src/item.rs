//! Shopping item record.
//!
//! Items are schema-free JSON objects. By convention they carry a `name`
//! (the lookup key) and a `price`, but any other fields a client sends are
//! kept and echoed back untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::NotAnObject;

/// Field holding the lookup key.
pub const NAME_FIELD: &str = "name";

/// A single shopping item: an ordered map of field name to JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    /// An item with no fields.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// The item's lookup key.
    ///
    /// Only a string `name` counts; an item whose `name` is missing or holds
    /// any other JSON type has no name and is unreachable by name lookups.
    pub fn name(&self) -> Option<&str> {
        self.0.get(NAME_FIELD).and_then(Value::as_str)
    }

    /// Exact, case-sensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        self.name() == Some(name)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shallow merge: every field of `patch` overwrites the field of the same
    /// name, fields absent from `patch` are kept. Nested objects are replaced
    /// whole, not merged.
    pub fn merge(&mut self, patch: Item) {
        for (field, value) in patch.0 {
            self.0.insert(field, value);
        }
    }
}

impl From<Map<String, Value>> for Item {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl From<Item> for Value {
    fn from(item: Item) -> Self {
        Value::Object(item.0)
    }
}

impl TryFrom<Value> for Item {
    type Error = NotAnObject;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            Value::Null => Err(NotAnObject("null")),
            Value::Bool(_) => Err(NotAnObject("boolean")),
            Value::Number(_) => Err(NotAnObject("number")),
            Value::String(_) => Err(NotAnObject("string")),
            Value::Array(_) => Err(NotAnObject("array")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Item {
        Item::try_from(value).unwrap()
    }

    #[test]
    fn name_is_read_from_string_field() {
        let popsicle = item(json!({ "name": "popsicle", "price": 1.45 }));
        assert_eq!(popsicle.name(), Some("popsicle"));
        assert!(popsicle.has_name("popsicle"));
        assert!(!popsicle.has_name("Popsicle"));
    }

    #[test]
    fn non_string_name_is_not_a_name() {
        assert_eq!(item(json!({ "name": 42 })).name(), None);
        assert_eq!(item(json!({ "name": null })).name(), None);
        assert_eq!(item(json!({ "price": 1.0 })).name(), None);
        assert!(!item(json!({ "name": 42 })).has_name("42"));
    }

    #[test]
    fn merge_overwrites_present_fields_and_keeps_the_rest() {
        let mut current = item(json!({ "name": "popsicle", "price": 1.45, "qty": 3 }));
        current.merge(item(json!({ "price": 2.45, "color": "red" })));

        assert_eq!(
            Value::from(current),
            json!({ "name": "popsicle", "price": 2.45, "qty": 3, "color": "red" })
        );
    }

    #[test]
    fn merge_can_rename() {
        let mut renamed = item(json!({ "name": "popsicle", "price": 1.45 }));
        renamed.merge(item(json!({ "name": "new popsicle" })));
        assert_eq!(renamed.name(), Some("new popsicle"));
        assert_eq!(renamed.get("price"), Some(&json!(1.45)));
    }

    #[test]
    fn merge_is_shallow() {
        let mut merged = item(json!({ "name": "a", "meta": { "x": 1, "y": 2 } }));
        merged.merge(item(json!({ "meta": { "x": 9 } })));
        assert_eq!(merged.get("meta"), Some(&json!({ "x": 9 })));
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let original = item(json!({ "name": "popsicle", "price": 1.45 }));
        let mut patched = original.clone();
        patched.merge(Item::new());
        assert_eq!(patched, original);
    }

    #[test]
    fn only_objects_convert_into_items() {
        assert_eq!(Item::try_from(json!([1, 2])), Err(NotAnObject("array")));
        assert_eq!(Item::try_from(json!("x")), Err(NotAnObject("string")));
        assert_eq!(Item::try_from(Value::Null), Err(NotAnObject("null")));
        assert!(Item::try_from(json!({})).unwrap().is_empty());
    }

    #[test]
    fn serializes_transparently_in_field_order() {
        let popsicle = item(json!({ "price": 1.45, "name": "popsicle" }));
        assert_eq!(
            serde_json::to_string(&popsicle).unwrap(),
            r#"{"price":1.45,"name":"popsicle"}"#
        );
    }
}
