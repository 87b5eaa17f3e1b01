//! Weak links between documents. A link is the target's id, or `null` when unresolved;
//! the target subtree is never copied.

use serde_json::Value;

#[must_use]
pub fn id_or_null(id: Option<u32>) -> Value {
    id.map_or(Value::Null, Value::from)
}

#[must_use]
pub fn ids(ids: &[u32]) -> Value {
    Value::Array(ids.iter().copied().map(Value::from).collect())
}

/// Ids where each entry may be unresolved.
#[must_use]
pub fn ids_or_null(ids: &[Option<u32>]) -> Value {
    Value::Array(ids.iter().copied().map(id_or_null).collect())
}
