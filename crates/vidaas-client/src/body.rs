//! Lenient field extraction from provider bodies
//!
//! Response records deserialize through `serde_json::Value` so that any JSON
//! the provider sends decodes, whatever its shape. A known key is lifted
//! into its typed field only when the value has the expected type; anything
//! else stays in the record's `extra` map. Non-object bodies yield a record
//! with every field empty and the body kept in `raw`.

use serde_json::{Map, Value};

pub(crate) struct Fields(Map<String, Value>);

impl Fields {
    pub(crate) fn new(body: &Value) -> Self {
        Self(body.as_object().cloned().unwrap_or_default())
    }

    fn take<T>(&mut self, key: &str, convert: impl FnOnce(&Value) -> Option<T>) -> Option<T> {
        let value = convert(self.0.get(key)?)?;
        self.0.remove(key);
        Some(value)
    }

    pub(crate) fn string(&mut self, key: &str) -> Option<String> {
        self.take(key, |v| v.as_str().map(str::to_owned))
    }

    /// Accepts a JSON number or a numeric string (`"3600"`).
    pub(crate) fn u64(&mut self, key: &str) -> Option<u64> {
        self.take(key, |v| {
            v.as_u64().or_else(|| v.as_str()?.trim().parse().ok())
        })
    }

    pub(crate) fn list<T: From<Value>>(&mut self, key: &str) -> Option<Vec<T>> {
        self.take(key, |v| {
            v.as_array()
                .map(|items| items.iter().cloned().map(T::from).collect())
        })
    }

    pub(crate) fn into_extra(self) -> Map<String, Value> {
        self.0
    }
}
