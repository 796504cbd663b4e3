use serde::{Serialize, Deserialize};
use std::borrow::Cow;
use std::collections::HashMap;

/// Internal document key. Dense, assigned in insertion order, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocKey(pub u32);

impl DocKey {
    pub fn new(key: u32) -> Self {
        DocKey(key)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for DocKey {
    fn from(key: u32) -> Self {
        DocKey(key)
    }
}

/// Position of a field in registration order.
pub type FieldIndex = usize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Boolean(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(text) => Cow::Borrowed(text),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Boolean(b) => Cow::Owned(b.to_string()),
        }
    }
}

/// Simple field map usable as an indexable document.
/// The engine never keeps documents; this is only an input shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub fields: HashMap<String, FieldValue>,
}

impl Document {
    pub fn new() -> Self {
        Document {
            fields: HashMap::new(),
        }
    }

    pub fn with_text(mut self, name: &str, text: &str) -> Self {
        self.fields.insert(name.to_string(), FieldValue::Text(text.to_string()));
        self
    }

    pub fn add_field(&mut self, name: String, value: FieldValue) {
        self.fields.insert(name, value);
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}

/// Read access to a document's fields by name, used by the default field getter.
pub trait FieldSource {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl FieldSource for Document {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.fields.get(name).map(FieldValue::as_text)
    }
}

impl FieldSource for HashMap<String, String> {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|s| Cow::Borrowed(s.as_str()))
    }
}

impl FieldSource for serde_json::Value {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.get(name)? {
            serde_json::Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            serde_json::Value::Null => None,
            serde_json::Value::Number(n) => Some(Cow::Owned(n.to_string())),
            serde_json::Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            serde_json::Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect();
                Some(Cow::Owned(parts.join(" ")))
            }
            serde_json::Value::Object(_) => None,
        }
    }
}
