use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type RecordId = i64;

/// Client-supplied fields of a record, kept in the order they were sent.
pub type RecordFields = Map<String, Value>;

/// A stored entry: the store-assigned `id` plus whatever fields the client sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: RecordFields,
}

impl Record {
    /// Builds a record from client fields. A client `id` never survives; the
    /// store-assigned one wins.
    pub fn new(id: RecordId, mut fields: RecordFields) -> Self {
        fields.remove("id");
        Self { id, fields }
    }

    pub fn named(id: RecordId, name: impl Into<String>) -> Self {
        let mut fields = RecordFields::new();
        fields.insert("name".to_string(), Value::String(name.into()));
        Self { id, fields }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
