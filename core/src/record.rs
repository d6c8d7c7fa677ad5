use serde_json::Value;

pub type RecordId = u32;

/// One product from the catalog. Ids are ordinal positions assigned at ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub merchant: Option<String>,
}

impl Record {
    pub fn new(id: RecordId, title: &str, description: &str, merchant: &str) -> Self {
        Self {
            id,
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            merchant: Some(merchant.to_string()),
        }
    }

    /// Build a record from an arbitrary JSON value. Fields that are missing, null
    /// or not strings are left empty instead of failing the whole dataset.
    pub fn from_json(id: RecordId, value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            tracing::debug!(id, "record is not a JSON object; indexing it with no fields");
            return Self { id, ..Self::default() };
        };
        let field = |name: &str| match obj.get(name) {
            Some(Value::String(s)) => Some(s.clone()),
            None | Some(Value::Null) => None,
            Some(other) => {
                let kind = json_kind(other);
                tracing::debug!(id, field = name, kind, "ignoring non-string field");
                None
            }
        };
        Self {
            id,
            title: field("title"),
            description: field("description"),
            merchant: field("merchant"),
        }
    }

    pub fn title_or_placeholder(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => "(untitled)",
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
