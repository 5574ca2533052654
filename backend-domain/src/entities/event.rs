// Webhook event entity
// The payload as received, plus the column projection applied when it is stored

use serde_json::Value;

use crate::error::PayloadError;

/// A validated webhook body and its canonical JSON text.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookPayload {
    value: Value,
    canonical: String,
}

impl WebhookPayload {
    /// Parses a raw request body. Bodies that are not JSON, or that decode to a
    /// falsy value (`null`, `false`, `0`, `""`, `[]`, `{}`), are rejected.
    pub fn from_slice(body: &[u8]) -> Result<Self, PayloadError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|err| PayloadError::Malformed(err.to_string()))?;
        if !is_usable(&value) {
            return Err(PayloadError::Empty);
        }
        let canonical = value.to_string();
        Ok(Self { value, canonical })
    }

    pub fn as_json(&self) -> &str {
        &self.canonical
    }

    /// Value at a nested object path, if every segment resolves.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.value, |current, segment| current.get(*segment))
    }
}

fn is_usable(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// How a persisted column is derived from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// Fresh unique identifier generated by the warehouse at insert time.
    GeneratedId,
    /// Nested value read as text; missing or `null` becomes NULL.
    Text(&'static [&'static str]),
    /// Nested value read as text and parsed as a timestamp; unparseable becomes NULL.
    Timestamp(&'static [&'static str]),
    /// The whole payload, verbatim.
    RawPayload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventColumn {
    pub name: &'static str,
    pub source: ColumnSource,
}

pub const RAW_PAYLOAD_COLUMN: &str = "RAW_PAYLOAD";

pub const EVENT_COLUMNS: [EventColumn; 7] = [
    EventColumn {
        name: "EVENT_ID",
        source: ColumnSource::GeneratedId,
    },
    EventColumn {
        name: "EVENT_KEY",
        source: ColumnSource::Text(&["eventKey"]),
    },
    EventColumn {
        name: "USER_ID",
        source: ColumnSource::Text(&["user", "id"]),
    },
    EventColumn {
        name: "USER_NAME",
        source: ColumnSource::Text(&["user", "name"]),
    },
    EventColumn {
        name: "USER_EMAIL",
        source: ColumnSource::Text(&["user", "email"]),
    },
    EventColumn {
        name: "USER_CREATED_AT",
        source: ColumnSource::Timestamp(&["user", "createdAt"]),
    },
    EventColumn {
        name: RAW_PAYLOAD_COLUMN,
        source: ColumnSource::RawPayload,
    },
];
