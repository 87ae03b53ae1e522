//! Review queue items.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Helper to deserialize id as either string or integer
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// A single item in the review queue.
///
/// Only `id` is interpreted by the dashboard itself; every other field is
/// kept verbatim in `payload` and handed to the item card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identity, used as the render key
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Remaining fields, untouched
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Item {
    /// Create an item with an empty payload.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            payload: Map::new(),
        }
    }

    /// Builder-style setter for a payload field.
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.payload.insert(key.to_string(), value.into());
        self
    }

    /// Raw access to a payload field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    fn str_field(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|k| self.payload.get(*k))
            .find_map(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// Headline for the card: `title`, then `content`, then the id.
    pub fn title(&self) -> &str {
        self.str_field(&["title", "content"]).unwrap_or(&self.id)
    }

    /// Review status as reported by the backend (e.g. `pending_review`).
    pub fn status(&self) -> Option<&str> {
        self.str_field(&["status"])
    }

    /// Risk score in `[0, 1]`, accepting either snake or camel case.
    pub fn risk_score(&self) -> Option<f64> {
        ["risk_score", "riskScore"]
            .iter()
            .filter_map(|k| self.payload.get(*k))
            .find_map(Value::as_f64)
    }

    /// Location label, if any.
    pub fn location(&self) -> Option<&str> {
        self.str_field(&["location"])
    }

    /// Origin of the item (platform, feed name).
    pub fn source(&self) -> Option<&str> {
        self.str_field(&["source"])
    }
}

/// Response body of `GET /api/items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<Item>,
}

impl ItemsResponse {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

/// Query parameters for `GET /api/items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ItemsParams {
    /// Restrict to a single review status
    pub status: Option<String>,
}

impl ItemsParams {
    /// No constraint: every item the backend is willing to return.
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// Restrict to one status.
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
        }
    }

    /// Render as a URL query string, including the leading `?`, or empty.
    pub fn query_string(&self) -> String {
        match &self.status {
            Some(status) => format!("?status={}", urlencoding::encode(status)),
            None => String::new(),
        }
    }
}
