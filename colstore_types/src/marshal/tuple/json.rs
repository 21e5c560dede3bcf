use crate::marshal::tuple::LOG_TARGET;
use crate::marshal::{MarshalError, TupleType, TupleValue};
use anyhow::Result;
use serde_json::Value as JsonValue;
use std::cmp::Ordering;
use tracing::debug;

impl TupleType {
    /// One array element per declared component. Nulls, and components the blob
    /// does not reach, render as JSON `null`.
    pub fn to_json(&self, value: &[u8]) -> Result<JsonValue> {
        let segments = self.split(value)?;
        let items = self
            .types
            .iter()
            .enumerate()
            .map(|(idx, ctype)| match segments.get(idx).copied().flatten() {
                None => Ok(JsonValue::Null),
                Some(payload) => ctype.to_json(payload),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(JsonValue::Array(items))
    }

    pub fn to_json_string(&self, value: &[u8]) -> Result<String> {
        let json = self.to_json(value)?;
        Ok(serde_json::to_string(&json)?)
    }

    /// Parses a JSON array with exactly one item per component.
    /// A JSON string is first decoded as JSON text.
    ///
    /// A `null` item becomes an explicit `None` term rather than being handed to the component type.
    pub fn from_json_terms(&self, parsed: &JsonValue) -> Result<Vec<Option<Vec<u8>>>> {
        let decoded;
        let parsed = match parsed {
            JsonValue::String(s) => {
                decoded = serde_json::from_str::<JsonValue>(s)?;
                &decoded
            }
            parsed => parsed,
        };

        let items = match parsed {
            JsonValue::Array(items) => items,
            other => {
                return Err(MarshalError::NotAList {
                    kind: json_kind(other),
                    json: other.to_string(),
                }
                .into())
            }
        };

        let (expected, actual) = (self.size(), items.len());
        let arity_err = match actual.cmp(&expected) {
            Ordering::Equal => None,
            Ordering::Greater => Some(MarshalError::ExtraItems {
                expected,
                actual,
                json: parsed.to_string(),
            }),
            Ordering::Less => Some(MarshalError::MissingItems {
                expected,
                actual,
                json: parsed.to_string(),
            }),
        };
        if let Some(err) = arity_err {
            debug!(target: LOG_TARGET, tuple_type = %self, expected, actual, "Rejected tuple JSON");
            return Err(err.into());
        }

        items
            .iter()
            .zip(self.types.iter())
            .map(|(item, ctype)| match item {
                JsonValue::Null => Ok(None),
                item => ctype.from_json(item).map(Some),
            })
            .collect()
    }

    pub fn from_json(&self, parsed: &JsonValue) -> Result<TupleValue> {
        let terms = self.from_json_terms(parsed)?;
        Self::build_value(&terms)
    }
}

fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
