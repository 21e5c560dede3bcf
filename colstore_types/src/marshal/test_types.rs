//! Minimal component types used to exercise the tuple codec.

use crate::marshal::{ComponentHandle, ComponentType};
use anyhow::{anyhow, Result};
use serde_json::Value as JsonValue;
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::str;
use std::sync::Arc;

pub fn int32() -> ComponentHandle {
    Arc::new(Int32Type)
}
pub fn utf8() -> ComponentHandle {
    Arc::new(Utf8Type)
}
pub fn ascii() -> ComponentHandle {
    Arc::new(AsciiType)
}
pub fn bytes() -> ComponentHandle {
    Arc::new(BytesType)
}

pub fn i32_payload(i: i32) -> Vec<u8> {
    i.to_be_bytes().to_vec()
}

/* Int32Type */

#[derive(Debug)]
pub struct Int32Type;

fn decode_i32(bytes: &[u8]) -> Result<i32> {
    let buf = <[u8; 4]>::try_from(bytes)
        .map_err(|_| anyhow!("Expected 4 bytes for an int32, got {}", bytes.len()))?;
    Ok(i32::from_be_bytes(buf))
}

impl fmt::Display for Int32Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int32Type")
    }
}
impl ComponentType for Int32Type {
    fn compare(&self, left: &[u8], right: &[u8]) -> Result<Ordering> {
        Ok(decode_i32(left)?.cmp(&decode_i32(right)?))
    }
    fn validate(&self, bytes: &[u8]) -> Result<()> {
        decode_i32(bytes).map(|_| ())
    }
    fn to_text(&self, bytes: &[u8]) -> Result<String> {
        Ok(decode_i32(bytes)?.to_string())
    }
    fn from_text(&self, text: &str) -> Result<Vec<u8>> {
        Ok(i32_payload(text.trim().parse::<i32>()?))
    }
    fn to_json(&self, bytes: &[u8]) -> Result<JsonValue> {
        Ok(JsonValue::from(decode_i32(bytes)?))
    }
    fn from_json(&self, json: &JsonValue) -> Result<Vec<u8>> {
        match json {
            JsonValue::Number(n) => {
                let i = n
                    .as_i64()
                    .ok_or_else(|| anyhow!("Expected an int32, but got {n}"))?;
                Ok(i32_payload(i32::try_from(i)?))
            }
            JsonValue::String(s) => self.from_text(s),
            other => Err(anyhow!("Expected an int32, but got {other}")),
        }
    }
    fn freeze(self: Arc<Self>) -> ComponentHandle {
        self
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/* Utf8Type and AsciiType */

#[derive(Debug)]
pub struct Utf8Type;

#[derive(Debug)]
pub struct AsciiType;

fn text_from_json(json: &JsonValue) -> Result<Vec<u8>> {
    match json {
        JsonValue::String(s) => Ok(s.as_bytes().to_vec()),
        other => Err(anyhow!("Expected a string, but got {other}")),
    }
}

impl fmt::Display for Utf8Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTF8Type")
    }
}
impl ComponentType for Utf8Type {
    fn compare(&self, left: &[u8], right: &[u8]) -> Result<Ordering> {
        Ok(left.cmp(right))
    }
    fn validate(&self, bytes: &[u8]) -> Result<()> {
        str::from_utf8(bytes)?;
        Ok(())
    }
    fn to_text(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from(str::from_utf8(bytes)?))
    }
    fn from_text(&self, text: &str) -> Result<Vec<u8>> {
        Ok(text.as_bytes().to_vec())
    }
    fn to_json(&self, bytes: &[u8]) -> Result<JsonValue> {
        Ok(JsonValue::from(str::from_utf8(bytes)?))
    }
    fn from_json(&self, json: &JsonValue) -> Result<Vec<u8>> {
        text_from_json(json)
    }
    /// Ascii bytes are valid utf8 and sort the same.
    fn is_compatible_with(&self, prior: &dyn ComponentType) -> bool {
        self.equals(prior) || prior.as_any().is::<AsciiType>()
    }
    fn freeze(self: Arc<Self>) -> ComponentHandle {
        self
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for AsciiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AsciiType")
    }
}
impl ComponentType for AsciiType {
    fn compare(&self, left: &[u8], right: &[u8]) -> Result<Ordering> {
        Ok(left.cmp(right))
    }
    fn validate(&self, bytes: &[u8]) -> Result<()> {
        match bytes.is_ascii() {
            true => Ok(()),
            false => Err(anyhow!("Invalid byte for ascii")),
        }
    }
    fn to_text(&self, bytes: &[u8]) -> Result<String> {
        self.validate(bytes)?;
        Ok(String::from(str::from_utf8(bytes)?))
    }
    fn from_text(&self, text: &str) -> Result<Vec<u8>> {
        self.validate(text.as_bytes())?;
        Ok(text.as_bytes().to_vec())
    }
    fn to_json(&self, bytes: &[u8]) -> Result<JsonValue> {
        Ok(JsonValue::from(self.to_text(bytes)?))
    }
    fn from_json(&self, json: &JsonValue) -> Result<Vec<u8>> {
        let buf = text_from_json(json)?;
        self.validate(&buf)?;
        Ok(buf)
    }
    fn freeze(self: Arc<Self>) -> ComponentHandle {
        self
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/* BytesType */

#[derive(Debug)]
pub struct BytesType;

impl fmt::Display for BytesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BytesType")
    }
}
impl ComponentType for BytesType {
    fn compare(&self, left: &[u8], right: &[u8]) -> Result<Ordering> {
        Ok(left.cmp(right))
    }
    fn to_text(&self, bytes: &[u8]) -> Result<String> {
        Ok(hex::encode(bytes))
    }
    fn from_text(&self, text: &str) -> Result<Vec<u8>> {
        Ok(hex::decode(text)?)
    }
    fn to_json(&self, bytes: &[u8]) -> Result<JsonValue> {
        Ok(JsonValue::from(format!("0x{}", hex::encode(bytes))))
    }
    fn from_json(&self, json: &JsonValue) -> Result<Vec<u8>> {
        match json {
            JsonValue::String(s) => match s.strip_prefix("0x") {
                Some(digits) => Ok(hex::decode(digits)?),
                None => Err(anyhow!("Expected a 0x-prefixed blob, but got {s}")),
            },
            other => Err(anyhow!("Expected a blob string, but got {other}")),
        }
    }
    /// Ascii and utf8 both sort bytewise.
    fn is_compatible_with(&self, prior: &dyn ComponentType) -> bool {
        self.equals(prior) || prior.as_any().is::<AsciiType>() || prior.as_any().is::<Utf8Type>()
    }
    /// Any bytes are valid blobs.
    fn is_value_compatible_with(&self, _prior: &dyn ComponentType) -> bool {
        true
    }
    fn freeze(self: Arc<Self>) -> ComponentHandle {
        self
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/* FreezeProbe */

/// Stands in for a multi-cell type that has a distinct frozen form.
#[derive(Debug)]
pub struct FreezeProbe {
    pub frozen: bool,
}

impl fmt::Display for FreezeProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.frozen {
            true => write!(f, "FreezeProbe(frozen)"),
            false => write!(f, "FreezeProbe(multi-cell)"),
        }
    }
}
impl ComponentType for FreezeProbe {
    fn compare(&self, left: &[u8], right: &[u8]) -> Result<Ordering> {
        Ok(left.cmp(right))
    }
    fn to_text(&self, bytes: &[u8]) -> Result<String> {
        Ok(hex::encode(bytes))
    }
    fn from_text(&self, text: &str) -> Result<Vec<u8>> {
        Ok(hex::decode(text)?)
    }
    fn to_json(&self, bytes: &[u8]) -> Result<JsonValue> {
        Ok(JsonValue::from(hex::encode(bytes)))
    }
    fn from_json(&self, json: &JsonValue) -> Result<Vec<u8>> {
        match json {
            JsonValue::String(s) => self.from_text(s),
            other => Err(anyhow!("Expected a hex string, but got {other}")),
        }
    }
    fn is_multi_cell(&self) -> bool {
        !self.frozen
    }
    fn freeze(self: Arc<Self>) -> ComponentHandle {
        match self.frozen {
            true => self,
            false => Arc::new(FreezeProbe { frozen: true }),
        }
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
