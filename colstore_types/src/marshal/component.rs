use anyhow::Result;
use serde_json::Value as JsonValue;
use std::any::Any;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::sync::Arc;

/// A resolved, frozen component type, as stored at each position of a tuple type.
pub type ComponentHandle = Arc<dyn ComponentType>;

/// The capabilities a value type must offer to be used as a tuple component.
///
/// All methods operate on the component's own encoded bytes, i.e. one segment payload.
/// The [`Display`] form is the type's identity: two component types are equal iff they
/// are the same concrete type and render the same.
pub trait ComponentType: Any + Debug + Display + Send + Sync {
    /// Orders two encoded values of this type.
    fn compare(&self, left: &[u8], right: &[u8]) -> Result<Ordering>;

    /// Checks that the bytes are a valid encoding of this type.
    fn validate(&self, _bytes: &[u8]) -> Result<()> {
        Ok(())
    }

    fn to_text(&self, bytes: &[u8]) -> Result<String>;
    fn from_text(&self, text: &str) -> Result<Vec<u8>>;

    fn to_json(&self, bytes: &[u8]) -> Result<JsonValue>;
    fn from_json(&self, json: &JsonValue) -> Result<Vec<u8>>;

    /// Whether values written under `prior` still decode and sort correctly under `self`.
    fn is_compatible_with(&self, prior: &dyn ComponentType) -> bool {
        self.equals(prior)
    }

    /// Whether values written under `prior` still decode under `self`, regardless of order.
    fn is_value_compatible_with(&self, prior: &dyn ComponentType) -> bool {
        self.is_compatible_with(prior)
    }

    /// Whether `check` is this type or appears anywhere inside it.
    fn references(&self, check: &dyn ComponentType) -> bool {
        self.equals(check)
    }

    fn is_multi_cell(&self) -> bool {
        false
    }

    /// Returns the immutable form of this type. Already frozen types return themselves.
    fn freeze(self: Arc<Self>) -> ComponentHandle;

    fn as_any(&self) -> &dyn Any;

    fn equals(&self, other: &dyn ComponentType) -> bool {
        self.as_any().type_id() == other.as_any().type_id() && self.to_string() == other.to_string()
    }
}
