use crate::marshal::{ComponentHandle, ComponentType};
use anyhow::Result;
use derive_more::{Deref, From, Into};
use itertools::Itertools;
use serde_json::Value as JsonValue;
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

mod cmp;
mod compat;
mod deser;
mod json;
mod ser;
mod text;


pub use ser::WriteLen;

pub(crate) const LOG_TARGET: &str = "colstore::marshal";

/// An encoded tuple. See the [module docs](crate::marshal) for the layout.
///
/// The empty blob is the entirely absent tuple, which sorts before every other value.
#[derive(From, Into, Deref, PartialEq, Eq, Hash, Clone, Default, Debug)]
pub struct TupleValue(Vec<u8>);
impl TupleValue {
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// A fixed, ordered list of component types, and the codec for values of that shape.
///
/// A [`TupleType`] is itself a [`ComponentType`], so tuples may nest.
#[derive(Clone, Debug)]
pub struct TupleType {
    types: Vec<ComponentHandle>,
}

impl TupleType {
    /// Every component type is frozen before it is kept.
    pub fn new(types: Vec<ComponentHandle>) -> Self {
        let types = types.into_iter().map(|t| t.freeze()).collect::<Vec<_>>();
        let moi = Self { types };
        debug!(target: LOG_TARGET, arity = moi.size(), tuple_type = %moi, "Tuple type built");
        moi
    }

    pub fn size(&self) -> usize {
        self.types.len()
    }
    pub fn component(&self, idx: usize) -> Option<&ComponentHandle> {
        self.types.get(idx)
    }
    pub fn components(&self) -> &[ComponentHandle] {
        &self.types
    }
}

impl fmt::Display for TupleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TupleType({})", self.types.iter().join(","))
    }
}

/* Identity is the ordered component list. */
impl PartialEq for TupleType {
    fn eq(&self, other: &TupleType) -> bool {
        self.size() == other.size()
            && self
                .types
                .iter()
                .zip(other.types.iter())
                .all(|(slf, oth)| slf.equals(oth.as_ref()))
    }
}
impl Eq for TupleType {}
impl Hash for TupleType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        for t in self.types.iter() {
            t.to_string().hash(state);
        }
    }
}

/* TupleType nests as a component of other tuples. */
impl ComponentType for TupleType {
    fn compare(&self, left: &[u8], right: &[u8]) -> Result<Ordering> {
        TupleType::compare(self, left, right)
    }
    fn validate(&self, bytes: &[u8]) -> Result<()> {
        TupleType::validate(self, bytes)
    }
    fn to_text(&self, bytes: &[u8]) -> Result<String> {
        self.get_string(bytes)
    }
    fn from_text(&self, text: &str) -> Result<Vec<u8>> {
        self.from_string(text).map(TupleValue::into_bytes)
    }
    fn to_json(&self, bytes: &[u8]) -> Result<JsonValue> {
        TupleType::to_json(self, bytes)
    }
    fn from_json(&self, json: &JsonValue) -> Result<Vec<u8>> {
        TupleType::from_json(self, json).map(TupleValue::into_bytes)
    }
    fn is_compatible_with(&self, prior: &dyn ComponentType) -> bool {
        TupleType::is_compatible_with(self, prior)
    }
    fn is_value_compatible_with(&self, prior: &dyn ComponentType) -> bool {
        TupleType::is_value_compatible_with(self, prior)
    }
    fn references(&self, check: &dyn ComponentType) -> bool {
        TupleType::references(self, check)
    }
    fn freeze(self: Arc<Self>) -> ComponentHandle {
        self
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
