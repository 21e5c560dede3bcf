use thiserror::Error;

/// Failures raised by the tuple codec itself.
///
/// Operations return [`anyhow::Result`]; callers that need to tell these apart
/// can `downcast_ref::<MarshalError>()`. Errors coming from a component type's
/// own parser are passed through untouched and are not wrapped here.
#[derive(Error, PartialEq, Eq, Debug)]
pub enum MarshalError {
    #[error("Not enough bytes to read a segment length at offset {offset} ({remaining} remaining)")]
    TruncatedLength { offset: usize, remaining: usize },

    #[error("Not enough bytes to read a segment payload at offset {offset}: declared {declared}, {remaining} remaining")]
    TruncatedPayload {
        offset: usize,
        declared: usize,
        remaining: usize,
    },

    #[error("Invalid remaining data after end of tuple value ({remaining} bytes)")]
    TrailingData { remaining: usize },

    #[error("Component {idx} is {len} bytes long, which does not fit a segment length")]
    OversizedComponent { idx: usize, len: usize },

    #[error("Invalid tuple literal: too many elements. Type {type_name} expects {expected} but got {actual}")]
    TooManyFields {
        type_name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Text of component {idx} cannot be delimited unambiguously: {text:?}")]
    AmbiguousText { idx: usize, text: String },

    #[error("Expected a list representation of a tuple, but got a {kind}: {json}")]
    NotAList { kind: &'static str, json: String },

    #[error("Tuple contains extra items (expected {expected}, got {actual}): {json}")]
    ExtraItems {
        expected: usize,
        actual: usize,
        json: String,
    },

    #[error("Tuple is missing items (expected {expected}, got {actual}): {json}")]
    MissingItems {
        expected: usize,
        actual: usize,
        json: String,
    },
}
