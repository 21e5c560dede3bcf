use crate::marshal::tuple::LOG_TARGET;
use crate::marshal::{MarshalError, TupleType, TupleValue};
use anyhow::Result;
use itertools::Itertools;
use tracing::debug;

const DELIM: char = ':';
const NULL_FIELD: &str = "@";

impl TupleType {
    /// Renders each written component with its own text form, joined by `:`.
    /// Nulls render as `@`; a `:` or `@` inside a component's text is escaped with `\`.
    ///
    /// `\` itself is not escaped. A component text with a `\` right before a `:`,
    /// or ending in `\` when another field follows, cannot be split back apart and is rejected.
    pub fn get_string(&self, value: &[u8]) -> Result<String> {
        let segments = self.split(value)?;
        let last_idx = segments.len().saturating_sub(1);
        let fields = segments
            .iter()
            .zip(self.types.iter())
            .enumerate()
            .map(|(idx, (segment, ctype))| match segment {
                None => Ok(String::from(NULL_FIELD)),
                Some(payload) => {
                    let text = ctype.to_text(payload)?;
                    if text.contains("\\:") || (idx < last_idx && text.ends_with('\\')) {
                        return Err(MarshalError::AmbiguousText { idx, text }.into());
                    }
                    Ok(escape(&text))
                }
            });
        itertools::process_results(fields, |mut fields| fields.join(&DELIM.to_string()))
    }

    /// Parses the form produced by [`Self::get_string`].
    ///
    /// Fewer fields than the arity leave the trailing components unwritten.
    pub fn from_string(&self, source: &str) -> Result<TupleValue> {
        let fields = split_fields(source);
        if fields.len() > self.size() {
            debug!(target: LOG_TARGET, tuple_type = %self, source, "Rejected tuple literal");
            return Err(MarshalError::TooManyFields {
                type_name: self.to_string(),
                expected: self.size(),
                actual: fields.len(),
            }
            .into());
        }

        let components = fields
            .iter()
            .zip(self.types.iter())
            .map(|(field, ctype)| {
                if *field == NULL_FIELD {
                    Ok(None)
                } else {
                    ctype.from_text(&unescape(field)).map(Some)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Self::build_value(&components)
    }
}

fn escape(text: &str) -> String {
    text.replace(':', "\\:").replace('@', "\\@")
}
fn unescape(field: &str) -> String {
    field.replace("\\:", ":").replace("\\@", "@")
}

/// Splits on every `:` that is not preceded by an odd run of `\`.
/// The empty string is one empty field.
fn split_fields(source: &str) -> Vec<&str> {
    let mut fields = vec![];
    let mut start = 0;
    let mut backslashes = 0;
    for (i, c) in source.char_indices() {
        match c {
            '\\' => {
                backslashes += 1;
                continue;
            }
            DELIM if backslashes % 2 == 0 => {
                fields.push(&source[start..i]);
                start = i + DELIM.len_utf8();
            }
            _ => {}
        }
        backslashes = 0;
    }
    fields.push(&source[start..]);
    fields
}
