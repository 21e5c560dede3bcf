use crate::marshal::{MarshalError, ReadResult, Segment, SegmentReader, TupleType};
use anyhow::{Context, Result};

impl TupleType {
    /// Splits a blob into at most [`Self::size`] segment payloads, `None` for nulls.
    ///
    /// A blob that ends early yields fewer payloads than the arity; that is not an error.
    /// Segments past the arity are ignored.
    pub fn split<'a>(&self, value: &'a [u8]) -> Result<Vec<Segment<'a>>> {
        SegmentReader::new(value).take(self.size()).collect()
    }

    /// Checks that a blob is well formed for this shape and that every present
    /// component is accepted by its own type.
    pub fn validate(&self, value: &[u8]) -> Result<()> {
        let mut r = SegmentReader::new(value);
        for (idx, ctype) in self.types.iter().enumerate() {
            match r
                .deser()
                .with_context(|| format!("Malformed component {idx} of {self}"))?
            {
                ReadResult::EOF => return Ok(()),
                ReadResult::Some(_, None) => {}
                ReadResult::Some(_, Some(payload)) => ctype
                    .validate(payload)
                    .with_context(|| format!("Invalid component {idx} of {self}"))?,
            }
        }
        if r.has_remaining() {
            return Err(MarshalError::TrailingData {
                remaining: r.remaining(),
            }
            .into());
        }
        Ok(())
    }
}
