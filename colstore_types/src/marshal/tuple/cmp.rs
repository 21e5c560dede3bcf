use crate::marshal::tuple::LOG_TARGET;
use crate::marshal::{ReadResult, SegmentReader, TupleType};
use anyhow::Result;
use std::cmp::Ordering;
use tracing::trace;

impl TupleType {
    /// Orders two blobs component by component, the first component being the most significant.
    ///
    /// - The empty blob sorts before everything else, including a blob of only nulls.
    /// - A null sorts before any present value at the same position. Two nulls are equal.
    /// - Present values are ordered by their component type. The first non-equal component decides.
    /// - When one blob ends first, the other is greater unless all its remaining segments are null.
    ///
    /// Payloads past the deciding component are never read.
    pub fn compare(&self, left: &[u8], right: &[u8]) -> Result<Ordering> {
        if left.is_empty() || right.is_empty() {
            return Ok(left.is_empty().cmp(&right.is_empty()).reverse());
        }

        let mut l = SegmentReader::new(left);
        let mut r = SegmentReader::new(right);

        for ctype in self.types.iter() {
            if !l.has_remaining() || !r.has_remaining() {
                break;
            }
            let (l_len, r_len) = match (l.read_len()?, r.read_len()?) {
                (ReadResult::Some(_, l_len), ReadResult::Some(_, r_len)) => (l_len, r_len),
                _ => break,
            };

            match (l_len.payload_len(), r_len.payload_len()) {
                (None, None) => continue,
                (None, Some(_)) => return Ok(Ordering::Less),
                (Some(_), None) => return Ok(Ordering::Greater),
                (Some(l_n), Some(r_n)) => {
                    let l_val = l.read_bytes(l_n)?;
                    let r_val = r.read_bytes(r_n)?;
                    let ord = ctype.compare(l_val, r_val)?;
                    if ord.is_ne() {
                        return Ok(ord);
                    }
                }
            }
        }

        match (l.has_remaining(), r.has_remaining()) {
            (false, false) => Ok(Ordering::Equal),
            (false, true) => {
                trace!(target: LOG_TARGET, remaining = r.remaining(), "Right side has a suffix");
                let ord = if r.skip_nulls_to_end()? {
                    Ordering::Equal
                } else {
                    Ordering::Less
                };
                Ok(ord)
            }
            // Also reached when both sides run past the arity; the left suffix decides.
            (true, _) => {
                trace!(target: LOG_TARGET, remaining = l.remaining(), "Left side has a suffix");
                let ord = if l.skip_nulls_to_end()? {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                };
                Ok(ord)
            }
        }
    }
}
