use crate::marshal::{SegmentLen, TupleType, TupleValue};
use anyhow::Result;
use derive_more::Deref;
use std::io::Write;

#[derive(Deref, PartialEq, Eq, Debug)]
pub struct WriteLen(usize);

impl TupleType {
    /// Encodes component payloads, `None` being an absent component, into one blob.
    ///
    /// The payloads are copied verbatim. The arity is not checked against any shape.
    pub fn build_value<B: AsRef<[u8]>>(components: &[Option<B>]) -> Result<TupleValue> {
        let tot_len: usize = components
            .iter()
            .map(|c| SegmentLen::SIZE + c.as_ref().map_or(0, |payload| payload.as_ref().len()))
            .sum();
        let mut buf = Vec::with_capacity(tot_len);
        Self::ser_components(components, &mut buf)?;
        Ok(TupleValue::from(buf))
    }

    pub fn ser_components<B: AsRef<[u8]>>(
        components: &[Option<B>],
        w: &mut impl Write,
    ) -> Result<WriteLen> {
        let mut w_len = 0;
        for (idx, component) in components.iter().enumerate() {
            match component {
                None => {
                    w.write_all(&SegmentLen::NULL.to_be_bytes())?;
                    w_len += SegmentLen::SIZE;
                }
                Some(payload) => {
                    let payload = payload.as_ref();

                    /* len */
                    let len = SegmentLen::from_payload(idx, payload)?;
                    w.write_all(&len.to_be_bytes())?;
                    w_len += SegmentLen::SIZE;

                    /* payload */
                    w.write_all(payload)?;
                    w_len += payload.len();
                }
            }
        }
        Ok(WriteLen(w_len))
    }
}
