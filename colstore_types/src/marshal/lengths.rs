use crate::marshal::MarshalError;
use anyhow::Result;
use derive_more::Deref;
use std::mem;

/// The length word that starts every segment of a tuple blob.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct SegmentLen(i32);
impl SegmentLen {
    /// Marks an absent component. No payload follows it.
    pub const NULL: Self = Self(-1);
    pub const SIZE: usize = mem::size_of::<i32>();

    pub fn from_payload(idx: usize, payload: &[u8]) -> Result<Self> {
        let int = i32::try_from(payload.len()).map_err(|_| MarshalError::OversizedComponent {
            idx,
            len: payload.len(),
        })?;
        Ok(Self(int))
    }
    pub fn from_be_bytes(buf: [u8; mem::size_of::<i32>()]) -> Self {
        Self(i32::from_be_bytes(buf))
    }

    /// Any negative length is read as null, not only the canonical `-1`.
    pub fn is_null(&self) -> bool {
        self.0 < 0
    }
    pub fn payload_len(&self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}
