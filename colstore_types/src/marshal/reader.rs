use crate::marshal::{MarshalError, SegmentLen};
use anyhow::Result;

#[derive(PartialEq, Eq, Debug)]
pub enum ReadResult<T> {
    EOF,
    Some(usize, T),
}

/// One decoded segment. `None` is the null sentinel.
pub type Segment<'a> = Option<&'a [u8]>;

/// A cursor over a tuple blob.
///
/// The reader only borrows the blob and keeps its own offset, so any number of
/// readers may walk the same bytes at once.
#[derive(Clone, Debug)]
pub struct SegmentReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SegmentReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// Reads a length word. Running out of bytes exactly at a segment boundary is [`ReadResult::EOF`];
    /// running out inside the word is an error.
    pub fn read_len(&mut self) -> Result<ReadResult<SegmentLen>> {
        if !self.has_remaining() {
            return Ok(ReadResult::EOF);
        }
        let rest = &self.buf[self.pos..];
        let word = rest
            .get(..SegmentLen::SIZE)
            .and_then(|word| <[u8; SegmentLen::SIZE]>::try_from(word).ok())
            .ok_or(MarshalError::TruncatedLength {
                offset: self.pos,
                remaining: rest.len(),
            })?;
        self.pos += SegmentLen::SIZE;
        Ok(ReadResult::Some(SegmentLen::SIZE, SegmentLen::from_be_bytes(word)))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let rest = &self.buf[self.pos..];
        let bytes = rest.get(..len).ok_or(MarshalError::TruncatedPayload {
            offset: self.pos,
            declared: len,
            remaining: rest.len(),
        })?;
        self.pos += len;
        Ok(bytes)
    }

    pub fn deser(&mut self) -> Result<ReadResult<Segment<'a>>> {
        /* len */
        let (mut r_len, len) = match self.read_len()? {
            ReadResult::EOF => return Ok(ReadResult::EOF),
            ReadResult::Some(r_len, len) => (r_len, len),
        };

        /* payload */
        let segment = match len.payload_len() {
            None => None,
            Some(payload_len) => {
                let payload = self.read_bytes(payload_len)?;
                r_len += payload.len();
                Some(payload)
            }
        };

        Ok(ReadResult::Some(r_len, segment))
    }

    /// Consumes the rest of the blob, stopping at the first present segment.
    /// Returns whether every remaining segment was null.
    ///
    /// Only the length words are looked at; payloads are never read.
    pub fn skip_nulls_to_end(&mut self) -> Result<bool> {
        loop {
            match self.read_len()? {
                ReadResult::EOF => return Ok(true),
                ReadResult::Some(_, len) if len.is_null() => continue,
                ReadResult::Some(_, _) => return Ok(false),
            }
        }
    }
}

impl<'a> Iterator for SegmentReader<'a> {
    type Item = Result<Segment<'a>>;
    fn next(&mut self) -> Option<Self::Item> {
        let res_opt_seg = self.deser().map(|read_result| match read_result {
            ReadResult::EOF => None,
            ReadResult::Some(_r_len, segment) => Some(segment),
        });
        res_opt_seg.transpose()
    }
}
