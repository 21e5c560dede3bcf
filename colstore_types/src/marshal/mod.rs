//! # Tuple serialization format
//!
//! A [`TupleValue`] packs the values of a fixed, ordered list of component types
//! (a [`TupleType`]) into one opaque blob.
//!
//! The blob is a bare sequence of segments. There is no overall length prefix,
//! no version tag and no member count: the arity comes from the [`TupleType`]
//! that the reader already holds.
//!
//! ```text
//! struct TupleValue {
//!     segment_0:      Segment,
//!     segment_1:      Segment,
//!     ...
//!     // Trailing segments may be left out entirely.
//! }
//!
//! struct Segment::Present {
//!     len:            i32,    // big-endian, >= 0
//!     payload:        [u8; len],
//! }
//!
//! struct Segment::Null {
//!     len:            i32,    // big-endian, == -1
//!     // (Notice, no payload here.)
//! }
//! ```
//!
//! The payload bytes are opaque to this module. Each one is interpreted by the
//! [`ComponentType`] declared at its position.

mod component;
mod error;
mod lengths;
mod reader;
mod tuple;

#[cfg(test)]
mod test_types;

pub use component::*;
pub use error::*;
pub use lengths::*;
pub use reader::*;
pub use tuple::*;
