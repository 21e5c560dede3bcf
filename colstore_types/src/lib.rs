//! Typed value codecs shared by the column store's storage engine.
//!
//! The [`marshal`] module packs heterogeneous component values into opaque,
//! comparable byte blobs.

pub mod marshal;
