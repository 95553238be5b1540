//!
//! The benchmark comparison data model.
//!

pub mod execution;
pub mod language;
pub mod metadata;
pub mod result;
