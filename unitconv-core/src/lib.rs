//! unitconv Core - Fundamental types
//!
//! This crate provides the types shared by the conversion engine and its
//! callers:
//! - `ConvertError`: what went wrong and which input caused it
//! - `ErrorReport`: serializable error for JSON output

mod error;

pub use error::{codes, ConvertError, Direction, ErrorReport, Lookup};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{ConvertError, Direction, ErrorReport, Lookup};
}
