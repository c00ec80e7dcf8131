//! # robin-core
//!
//! Core types for robin, the floor-plan batch renamer.
//!
//! - [`numeral`] — reading and writing Chinese floor numerals
//! - [`filename`] — sort key, header, and document fragment extraction
//! - Error hierarchy ([`RobinError`], [`NumeralError`], [`HeaderError`])

pub mod error;
pub mod filename;
pub mod numeral;

pub use error::{HeaderError, NumeralError, Result, RobinError};
pub use filename::{build_name, doc_fragment, is_renamed, parse_header, sort_key, FloorHeader};
pub use numeral::{format_floor, format_floor_with, parse_floor_word, NumeralStyle};
