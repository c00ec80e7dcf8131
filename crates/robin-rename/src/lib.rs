//! # robin-rename
//!
//! Batch renaming for a directory of scanned floor plans.
//!
//! A run has two halves. [`plan_renames`] is pure: it orders the files by
//! sort key, reads the starting floor from the first one, and numbers every
//! document that carries the document marker. [`apply_plan`] then issues the
//! renames one at a time; a failure there is isolated to its own file.

pub mod apply;
pub mod plan;

pub use apply::{apply_plan, list_directory, rename_directory, RenameFailure, RenameReport};
pub use plan::{plan_renames, sort_candidates, RenameInstruction, RenameOptions, RenamePlan};
