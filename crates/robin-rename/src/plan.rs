//! The planning pass: sort, seed, and number a batch of file names.
//!
//! Planning never touches the file system. It either fails before any
//! rename is attempted or yields the full ordered list of renames.

use serde::{Deserialize, Serialize};
use tracing::debug;

use robin_core::filename::{build_name, doc_fragment, is_renamed, parse_header, sort_key};
use robin_core::numeral::{format_floor_with, NumeralStyle};
use robin_core::{FloorHeader, Result, RobinError};

/// Knobs for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOptions {
    /// How floor numerals are rendered in captions.
    pub style: NumeralStyle,
    /// Plan only; leave the directory untouched.
    pub dry_run: bool,
}

/// One file to rename, relative to the batch directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameInstruction {
    pub old_name: String,
    pub new_name: String,
}

/// Everything decided about a batch before the file system is touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlan {
    /// Header of the first file in sort order.
    pub header: FloorHeader,
    /// Floor given to the first renamed file.
    pub first_floor: u32,
    /// Renames in sort order.
    pub instructions: Vec<RenameInstruction>,
    /// Sorted files without a document marker. Not renamed, no floor used.
    pub skipped: Vec<String>,
    /// Files without a sort key.
    pub unsortable: Vec<String>,
    /// Files that already carry a generated caption.
    pub already_renamed: Vec<String>,
}

/// Floor counter for one planning pass. Only ever moves forward.
#[derive(Debug)]
struct FloorCounter(u32);

impl FloorCounter {
    fn current(&self) -> u32 {
        self.0
    }

    fn advance(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

/// Order candidate names by their sort key.
///
/// Names without a sort key are dropped. The sort is stable, so names
/// with equal keys keep their input order.
#[must_use]
pub fn sort_candidates<'a, S: AsRef<str>>(names: &'a [S]) -> Vec<&'a str> {
    let mut keyed: Vec<(&str, &str)> = names
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter_map(|name| sort_key(name).map(|key| (key, name)))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(b.0));
    keyed.into_iter().map(|(_, name)| name).collect()
}

/// Plan the renames for a batch of file names.
///
/// # Errors
///
/// Returns [`RobinError::EmptyBatch`] when no name has a sort key,
/// [`RobinError::Header`] when the first sorted name has no usable header,
/// and [`RobinError::Numeral`] when its floor word cannot be read.
pub fn plan_renames<S: AsRef<str>>(names: &[S], options: &RenameOptions) -> Result<RenamePlan> {
    let mut fresh = Vec::with_capacity(names.len());
    let mut already_renamed = Vec::new();
    let mut unsortable = Vec::new();
    for name in names.iter().map(AsRef::<str>::as_ref) {
        if is_renamed(name) {
            debug!(name, "already renamed");
            already_renamed.push(name.to_string());
        } else if sort_key(name).is_none() {
            debug!(name, "no sort key");
            unsortable.push(name.to_string());
        } else {
            fresh.push(name);
        }
    }

    let sorted = sort_candidates(&fresh);
    let first = sorted.first().ok_or(RobinError::EmptyBatch {
        already_renamed: already_renamed.len(),
    })?;

    let header = parse_header(first)?;
    let first_floor = header.floor_index()?;
    debug!(
        seed = *first,
        site = %header.site_name,
        floor = first_floor,
        "seeded floor counter"
    );

    let mut counter = FloorCounter(first_floor);
    let mut instructions = Vec::with_capacity(sorted.len());
    let mut skipped = Vec::new();
    for name in sorted {
        let Some(fragment) = doc_fragment(name) else {
            debug!(name, "no document marker, skipping");
            skipped.push(name.to_string());
            continue;
        };

        let numeral = format_floor_with(counter.current(), options.style);
        let new_name = build_name(fragment, &header.site_name, &numeral);
        debug!(old = name, new = %new_name, floor = counter.current(), "planned");
        instructions.push(RenameInstruction {
            old_name: name.to_string(),
            new_name,
        });
        counter.advance();
    }

    Ok(RenamePlan {
        header,
        first_floor,
        instructions,
        skipped,
        unsortable,
        already_renamed,
    })
}
