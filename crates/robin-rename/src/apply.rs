//! File system side of a batch: listing the directory and issuing renames.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use robin_core::{Result, RobinError};

use crate::plan::{plan_renames, RenameInstruction, RenameOptions, RenamePlan};

/// A rename that the file system refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameFailure {
    #[serde(flatten)]
    pub instruction: RenameInstruction,
    pub error: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameReport {
    pub dry_run: bool,
    pub plan: RenamePlan,
    pub renamed: Vec<RenameInstruction>,
    pub failed: Vec<RenameFailure>,
}

/// List the names of the regular files in `dir`, in name order.
///
/// Entries whose names are not valid UTF-8 are skipped with a warning.
///
/// # Errors
///
/// Returns [`RobinError::DirectoryRead`] if the directory cannot be listed.
pub fn list_directory(dir: &Path) -> Result<Vec<String>> {
    let read_error = |source: io::Error| RobinError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!(name = ?raw, "skipping file with non UTF-8 name"),
        }
    }
    names.sort();
    Ok(names)
}

/// Issue every rename in `plan`, in order.
///
/// A failed rename is logged and recorded; the remaining renames still run
/// and earlier ones are kept.
#[must_use]
pub fn apply_plan(dir: &Path, plan: RenamePlan) -> RenameReport {
    let mut renamed = Vec::with_capacity(plan.instructions.len());
    let mut failed = Vec::new();

    for instruction in &plan.instructions {
        match rename_one(dir, instruction) {
            Ok(()) => {
                debug!(old = %instruction.old_name, new = %instruction.new_name, "renamed");
                renamed.push(instruction.clone());
            }
            Err(e) => {
                warn!(
                    old = %instruction.old_name,
                    new = %instruction.new_name,
                    error = %e,
                    "error renaming file"
                );
                failed.push(RenameFailure {
                    instruction: instruction.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    RenameReport {
        dry_run: false,
        plan,
        renamed,
        failed,
    }
}

fn rename_one(dir: &Path, instruction: &RenameInstruction) -> io::Result<()> {
    let from = dir.join(&instruction.old_name);
    let to = dir.join(&instruction.new_name);
    if from != to && to.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", to.display()),
        ));
    }
    fs::rename(&from, &to)
}

/// List, plan, and (unless `options.dry_run`) rename the files in `dir`.
///
/// # Errors
///
/// Returns [`RobinError::DirectoryRead`] if `dir` cannot be listed, or any
/// planning error from [`plan_renames`]. Individual rename failures are
/// reported in [`RenameReport::failed`] instead.
pub fn rename_directory(dir: &Path, options: &RenameOptions) -> Result<RenameReport> {
    let names = list_directory(dir)?;
    debug!(dir = %dir.display(), files = names.len(), "listed directory");

    let plan = plan_renames(&names, options)?;
    info!(
        site = %plan.header.site_name,
        first_floor = plan.first_floor,
        renames = plan.instructions.len(),
        skipped = plan.skipped.len(),
        "planned batch"
    );

    if options.dry_run {
        return Ok(RenameReport {
            dry_run: true,
            plan,
            renamed: Vec::new(),
            failed: Vec::new(),
        });
    }

    let report = apply_plan(dir, plan);
    info!(
        renamed = report.renamed.len(),
        failed = report.failed.len(),
        "batch finished"
    );
    Ok(report)
}
