//! Amber pipeline: drives ParmEd twice, first to list the atoms the mask
//! selects, then to install the new LJ types and the combined, scaled pair
//! parameters and write the output topology. ParmEd is an opaque
//! collaborator; both calls feed a generated script on stdin.

pub mod details;
pub mod parmed;
pub mod script;

use crate::core::mask::ResidueMask;
use crate::pipelines::progress::{Progress, ProgressReporter};
use details::DetailListingError;
use parmed::StdoutMode;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct AmberOptions {
    /// Name or path of the ParmEd executable.
    pub executable: String,
}

impl Default for AmberOptions {
    fn default() -> Self {
        Self {
            executable: "parmed".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AmberError {
    #[error("Cannot find the '{name}' executable")]
    ExecutableNotFound { name: String },
    #[error("Failed to run '{executable}': {source}")]
    Tool {
        executable: String,
        source: std::io::Error,
    },
    #[error("ParmEd returned an unusable detail listing: {source}{}", stderr_note(.stderr))]
    DetailListing {
        source: DetailListingError,
        stderr: String,
    },
    #[error("Failed to remove the stale output file '{path}': {source}")]
    RemoveOutput {
        path: String,
        source: std::io::Error,
    },
    #[error("ParmEd did not produce the output topology '{path}'{}", stderr_note(.stderr))]
    OutputMissing { path: String, stderr: String },
}

fn stderr_note(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(" (stderr: {trimmed})")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmberRunSummary {
    pub group_count: usize,
    pub pair_count: usize,
}

/// Runs the full pipeline against `input`, writing the scaled topology to
/// `output`. The caller has already validated `input` and derived `output`.
pub fn run(
    input: &Path,
    output: &Path,
    scale: f64,
    mask: &ResidueMask,
    options: &AmberOptions,
    reporter: &ProgressReporter,
) -> Result<AmberRunSummary, AmberError> {
    let executable = parmed::resolve_executable(&options.executable)?;
    debug!(executable = %executable.display(), "Resolved ParmEd executable.");

    reporter.report(Progress::PhaseStart {
        name: "Reading atom details",
    });
    let listing_run = parmed::run_script(
        &executable,
        input,
        &script::details_script(mask),
        StdoutMode::Capture,
    )?;
    let groups =
        details::collect_scaled_groups(&listing_run.stdout).map_err(|source| {
            AmberError::DetailListing {
                source,
                stderr: listing_run.stderr.clone(),
            }
        })?;
    reporter.report(Progress::PhaseFinish);
    info!(
        groups = groups.len(),
        atoms = groups.iter().map(|g| g.atom_ids.len()).sum::<usize>(),
        "Collected scaled atom-type groups."
    );

    // ParmEd refuses to overwrite an existing topology.
    if output.exists() {
        std::fs::remove_file(output).map_err(|source| AmberError::RemoveOutput {
            path: output.display().to_string(),
            source,
        })?;
    }

    reporter.report(Progress::PhaseStart {
        name: "Applying scaled parameters",
    });
    let scaling = script::scaling_script(&groups, scale, output);
    let apply_run = parmed::run_script(&executable, input, &scaling, StdoutMode::Discard)?;
    if !output.exists() {
        return Err(AmberError::OutputMissing {
            path: output.display().to_string(),
            stderr: apply_run.stderr,
        });
    }
    reporter.report(Progress::PhaseFinish);

    let pair_count = groups.len() * (groups.len() + 1) / 2;
    Ok(AmberRunSummary {
        group_count: groups.len(),
        pair_count,
    })
}
