use crate::core::mask::ResidueMask;
use crate::core::naming::stafix_output_path;
use crate::pipelines::amber::{self, AmberError, AmberOptions};
use crate::pipelines::gromacs::{self, GromacsError, GromacsOptions};
use crate::pipelines::progress::ProgressReporter;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("Topology file '{path}' does not exist")]
    InputNotFound { path: String },
    #[error(transparent)]
    Amber(#[from] AmberError),
    #[error(transparent)]
    Gromacs(#[from] GromacsError),
}

/// Everything a caller needs to report a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleReport {
    /// Where the scaled topology was written, derived from the input name.
    pub output_path: PathBuf,
    /// Human-readable form of the residue mask.
    pub scaled_residues: String,
    /// Distinct Lennard-Jones types that received scaled parameters.
    pub type_count: usize,
    /// Type pairs written, self-pairs included.
    pub pair_count: usize,
}

/// Scales an Amber binary topology by driving ParmEd.
#[instrument(skip_all, name = "amber_scaling", fields(topology = %topology.display()))]
pub fn scale_amber_topology(
    topology: &Path,
    scale: f64,
    mask: &ResidueMask,
    options: &AmberOptions,
    reporter: &ProgressReporter,
) -> Result<ScaleReport, ScaleError> {
    let output = prepare_output_path(topology, scale)?;
    info!(scale, output = %output.display(), "Scaling Amber topology via ParmEd.");

    let summary = amber::run(topology, &output, scale, mask, options, reporter)?;

    info!(
        groups = summary.group_count,
        pairs = summary.pair_count,
        "Amber scaling complete."
    );
    Ok(ScaleReport {
        output_path: output,
        scaled_residues: mask.describe(),
        type_count: summary.group_count,
        pair_count: summary.pair_count,
    })
}

/// Scales a GROMACS text topology by rewriting the file directly.
#[instrument(skip_all, name = "gromacs_scaling", fields(topology = %topology.display()))]
pub fn scale_gromacs_topology(
    topology: &Path,
    scale: f64,
    mask: &ResidueMask,
    options: &GromacsOptions,
    reporter: &ProgressReporter,
) -> Result<ScaleReport, ScaleError> {
    let output = prepare_output_path(topology, scale)?;
    info!(scale, output = %output.display(), "Scaling GROMACS topology.");

    let summary = gromacs::run(topology, &output, scale, mask, options, reporter)?;

    info!(
        types = summary.type_count,
        pairs = summary.pair_count,
        atoms = summary.renamed_atom_count,
        "GROMACS scaling complete."
    );
    Ok(ScaleReport {
        output_path: output,
        scaled_residues: mask.describe(),
        type_count: summary.type_count,
        pair_count: summary.pair_count,
    })
}

fn prepare_output_path(topology: &Path, scale: f64) -> Result<PathBuf, ScaleError> {
    if !topology.is_file() {
        return Err(ScaleError::InputNotFound {
            path: topology.display().to_string(),
        });
    }
    Ok(stafix_output_path(topology, scale))
}
