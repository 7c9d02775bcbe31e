//! Scaling pipeline for GROMACS text topologies.
//!
//! The topology is rewritten in two streaming passes. The first pass copies
//! the file into a temporary sibling while renaming the atom type of every
//! selected atom and collecting suffixed copies of the `[ atomtypes ]`
//! definitions. The second pass copies the intermediate back out, appending
//! the suffixed definitions and a `[ nonbond_params ]` table with the scaled
//! epsilon for every pair of suffixed types. Types the renamed atoms never
//! use are left out of the appended block.

pub mod inject;
pub mod scan;

use crate::core::mask::ResidueMask;
use crate::core::naming::format_float;
use crate::pipelines::progress::{Progress, ProgressReporter};
use scan::{RenamedTypeDef, ScanOutcome};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Tuning knobs for the GROMACS pipeline.
#[derive(Debug, Clone)]
pub struct GromacsOptions {
    /// Suffix appended to the type label of every scaled atom. The renamed
    /// types must not collide with labels already present in the topology.
    pub type_suffix: String,
}

impl Default for GromacsOptions {
    fn default() -> Self {
        Self {
            type_suffix: "Y".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum GromacsError {
    #[error("Failed to open topology file '{path}': {source}")]
    Open { path: String, source: io::Error },
    #[error("Failed to create output file '{path}': {source}")]
    Create { path: String, source: io::Error },
    #[error("Topology rewrite failed: {0}")]
    Io(#[from] io::Error),
    #[error(
        "Unsupported combination rule '{found}': only sigma/epsilon topologies (rule 2) can be scaled"
    )]
    UnsupportedCombinationRule { found: String },
    #[error("Missing combination-rule field in the [ defaults ] section (line {line})")]
    MalformedDefaults { line: usize },
    #[error("No [ atomtypes ] definition found for scaled atom types: {labels}")]
    MissingTypeDefinition { labels: String },
}

/// Counts reported back to the caller after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GromacsRunSummary {
    pub type_count: usize,
    pub pair_count: usize,
    pub renamed_atom_count: usize,
}

/// Rewrites `input` into `output` with the scale factor applied to every
/// selected atom's Lennard-Jones epsilon.
#[instrument(skip_all, fields(input = %input.display(), scale))]
pub fn run(
    input: &Path,
    output: &Path,
    scale: f64,
    mask: &ResidueMask,
    options: &GromacsOptions,
    reporter: &ProgressReporter,
) -> Result<GromacsRunSummary, GromacsError> {
    reporter.report(Progress::PhaseStart {
        name: "Renaming scaled atom types",
    });
    let reader = BufReader::new(File::open(input).map_err(|source| GromacsError::Open {
        path: input.display().to_string(),
        source,
    })?);
    let intermediate = NamedTempFile::new()?;
    let mut intermediate_writer = BufWriter::new(intermediate.as_file());
    let outcome = scan::rename_pass(reader, &mut intermediate_writer, mask, &options.type_suffix)?;
    intermediate_writer.flush()?;
    drop(intermediate_writer);
    reporter.report(Progress::PhaseFinish);

    let ScanOutcome {
        candidates,
        used_labels,
        renamed_atom_count,
    } = outcome;
    debug!(
        candidates = candidates.len(),
        used = used_labels.len(),
        "Collected atom type candidates."
    );

    let retained: Vec<RenamedTypeDef> = candidates
        .into_iter()
        .filter(|def| used_labels.contains(&def.base_label))
        .collect();
    let mut missing: Vec<&str> = used_labels
        .iter()
        .filter(|label| !retained.iter().any(|def| &def.base_label == *label))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        missing.sort_unstable();
        return Err(GromacsError::MissingTypeDefinition {
            labels: missing.join(", "),
        });
    }
    info!(
        types = retained.len(),
        atoms = renamed_atom_count,
        "Renamed scaled atom types."
    );

    reporter.report(Progress::PhaseStart {
        name: "Writing scaled topology",
    });
    let intermediate_reader = BufReader::new(intermediate.reopen()?);
    let mut writer =
        BufWriter::new(
            File::create(output).map_err(|source| GromacsError::Create {
                path: output.display().to_string(),
                source,
            })?,
        );
    writeln!(
        writer,
        ";\tModified topology file with stafix scaling factor {} applied on residues: {}",
        format_float(scale),
        mask.describe()
    )?;
    inject::inject_pass(intermediate_reader, &mut writer, &retained, scale)?;
    writer.flush()?;
    reporter.report(Progress::PhaseFinish);

    let type_count = retained.len();
    Ok(GromacsRunSummary {
        type_count,
        pair_count: type_count * (type_count + 1) / 2,
        renamed_atom_count,
    })
}
