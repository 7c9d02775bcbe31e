use super::GromacsError;
use crate::core::mask::ResidueMask;
use crate::core::nonbonded::LjParams;
use crate::core::selection::is_scaled;
use std::collections::HashSet;
use std::io::{BufRead, Write};

/// An `[ atomtypes ]` definition with the marker suffix applied to its
/// label; the remaining fields are carried over unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct RenamedTypeDef {
    pub base_label: String,
    pub label: String,
    pub line: String,
    pub params: LjParams,
}

#[derive(Debug)]
pub struct ScanOutcome {
    /// Candidate renamed definitions for every parseable type row,
    /// deduplicated by label in first-seen order.
    pub candidates: Vec<RenamedTypeDef>,
    /// Base labels actually assigned to at least one selected atom.
    pub used_labels: HashSet<String>,
    pub renamed_atom_count: usize,
}

/// First pass: copies the topology while renaming the type of every
/// selected atom, validating the combination rule and collecting the type
/// definitions the second pass may need. Malformed table rows pass through
/// unchanged.
pub fn rename_pass(
    reader: impl BufRead,
    mut writer: impl Write,
    mask: &ResidueMask,
    suffix: &str,
) -> Result<ScanOutcome, GromacsError> {
    let mut in_defaults = false;
    let mut in_atomtypes = false;
    let mut in_atoms = false;

    let mut seen_labels: HashSet<String> = HashSet::new();
    let mut candidates: Vec<RenamedTypeDef> = Vec::new();
    let mut used_labels: HashSet<String> = HashSet::new();
    let mut renamed_atom_count = 0usize;

    for (line_index, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line_number = line_index + 1;

        if in_defaults && !line.contains(';') {
            let rule = line
                .split_whitespace()
                .nth(1)
                .ok_or(GromacsError::MalformedDefaults { line: line_number })?;
            if rule != "2" {
                return Err(GromacsError::UnsupportedCombinationRule {
                    found: rule.to_string(),
                });
            }
            writeln!(writer, "{line}")?;
            in_defaults = false;
        } else if line.contains("[ defaults ]") {
            in_defaults = true;
            writeln!(writer, "{line}")?;
        } else if in_atomtypes && line.starts_with('[') {
            in_atomtypes = false;
            writeln!(writer, "{line}")?;
        } else if in_atomtypes {
            if !line.starts_with(';') {
                if let Some(candidate) = renamed_candidate(&line, suffix) {
                    if seen_labels.insert(candidate.base_label.clone()) {
                        candidates.push(candidate);
                    }
                }
            }
            writeln!(writer, "{line}")?;
        } else if line.contains("[ atomtypes ]") {
            in_atomtypes = true;
            writeln!(writer, "{line}")?;
        } else if in_atoms && !line.starts_with(';') {
            if line.starts_with('[') {
                in_atoms = false;
                writeln!(writer, "{line}")?;
            } else if let Some(row) = parse_atom_row(&line) {
                if mask.contains(row.residue_number) && is_scaled(row.residue_name, row.atom_name)
                {
                    used_labels.insert(row.type_label.to_string());
                    match rename_type_in_row(&line, row.type_label, suffix) {
                        Some(renamed) => {
                            writeln!(writer, "{renamed}")?;
                            renamed_atom_count += 1;
                        }
                        None => writeln!(writer, "{line}")?,
                    }
                } else {
                    writeln!(writer, "{line}")?;
                }
            } else {
                writeln!(writer, "{line}")?;
            }
        } else if line.contains("[ atoms ]") {
            in_atoms = true;
            writeln!(writer, "{line}")?;
        } else {
            writeln!(writer, "{line}")?;
        }
    }

    Ok(ScanOutcome {
        candidates,
        used_labels,
        renamed_atom_count,
    })
}

/// Builds the suffixed definition for one type row. Rows whose sigma or
/// epsilon field is missing or non-numeric yield no candidate; the type can
/// then only surface later as a missing definition if a scaled atom uses it.
fn renamed_candidate(line: &str, suffix: &str) -> Option<RenamedTypeDef> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let base_label = *tokens.first()?;
    if tokens.len() < 7 {
        return None;
    }
    let sigma: f64 = tokens[5].parse().ok()?;
    let epsilon: f64 = tokens[6].parse().ok()?;

    let position = line.find(base_label)?;
    let rest = &line[position + base_label.len()..];
    // One character of the following whitespace run absorbs the suffix so
    // the remaining columns keep their alignment.
    let mut rest_chars = rest.chars();
    rest_chars.next();

    let label = format!("{base_label}{suffix}");
    Some(RenamedTypeDef {
        base_label: base_label.to_string(),
        line: format!("{label}{}", rest_chars.as_str()),
        label,
        params: LjParams::new(sigma, epsilon),
    })
}

struct AtomRow<'a> {
    type_label: &'a str,
    residue_number: &'a str,
    residue_name: &'a str,
    atom_name: &'a str,
}

fn parse_atom_row(line: &str) -> Option<AtomRow<'_>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 5 {
        return None;
    }
    Some(AtomRow {
        type_label: tokens[1],
        residue_number: tokens[2],
        residue_name: tokens[3],
        atom_name: tokens[4],
    })
}

/// Appends the suffix to the row's type-label field, dropping the last
/// character of the preceding whitespace run to keep the columns aligned.
fn rename_type_in_row(line: &str, label: &str, suffix: &str) -> Option<String> {
    let position = line.find(label)?;
    let rest = &line[position + label.len()..];

    let mut prefix_chars = line[..position].chars();
    prefix_chars.next_back();

    Some(format!(
        "{}{label}{suffix}{rest}",
        prefix_chars.as_str()
    ))
}
