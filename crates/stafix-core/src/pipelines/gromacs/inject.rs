use super::GromacsError;
use super::scan::RenamedTypeDef;
use crate::core::nonbonded::{self, SizeConvention};
use std::io::{BufRead, Write};

/// Second pass: copies the renamed topology and appends the suffixed type
/// definitions plus their `[ nonbond_params ]` table to the end of the
/// `[ atomtypes ]` section. The block is emitted exactly once, at the next
/// bracketed header or at end of input if no section follows.
pub fn inject_pass(
    reader: impl BufRead,
    mut writer: impl Write,
    defs: &[RenamedTypeDef],
    scale: f64,
) -> Result<(), GromacsError> {
    let mut in_atomtypes = false;
    let mut injected = false;

    for line_result in reader.lines() {
        let line = line_result?;
        if in_atomtypes && line.starts_with('[') {
            in_atomtypes = false;
            injected = true;
            write_scaled_types_block(&mut writer, defs, scale)?;
            writeln!(writer, "{line}")?;
        } else if !injected && line.contains("[ atomtypes ]") {
            in_atomtypes = true;
            writeln!(writer, "{line}")?;
        } else {
            writeln!(writer, "{line}")?;
        }
    }

    if in_atomtypes {
        write_scaled_types_block(&mut writer, defs, scale)?;
    }

    Ok(())
}

fn write_scaled_types_block(
    writer: &mut impl Write,
    defs: &[RenamedTypeDef],
    scale: f64,
) -> Result<(), GromacsError> {
    writeln!(writer, "; STAFIX atom types")?;
    for def in defs {
        writeln!(writer, "{}", def.line)?;
    }
    writer.write_all(nonbond_params_block(defs, scale).as_bytes())?;
    Ok(())
}

/// Renders the pair table for the suffixed types: every unordered pair,
/// self-pairs included, with arithmetic-mean sigma and scaled
/// geometric-mean epsilon.
pub fn nonbond_params_block(defs: &[RenamedTypeDef], scale: f64) -> String {
    let mut block = String::from("\n[ nonbond_params ]\n; i    j func      sigma      epsilon\n");
    for (i, j) in nonbonded::pair_indices(defs.len()) {
        let combined = nonbonded::combine(
            defs[i].params,
            defs[j].params,
            scale,
            SizeConvention::SigmaMean,
        );
        block.push_str(&format!(
            " {:>3}   {:>2}   1   {:>10.8}    {:>10.8}\n",
            defs[i].label, defs[j].label, combined.size, combined.epsilon
        ));
    }
    block.push('\n');
    block
}
