use crate::core::nonbonded::LjParams;
use crate::core::selection::is_scaled;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetailListingError {
    #[error("no 'ATOM' header line found")]
    MissingHeader,
    #[error("malformed row on listing line {line}: {kind}")]
    Row { line: usize, kind: DetailRowKind },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetailRowKind {
    #[error("expected at least 8 columns, found {found}")]
    TooFewColumns { found: usize },
    #[error("invalid integer in column {column} (value: '{value}')")]
    InvalidInt { column: usize, value: String },
    #[error("invalid float in column {column} (value: '{value}')")]
    InvalidFloat { column: usize, value: String },
}

/// One row of the ParmEd detail listing.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub atom_id: usize,
    pub residue_name: String,
    pub atom_name: String,
    pub atom_type: String,
    pub radius: f64,
    pub epsilon: f64,
}

/// All scaled atoms sharing one original atom type. Members share the
/// type's LJ parameters, so radius and epsilon are stored once.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeGroup {
    pub label: String,
    pub atom_ids: Vec<usize>,
    pub params: LjParams,
}

impl TypeGroup {
    /// Amber atom selector covering every member, e.g. `@12,13,40`.
    pub fn selector(&self) -> String {
        let ids: Vec<String> = self.atom_ids.iter().map(usize::to_string).collect();
        format!("@{}", ids.join(","))
    }
}

/// Parses a `printDetails` listing into scaled-type groups, in first-seen
/// order. The listing starts after a header line containing `ATOM` and ends
/// at the first blank line; whitespace-delimited columns 0, 2, 3, 4, 6 and 7
/// hold atom id, residue name, atom name, atom type, LJ radius and LJ depth.
pub fn collect_scaled_groups(listing: &str) -> Result<Vec<TypeGroup>, DetailListingError> {
    let mut lines = listing.lines().enumerate();

    if !lines.by_ref().any(|(_, line)| line.contains("ATOM")) {
        return Err(DetailListingError::MissingHeader);
    }

    let mut groups: Vec<TypeGroup> = Vec::new();
    let mut index_by_label: HashMap<String, usize> = HashMap::new();

    for (line_index, line) in lines {
        if line.trim().is_empty() {
            break;
        }

        let record = parse_detail_row(line).map_err(|kind| DetailListingError::Row {
            line: line_index + 1,
            kind,
        })?;

        if !is_scaled(&record.residue_name, &record.atom_name) {
            continue;
        }

        match index_by_label.get(record.atom_type.as_str()) {
            Some(&index) => groups[index].atom_ids.push(record.atom_id),
            None => {
                index_by_label.insert(record.atom_type.clone(), groups.len());
                groups.push(TypeGroup {
                    label: record.atom_type,
                    atom_ids: vec![record.atom_id],
                    params: LjParams::new(record.radius, record.epsilon),
                });
            }
        }
    }

    Ok(groups)
}

fn parse_detail_row(line: &str) -> Result<AtomRecord, DetailRowKind> {
    let columns: Vec<&str> = line.split_whitespace().collect();
    if columns.len() < 8 {
        return Err(DetailRowKind::TooFewColumns {
            found: columns.len(),
        });
    }

    let atom_id = columns[0]
        .parse::<usize>()
        .map_err(|_| DetailRowKind::InvalidInt {
            column: 0,
            value: columns[0].to_string(),
        })?;
    let radius = parse_float(&columns, 6)?;
    let epsilon = parse_float(&columns, 7)?;

    Ok(AtomRecord {
        atom_id,
        residue_name: columns[2].to_string(),
        atom_name: columns[3].to_string(),
        atom_type: columns[4].to_string(),
        radius,
        epsilon,
    })
}

fn parse_float(columns: &[&str], column: usize) -> Result<f64, DetailRowKind> {
    columns[column]
        .parse::<f64>()
        .map_err(|_| DetailRowKind::InvalidFloat {
            column,
            value: columns[column].to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
Loading topology...
The mask :* matches 9 atoms:

   ATOM    RES  RESNAME  NAME  TYPE   At.#   LJ Radius    LJ Depth
      1      1        U     N1    N*      7      1.8240      0.1700
      2      1        U     C2     C      6      1.9080      0.0860
      3      1        U     O2     O      8      1.6612      0.2100
      4      1        U     O2'   OH      8      1.7210      0.2104
      5      2        A     N1    NC      7      1.8240      0.1700
      6      2        A     C2    CQ      6      1.9080      0.0860
      7      2        A     N6    N2      7      1.8240      0.1700
      8      2        A     C4    CB      6      1.9080      0.0860
      9      2        A     C5    CB      6      1.9080      0.0860

Done.
";

    #[test]
    fn groups_are_keyed_by_type_in_first_seen_order() {
        let groups = collect_scaled_groups(LISTING).unwrap();
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["N*", "C", "NC", "CQ", "CB"]);
    }

    #[test]
    fn atoms_of_the_same_type_accumulate_into_one_group() {
        let groups = collect_scaled_groups(LISTING).unwrap();
        let cb = groups.iter().find(|g| g.label == "CB").unwrap();
        assert_eq!(cb.atom_ids, vec![8, 9]);
        assert_eq!(cb.selector(), "@8,9");
    }

    #[test]
    fn groups_carry_the_shared_lj_parameters() {
        let groups = collect_scaled_groups(LISTING).unwrap();
        let n_star = groups.iter().find(|g| g.label == "N*").unwrap();
        assert_eq!(n_star.params, LjParams::new(1.8240, 0.1700));
    }

    #[test]
    fn excluded_atoms_never_join_a_group() {
        let groups = collect_scaled_groups(LISTING).unwrap();
        // O2 is a uracil edge atom, O2' a sugar hydroxyl, N6 an adenine
        // edge atom; none of their types may appear via those atoms.
        assert!(groups.iter().all(|g| g.label != "O"));
        assert!(groups.iter().all(|g| g.label != "OH"));
        assert!(groups.iter().all(|g| g.label != "N2"));
    }

    #[test]
    fn rows_after_the_first_blank_line_are_ignored() {
        let listing = "\
   ATOM    RES  RESNAME  NAME  TYPE   At.#   LJ Radius    LJ Depth
      1      1        A     N1    NC      7      1.8240      0.1700

      2      1        A     C2    CQ      6      1.9080      0.0860
";
        let groups = collect_scaled_groups(listing).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "NC");
    }

    #[test]
    fn listing_without_header_is_rejected() {
        let listing = "Loading topology...\nsomething went wrong\n";
        assert_eq!(
            collect_scaled_groups(listing),
            Err(DetailListingError::MissingHeader)
        );
    }

    #[test]
    fn short_rows_are_rejected_with_their_line_number() {
        let listing = "\
   ATOM    RES  RESNAME  NAME  TYPE   At.#   LJ Radius    LJ Depth
      1      1        A     N1    NC      7      1.8240
";
        assert_eq!(
            collect_scaled_groups(listing),
            Err(DetailListingError::Row {
                line: 2,
                kind: DetailRowKind::TooFewColumns { found: 7 },
            })
        );
    }

    #[test]
    fn non_numeric_parameters_are_rejected() {
        let listing = "\
   ATOM    RES  RESNAME  NAME  TYPE   At.#   LJ Radius    LJ Depth
      1      1        A     N1    NC      7      radius      0.1700
";
        assert_eq!(
            collect_scaled_groups(listing),
            Err(DetailListingError::Row {
                line: 2,
                kind: DetailRowKind::InvalidFloat {
                    column: 6,
                    value: "radius".to_string(),
                },
            })
        );
    }

    #[test]
    fn empty_mask_match_yields_no_groups() {
        let listing = "   ATOM    RES  RESNAME  NAME  TYPE   At.#   LJ Radius    LJ Depth\n\n";
        assert_eq!(collect_scaled_groups(listing), Ok(Vec::new()));
    }
}
