use phf::{Set, phf_set};

static ADENINE_RESIDUES: Set<&'static str> = phf_set! {
    "A", "A3", "A5", "RA", "RA3", "RA5",
};

static GUANINE_RESIDUES: Set<&'static str> = phf_set! {
    "G", "G3", "G5", "RG", "RG3", "RG5",
};

static CYTOSINE_RESIDUES: Set<&'static str> = phf_set! {
    "C", "C3", "C5", "RC", "RC3", "RC5",
};

static URACIL_RESIDUES: Set<&'static str> = phf_set! {
    "U", "U3", "U5", "RU", "RU3", "RU5",
};

static ADENINE_EDGE_ATOMS: Set<&'static str> = phf_set! {
    "N3", "N6", "H61", "H62",
};

static GUANINE_EDGE_ATOMS: Set<&'static str> = phf_set! {
    "N1", "H1", "N2", "H21", "H22", "N3",
};

static CYTOSINE_EDGE_ATOMS: Set<&'static str> = phf_set! {
    "O2", "N4", "H41", "H42",
};

static URACIL_EDGE_ATOMS: Set<&'static str> = phf_set! {
    "O2", "N3", "H3",
};

static SUGAR_HYDROXYL_ATOMS: Set<&'static str> = phf_set! {
    "O2'", "HO2'", "HO3'", "HO5'",
};

/// The four nucleobases whose residues are eligible for epsilon scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidueClass {
    Adenine,
    Guanine,
    Cytosine,
    Uracil,
}

impl ResidueClass {
    /// Classifies a residue name by exact membership in the six recognized
    /// spellings per base (plain, 3'-terminal, 5'-terminal, and their
    /// R-prefixed variants). Matching is case-sensitive.
    pub fn from_residue_name(residue_name: &str) -> Option<Self> {
        if ADENINE_RESIDUES.contains(residue_name) {
            Some(Self::Adenine)
        } else if GUANINE_RESIDUES.contains(residue_name) {
            Some(Self::Guanine)
        } else if CYTOSINE_RESIDUES.contains(residue_name) {
            Some(Self::Cytosine)
        } else if URACIL_RESIDUES.contains(residue_name) {
            Some(Self::Uracil)
        } else {
            None
        }
    }

    fn edge_atoms(self) -> &'static Set<&'static str> {
        match self {
            Self::Adenine => &ADENINE_EDGE_ATOMS,
            Self::Guanine => &GUANINE_EDGE_ATOMS,
            Self::Cytosine => &CYTOSINE_EDGE_ATOMS,
            Self::Uracil => &URACIL_EDGE_ATOMS,
        }
    }
}

/// Decides whether an atom participates in STAFIX scaling.
///
/// Unrecognized residues, hydrogen-bonding edge atoms of the matched base,
/// sugar hydroxyls, and terminal backbone oxygens are left untouched.
pub fn is_scaled(residue_name: &str, atom_name: &str) -> bool {
    let Some(class) = ResidueClass::from_residue_name(residue_name) else {
        return false;
    };

    if class.edge_atoms().contains(atom_name) || SUGAR_HYDROXYL_ATOMS.contains(atom_name) {
        return false;
    }

    // Terminal hydroxyl oxygens keep their original parameters. The digit
    // test is a substring match, so the R-prefixed terminal spellings
    // (RA3, RU5, ...) satisfy it as well.
    if residue_name.contains('3') && atom_name == "O3'" {
        return false;
    }
    if residue_name.contains('5') && atom_name == "O5'" {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SPELLINGS: [(&str, ResidueClass); 24] = [
        ("A", ResidueClass::Adenine),
        ("A3", ResidueClass::Adenine),
        ("A5", ResidueClass::Adenine),
        ("RA", ResidueClass::Adenine),
        ("RA3", ResidueClass::Adenine),
        ("RA5", ResidueClass::Adenine),
        ("G", ResidueClass::Guanine),
        ("G3", ResidueClass::Guanine),
        ("G5", ResidueClass::Guanine),
        ("RG", ResidueClass::Guanine),
        ("RG3", ResidueClass::Guanine),
        ("RG5", ResidueClass::Guanine),
        ("C", ResidueClass::Cytosine),
        ("C3", ResidueClass::Cytosine),
        ("C5", ResidueClass::Cytosine),
        ("RC", ResidueClass::Cytosine),
        ("RC3", ResidueClass::Cytosine),
        ("RC5", ResidueClass::Cytosine),
        ("U", ResidueClass::Uracil),
        ("U3", ResidueClass::Uracil),
        ("U5", ResidueClass::Uracil),
        ("RU", ResidueClass::Uracil),
        ("RU3", ResidueClass::Uracil),
        ("RU5", ResidueClass::Uracil),
    ];

    #[test]
    fn from_residue_name_recognizes_all_spellings() {
        for (name, class) in ALL_SPELLINGS {
            assert_eq!(ResidueClass::from_residue_name(name), Some(class));
        }
    }

    #[test]
    fn from_residue_name_rejects_unknown_names() {
        assert_eq!(ResidueClass::from_residue_name("T"), None);
        assert_eq!(ResidueClass::from_residue_name("DA"), None);
        assert_eq!(ResidueClass::from_residue_name("WAT"), None);
        assert_eq!(ResidueClass::from_residue_name("ALA"), None);
        assert_eq!(ResidueClass::from_residue_name(""), None);
    }

    #[test]
    fn from_residue_name_is_case_sensitive() {
        assert_eq!(ResidueClass::from_residue_name("a"), None);
        assert_eq!(ResidueClass::from_residue_name("ra3"), None);
        assert_eq!(ResidueClass::from_residue_name("Ru"), None);
    }

    #[test]
    fn accepts_base_ring_atoms_of_internal_residues() {
        assert!(is_scaled("A", "N1"));
        assert!(is_scaled("G", "C8"));
        assert!(is_scaled("C", "N3"));
        assert!(is_scaled("U", "C5"));
        assert!(is_scaled("RA", "N7"));
    }

    #[test]
    fn rejects_every_edge_atom_for_every_spelling() {
        let edges: [(&[&str], &[&str]); 4] = [
            (&["A", "A3", "A5", "RA", "RA3", "RA5"], &["N3", "N6", "H61", "H62"]),
            (&["G", "G3", "G5", "RG", "RG3", "RG5"], &["N1", "H1", "N2", "H21", "H22", "N3"]),
            (&["C", "C3", "C5", "RC", "RC3", "RC5"], &["O2", "N4", "H41", "H42"]),
            (&["U", "U3", "U5", "RU", "RU3", "RU5"], &["O2", "N3", "H3"]),
        ];
        for (residues, atoms) in edges {
            for residue in residues {
                for atom in atoms {
                    assert!(
                        !is_scaled(residue, atom),
                        "{residue}/{atom} should not be scaled"
                    );
                }
            }
        }
    }

    #[test]
    fn rejects_sugar_hydroxyls_for_every_spelling() {
        for (residue, _) in ALL_SPELLINGS {
            for atom in ["O2'", "HO2'", "HO3'", "HO5'"] {
                assert!(
                    !is_scaled(residue, atom),
                    "{residue}/{atom} should not be scaled"
                );
            }
        }
    }

    #[test]
    fn rejects_unknown_residues_regardless_of_atom() {
        assert!(!is_scaled("T", "N1"));
        assert!(!is_scaled("WAT", "O"));
        assert!(!is_scaled("", "N1"));
    }

    #[test]
    fn terminal_override_protects_backbone_oxygens() {
        assert!(!is_scaled("A3", "O3'"));
        assert!(!is_scaled("RA3", "O3'"));
        assert!(!is_scaled("A5", "O5'"));
        assert!(!is_scaled("RU5", "O5'"));
        assert!(!is_scaled("G3", "O3'"));
        assert!(!is_scaled("C5", "O5'"));
    }

    #[test]
    fn terminal_override_only_fires_for_matching_digit() {
        assert!(is_scaled("A", "O3'"));
        assert!(is_scaled("A", "O5'"));
        assert!(is_scaled("A3", "O5'"));
        assert!(is_scaled("U5", "O3'"));
    }

    #[test]
    fn edge_atoms_stay_rejected_on_terminal_residues() {
        assert!(!is_scaled("G3", "N3"));
        assert!(!is_scaled("C5", "H41"));
        assert!(!is_scaled("U3", "H3"));
    }
}
