use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaskError {
    #[error(
        "Invalid residue mask '{0}': ranges are not supported, list residue numbers separated by commas"
    )]
    RangeSyntax(String),
}

/// The set of residue numbers eligible for scaling, parsed once from the
/// command line and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResidueMask {
    /// Matches every residue number.
    AllRna,
    /// Matches residue-number fields by exact string equality.
    Residues(Vec<String>),
}

impl ResidueMask {
    /// Parses the optional CLI mask argument. A missing argument and the
    /// literal `*` both select every residue; anything containing `-` is
    /// rejected so a shell-style range like `1-5` cannot be silently
    /// misread. Elements are comma-split verbatim, without trimming.
    pub fn parse(raw: Option<&str>) -> Result<Self, MaskError> {
        match raw {
            None => Ok(Self::AllRna),
            Some("*") => Ok(Self::AllRna),
            Some(s) if s.contains('-') => Err(MaskError::RangeSyntax(s.to_string())),
            Some(s) => Ok(Self::Residues(s.split(',').map(str::to_string).collect())),
        }
    }

    pub fn contains(&self, residue_number: &str) -> bool {
        match self {
            Self::AllRna => true,
            Self::Residues(numbers) => numbers.iter().any(|n| n == residue_number),
        }
    }

    /// Human-readable form used in the success report and the rewritten
    /// topology's header comment.
    pub fn describe(&self) -> String {
        match self {
            Self::AllRna => "all RNA residues".to_string(),
            Self::Residues(numbers) => numbers.join(","),
        }
    }

    /// The Amber mask selector handed to ParmEd (without the leading `:`).
    pub fn selector(&self) -> String {
        match self {
            Self::AllRna => "*".to_string(),
            Self::Residues(numbers) => numbers.join(","),
        }
    }
}
