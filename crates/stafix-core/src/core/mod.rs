//! # Core Module
//!
//! This module provides the leaf building blocks of STAFIX scaling: deciding
//! which atoms participate, combining and rescaling their Lennard-Jones
//! parameters, and the small shared vocabulary both topology pipelines use.
//!
//! ## Architecture
//!
//! - **Atom Selection** ([`selection`]) - Residue classification and the
//!   per-atom scaling predicate
//! - **Parameter Combination** ([`nonbonded`]) - Lorentz-Berthelot-style
//!   combining, epsilon rescaling, and pair enumeration
//! - **Residue Masks** ([`mask`]) - Parsing and matching of the residue
//!   selection given on the command line
//! - **Output Naming** ([`naming`]) - Derivation of the scaled topology's
//!   file name and the numeric formatting it embeds
//!
//! Everything here is pure and synchronous; the pipelines in
//! [`crate::pipelines`] own all I/O.

pub mod mask;
pub mod naming;
pub mod nonbonded;
pub mod selection;
