//! # STAFIX Core Library
//!
//! Scales the Lennard-Jones well depths of selected RNA/DNA atoms in
//! molecular-dynamics topologies, weakening or strengthening their nonbonded
//! attraction by a uniform factor.
//!
//! ## Architectural Philosophy
//!
//! The crate keeps a strict three-layer layout so each concern stays
//! independently testable.
//!
//! - **[`core`]: The Foundation.** Stateless building blocks: the atom
//!   selection predicate, the Lennard-Jones combination rules, residue masks
//!   and output naming.
//!
//! - **[`pipelines`]: The Format Layer.** One scaling pipeline per topology
//!   format. Amber topologies are rewritten by driving an external ParmEd
//!   process; GROMACS topologies are rewritten directly in two streaming
//!   passes. Both report progress through a shared reporter.
//!
//! - **[`workflows`]: The Public API.** End-to-end entry points that tie
//!   validation, output naming and the pipelines together for callers such
//!   as the command-line interface.

pub mod core;
pub mod pipelines;
pub mod workflows;
