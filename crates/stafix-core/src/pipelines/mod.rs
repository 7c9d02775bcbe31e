//! Format-specific scaling pipelines.
//!
//! Each pipeline turns one input topology into one scaled output topology.
//! [`amber`] drives an external ParmEd process over Amber binary topologies,
//! while [`gromacs`] rewrites GROMACS text topologies directly. Both report
//! coarse progress through [`progress::ProgressReporter`].

pub mod amber;
pub mod gromacs;
pub mod progress;
