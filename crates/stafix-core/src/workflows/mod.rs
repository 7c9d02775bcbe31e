//! # Workflows Module
//!
//! High-level entry points that turn one topology file into one scaled
//! topology file. A workflow validates the input, derives the output name,
//! runs the matching format pipeline and returns a [`scale::ScaleReport`]
//! the caller can print.
//!
//! - **Scaling Workflows** ([`scale`]) - Epsilon scaling for Amber and
//!   GROMACS topologies, one function per format.

pub mod scale;
