pub mod amber;
pub mod gromacs;
