use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "STAFIX CLI - Rescales the Lennard-Jones attraction of RNA/DNA atoms in molecular-dynamics topologies to correct overstabilized stacking interactions.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scale an Amber topology by driving ParmEd.
    ///
    /// Do not use the scaled output for topologies that are to be converted
    /// to GROMACS; convert first, then run the `gromacs` subcommand on the
    /// converted file.
    Amber(AmberArgs),
    /// Scale a ParmEd-generated GROMACS topology directly.
    ///
    /// The input `.top` file is expected to come from a ParmEd conversion
    /// and must define `[ defaults ]`, `[ atomtypes ]` and `[ atoms ]`
    /// sections with combination rule 2.
    Gromacs(GromacsArgs),
}

/// Arguments shared by both scaling subcommands.
#[derive(Args, Debug)]
pub struct ScaleArgs {
    /// Path to the input topology file.
    #[arg(value_name = "TOPOLOGY")]
    pub topology: PathBuf,

    /// Factor multiplied into the epsilon of every scaled atom pair.
    #[arg(value_name = "FACTOR", allow_negative_numbers = true)]
    pub factor: f64,

    /// Residue numbers to scale, in the format resid1,resid2,resid3,...
    /// (e.g. 1,2,3,4). If no mask is specified, all RNA residues are scaled.
    #[arg(value_name = "MASK")]
    pub mask: Option<String>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `amber` subcommand.
#[derive(Args, Debug)]
pub struct AmberArgs {
    #[command(flatten)]
    pub scaling: ScaleArgs,

    /// Override the ParmEd executable name or path.
    #[arg(long, value_name = "NAME_OR_PATH")]
    pub parmed: Option<String>,
}

/// Arguments for the `gromacs` subcommand.
#[derive(Args, Debug)]
pub struct GromacsArgs {
    #[command(flatten)]
    pub scaling: ScaleArgs,

    /// Override the marker suffix appended to renamed atom types.
    #[arg(long, value_name = "SUFFIX")]
    pub type_suffix: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amber_arguments_parse_positionally() {
        let cli = Cli::parse_from(["stafix", "amber", "top.parm7", "0.5", "1,2,3"]);
        let Commands::Amber(args) = cli.command else {
            panic!("Expected 'amber' subcommand");
        };
        assert_eq!(args.scaling.topology, PathBuf::from("top.parm7"));
        assert_eq!(args.scaling.factor, 0.5);
        assert_eq!(args.scaling.mask.as_deref(), Some("1,2,3"));
        assert_eq!(args.parmed, None);
    }

    #[test]
    fn mask_is_optional() {
        let cli = Cli::parse_from(["stafix", "gromacs", "system.top", "0.25"]);
        let Commands::Gromacs(args) = cli.command else {
            panic!("Expected 'gromacs' subcommand");
        };
        assert_eq!(args.scaling.mask, None);
        assert_eq!(args.type_suffix, None);
    }

    #[test]
    fn negative_factors_are_accepted() {
        let cli = Cli::parse_from(["stafix", "amber", "top.parm7", "-0.5"]);
        let Commands::Amber(args) = cli.command else {
            panic!("Expected 'amber' subcommand");
        };
        assert_eq!(args.scaling.factor, -0.5);
    }

    #[test]
    fn non_numeric_factor_is_rejected() {
        let result = Cli::try_parse_from(["stafix", "amber", "top.parm7", "fast"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = Cli::parse_from(["stafix", "gromacs", "-v", "-v", "system.top", "0.5"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["stafix", "amber", "-q", "-v", "top.parm7", "0.5"]);
        assert!(result.is_err());
    }
}
