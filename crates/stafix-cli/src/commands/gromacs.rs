use crate::cli::GromacsArgs;
use crate::config::PartialScaleConfig;
use crate::error::{CliError, Result};
use crate::progress::CliProgressHandler;
use stafix::core::mask::ResidueMask;
use stafix::pipelines::progress::ProgressReporter;
use stafix::workflows::scale;
use tracing::info;

pub fn run(args: GromacsArgs) -> Result<()> {
    let config = PartialScaleConfig::load(args.scaling.config.as_deref())?;
    let options = config.gromacs_options(args.type_suffix.as_deref());
    let mask = ResidueMask::parse(args.scaling.mask.as_deref())
        .map_err(|e| CliError::Argument(e.to_string()))?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the GROMACS scaling workflow...");
    let report = scale::scale_gromacs_topology(
        &args.scaling.topology,
        args.scaling.factor,
        &mask,
        &options,
        &reporter,
    )?;

    println!(
        "\nnew file generated: {}\nscaled residues: {}\n",
        report.output_path.display(),
        report.scaled_residues
    );
    Ok(())
}
