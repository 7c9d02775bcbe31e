use crate::error::{CliError, Result};
use serde::Deserialize;
use stafix::pipelines::amber::AmberOptions;
use stafix::pipelines::gromacs::GromacsOptions;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialAmberConfig {
    executable: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialGromacsConfig {
    #[serde(rename = "type-suffix")]
    type_suffix: Option<String>,
}

/// Optional settings read from a TOML file. Every field has a built-in
/// default, and command-line overrides win over file values.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialScaleConfig {
    amber: Option<PartialAmberConfig>,
    gromacs: Option<PartialGromacsConfig>,
}

impl PartialScaleConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| CliError::FileParsing {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn amber_options(&self, cli_executable: Option<&str>) -> AmberOptions {
        let mut options = AmberOptions::default();
        if let Some(executable) = cli_executable.map(str::to_string).or_else(|| {
            self.amber
                .as_ref()
                .and_then(|section| section.executable.clone())
        }) {
            options.executable = executable;
        }
        options
    }

    pub fn gromacs_options(&self, cli_suffix: Option<&str>) -> GromacsOptions {
        let mut options = GromacsOptions::default();
        if let Some(suffix) = cli_suffix.map(str::to_string).or_else(|| {
            self.gromacs
                .as_ref()
                .and_then(|section| section.type_suffix.clone())
        }) {
            options.type_suffix = suffix;
        }
        options
    }
}
