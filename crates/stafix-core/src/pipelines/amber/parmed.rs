use super::AmberError;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Whether an invocation's standard output is wanted. The detail listing is
/// read from stdout; the materializing call's stdout is chatter and is
/// discarded so the child can never stall on a full pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdoutMode {
    Capture,
    Discard,
}

/// Captured result of one ParmEd invocation.
#[derive(Debug)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Resolves the configured executable. A bare name is searched on PATH; an
/// explicit path is checked directly.
pub fn resolve_executable(name: &str) -> Result<PathBuf, AmberError> {
    let not_found = || AmberError::ExecutableNotFound {
        name: name.to_string(),
    };

    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return if candidate.is_file() {
            Ok(candidate.to_path_buf())
        } else {
            Err(not_found())
        };
    }

    let path_var = std::env::var_os("PATH").unwrap_or_default();
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(name))
        .find(|full| full.is_file())
        .ok_or_else(not_found)
}

/// Runs one blocking ParmEd invocation against `topology`, feeding `script`
/// on stdin. Completion is awaited without a timeout; failure surfaces
/// through the exit status and the captured streams, which callers interpret.
pub fn run_script(
    executable: &Path,
    topology: &Path,
    script: &str,
    stdout_mode: StdoutMode,
) -> Result<ToolOutput, AmberError> {
    debug!(
        executable = %executable.display(),
        topology = %topology.display(),
        script_lines = script.lines().count(),
        "Invoking ParmEd."
    );

    let tool_error = |source: std::io::Error| AmberError::Tool {
        executable: executable.display().to_string(),
        source,
    };

    let stdout = match stdout_mode {
        StdoutMode::Capture => Stdio::piped(),
        StdoutMode::Discard => Stdio::null(),
    };

    let mut child = Command::new(executable)
        .arg(topology)
        .stdin(Stdio::piped())
        .stdout(stdout)
        .stderr(Stdio::piped())
        .spawn()
        .map_err(tool_error)?;

    if let Some(mut stdin) = child.stdin.take() {
        // A child that exits before reading the whole script breaks the
        // pipe; its stderr is still collected below.
        if let Err(source) = stdin.write_all(script.as_bytes()) {
            if source.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(tool_error(source));
            }
        }
        // Dropping the handle closes the pipe, signalling end of script.
    }

    let output = child.wait_with_output().map_err(tool_error)?;
    debug!(status = %output.status, "ParmEd finished.");

    Ok(ToolOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
