use std::path::{Path, PathBuf};

/// Renders a float keeping one fractional digit for integral values
/// (`1.0`, not `1`), the form used in the output-file suffix and in the
/// generated ParmEd scripts.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Derives the output topology path next to the input:
/// `<stem>STAFIX<scale><extension>`.
pub fn stafix_output_path(input: &Path, scale: f64) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = format!("{stem}STAFIX{}", format_float(scale));
    if let Some(extension) = input.extension() {
        name.push('.');
        name.push_str(&extension.to_string_lossy());
    }

    input.with_file_name(name)
}
