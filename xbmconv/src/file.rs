use crate::convert::Converter;
use crate::convert::Options;
use crate::convert::Report;
use anyhow::Context;
use anyhow::Result;
use log::info;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Overwrite the file when the conversion changed it
    InPlace,
    /// Print the converted text and leave the file alone
    Stdout,
    /// Only report what would change
    Check,
}

/// Converts one file. The file is read completely before anything is
/// written, so a failed read never touches it.
pub fn convert_file(path: &Path, opts: &Options, mode: Mode) -> Result<Report> {
    let src = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let conv = Converter::new(*opts).convert(&src);
    info!(
        "{}: {} arrays, {} calls, changed = {}",
        path.display(),
        conv.report.arrays.len(),
        conv.report.calls.len(),
        conv.report.changed
    );
    match mode {
        Mode::InPlace if conv.report.changed => fs::write(path, &conv.output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        Mode::Stdout => print!("{}", conv.output),
        Mode::InPlace | Mode::Check => {}
    }
    Ok(conv.report)
}
