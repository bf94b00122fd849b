//! File boundary: read a report whole, open the output, run one conversion.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;

use crate::error::ConvertError;
use crate::format::OutputMode;
use crate::reports::ReportKind;
use crate::sink::{Tee, WriteSink};
use crate::summary::ReportSummary;

/// Runtime options for one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub mode: OutputMode,
    /// Echo every row to stdout as well.
    pub print: bool,
}

/// Read a whole report into memory. No encoding is assumed.
pub fn read_report(path: &Path) -> Result<Vec<u8>, ConvertError> {
    fs::read(path).map_err(|source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Create (or truncate) the output file, making its directory if needed.
pub fn create_output(path: &Path) -> Result<WriteSink<BufWriter<File>>, ConvertError> {
    let create = || -> io::Result<File> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        File::create(path)
    };
    create()
        .map(|file| WriteSink::new(BufWriter::new(file)))
        .map_err(|source| ConvertError::CreateOutput {
            path: path.to_path_buf(),
            source,
        })
}

/// Convert the report at `input`, writing to `output` and/or stdout.
pub fn convert_file(
    kind: ReportKind,
    input: &Path,
    output: Option<&Path>,
    options: ConvertOptions,
) -> Result<ReportSummary, ConvertError> {
    let buffer = read_report(input)?;
    let output = output.map(create_output).transpose()?;
    let echo = options.print.then(|| WriteSink::new(io::stdout().lock()));

    let mut sink = Tee { output, echo };
    let summary = kind.run(&buffer, &mut sink, options.mode)?;

    if let Some(output) = sink.output.as_mut() {
        output.flush()?;
    }
    if let Some(echo) = sink.echo.as_mut() {
        echo.flush()?;
    }
    Ok(summary)
}
