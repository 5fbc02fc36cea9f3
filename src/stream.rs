//! Drives a [`Postprocessor`] over an input stream.
//!
//! Lines are read and processed strictly in arrival order. Records are
//! written and flushed as soon as each line has been classified, so a reader
//! of the record channel sees results while the solver is still running.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::errors::PostprocessError;
use crate::postprocessor::Postprocessor;
use crate::record::Record;
use crate::signaler::Signaler;

/// Counts reported once the stream is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub records: usize,
}

/// Consume `input` to the end, writing records to `out` and, when echo is
/// enabled, every input line to `echo`.
///
/// Bytes that are not valid UTF-8 are replaced rather than ending the run.
pub async fn process_stream<R, W, E, S>(
    input: R,
    out: &mut W,
    echo: &mut E,
    postprocessor: &mut Postprocessor<S>,
) -> Result<RunSummary, PostprocessError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    E: Write,
    S: Signaler,
{
    let mut segments = input.split(b'\n');
    let mut summary = RunSummary::default();

    while let Some(segment) = segments.next_segment().await? {
        let raw = String::from_utf8_lossy(&segment);
        let line = raw.strip_suffix('\r').unwrap_or(raw.as_ref());
        summary.lines += 1;

        let result = postprocessor.process_line(line);
        if let Ok(records) = &result {
            summary.records += write_records(out, records)?;
        }

        // The failing line is still echoed so the log shows what ended the run.
        if postprocessor.echo() {
            writeln!(echo, "{}", line)?;
            echo.flush()?;
        }
        result?;
    }

    let records = postprocessor.finish();
    summary.records += write_records(out, &records)?;

    tracing::info!(
        lines = summary.lines,
        records = summary.records,
        "postprocessing complete"
    );
    Ok(summary)
}

fn write_records<W: Write>(out: &mut W, records: &[Record]) -> std::io::Result<usize> {
    for record in records {
        writeln!(out, "{}", record)?;
    }
    if !records.is_empty() {
        out.flush()?;
    }
    Ok(records.len())
}
