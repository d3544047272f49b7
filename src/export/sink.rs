//! Row sinks receiving the exported table.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::github::ExportError;

/// Append-only destination for output rows.
pub trait RowSink {
    /// Appends one complete row.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] when the destination rejects the write.
    fn write_row(&mut self, row: &[String]) -> Result<(), ExportError>;

    /// Flushes buffered rows to the destination.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] when flushing fails.
    fn finish(&mut self) -> Result<(), ExportError>;
}

/// Collects rows in memory.
impl RowSink for Vec<Vec<String>> {
    fn write_row(&mut self, row: &[String]) -> Result<(), ExportError> {
        self.push(row.to_vec());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ExportError> {
        Ok(())
    }
}

/// CSV sink quoting every field, one row per line.
///
/// Rows may differ in length; label overflow and unpadded comment lists
/// produce ragged lines.
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    /// Wraps `inner` in a CSV writer.
    #[must_use]
    pub fn new(inner: W) -> Self {
        let writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(inner);
        Self { writer }
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] when the final flush fails.
    pub fn into_inner(self) -> Result<W, ExportError> {
        self.writer.into_inner().map_err(|error| ExportError::Io {
            message: format!("failed to flush CSV output: {}", error.error()),
        })
    }
}

impl<W: Write> RowSink for CsvSink<W> {
    fn write_row(&mut self, row: &[String]) -> Result<(), ExportError> {
        self.writer.write_record(row)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ExportError> {
        self.writer.flush()?;
        Ok(())
    }
}
