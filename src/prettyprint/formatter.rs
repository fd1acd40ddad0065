//! Record and summary composition over a caller-supplied line sink.

use tracing::debug;

use crate::error::Result;
use crate::prettyprint::render::render;
use crate::prettyprint::statistics;
use crate::result::{QueryResult, Record};

/// Output mode selected by the shell user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Values and summary rendered exactly as produced; empty blocks vanish.
    #[default]
    Plain,
    /// Same rendering, but the summary block is emitted even when it is
    /// empty-looking.
    Verbose,
}

/// Receives formatted lines.
///
/// Sink contract: implementations decide line termination and must suppress
/// blank or whitespace-only lines. The formatter performs no filtering of
/// its own, so it stays a pure function of its input.
pub trait LineSink {
    /// Accepts one formatted line, without a trailing newline.
    fn accept(&mut self, line: &str);
}

/// [`LineSink`] that buffers accepted lines into a newline-terminated
/// string, dropping blank lines per the sink contract.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buffer: String,
}

impl LineBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows everything accepted so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consumes the buffer.
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl LineSink for LineBuffer {
    fn accept(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }
}

/// Composes the column header, record lines, and summary block of a result.
///
/// Options are read once at construction and are immutable for the
/// printer's lifetime.
#[derive(Debug, Clone)]
pub struct PrettyPrinter {
    format: Format,
    max_width: i32,
    wrap: bool,
}

impl PrettyPrinter {
    /// Creates a printer. A `max_width` of `-1` leaves lines unbounded;
    /// wrapping applies only when `wrap` is set and the width is bounded.
    pub fn new(format: Format, max_width: i32, wrap: bool) -> Self {
        Self {
            format,
            max_width,
            wrap,
        }
    }

    /// Formats one result onto `sink`: a header built from the first
    /// record's columns, one line per record in delivery order, then the
    /// summary block, with a blank separator line when both blocks are
    /// non-empty.
    ///
    /// The record stream is consumed exactly once; the summary is read only
    /// after the stream is exhausted. Headers are not re-derived per record
    /// since all records of one result share the first record's columns.
    /// Stream errors propagate unchanged.
    pub fn format(&self, result: &mut dyn QueryResult, sink: &mut dyn LineSink) -> Result<()> {
        let mut records = 0usize;
        if let Some(first) = result.next_record()? {
            self.emit(sink, &first.keys.join(", "));
            self.emit(sink, &record_line(&first)?);
            records += 1;
            while let Some(record) = result.next_record()? {
                self.emit(sink, &record_line(&record)?);
                records += 1;
            }
        }

        let summary = result.summary()?;
        let block = statistics::collect(&summary)?;
        if block.is_empty() {
            if self.format == Format::Verbose {
                sink.accept("");
            }
        } else {
            if records > 0 {
                sink.accept("");
            }
            for line in block.lines() {
                self.emit(sink, line);
            }
        }
        debug!(records, summarized = !block.is_empty(), "formatted result");
        Ok(())
    }

    fn emit(&self, sink: &mut dyn LineSink, line: &str) {
        if self.wrap && self.max_width > 0 {
            for chunk in wrap_line(line, self.max_width as usize) {
                sink.accept(chunk);
            }
        } else {
            sink.accept(line);
        }
    }
}

fn record_line(record: &Record) -> Result<String> {
    let rendered: Vec<String> = record.values.iter().map(render).collect::<Result<_>>()?;
    Ok(rendered.join(", "))
}

/// Splits `line` into chunks of at most `width` characters, never inside a
/// UTF-8 sequence.
fn wrap_line(line: &str, width: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = line;
    loop {
        let split = match rest.char_indices().nth(width) {
            Some((offset, _)) => offset,
            None => {
                chunks.push(rest);
                return chunks;
            }
        };
        let (head, tail) = rest.split_at(split);
        chunks.push(head);
        rest = tail;
    }
}
