pub mod lines;

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::record::Record;
pub use lines::Mode;

/// Lines per benchmark record in the results log.
pub const BLOCK_LEN: usize = 11;

pub const DEFAULT_LABEL_PREFIX: &str = "8-5-";

#[derive(Debug, Clone)]
pub struct Options {
    pub label_prefix: String,
    pub mode: Mode,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
            mode: Mode::Strict,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub lines_read: usize,
    pub records: usize,
    /// Lines of a trailing block cut short by end of input.
    pub dropped_lines: usize,
}

/// Block state machine. `index` is the 1-based offset of the last line fed
/// within the current block, 0 before the first line of a block.
pub struct Extractor<'a> {
    opts: &'a Options,
    index: usize,
    line_no: usize,
    current: Record,
}

impl<'a> Extractor<'a> {
    pub fn new(opts: &'a Options) -> Self {
        Extractor {
            opts,
            index: 0,
            line_no: 0,
            current: Record::default(),
        }
    }

    /// Consume one line (newline already stripped). Returns the completed
    /// record on the last line of a block.
    pub fn feed(&mut self, line: &str) -> Result<Option<Record>> {
        self.line_no += 1;
        self.index += 1;
        let n = self.line_no;
        let mode = self.opts.mode;
        let rec = &mut self.current;

        match self.index {
            1 => {
                let h = lines::header(line, n, &self.opts.label_prefix)?;
                rec.instance_label = h.label;
                rec.instance_number = h.number;
                rec.k = h.k;
            }
            4 => rec.expanded_builtin = lines::expanded(line, n, mode)?,
            5 => rec.search_time_builtin = lines::search_time(line, n, mode)?,
            6 => rec.total_time_builtin = lines::total_time(line, n, mode)?,
            8 => rec.expanded_planopt = lines::expanded(line, n, mode)?,
            9 => rec.search_time_planopt = lines::search_time(line, n, mode)?,
            10 => rec.total_time_planopt = lines::total_time(line, n, mode)?,
            BLOCK_LEN => {
                self.index = 0;
                let record = std::mem::take(&mut self.current);
                debug!(
                    line = n,
                    instance = %record.instance_label,
                    number = %record.instance_number,
                    k = %record.k,
                    "record complete"
                );
                return Ok(Some(record));
            }
            _ => {}
        }
        Ok(None)
    }

    /// Lines consumed since the last emitted record.
    pub fn pending_lines(&self) -> usize {
        self.index
    }
}

/// Read blocks from `reader`, writing one CSV row per complete block to `out`.
/// Rows written before a fatal error stay written.
pub fn extract<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    opts: &Options,
) -> Result<ExtractSummary> {
    let mut extractor = Extractor::new(opts);
    let mut summary = ExtractSummary::default();

    for line in reader.lines() {
        let line = line?;
        summary.lines_read += 1;
        if let Some(record) = extractor.feed(&line)? {
            writeln!(out, "{}", record)?;
            summary.records += 1;
        }
    }

    summary.dropped_lines = extractor.pending_lines();
    if summary.dropped_lines > 0 {
        debug!(lines = summary.dropped_lines, "dropping incomplete trailing block");
    }
    out.flush()?;
    Ok(summary)
}

/// Open `path` and run [`extract`] over it.
pub fn extract_file<W: Write>(path: &Path, out: &mut W, opts: &Options) -> Result<ExtractSummary> {
    let file = File::open(path).map_err(|source| ExtractError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    extract(BufReader::new(file), out, opts)
}

// ── Tests ──
