use crate::error::SelpgError;
use crate::page_range::PageRange;
use crate::sink::LineSink;
use std::io::BufRead;
use tracing::{debug, trace};

pub const DEFAULT_PAGE_LENGTH: u32 = 40;
pub const FORM_FEED: u8 = 0x0c;

/// How the input is cut into pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Fixed number of `\n`-terminated lines per page
    Lines { page_length: u32 },
    /// Every record terminated by `delimiter` is one page
    Delimited { delimiter: u8 },
}

impl PageMode {
    fn terminator(&self) -> u8 {
        match self {
            PageMode::Lines { .. } => b'\n',
            PageMode::Delimited { delimiter } => *delimiter,
        }
    }
}

impl Default for PageMode {
    fn default() -> Self {
        PageMode::Lines {
            page_length: DEFAULT_PAGE_LENGTH,
        }
    }
}

/// Outcome of a completed pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionReport {
    pub total_pages: u64,
    pub records_read: u64,
    pub records_written: u64,
}

/// Position of the pass within the page structure.
///
/// The two modes advance differently: a line only moves to the next page
/// once the current one overflows, while a delimited record always moves
/// the cursor on after it has been placed.
#[derive(Debug)]
struct StreamCursor {
    page: u64,
    line_in_page: u64,
}

impl StreamCursor {
    fn new() -> Self {
        StreamCursor {
            page: 1,
            line_in_page: 0,
        }
    }

    /// Place one line and return its page. The line that overflows a page
    /// becomes line 1 of the next one.
    fn place_line(&mut self, page_length: u64) -> u64 {
        self.line_in_page += 1;
        if self.line_in_page > page_length {
            self.page += 1;
            self.line_in_page = 1;
        }
        self.page
    }

    fn place_record(&mut self) -> u64 {
        let page = self.page;
        self.page += 1;
        page
    }

    fn total_pages(&self, mode: PageMode, records_read: u64) -> u64 {
        if records_read == 0 {
            return 0;
        }
        match mode {
            PageMode::Lines { .. } => self.page,
            PageMode::Delimited { .. } => self.page - 1,
        }
    }
}

/// Stream `input` once, writing every record whose page lies in `range` to
/// `sink` byte for byte.
///
/// A trailing record with no terminator is still a record: it is written as
/// is and counts toward the page total. The whole input is always consumed
/// so that the total is exact. The sink is left open for the caller to close.
pub fn select_pages<R, S>(
    mut input: R,
    sink: &mut S,
    range: PageRange,
    mode: PageMode,
) -> Result<SelectionReport, SelpgError>
where
    R: BufRead,
    S: LineSink + ?Sized,
{
    debug!(?mode, start = range.start(), end = range.end(), "starting pass");

    let terminator = mode.terminator();
    let mut cursor = StreamCursor::new();
    let mut report = SelectionReport::default();
    let mut record = Vec::new();

    loop {
        record.clear();
        let n = input
            .read_until(terminator, &mut record)
            .map_err(SelpgError::ReadFailure)?;
        if n == 0 {
            break;
        }
        report.records_read += 1;

        let page = match mode {
            PageMode::Lines { page_length } => cursor.place_line(u64::from(page_length)),
            PageMode::Delimited { .. } => cursor.place_record(),
        };

        if range.contains(page) {
            sink.write_line(&record).map_err(SelpgError::WriteFailure)?;
            report.records_written += 1;
            trace!(page, bytes = record.len(), "wrote record");
        }
    }

    report.total_pages = cursor.total_pages(mode, report.records_read);
    debug!(
        total_pages = report.total_pages,
        records_read = report.records_read,
        records_written = report.records_written,
        "pass complete"
    );
    Ok(report)
}
