use crate::error::SelpgError;
use std::fmt;

/// An inclusive, 1-based range of pages to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u32,
    end: u32,
}

/// How the requested range overshoots the pages actually present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeShortfall {
    /// Start page is past the last page, nothing was written
    NoOutput { start: u32, total: u64 },
    /// End page is past the last page, the output is cut short
    Truncated { end: u32, total: u64 },
}

impl PageRange {
    /// Build a range from raw page numbers as given on the command line.
    ///
    /// Both ends must fit a `u32`, be >= 1, and `end` must not precede `start`.
    pub fn new(start: i64, end: i64) -> Result<Self, SelpgError> {
        let start = u32::try_from(start)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| SelpgError::InvalidStartPage(start.to_string()))?;

        let end = u32::try_from(end)
            .ok()
            .filter(|&n| n >= start)
            .ok_or_else(|| SelpgError::InvalidEndPage(end.to_string()))?;

        Ok(PageRange { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, page: u64) -> bool {
        page >= u64::from(self.start) && page <= u64::from(self.end)
    }

    /// Compare against the number of pages found in the input
    pub fn shortfall(&self, total_pages: u64) -> Option<RangeShortfall> {
        if total_pages < u64::from(self.start) {
            Some(RangeShortfall::NoOutput {
                start: self.start,
                total: total_pages,
            })
        } else if total_pages < u64::from(self.end) {
            Some(RangeShortfall::Truncated {
                end: self.end,
                total: total_pages,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for RangeShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeShortfall::NoOutput { start, total } => write!(
                f,
                "startPage ({}) greater than total pages ({}), no output written",
                start, total
            ),
            RangeShortfall::Truncated { end, total } => write!(
                f,
                "endPage ({}) greater than total pages ({}), less output than expected",
                end, total
            ),
        }
    }
}
