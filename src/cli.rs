use crate::error::SelpgError;
use crate::page_range::PageRange;
use crate::selector::{PageMode, DEFAULT_PAGE_LENGTH, FORM_FEED};
use crate::sink::{Destination, DEFAULT_PRINT_COMMAND};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "selpg")]
#[command(about = "Select a range of pages from a text stream")]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// First page to print
    #[arg(short = 's', long)]
    pub start_page: i64,

    /// Last page to print
    #[arg(short = 'e', long)]
    pub end_page: i64,

    /// Lines per page
    #[arg(short = 'l', long, default_value_t = i64::from(DEFAULT_PAGE_LENGTH))]
    pub page_length: i64,

    /// Pages are separated by form feeds instead of counted in lines
    #[arg(short = 'f', long)]
    pub form_feed: bool,

    /// Send output through the print command into this destination
    #[arg(short = 'd', long)]
    pub dest: Option<PathBuf>,

    /// Command that receives the output when a destination is given
    #[arg(long, env = "SELPG_PRINT_COMMAND", default_value = DEFAULT_PRINT_COMMAND)]
    pub print_command: String,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Input file (stdin when omitted)
    pub input: Option<PathBuf>,
}

/// Everything needed for one pass, validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    pub range: PageRange,
    pub mode: PageMode,
    pub input: Option<PathBuf>,
    pub destination: Option<Destination>,
}

impl Cli {
    pub fn into_request(self) -> Result<SelectionRequest, SelpgError> {
        let range = PageRange::new(self.start_page, self.end_page)?;

        let mode = if self.form_feed {
            PageMode::Delimited {
                delimiter: FORM_FEED,
            }
        } else {
            let page_length = u32::try_from(self.page_length)
                .ok()
                .filter(|&n| n >= 1)
                .ok_or_else(|| SelpgError::InvalidPageLength(self.page_length.to_string()))?;
            PageMode::Lines { page_length }
        };

        let destination = self.dest.map(|path| Destination {
            path,
            command: self.print_command,
        });

        Ok(SelectionRequest {
            range,
            mode,
            input: self.input,
            destination,
        })
    }
}

/// Enforce the positional conventions clap does not: the start page must be
/// the first argument and the end page the option right after it.
///
/// `args` includes the program name. Help and version requests skip the
/// checks so clap can answer them.
pub fn check_argument_order(args: &[OsString]) -> Result<(), SelpgError> {
    let wants_info = args
        .iter()
        .skip(1)
        .any(|arg| matches!(arg.to_str(), Some("-h" | "--help" | "-V" | "--version")));
    if wants_info {
        return Ok(());
    }

    if args.len() < 3 {
        return Err(SelpgError::NotEnoughArguments);
    }

    let first = args[1].to_string_lossy();
    let end_index = if first == "-s" || first == "--start-page" {
        3
    } else if first.starts_with("-s") || first.starts_with("--start-page=") {
        2
    } else {
        return Err(SelpgError::StartPageNotFirst);
    };

    let is_end_page = args.get(end_index).is_some_and(|arg| {
        let arg = arg.to_string_lossy();
        arg.starts_with("-e") || arg == "--end-page" || arg.starts_with("--end-page=")
    });
    if !is_end_page {
        return Err(SelpgError::EndPageNotSecond);
    }

    Ok(())
}
