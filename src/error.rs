use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelpgError {
    #[error("not enough arguments")]
    NotEnoughArguments,

    #[error("{0}")]
    Usage(String),

    #[error("1st arg should be -s startPage")]
    StartPageNotFirst,

    #[error("invalid start page {0}")]
    InvalidStartPage(String),

    #[error("2nd arg should be -e endPage")]
    EndPageNotSecond,

    #[error("invalid end page {0}")]
    InvalidEndPage(String),

    #[error("invalid page length {0}")]
    InvalidPageLength(String),

    #[error("input file \"{}\" does not exist", .0.display())]
    InputNotFound(PathBuf),

    #[error("could not open input file \"{}\"", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading input")]
    ReadFailure(#[source] io::Error),

    #[error("can't open pipe to \"{command}\" for destination \"{}\"", dest.display())]
    OutputUnavailable {
        command: String,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("print command \"{command}\" exited with {status}")]
    PrintCommandFailed { command: String, status: ExitStatus },

    #[error("error writing output")]
    WriteFailure(#[source] io::Error),
}

/// The coarse classes callers care about when deciding how to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Argument,
    InputUnavailable,
    OutputUnavailable,
    WriteFailure,
}

impl SelpgError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SelpgError::NotEnoughArguments
            | SelpgError::Usage(_)
            | SelpgError::StartPageNotFirst
            | SelpgError::InvalidStartPage(_)
            | SelpgError::EndPageNotSecond
            | SelpgError::InvalidEndPage(_)
            | SelpgError::InvalidPageLength(_) => ErrorKind::Argument,
            SelpgError::InputNotFound(_)
            | SelpgError::InputUnreadable { .. }
            | SelpgError::ReadFailure(_) => ErrorKind::InputUnavailable,
            SelpgError::OutputUnavailable { .. } | SelpgError::PrintCommandFailed { .. } => {
                ErrorKind::OutputUnavailable
            }
            SelpgError::WriteFailure(_) => ErrorKind::WriteFailure,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            SelpgError::NotEnoughArguments
            | SelpgError::Usage(_)
            | SelpgError::InvalidPageLength(_) => 1,
            SelpgError::StartPageNotFirst => 2,
            SelpgError::InvalidStartPage(_) => 3,
            SelpgError::EndPageNotSecond => 4,
            SelpgError::InvalidEndPage(_) => 5,
            SelpgError::InputNotFound(_) => 6,
            SelpgError::InputUnreadable { .. } | SelpgError::ReadFailure(_) => 7,
            SelpgError::OutputUnavailable { .. } | SelpgError::PrintCommandFailed { .. } => 8,
            SelpgError::WriteFailure(_) => 9,
        }
    }
}
