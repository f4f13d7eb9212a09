use crate::error::SelpgError;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};
use tracing::debug;

pub const DEFAULT_PRINT_COMMAND: &str = "cat";

/// Where selected pages go when they are not written to stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub path: PathBuf,
    /// Program fed the selected records on stdin, with its stdout on `path`
    pub command: String,
}

/// Accepts raw records, terminators included, and writes them unchanged.
pub trait LineSink {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()>;

    /// Flush and release the underlying channel. Later writes fail.
    fn close(&mut self) -> Result<(), SelpgError>;
}

impl LineSink for Vec<u8> {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.extend_from_slice(line);
        Ok(())
    }

    fn close(&mut self) -> Result<(), SelpgError> {
        Ok(())
    }
}

pub fn open_sink(destination: Option<&Destination>) -> Result<Box<dyn LineSink>, SelpgError> {
    match destination {
        None => Ok(Box::new(StdoutSink::new())),
        Some(dest) => Ok(Box::new(PipeSink::spawn(dest)?)),
    }
}

pub struct StdoutSink {
    out: Option<BufWriter<Stdout>>,
}

impl StdoutSink {
    pub fn new() -> Self {
        StdoutSink {
            out: Some(BufWriter::new(io::stdout())),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSink for StdoutSink {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        match self.out.as_mut() {
            Some(out) => out.write_all(line),
            None => Err(closed()),
        }
    }

    fn close(&mut self) -> Result<(), SelpgError> {
        if let Some(mut out) = self.out.take() {
            out.flush().map_err(SelpgError::WriteFailure)?;
        }
        Ok(())
    }
}

/// Pipes records into a child process whose stdout is appended to the
/// destination file, like `cat >> dest`.
pub struct PipeSink {
    command: String,
    dest: PathBuf,
    child: Child,
    stdin: Option<BufWriter<ChildStdin>>,
}

impl PipeSink {
    pub fn spawn(dest: &Destination) -> Result<Self, SelpgError> {
        let unavailable = |source: io::Error| SelpgError::OutputUnavailable {
            command: dest.command.clone(),
            dest: dest.path.clone(),
            source,
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&dest.path)
            .map_err(unavailable)?;

        let mut child = Command::new(&dest.command)
            .stdin(Stdio::piped())
            .stdout(Stdio::from(file))
            .spawn()
            .map_err(unavailable)?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| unavailable(io::Error::other("child stdin was not captured")))?;

        debug!(
            command = %dest.command,
            dest = %dest.path.display(),
            pid = child.id(),
            "spawned print command"
        );

        Ok(PipeSink {
            command: dest.command.clone(),
            dest: dest.path.clone(),
            child,
            stdin: Some(BufWriter::new(stdin)),
        })
    }
}

impl LineSink for PipeSink {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        match self.stdin.as_mut() {
            Some(stdin) => stdin.write_all(line),
            None => Err(closed()),
        }
    }

    fn close(&mut self) -> Result<(), SelpgError> {
        let Some(mut stdin) = self.stdin.take() else {
            return Ok(());
        };

        let flushed = stdin.flush();
        // The child only sees end-of-input once its stdin is dropped
        drop(stdin);

        let status = self
            .child
            .wait()
            .map_err(|source| SelpgError::OutputUnavailable {
                command: self.command.clone(),
                dest: self.dest.clone(),
                source,
            })?;
        debug!(command = %self.command, %status, "print command finished");

        flushed.map_err(SelpgError::WriteFailure)?;
        if !status.success() {
            return Err(SelpgError::PrintCommandFailed {
                command: self.command.clone(),
                status,
            });
        }
        Ok(())
    }
}

impl Drop for PipeSink {
    fn drop(&mut self) {
        if let Some(stdin) = self.stdin.take() {
            drop(stdin);
            let _ = self.child.wait();
        }
    }
}

fn closed() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "output sink already closed")
}
