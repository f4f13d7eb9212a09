use std::ffi::OsStr;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

/// Writes user-facing diagnostics, each prefixed with the program name.
#[derive(Debug, Clone)]
pub struct Reporter {
    progname: String,
}

impl Reporter {
    pub fn new(progname: impl Into<String>) -> Self {
        Reporter {
            progname: progname.into(),
        }
    }

    /// Name the program the way it was invoked, minus any directory part
    pub fn from_arg0(arg0: Option<&OsStr>) -> Self {
        let progname = arg0
            .and_then(|arg| Path::new(arg).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        Reporter::new(progname)
    }

    pub fn write_message<W: Write>(&self, out: &mut W, message: impl Display) -> io::Result<()> {
        writeln!(out, "\n{}: {}", self.progname, message)
    }

    pub fn write_usage<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "USAGE: \n{} -sstartPage -eendPage [ -f | -l lines_per_page ] [ -d dest ] [ inFilename ]",
            self.progname
        )
    }

    /// Report to stderr. Failing to write a diagnostic is not itself reportable.
    pub fn message(&self, message: impl Display) {
        let _ = self.write_message(&mut io::stderr().lock(), message);
    }

    pub fn usage(&self) {
        let _ = self.write_usage(&mut io::stderr().lock());
    }
}
