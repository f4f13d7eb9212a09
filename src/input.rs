use crate::error::SelpgError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Open the input source: the named file, or stdin when there is none.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, SelpgError> {
    let Some(path) = path else {
        debug!("reading from stdin");
        return Ok(Box::new(io::stdin().lock()));
    };

    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SelpgError::InputNotFound(path.to_path_buf()),
        _ => SelpgError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!(path = %path.display(), "reading from file");
    Ok(Box::new(BufReader::new(file)))
}
