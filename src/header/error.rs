use std::{fmt, io, path::PathBuf};

/// Failure to get a submission's contents off disk, before any validation
/// has happened.
#[derive(Debug)]
pub enum LoadError {
    NotFound(PathBuf),
    Unreadable(PathBuf, io::ErrorKind),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(filename) => {
                write!(f, "File not found: {}", filename.display())
            }
            LoadError::Unreadable(filename, kind) => {
                write!(f, "Failed reading {}: {}", filename.display(), kind)
            }
        }
    }
}

impl std::error::Error for LoadError {}
