use std::{fmt, path::PathBuf};

/// Any failure reported while pushing one file to the bucket.
#[derive(Clone, Debug)]
pub struct TransferError {
    pub key: String,
    pub message: String,
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TransferError {}

/// The source directory could not be enumerated.
#[derive(Debug)]
pub struct ListError {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to list directory: {}, {}",
            self.path.display(),
            self.message
        )
    }
}

impl std::error::Error for ListError {}
