use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrintFlowError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read catalog entry {}: {source}", .path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PrintFlowError {
    /// 인덱스 범위 검사 헬퍼
    pub fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(PrintFlowError::IndexOutOfRange { index, len })
        }
    }
}

pub type Result<T> = std::result::Result<T, PrintFlowError>;
