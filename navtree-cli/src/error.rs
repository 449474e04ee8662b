use std::path::PathBuf;

use navtree::NavTreeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Data(#[from] NavTreeError),

    #[error("Failed to create log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
