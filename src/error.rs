use thiserror::Error;

#[derive(Debug, Error)]
pub enum TtoastError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
