use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("missing required column {name:?} in employee list")]
    MissingColumn { name: &'static str },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
