use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The source text is not valid commented JSON.
    #[error("invalid commented JSON: {0}")]
    Parse(#[from] serde_json5::Error),
}
