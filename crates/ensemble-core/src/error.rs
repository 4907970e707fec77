use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("invalid band name: {0:?}")]
    BandName(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Signal that a band's member cursor has run off the end.
///
/// This is the normal end-of-sequence outcome, not a failure; calling
/// [`crate::Band::start_iteration`] rewinds the cursor and the band can be
/// walked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("end of member iteration")]
pub struct EndOfIteration;
