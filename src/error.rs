use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed response envelope: {0}")]
    MalformedEnvelope(String),
}
