use thiserror::Error;

/// Failure modes of a completion call, one variant per outcome the caller
/// distinguishes at the logging boundary.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote error: HTTP {status}")]
    Remote { status: u16 },

    #[error("Empty response: no choices were returned by the API")]
    EmptyResponse,
}
