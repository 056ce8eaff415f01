use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("lookup timed out after {0} ms")]
    Timeout(u64),

    #[error("host service unavailable: {0}")]
    Unavailable(String),
}
