use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid invocation parameters: {0}")]
    Params(String),
}
