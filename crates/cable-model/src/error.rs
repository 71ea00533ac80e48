use thiserror::Error;

#[derive(Debug, Error)]
pub enum CableError {
    #[error("unknown router usage name: {0}")]
    UnknownRouterUsage(String),
}
