use thiserror::Error;

use crate::engine::RunPhase;

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("invalid run transition from {from} to {to}")]
    InvalidTransition { from: RunPhase, to: RunPhase },
}
