//! Library components of the `cablecheck` command.

pub mod confirm;
pub mod logging;
pub mod pipeline;
