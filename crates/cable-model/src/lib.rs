pub mod diagnostic;
pub mod diagram;
pub mod error;
pub mod record;
pub mod router;

pub use diagnostic::{Diagnostic, RuleOutcome, RuleSummary, Severity, ValidationReport};
pub use diagram::DiagramInventory;
pub use error::CableError;
pub use record::{CableId, CablePort, ConnectState, FromSide, ToSide, endpoint_key};
pub use router::{RouterUsage, SiteUsage};
