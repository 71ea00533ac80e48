//! Cable inventory validation.
//!
//! [`Relations`] derives the shared indexes once per run; [`RuleEngine`]
//! executes the fixed rule set over the records and those indexes and folds
//! every rule outcome into a [`cable_model::ValidationReport`].

pub mod catalog;
pub mod engine;
pub mod error;
pub mod escalation;
pub mod ignore;
pub mod reconcile;
pub mod relations;
pub mod router;
pub mod rules;
pub mod site;

pub use catalog::{DeviceHostTable, ModelPortCatalog};
pub use engine::{CheckInput, RuleEngine, RunPhase, ValidationRun};
pub use error::ValidateError;
pub use escalation::{AutoAnswer, ConfirmationProvider, ConnectionGroup, find_multiple_connections};
pub use ignore::{IgnoreSet, NameSet};
pub use reconcile::{PortDifference, Reconciliation, reconcile};
pub use relations::{
    BijectionConflict, CableIdIndex, ConnectMap, DeviceKey, HostBijection, HostPortUsage,
    Insertion, Relations, RosetteIndex, RoundTripFault, SymmetryFault, insert_unique,
};
pub use router::{classify_record, classify_site};
pub use rules::{RuleContext, RuleId};
pub use site::Site;
