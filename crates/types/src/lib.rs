//! Core type definitions for the Stepline provenance registry.
//!
//! This crate provides the shared domain types: identities, item and step
//! records, the logical clock, and the event journal consumed by off-chain
//! indexers. It is a data layer, not an execution engine; all invariant
//! enforcement lives in `stepline-registry`.

pub mod event;
pub mod identity;
pub mod item;
pub mod step;
pub mod temporal;

// Re-export primary types at crate root for ergonomic use.
pub use event::{EventJournal, RegistryEvent};
pub use identity::Identity;
pub use item::{ItemId, ItemRecord};
pub use step::{BoundsError, StepData, StepRecord};
pub use temporal::SequenceHeight;
