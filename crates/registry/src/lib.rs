//! # stepline-registry
//!
//! Step-indexed provenance registry: an append-only, per-item log of
//! production/custody milestones with role-gated mutation and a one-way
//! oracle verification state machine.
//!
//! This crate provides:
//! - the `ProvenanceRegistry` state machine (items, steps, roles, pause)
//! - read/write trait boundaries for embedding layers
//! - the closed `RegistryError` set callers branch on
//! - capacity bounds in `limits`
//!
//! Item registration is admin- or self-gated, step appends are owner-only
//! and capacity-bounded, verification is oracle-only and one-way, and the
//! pause flag rejects all item/step mutation while leaving configuration
//! and queries available. Every successful mutation advances the logical
//! sequence height and appends one event to the journal consumed by
//! off-chain indexers.

#![deny(unsafe_code)]

pub mod error;
pub mod limits;
pub mod registry;
pub mod traits;

pub use error::RegistryError;
pub use registry::ProvenanceRegistry;
pub use traits::{ProvenanceReader, ProvenanceWriter};

// Re-export the data layer so embedders need a single dependency.
pub use stepline_types as types;

#[cfg(test)]
mod tests {
    use super::*;
    use stepline_types::Identity;

    #[test]
    fn registry_api_is_exported() {
        let registry = ProvenanceRegistry::new(Identity::from_seed(1));
        assert!(!registry.is_paused());
    }
}
