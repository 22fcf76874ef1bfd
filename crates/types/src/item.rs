use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::step::StepRecord;
use crate::temporal::SequenceHeight;

/// Caller-supplied unique key for a tracked item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tracked physical/digital object and its provenance log.
///
/// Steps are stored as a dense, zero-based, append-only sequence; the step
/// count is the log length. Items are never deleted, and steps are never
/// removed or reordered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Current custodian; the only identity allowed to append steps.
    pub owner: Identity,
    /// Sequence height at which the item was registered.
    pub registered_at: SequenceHeight,
    /// Provenance log, indices `0..step_count`.
    pub steps: Vec<StepRecord>,
}

impl ItemRecord {
    pub fn new(owner: Identity, registered_at: SequenceHeight) -> Self {
        Self {
            owner,
            registered_at,
            steps: Vec::new(),
        }
    }

    pub fn step_count(&self) -> u32 {
        self.steps.len() as u32
    }
}
