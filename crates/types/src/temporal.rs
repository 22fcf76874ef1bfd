use serde::{Deserialize, Serialize};

/// Logical clock value: the registry's sequence height.
///
/// The registry advances the height by one on every successful
/// state-mutating operation, the way block height advances in the original
/// execution environment. Steps record the height current at their
/// creation; no wall-clock time is involved.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SequenceHeight(pub u64);

impl SequenceHeight {
    /// Height before any mutation has been applied.
    pub const GENESIS: SequenceHeight = SequenceHeight(0);

    pub fn new(height: u64) -> Self {
        Self(height)
    }

    /// The height after one more mutation.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for SequenceHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
