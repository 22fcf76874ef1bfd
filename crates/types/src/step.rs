use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::Identity;
use crate::temporal::SequenceHeight;

/// Validation errors raised when constructing bounded step payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoundsError {
    #[error("step attachment is {len} bytes, limit is {max}")]
    AttachmentTooLarge { len: usize, max: usize },
}

/// Opaque step attachment, bounded at construction.
///
/// The registry stores the bytes verbatim and attaches no meaning to them;
/// integrity proofs over the content are the business of external
/// collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepData(Vec<u8>);

impl StepData {
    /// Maximum attachment size in bytes.
    pub const MAX_BYTES: usize = 1024;

    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, BoundsError> {
        let bytes = bytes.into();
        if bytes.len() > Self::MAX_BYTES {
            return Err(BoundsError::AttachmentTooLarge {
                len: bytes.len(),
                max: Self::MAX_BYTES,
            });
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One milestone in an item's provenance log.
///
/// Every field except `verified` is fixed at creation. `verified` starts
/// false and flips to true exactly once, under oracle authority; there is
/// no un-verification path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Sequence height at which the step was recorded.
    pub recorded_at: SequenceHeight,
    /// Identity that recorded the step (the item owner at that time).
    pub actor: Identity,
    /// Non-empty milestone text.
    pub description: String,
    /// Optional opaque attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<StepData>,
    /// Oracle attestation flag.
    pub verified: bool,
}

impl StepRecord {
    pub fn new(
        recorded_at: SequenceHeight,
        actor: Identity,
        description: impl Into<String>,
        data: Option<StepData>,
    ) -> Self {
        Self {
            recorded_at,
            actor,
            description: description.into(),
            data,
            verified: false,
        }
    }
}
