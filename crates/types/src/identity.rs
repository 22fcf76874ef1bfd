use serde::{Deserialize, Serialize};

/// An opaque 32-byte identity for callers, owners, admins, and oracles.
///
/// The registry never verifies who stands behind an identity; it only
/// compares identities for equality against its configured roles. The
/// all-zero value is the canonical null/burn identity and is rejected
/// wherever a live identity is required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identity(pub [u8; 32]);

impl Identity {
    /// The canonical null/burn identity.
    pub const NULL: Identity = Identity([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derive a deterministic identity from a single seed byte.
    ///
    /// Intended for tests and demos where distinct identities matter but
    /// their material does not.
    pub fn from_seed(seed: u8) -> Self {
        Self([seed; 32])
    }

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// Short hex form (first four bytes) for logs and display.
    pub fn short_hex(&self) -> String {
        let mut out = String::with_capacity(8);
        for byte in &self.0[..4] {
            out.push_str(&format!("{byte:02x}"));
        }
        out
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
