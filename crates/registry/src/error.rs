use thiserror::Error;

/// Errors returned by registry operations.
///
/// A closed set of kinds with no payload beyond their identity: callers
/// branch on the kind to decide remediation. Every precondition violation
/// returns immediately and leaves the registry unchanged; no error is
/// fatal to the registry itself.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("caller is not authorized for this operation")]
    NotAuthorized,

    #[error("caller is not the configured oracle")]
    NotOracle,

    #[error("item not found")]
    ItemNotFound,

    #[error("item already exists")]
    AlreadyExists,

    #[error("step is already verified")]
    AlreadyVerified,

    #[error("step index out of range")]
    InvalidIndex,

    #[error("registry is paused")]
    Paused,

    #[error("null identity is not allowed here")]
    ZeroAddress,

    #[error("step description is empty or exceeds the size bound")]
    InvalidDescription,

    #[error("item has reached its step capacity")]
    MaxStepsReached,
}
