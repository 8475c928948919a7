use thiserror::Error;

/// The rule engine itself has no runtime failure paths: unmatched input
/// degrades to the `unknown` intent. Errors only exist where the engine is
/// assembled from configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}
