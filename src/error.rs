//! Error taxonomy for the faraid computation core.
//!
//! Every fallible entry point in this crate returns `Result<T, Error>`.
//! Errors are plain values: there is no retry logic and nothing in the
//! pipeline panics on caller-supplied data (panics are reserved for
//! genuinely unreachable branches, and those are documented at the
//! `unreachable!()` call site rather than left to this enum).

/// The three-member error taxonomy, plus the arithmetic-primitive failures
/// that can only arise from a malformed input and are therefore folded into
/// [`Error::InvalidInput`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// The caller-supplied input failed validation before any computation
    /// was attempted: unknown heir id, non-positive quantity, non-positive
    /// tirkah, or a duplicate heir category.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A variant path was detected but this engine does not (yet) compute
    /// it for the given heir subset.
    #[error("unsupported case: {reason}")]
    UnsupportedCase { reason: String },

    /// A post-computation invariant failed. This indicates a bug in
    /// the engine, not a problem with the caller's input. The derivation
    /// notes accumulated up to the point of failure are carried along so a
    /// caller that logs the error still has the audit trail.
    #[error("internal invariant violated: {reason}")]
    InvariantViolation { reason: String, notes: Vec<String> },
}

impl Error {
    /// Build an [`Error::InvalidInput`] from any `Display`-able reason.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Build an [`Error::UnsupportedCase`] from any `Display`-able reason.
    pub fn unsupported_case(reason: impl Into<String>) -> Self {
        Self::UnsupportedCase {
            reason: reason.into(),
        }
    }

    /// Build an [`Error::InvariantViolation`], capturing the notes trail
    /// accumulated so far.
    pub fn invariant_violation(reason: impl Into<String>, notes: &[String]) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
            notes: notes.to_vec(),
        }
    }
}
