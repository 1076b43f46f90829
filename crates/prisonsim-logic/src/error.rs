//! Error types for the `prisonsim-logic` crate.
//!
//! Placement failures and repeated intake requests are ordinary outcomes and
//! live in [`crate::intake`]; only genuine invariant breaks and bad lookups
//! are errors.

/// Errors raised by prison logic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrisonError {
    /// A risk level outside 1..=3 reached the block mapping. Crime risk levels
    /// are fixed, so this is a defect rather than bad input.
    #[error("unexpected risk level: {0}")]
    InvalidRiskLevel(u8),

    /// A block name did not match any known block.
    #[error("unknown block name: {0:?}")]
    UnknownBlockName(String),
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, PrisonError>;
