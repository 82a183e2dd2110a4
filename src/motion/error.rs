// src/motion/error.rs
use thiserror::Error;

/// Failure modes of the profile solver.
///
/// The solver never panics and never propagates a lower-level numerical
/// failure directly: a NaN or out-of-bounds candidate is simply rejected by
/// `Profile::check` and the dispatcher moves on to the next shape. The only
/// externally visible failure is exhaustion of all sixteen shape/direction
/// variants.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProfileError {
    #[error("no feasible seven-segment shape satisfies the bounds and target state")]
    NoFeasibleShape,
}
