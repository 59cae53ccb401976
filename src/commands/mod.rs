//! Command implementations

pub mod challenge;
pub mod share;
pub mod simple;
pub mod verify;

pub use challenge::Challenge;
pub use share::{ShareError, saved_summary};
pub use simple::run_simple;
pub use verify::{PoolProblem, ProblemKind, VerifyReport, verify_pool};
