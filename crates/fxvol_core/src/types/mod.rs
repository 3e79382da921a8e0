//! Shared types for the pricing and solver layers.
//!
//! This module provides:
//! - `DomainLimits`: admissible input bands (`limits`)
//! - `DomainError`, `SolverError`: structured error types (`error`)

pub mod error;
pub mod limits;

pub use error::{DomainError, SolverError};
pub use limits::DomainLimits;
