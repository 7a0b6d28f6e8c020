//! Common utilities module
//!
//! This module contains the error types shared across the analysis engine.

pub mod error;

pub use error::{AnalysisError, InvalidInputError, Result};
