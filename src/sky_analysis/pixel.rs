//! Pixel buffer module
//!
//! This module provides the decoded-image view the analyzer consumes and the
//! shared luminance utilities built on top of it.

pub mod luminance;
pub mod types;

pub use types::PixelBuffer;
