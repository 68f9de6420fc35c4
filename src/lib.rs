//! Chromafilter - library crate.
//!
//! Provides the color-model conversion engine and the grayscale image
//! filter engine for use by the CLI binary and external frontends.

pub mod color;
pub mod error;
pub mod filter;
pub mod grid;
pub mod image_io;
