//! Image preprocessing module for OCR enhancement
//!
//! Converts an input image into a cleaned black/white bitmap that is easier
//! for a recognition engine to read.

pub mod pipeline;
pub mod steps;

pub use pipeline::{Pipeline, PreprocessResult, StepTiming};
