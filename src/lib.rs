//! OCR pipeline for handwriting samples
//!
//! Two core operations invoked sequentially: a preprocessing pipeline that
//! turns an input image into a cleaned black/white bitmap, and a text
//! enhancement pass applied to raw recognition output. The recognition
//! engine sits behind the [`engine::RecognitionEngine`] trait; a
//! Tesseract-backed implementation is available behind the
//! `engine-tesseract` feature.

pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod preprocessing;
pub mod processor;
pub mod text;

pub use config::{EngineConfig, EngineMode, PageSegMode};
pub use error::OcrError;
pub use processor::{OcrOutput, OcrProcessor};
