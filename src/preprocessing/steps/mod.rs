//! Individual preprocessing steps

pub mod blur;
pub mod grayscale;
pub mod morphology;
pub mod threshold;
