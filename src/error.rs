use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("preprocessing step '{step}' failed: {reason}")]
    Preprocess { step: &'static str, reason: String },

    #[error("failed to initialize recognition engine: {0}")]
    Initialization(String),

    #[error("recognition failed: {0}")]
    Recognition(String),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
