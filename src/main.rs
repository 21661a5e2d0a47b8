use clap::Parser;
use handwriting_ocr::{EngineConfig, OcrProcessor, PageSegMode};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "handwriting-ocr")]
#[command(about = "Recognize handwritten or printed text in an image")]
#[command(version)]
pub struct Args {
    /// Image file to recognize
    pub image: PathBuf,

    /// Language for recognition (e.g., "eng", "deu", "fra")
    #[arg(long, env = "OCR_LANGUAGE", default_value = "eng")]
    pub language: String,

    /// Path to tessdata directory (uses TESSDATA_PREFIX env var if not set)
    #[arg(long, env = "TESSDATA_PREFIX")]
    pub tessdata_path: Option<String>,

    /// Page segmentation hint: auto, single-column, single-block,
    /// single-line, single-word, sparse
    #[arg(long, default_value = "single-block")]
    pub page_seg_mode: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let page_seg_mode = PageSegMode::from_str(&args.page_seg_mode).ok_or_else(|| {
        anyhow::anyhow!("unknown page segmentation mode: {}", args.page_seg_mode)
    })?;

    let config = EngineConfig {
        page_seg_mode,
        language: args.language,
        tessdata_path: args.tessdata_path,
        ..EngineConfig::default()
    };

    tracing::info!(
        "Starting handwriting-ocr v{} (psm: {})",
        env!("CARGO_PKG_VERSION"),
        config.page_seg_mode.as_str()
    );

    let processor = OcrProcessor::new(config)?;
    let output = processor.process_path(&args.image)?;

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
