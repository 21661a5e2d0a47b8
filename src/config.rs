/// Recognition engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Expected layout of text in the image
    pub page_seg_mode: PageSegMode,
    /// Which recognition backend the engine should use internally
    pub engine_mode: EngineMode,
    /// Language for recognition (e.g., "eng", "deu", "fra")
    pub language: String,
    /// Path to tessdata directory (uses TESSDATA_PREFIX env var if not set)
    pub tessdata_path: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // Scanned handwriting samples are typically one contiguous
            // block of text rather than multi-column layout.
            page_seg_mode: PageSegMode::SingleBlock,
            engine_mode: EngineMode::Default,
            language: "eng".to_string(),
            tessdata_path: None,
        }
    }
}

/// Page segmentation modes, matching Tesseract's `--psm` numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSegMode {
    /// Fully automatic page segmentation (psm 3)
    Auto,
    /// Single column of text of variable sizes (psm 4)
    SingleColumn,
    /// Assume a single uniform block of text (psm 6)
    #[default]
    SingleBlock,
    /// Treat the image as a single text line (psm 7)
    SingleLine,
    /// Treat the image as a single word (psm 8)
    SingleWord,
    /// Sparse text in no particular order (psm 11)
    SparseText,
}

impl PageSegMode {
    /// Parse from a CLI argument string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "single-column" => Some(Self::SingleColumn),
            "single-block" => Some(Self::SingleBlock),
            "single-line" => Some(Self::SingleLine),
            "single-word" => Some(Self::SingleWord),
            "sparse" => Some(Self::SparseText),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::SingleColumn => "single-column",
            Self::SingleBlock => "single-block",
            Self::SingleLine => "single-line",
            Self::SingleWord => "single-word",
            Self::SparseText => "sparse",
        }
    }

    /// Numeric psm value understood by Tesseract
    pub fn value(&self) -> u32 {
        match self {
            Self::Auto => 3,
            Self::SingleColumn => 4,
            Self::SingleBlock => 6,
            Self::SingleLine => 7,
            Self::SingleWord => 8,
            Self::SparseText => 11,
        }
    }
}

/// Recognition backend modes, matching Tesseract's `--oem` numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineMode {
    /// Legacy engine only (oem 0)
    Legacy,
    /// Neural-net LSTM engine only (oem 1)
    LstmOnly,
    /// Legacy + LSTM combined (oem 2)
    Combined,
    /// Default, based on what is available (oem 3)
    #[default]
    Default,
}

impl EngineMode {
    /// Numeric oem value understood by Tesseract
    pub fn value(&self) -> u32 {
        match self {
            Self::Legacy => 0,
            Self::LstmOnly => 1,
            Self::Combined => 2,
            Self::Default => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_single_block() {
        let config = EngineConfig::default();
        assert_eq!(config.page_seg_mode.value(), 6);
        assert_eq!(config.engine_mode.value(), 3);
        assert_eq!(config.language, "eng");
    }

    #[test]
    fn test_page_seg_mode_round_trips_through_str() {
        for mode in [
            PageSegMode::Auto,
            PageSegMode::SingleColumn,
            PageSegMode::SingleBlock,
            PageSegMode::SingleLine,
            PageSegMode::SingleWord,
            PageSegMode::SparseText,
        ] {
            assert_eq!(PageSegMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(PageSegMode::from_str("bogus"), None);
    }
}
