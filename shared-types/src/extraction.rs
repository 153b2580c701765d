use crate::financial::FinancialRecordCandidate;

/// Seam between the chat recorder and whatever reads records out of text
pub trait RecordExtractor {
    /// Read a financial record out of `text`, or `None` when the text does not describe one
    fn extract(&self, text: &str) -> Option<FinancialRecordCandidate>;

    /// Get extractor version for tracking
    fn version(&self) -> String {
        "1.0.0".to_string()
    }
}

/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid pattern: {0}")]
    PatternError(String),
}
