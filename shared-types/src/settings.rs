use crate::financial::TransactionType;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Knobs for reading financial records out of assistant replies.
///
/// Every field has a default so a config file may set only what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
pub struct ExtractorSettings {
    /// Glyph the assistant puts in replies that record money coming in
    pub income_marker: String,
    /// Glyph the assistant puts in replies that record money going out
    pub expense_marker: String,
    /// Used when a reply carries neither marker
    pub default_type: TransactionType,
    /// Field names accepted in "<label>: <category>" lines, matched case-insensitively
    pub category_labels: Vec<String>,
    /// Searched in order when no labeled category is present
    pub category_keywords: Vec<String>,
    pub fallback_category: String,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            income_marker: "💰".to_string(),
            expense_marker: "💸".to_string(),
            default_type: TransactionType::Expense,
            category_labels: vec!["Kategori".to_string(), "Category".to_string()],
            category_keywords: vec![
                "food".to_string(),
                "electronics".to_string(),
                "transportation".to_string(),
                "entertainment".to_string(),
                "shopping".to_string(),
            ],
            fallback_category: "other".to_string(),
        }
    }
}

/// Response for settings endpoint
#[derive(Debug, Serialize, Deserialize, TS)]
pub struct SettingsResponse {
    pub config_file_path: String,
    pub database_path: String,
    pub extractor: ExtractorSettings,
}
