use crate::text_finance::amount::scan_amount;
use crate::text_finance::category::{CategoryMatch, CategoryResolver};
use chrono::Utc;
use shared_types::{
    ExtractionError, ExtractorSettings, FinancialRecordCandidate, RecordExtractor,
    TransactionType,
};

/// Reads a financial record out of an assistant reply.
///
/// A reply becomes a record when it contains a positive amount. Direction comes
/// from the marker glyphs, category from a labeled field, a keyword, or the
/// configured fallback, in that order.
pub struct TextFinanceExtractor {
    income_marker: String,
    expense_marker: String,
    default_type: TransactionType,
    categories: CategoryResolver,
}

impl TextFinanceExtractor {
    pub fn new(settings: ExtractorSettings) -> Result<Self, ExtractionError> {
        if settings.income_marker.is_empty() || settings.expense_marker.is_empty() {
            return Err(ExtractionError::ConfigError(
                "income and expense markers must not be empty".to_string(),
            ));
        }
        if settings.income_marker == settings.expense_marker {
            return Err(ExtractionError::ConfigError(
                "income and expense markers must differ".to_string(),
            ));
        }

        let categories = CategoryResolver::new(
            &settings.category_labels,
            &settings.category_keywords,
            &settings.fallback_category,
        )?;

        Ok(Self {
            income_marker: settings.income_marker,
            expense_marker: settings.expense_marker,
            default_type: settings.default_type,
            categories,
        })
    }

    /// Extract with an explicit creation time
    pub fn extract_at(&self, text: &str, created_at: i64) -> Option<FinancialRecordCandidate> {
        let amount = scan_amount(text)?;
        if !(amount.is_finite() && amount > 0.0) {
            tracing::debug!("Ignoring non-positive amount {} in reply", amount);
            return None;
        }

        let category = self.categories.resolve(text);
        let description = match &category {
            CategoryMatch::Labeled { span, .. } => {
                let mut without_label = String::with_capacity(text.len());
                without_label.push_str(&text[..span.start]);
                without_label.push_str(&text[span.end..]);
                without_label.trim().to_string()
            }
            _ => text.trim().to_string(),
        };

        Some(FinancialRecordCandidate {
            description,
            amount,
            transaction_type: self.transaction_type(text),
            category: category.name().to_string(),
            created_at,
        })
    }

    fn transaction_type(&self, text: &str) -> TransactionType {
        if text.contains(&self.income_marker) {
            TransactionType::Income
        } else if text.contains(&self.expense_marker) {
            TransactionType::Expense
        } else {
            self.default_type
        }
    }
}

impl RecordExtractor for TextFinanceExtractor {
    fn extract(&self, text: &str) -> Option<FinancialRecordCandidate> {
        self.extract_at(text, Utc::now().timestamp())
    }
}
