use regex::Regex;
use shared_types::ExtractionError;
use std::ops::Range;

/// How a category was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryMatch {
    /// From a "<label>: <value>" field; `span` covers the whole field
    Labeled { value: String, span: Range<usize> },
    Keyword(String),
    Fallback(String),
}

impl CategoryMatch {
    pub fn name(&self) -> &str {
        match self {
            CategoryMatch::Labeled { value, .. } => value,
            CategoryMatch::Keyword(keyword) => keyword,
            CategoryMatch::Fallback(name) => name,
        }
    }
}

/// Resolves a category with precedence labeled field > keyword > fallback
pub struct CategoryResolver {
    label_regex: Option<Regex>,
    keywords: Vec<(String, String)>, // (as configured, lowercased)
    fallback: String,
}

impl CategoryResolver {
    pub fn new(
        labels: &[String],
        keywords: &[String],
        fallback: &str,
    ) -> Result<Self, ExtractionError> {
        if labels.iter().any(|l| l.trim().is_empty()) {
            return Err(ExtractionError::ConfigError(
                "category labels must not be blank".to_string(),
            ));
        }
        if keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ExtractionError::ConfigError(
                "category keywords must not be blank".to_string(),
            ));
        }
        if fallback.trim().is_empty() {
            return Err(ExtractionError::ConfigError(
                "fallback category must not be blank".to_string(),
            ));
        }

        let label_regex = if labels.is_empty() {
            None
        } else {
            let alternatives = labels
                .iter()
                .map(|l| regex::escape(l.trim()))
                .collect::<Vec<_>>()
                .join("|");
            // Tolerates markdown emphasis around the label, e.g. "**Kategori:** makanan"
            let pattern = format!(r"(?i)[*_]*\b(?:{alternatives})[*_]*[ \t]*:[ \t]*([^\r\n]*)");
            Some(Regex::new(&pattern).map_err(|e| ExtractionError::PatternError(e.to_string()))?)
        };

        Ok(Self {
            label_regex,
            keywords: keywords
                .iter()
                .map(|k| (k.trim().to_string(), k.trim().to_lowercase()))
                .collect(),
            fallback: fallback.trim().to_string(),
        })
    }

    pub fn resolve(&self, text: &str) -> CategoryMatch {
        if let Some(labeled) = self.labeled(text) {
            return labeled;
        }

        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .find(|(_, needle)| lowered.contains(needle.as_str()))
            .map(|(keyword, _)| CategoryMatch::Keyword(keyword.clone()))
            .unwrap_or_else(|| CategoryMatch::Fallback(self.fallback.clone()))
    }

    fn labeled(&self, text: &str) -> Option<CategoryMatch> {
        let captures = self.label_regex.as_ref()?.captures(text)?;
        let whole = captures.get(0)?;
        let value = captures
            .get(1)?
            .as_str()
            .trim_matches(|c: char| c.is_whitespace() || c == '*' || c == '_');

        if value.is_empty() {
            return None;
        }

        Some(CategoryMatch::Labeled {
            value: value.to_string(),
            span: whole.range(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ExtractorSettings;

    fn resolver() -> CategoryResolver {
        let settings = ExtractorSettings::default();
        CategoryResolver::new(
            &settings.category_labels,
            &settings.category_keywords,
            &settings.fallback_category,
        )
        .unwrap()
    }

    #[test]
    fn test_labeled_field() {
        let text = "Beli nasi goreng\nKategori: makanan\nSemoga kenyang";
        match resolver().resolve(text) {
            CategoryMatch::Labeled { value, span } => {
                assert_eq!(value, "makanan");
                assert_eq!(&text[span], "Kategori: makanan");
            }
            other => panic!("Expected labeled category, got {:?}", other),
        }
    }

    #[test]
    fn test_label_is_case_insensitive() {
        let found = resolver().resolve("CATEGORY:   Transport  ");
        assert_eq!(found.name(), "Transport");
    }

    #[test]
    fn test_label_with_markdown_emphasis() {
        let found = resolver().resolve("**Kategori:** makanan");
        assert_eq!(found.name(), "makanan");
    }

    #[test]
    fn test_label_beats_keyword() {
        let found = resolver().resolve("Bought food for the trip\nCategory: travel");
        assert_eq!(found.name(), "travel");
    }

    #[test]
    fn test_empty_label_falls_back_to_keywords() {
        let found = resolver().resolve("Category:\nsome shopping today");
        assert_eq!(found, CategoryMatch::Keyword("shopping".to_string()));
    }

    #[test]
    fn test_keywords_in_list_order() {
        // "entertainment" appears first in the text but "food" comes first in the list
        let found = resolver().resolve("Entertainment and FOOD at the mall");
        assert_eq!(found, CategoryMatch::Keyword("food".to_string()));
    }

    #[test]
    fn test_fallback() {
        let found = resolver().resolve("Bayar kos bulan ini");
        assert_eq!(found, CategoryMatch::Fallback("other".to_string()));
    }

    #[test]
    fn test_label_inside_word_is_ignored() {
        let found = resolver().resolve("Subcategory: misc");
        assert_eq!(found, CategoryMatch::Fallback("other".to_string()));
    }

    #[test]
    fn test_blank_config_is_rejected() {
        assert!(CategoryResolver::new(&["  ".to_string()], &[], "other").is_err());
        assert!(CategoryResolver::new(&[], &[], "").is_err());
        assert!(CategoryResolver::new(&[], &[], "other").is_ok());
    }
}
