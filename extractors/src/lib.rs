//! Extractors Crate
//!
//! This crate reads structured financial records out of free text, such as the
//! replies a language model gives in the Finotes chat.
//!
//! # Architecture
//!
//! - **Types**: Record types and the `RecordExtractor` trait are defined in the `shared-types` crate
//! - **Implementations**: Concrete extractors are implemented in this crate
//!
//! # Available Extractors
//!
//! - `TextFinanceExtractor`: Amount, direction, and category from an assistant reply
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::TextFinanceExtractor;
//! use shared_types::{ExtractorSettings, RecordExtractor};
//!
//! let extractor = TextFinanceExtractor::new(ExtractorSettings::default())?;
//! let candidate = extractor.extract("💸 Makan siang 45rb\nKategori: makanan");
//! ```

pub mod text_finance;

// Re-export commonly used types
pub use text_finance::TextFinanceExtractor;

// Re-export the RecordExtractor trait from shared-types for convenience
pub use shared_types::RecordExtractor;
