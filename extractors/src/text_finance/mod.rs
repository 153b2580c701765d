mod amount;
mod category;
mod extractor;

pub use amount::{scan_amount, scan_numeral, Magnitude, Numeral};
pub use category::{CategoryMatch, CategoryResolver};
pub use extractor::TextFinanceExtractor;
