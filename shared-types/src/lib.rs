use serde::{Deserialize, Serialize};

pub mod chat;
pub mod extraction;
pub mod financial;
pub mod profile;
pub mod settings;

pub use chat::{ChatMessage, ChatMessagesResponse, ChatTurnOutcome, ChatTurnRequest, MessageSender};
pub use extraction::{ExtractionError, RecordExtractor};
pub use financial::{
    CategoriesResponse, CategoryBreakdown, CreateExpenseRequest, ExtractTextRequest,
    ExtractTextResponse, FinancialRecord, FinancialRecordCandidate, FinancialRecordsResponse,
    FinancialSummary, RecordSource, TransactionType,
};
pub use profile::{UpdateProfileRequest, UserProfile};
pub use settings::{ExtractorSettings, SettingsResponse};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
