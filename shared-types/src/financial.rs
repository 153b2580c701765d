use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Direction of money movement for a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

/// Where a ledger entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum RecordSource {
    Chat,
    Manual,
}

impl RecordSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSource::Chat => "chat",
            RecordSource::Manual => "manual",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "chat" => Some(RecordSource::Chat),
            "manual" => Some(RecordSource::Manual),
            _ => None,
        }
    }
}

/// Financial record read out of an assistant reply, before it is stored.
///
/// Built once per chat turn and handed straight to the ledger; it carries no
/// identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct FinancialRecordCandidate {
    pub description: String,
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub category: String,
    pub created_at: i64,
}

/// Ledger entry as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct FinancialRecord {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub category: String,
    pub source: RecordSource,
    pub occurred_on: String, // YYYY-MM-DD
    pub created_at: i64,
}

/// Request to add an expense from the ledger tab
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateExpenseRequest {
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub occurred_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct FinancialRecordsResponse {
    pub records: Vec<FinancialRecord>,
}

/// Request for a dry-run extraction
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ExtractTextRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ExtractTextResponse {
    pub candidate: Option<FinancialRecordCandidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Financial summary/overview
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_balance: f64,
    pub currency: String,
    pub period_start: String,
    pub period_end: String,
    pub category_breakdown: Vec<CategoryBreakdown>,
}

/// Expense breakdown by category
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
    pub transaction_count: i32,
}
