use crate::database::AsyncDbConnection;
use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use shared_types::{
    CategoryBreakdown, FinancialRecord, FinancialRecordCandidate, FinancialSummary, RecordSource,
    TransactionType,
};

/// Ledger date (YYYY-MM-DD, UTC) for a unix timestamp
pub fn ledger_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or_else(Utc::now)
        .format("%Y-%m-%d")
        .to_string()
}

/// Build an unsaved ledger entry from an extracted candidate
pub fn record_from_candidate(
    candidate: &FinancialRecordCandidate,
    source: RecordSource,
) -> FinancialRecord {
    FinancialRecord {
        id: 0,
        description: candidate.description.clone(),
        amount: candidate.amount,
        transaction_type: candidate.transaction_type,
        category: candidate.category.clone(),
        source,
        occurred_on: ledger_date(candidate.created_at),
        created_at: candidate.created_at,
    }
}

/// Insert `record` (its `id` is ignored) and return it with the assigned id
pub async fn insert_financial_record(
    conn: AsyncDbConnection,
    record: &FinancialRecord,
) -> Result<FinancialRecord> {
    let conn = conn.lock().await?;

    let id: i64 = conn.query_row(
        "INSERT INTO financial_records
         (description, amount, transaction_type, category, source, occurred_on, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         RETURNING id",
        params![
            &record.description,
            record.amount,
            record.transaction_type.as_str(),
            &record.category,
            record.source.as_str(),
            &record.occurred_on,
            record.created_at,
        ],
        |row| row.get(0),
    )?;

    Ok(FinancialRecord {
        id,
        ..record.clone()
    })
}

fn record_from_row(row: &Row) -> rusqlite::Result<FinancialRecord> {
    let type_str: String = row.get(3)?;
    let source_str: String = row.get(5)?;

    Ok(FinancialRecord {
        id: row.get(0)?,
        description: row.get(1)?,
        amount: row.get(2)?,
        // The table CHECK constraints keep these in range
        transaction_type: TransactionType::parse(&type_str).unwrap_or(TransactionType::Expense),
        category: row.get(4)?,
        source: RecordSource::parse(&source_str).unwrap_or(RecordSource::Manual),
        occurred_on: row.get(6)?,
        created_at: row.get(7)?,
    })
}

/// Most recent entries first
pub async fn list_financial_records(
    conn: AsyncDbConnection,
    limit: usize,
) -> Result<Vec<FinancialRecord>> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(
        "SELECT id, description, amount, transaction_type, category, source, occurred_on, created_at
         FROM financial_records
         ORDER BY occurred_on DESC, id DESC
         LIMIT ?",
    )?;

    let rows = stmt.query_map([limit as i64], record_from_row)?;

    let mut records = Vec::new();
    for row_result in rows {
        records.push(row_result?);
    }

    Ok(records)
}

/// Totals for entries with `start_date <= occurred_on <= end_date`
pub async fn get_financial_summary(
    conn: AsyncDbConnection,
    start_date: &str,
    end_date: &str,
    currency: &str,
) -> Result<FinancialSummary> {
    let conn = conn.lock().await?;

    let total_income: f64 = conn.query_row(
        "SELECT COALESCE(SUM(amount), 0.0)
         FROM financial_records
         WHERE transaction_type = 'income'
           AND occurred_on >= ?
           AND occurred_on <= ?",
        [start_date, end_date],
        |row| row.get(0),
    )?;

    let total_expenses: f64 = conn.query_row(
        "SELECT COALESCE(SUM(amount), 0.0)
         FROM financial_records
         WHERE transaction_type = 'expense'
           AND occurred_on >= ?
           AND occurred_on <= ?",
        [start_date, end_date],
        |row| row.get(0),
    )?;

    let mut stmt = conn.prepare(
        "SELECT category, SUM(amount) AS total, COUNT(*)
         FROM financial_records
         WHERE transaction_type = 'expense'
           AND occurred_on >= ?
           AND occurred_on <= ?
         GROUP BY category
         ORDER BY total DESC, category ASC",
    )?;

    let rows = stmt.query_map([start_date, end_date], |row| {
        let amount: f64 = row.get(1)?;
        Ok(CategoryBreakdown {
            category: row.get(0)?,
            amount,
            percentage: if total_expenses > 0.0 {
                amount / total_expenses * 100.0
            } else {
                0.0
            },
            transaction_count: row.get(2)?,
        })
    })?;

    let mut category_breakdown = Vec::new();
    for row_result in rows {
        category_breakdown.push(row_result?);
    }

    Ok(FinancialSummary {
        total_income,
        total_expenses,
        net_balance: total_income - total_expenses,
        currency: currency.to_string(),
        period_start: start_date.to_string(),
        period_end: end_date.to_string(),
        category_breakdown,
    })
}
