use crate::chat_recorder::ChatTurnRecorder;
use crate::database::financial_records as db;
use crate::database::Database;
use crate::handlers::bad_request;
use crate::handlers::settings::SettingsAppState;
use crate::helpers::currency::format_idr;
use crate::helpers::validators;
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use shared_types::{
    CategoriesResponse, CreateExpenseRequest, ExtractTextRequest, ExtractTextResponse,
    FinancialRecord, FinancialRecordsResponse, RecordSource, TransactionType,
};
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize)]
pub struct ListRecordsQuery {
    limit: Option<usize>,
}

pub async fn list_records(
    db: web::Data<Arc<Database>>,
    query: web::Query<ListRecordsQuery>,
) -> ActixResult<HttpResponse> {
    let records = db::list_financial_records(db.connection.clone(), query.limit.unwrap_or(100))
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(FinancialRecordsResponse { records }))
}

pub async fn create_expense(
    db: web::Data<Arc<Database>>,
    request: web::Json<CreateExpenseRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    validators::validate_expense(&request).map_err(bad_request)?;

    let now = chrono::Utc::now().timestamp();
    let record = FinancialRecord {
        id: 0,
        description: request.description.trim().to_string(),
        amount: request.amount,
        transaction_type: TransactionType::Expense,
        category: request.category.trim().to_string(),
        source: RecordSource::Manual,
        occurred_on: request.occurred_on.unwrap_or_else(|| db::ledger_date(now)),
        created_at: now,
    };

    let record = db::insert_financial_record(db.connection.clone(), &record)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    info!(
        "Added expense {} ({}) on {}",
        format_idr(record.amount),
        record.category,
        record.occurred_on
    );

    Ok(HttpResponse::Created().json(record))
}

#[derive(Deserialize)]
pub struct SummaryQuery {
    start_date: String,
    end_date: String,
}

pub async fn get_summary(
    db: web::Data<Arc<Database>>,
    settings: web::Data<SettingsAppState>,
    query: web::Query<SummaryQuery>,
) -> ActixResult<HttpResponse> {
    validators::validate_date_range(&query.start_date, &query.end_date).map_err(bad_request)?;

    let summary = db::get_financial_summary(
        db.connection.clone(),
        &query.start_date,
        &query.end_date,
        &settings.config.ledger.currency,
    )
    .await
    .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(summary))
}

pub async fn extract_text(
    recorder: web::Data<Arc<ChatTurnRecorder>>,
    request: web::Json<ExtractTextRequest>,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ExtractTextResponse {
        candidate: recorder.preview(&request.text),
    }))
}

pub async fn list_categories(settings: web::Data<SettingsAppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(CategoriesResponse {
        categories: settings.config.ledger.categories.clone(),
    }))
}
