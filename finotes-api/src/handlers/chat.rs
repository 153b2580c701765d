use crate::chat_recorder::ChatTurnRecorder;
use crate::database::chat_messages as db;
use crate::database::Database;
use crate::handlers::bad_request;
use crate::helpers::validators;
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use shared_types::{ChatMessagesResponse, ChatTurnRequest};
use std::sync::Arc;

pub async fn record_turn(
    recorder: web::Data<Arc<ChatTurnRecorder>>,
    request: web::Json<ChatTurnRequest>,
) -> ActixResult<HttpResponse> {
    validators::validate_chat_turn(&request).map_err(bad_request)?;

    let outcome = recorder
        .record_turn(&request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(outcome))
}

#[derive(Deserialize)]
pub struct ListMessagesQuery {
    limit: Option<usize>,
}

pub async fn list_messages(
    db: web::Data<Arc<Database>>,
    query: web::Query<ListMessagesQuery>,
) -> ActixResult<HttpResponse> {
    let messages = db::list_chat_messages(db.connection.clone(), query.limit.unwrap_or(100))
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(ChatMessagesResponse { messages }))
}
