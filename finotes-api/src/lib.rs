pub mod chat_recorder;
pub mod config;
pub mod database;
pub mod handlers;
pub mod helpers;

pub use database::Database;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

async fn health(db: web::Data<Arc<Database>>) -> impl Responder {
    // Test database connection
    match db.connection.lock().await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "database": "connected"
        })),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "status": "unhealthy",
                "database": "disconnected"
            }))
        }
    }
}

/// Register every route. Expects `Arc<Database>`, `Arc<ChatTurnRecorder>` and
/// `SettingsAppState` as app data.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/settings", web::get().to(handlers::settings::get_settings))
        .route("/api/chat/turns", web::post().to(handlers::chat::record_turn))
        .route("/api/chat/messages", web::get().to(handlers::chat::list_messages))
        .route("/api/financial/records", web::get().to(handlers::financial::list_records))
        .route("/api/financial/expenses", web::post().to(handlers::financial::create_expense))
        .route("/api/financial/summary", web::get().to(handlers::financial::get_summary))
        .route("/api/financial/extract", web::post().to(handlers::financial::extract_text))
        .route("/api/financial/categories", web::get().to(handlers::financial::list_categories))
        .route("/api/profile", web::get().to(handlers::profile::get_profile))
        .route("/api/profile", web::put().to(handlers::profile::update_profile));
}
