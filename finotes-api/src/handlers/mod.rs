pub mod chat;
pub mod financial;
pub mod profile;
pub mod settings;

use actix_web::{error::InternalError, HttpResponse};
use shared_types::ErrorResponse;

/// 400 with a JSON `ErrorResponse` body
pub(crate) fn bad_request(err: impl std::fmt::Display) -> actix_web::Error {
    let message = err.to_string();
    InternalError::from_response(
        message.clone(),
        HttpResponse::BadRequest().json(ErrorResponse { error: message }),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use crate::chat_recorder::ChatTurnRecorder;
    use crate::config::ApiConfig;
    use crate::database::Database;
    use crate::handlers::settings::SettingsAppState;
    use actix_web::{http::StatusCode, test, web, App};
    use extractors::TextFinanceExtractor;
    use serde_json::{json, Value};
    use std::sync::Arc;

    struct TestState {
        db: Arc<Database>,
        recorder: Arc<ChatTurnRecorder>,
        settings: SettingsAppState,
        _dir: tempfile::TempDir,
    }

    fn test_state() -> TestState {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.sqlite3");
        let db = Arc::new(Database::new(&db_path).unwrap());
        let config = ApiConfig::default();
        let extractor = TextFinanceExtractor::new(config.extractor.clone()).unwrap();
        let recorder = Arc::new(ChatTurnRecorder::new(db.connection.clone(), Arc::new(extractor)));
        let settings = SettingsAppState {
            config: Arc::new(config),
            config_path: dir.path().join("api.toml"),
            db_path,
        };

        TestState {
            db,
            recorder,
            settings,
            _dir: dir,
        }
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.db.clone()))
                    .app_data(web::Data::new($state.recorder.clone()))
                    .app_data(web::Data::new($state.settings.clone()))
                    .configure(crate::configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_chat_turn_routes_to_ledger() {
        let state = test_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/chat/turns")
            .set_json(json!({
                "user_message": "beli headphone 350rb",
                "assistant_reply": "💸 Headphone baru 350rb, electronics"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["outcome"], "record");
        assert_eq!(body["record"]["amount"], 350_000.0);
        assert_eq!(body["record"]["category"], "electronics");
        assert_eq!(body["record"]["source"], "chat");

        let req = test::TestRequest::get().uri("/api/financial/records").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["records"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_chat_turn_routes_to_message_log() {
        let state = test_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/chat/turns")
            .set_json(json!({
                "user_message": "halo",
                "assistant_reply": "Halo! Mau catat pengeluaran apa hari ini?"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["outcome"], "message");

        let req = test::TestRequest::get().uri("/api/chat/messages").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["sender"], "user");
        assert_eq!(messages[1]["sender"], "assistant");
    }

    #[actix_web::test]
    async fn test_empty_chat_turn_is_rejected() {
        let state = test_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/chat/turns")
            .set_json(json!({ "user_message": "   ", "assistant_reply": "ok" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "user_message must not be empty");
    }

    #[actix_web::test]
    async fn test_expense_and_summary() {
        let state = test_state();
        let app = test_app!(state);

        for (category, description, amount, date) in [
            ("Food", "Lunch at restaurant", 75_000.0, "2023-06-15"),
            ("Transportation", "Taxi fare", 45_000.0, "2023-06-16"),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/financial/expenses")
                .set_json(json!({
                    "category": category,
                    "description": description,
                    "amount": amount,
                    "occurred_on": date
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get()
            .uri("/api/financial/summary?start_date=2023-06-01&end_date=2023-06-30")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total_expenses"], 120_000.0);
        assert_eq!(body["net_balance"], -120_000.0);
        assert_eq!(body["currency"], "IDR");
        assert_eq!(body["category_breakdown"][0]["category"], "Food");
    }

    #[actix_web::test]
    async fn test_invalid_expense_is_rejected() {
        let state = test_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/financial/expenses")
            .set_json(json!({ "category": "Food", "description": "Lunch", "amount": 0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_summary_rejects_bad_dates() {
        let state = test_state();
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri("/api/financial/summary?start_date=2023-06-30&end_date=2023-06-01")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_extract_preview() {
        let state = test_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/financial/extract")
            .set_json(json!({ "text": "💰 Bonus 2.5jt\nKategori: bonus" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["candidate"]["amount"], 2_500_000.0);
        assert_eq!(body["candidate"]["transaction_type"], "income");
        assert_eq!(body["candidate"]["description"], "💰 Bonus 2.5jt");

        let req = test::TestRequest::post()
            .uri("/api/financial/extract")
            .set_json(json!({ "text": "tidak ada angka" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["candidate"].is_null());
    }

    #[actix_web::test]
    async fn test_profile_defaults_and_update() {
        let state = test_state();
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "Alex Johnson");
        assert_eq!(body["currency"], "IDR (Rp)");

        let req = test::TestRequest::put()
            .uri("/api/profile")
            .set_json(json!({ "name": "  Sari  ", "email": "sari@example.com" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "Sari");
        assert_eq!(body["phone"], "+62 812 3456 7890");

        let req = test::TestRequest::put()
            .uri("/api/profile")
            .set_json(json!({ "email": "not-an-email" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_categories_settings_and_health() {
        let state = test_state();
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/api/financial/categories").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["categories"][0], "Food");
        assert_eq!(body["categories"].as_array().unwrap().len(), 8);

        let req = test::TestRequest::get().uri("/settings").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["extractor"]["default_type"], "expense");
        assert!(body["database_path"].as_str().unwrap().ends_with("test.sqlite3"));

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
    }
}
