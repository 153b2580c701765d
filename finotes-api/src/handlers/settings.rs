use crate::config::ApiConfig;
use actix_web::{web, HttpResponse, Result};
use shared_types::SettingsResponse;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct SettingsAppState {
    pub config: Arc<ApiConfig>,
    pub config_path: PathBuf,
    pub db_path: PathBuf,
}

pub async fn get_settings(data: web::Data<SettingsAppState>) -> Result<HttpResponse> {
    let response = SettingsResponse {
        config_file_path: data.config_path.to_string_lossy().to_string(),
        database_path: data.db_path.to_string_lossy().to_string(),
        extractor: data.config.extractor.clone(),
    };

    Ok(HttpResponse::Ok().json(response))
}
