use crate::database::profile as db;
use crate::database::Database;
use crate::handlers::bad_request;
use crate::handlers::settings::SettingsAppState;
use crate::helpers::validators;
use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{UpdateProfileRequest, UserProfile};
use std::sync::Arc;
use tracing::info;

pub async fn get_profile(
    db: web::Data<Arc<Database>>,
    settings: web::Data<SettingsAppState>,
) -> ActixResult<HttpResponse> {
    let profile = db::ensure_profile(db.connection.clone(), settings.config.profile.clone().into())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(profile))
}

pub async fn update_profile(
    db: web::Data<Arc<Database>>,
    settings: web::Data<SettingsAppState>,
    request: web::Json<UpdateProfileRequest>,
) -> ActixResult<HttpResponse> {
    let update = request.into_inner();
    validators::validate_profile_update(&update).map_err(bad_request)?;

    let mut profile: UserProfile =
        db::ensure_profile(db.connection.clone(), settings.config.profile.clone().into())
            .await
            .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    profile.apply(UpdateProfileRequest {
        name: update.name.map(|n| n.trim().to_string()),
        email: update.email.map(|e| e.trim().to_string()),
        phone: update.phone.map(|p| p.trim().to_string()),
        currency: update.currency.map(|c| c.trim().to_string()),
    });

    db::save_profile(db.connection.clone(), &profile)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    info!("Profile updated");

    Ok(HttpResponse::Ok().json(profile))
}
