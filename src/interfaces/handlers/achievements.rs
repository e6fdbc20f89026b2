use actix_web::{HttpResponse, Responder, web};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::{
    AppState,
    entities::{AchievementUpdate, NewAchievement},
    errors::AppError,
    repositories::achievements::AchievementRepository,
};

#[instrument(skip(state))]
pub async fn get_all_achievements(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let records = state.store.list_achievements().await?;
    Ok(HttpResponse::Ok().json(records))
}

#[instrument(skip(state, data))]
pub async fn create_achievement(
    state: web::Data<AppState>,
    data: web::Json<NewAchievement>,
) -> Result<impl Responder, AppError> {
    data.validate()?;
    let created = state.store.create_achievement(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[instrument(skip(state, data))]
pub async fn update_achievement(
    achievement_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<AchievementUpdate>,
) -> Result<impl Responder, AppError> {
    data.validate()?;
    let updated = state
        .store
        .update_achievement(achievement_id.into_inner(), &data)
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[instrument(skip(state))]
pub async fn delete_achievement(
    achievement_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state
        .store
        .delete_achievement(achievement_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Achievement deleted successfully"
    })))
}
