use actix_web::{HttpResponse, Responder, web};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::{
    AppState,
    entities::{ExperienceUpdate, NewExperience},
    errors::AppError,
    repositories::experience::ExperienceRepository,
};

#[instrument(skip(state))]
pub async fn get_all_experience(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let records = state.store.list_experience().await?;
    Ok(HttpResponse::Ok().json(records))
}

#[instrument(skip(state, data))]
pub async fn create_experience(
    state: web::Data<AppState>,
    data: web::Json<NewExperience>,
) -> Result<impl Responder, AppError> {
    data.validate()?;
    let created = state.store.create_experience(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[instrument(skip(state, data))]
pub async fn update_experience(
    experience_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<ExperienceUpdate>,
) -> Result<impl Responder, AppError> {
    data.validate()?;
    let updated = state
        .store
        .update_experience(experience_id.into_inner(), &data)
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[instrument(skip(state))]
pub async fn delete_experience(
    experience_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state
        .store
        .delete_experience(experience_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Experience deleted successfully"
    })))
}
