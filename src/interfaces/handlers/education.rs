use actix_web::{HttpResponse, Responder, web};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::{
    AppState,
    entities::{EducationUpdate, NewEducation},
    errors::AppError,
    repositories::education::EducationRepository,
};

#[instrument(skip(state))]
pub async fn get_all_education(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let records = state.store.list_education().await?;
    Ok(HttpResponse::Ok().json(records))
}

#[instrument(skip(state, data))]
pub async fn create_education(
    state: web::Data<AppState>,
    data: web::Json<NewEducation>,
) -> Result<impl Responder, AppError> {
    data.validate()?;
    let created = state.store.create_education(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[instrument(skip(state, data))]
pub async fn update_education(
    education_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<EducationUpdate>,
) -> Result<impl Responder, AppError> {
    data.validate()?;
    let updated = state
        .store
        .update_education(education_id.into_inner(), &data)
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[instrument(skip(state))]
pub async fn delete_education(
    education_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state
        .store
        .delete_education(education_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Education deleted successfully"
    })))
}
