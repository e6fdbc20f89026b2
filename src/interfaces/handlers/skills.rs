use actix_web::{HttpResponse, Responder, web};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::{
    AppState,
    entities::{NewSkill, SkillUpdate},
    errors::AppError,
    repositories::skills::SkillRepository,
};

#[instrument(skip(state))]
pub async fn get_all_skills(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let skills = state.store.list_skills().await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(state, data))]
pub async fn create_skill(
    state: web::Data<AppState>,
    data: web::Json<NewSkill>,
) -> Result<impl Responder, AppError> {
    data.validate()?;
    let created = state.store.create_skill(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[instrument(skip(state, data))]
pub async fn update_skill(
    skill_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<SkillUpdate>,
) -> Result<impl Responder, AppError> {
    data.validate()?;
    let updated = state.store.update_skill(skill_id.into_inner(), &data).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[instrument(skip(state))]
pub async fn delete_skill(
    skill_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.store.delete_skill(skill_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Skill deleted successfully"
    })))
}
