use actix_web::{HttpResponse, Responder, web};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::{
    AppState,
    entities::{NewProject, ProjectUpdate},
    errors::AppError,
    repositories::projects::ProjectRepository,
};

#[instrument(skip(state))]
pub async fn get_all_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.store.list_projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_featured_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.store.featured_projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state, data))]
pub async fn create_project(
    state: web::Data<AppState>,
    data: web::Json<NewProject>,
) -> Result<impl Responder, AppError> {
    data.validate()?;
    let created = state.store.create_project(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[instrument(skip(state, data))]
pub async fn update_project(
    project_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<ProjectUpdate>,
) -> Result<impl Responder, AppError> {
    data.validate()?;
    let updated = state
        .store
        .update_project(project_id.into_inner(), &data)
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[instrument(skip(state))]
pub async fn delete_project(
    project_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.store.delete_project(project_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Project deleted successfully"
    })))
}
