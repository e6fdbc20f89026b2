use actix_web::{HttpResponse, Responder, web};
use tracing::instrument;
use validator::Validate;

use crate::{
    AppState, entities::PersonalInfoUpdate, errors::AppError,
    repositories::personal_info::PersonalInfoRepository,
};

#[instrument(skip(state))]
pub async fn get_personal_info(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let info = state.store.get_personal_info().await?;
    Ok(HttpResponse::Ok().json(info))
}

#[instrument(skip(state, data))]
pub async fn update_personal_info(
    state: web::Data<AppState>,
    data: web::Json<PersonalInfoUpdate>,
) -> Result<impl Responder, AppError> {
    data.validate()?;
    let updated = state.store.update_personal_info(&data).await?;
    Ok(HttpResponse::Ok().json(updated))
}
