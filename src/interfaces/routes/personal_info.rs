use actix_web::web;

use crate::handlers::personal_info;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/personal-info")
            .route(web::get().to(personal_info::get_personal_info))
            .route(web::put().to(personal_info::update_personal_info)),
    );
}
