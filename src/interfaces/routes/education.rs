use actix_web::web;

use crate::handlers::education;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/education")
            .service(
                web::resource("")
                    .route(web::get().to(education::get_all_education))
                    .route(web::post().to(education::create_education)),
            )
            .service(
                web::resource("/{education_id}")
                    .route(web::put().to(education::update_education))
                    .route(web::delete().to(education::delete_education)),
            ),
    );
}
