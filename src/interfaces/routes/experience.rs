use actix_web::web;

use crate::handlers::experience;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/experience")
            .service(
                web::resource("")
                    .route(web::get().to(experience::get_all_experience))
                    .route(web::post().to(experience::create_experience)),
            )
            .service(
                web::resource("/{experience_id}")
                    .route(web::put().to(experience::update_experience))
                    .route(web::delete().to(experience::delete_experience)),
            ),
    );
}
