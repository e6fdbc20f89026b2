use actix_web::web;

use crate::handlers::achievements;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/achievements")
            .service(
                web::resource("")
                    .route(web::get().to(achievements::get_all_achievements))
                    .route(web::post().to(achievements::create_achievement)),
            )
            .service(
                web::resource("/{achievement_id}")
                    .route(web::put().to(achievements::update_achievement))
                    .route(web::delete().to(achievements::delete_achievement)),
            ),
    );
}
