use actix_web::web;

use crate::handlers::{home, system};

mod achievements;
mod education;
mod experience;
mod personal_info;
mod projects;
mod skills;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home::home);

    cfg.service(
        web::scope("/api")
            .service(web::resource("").route(web::get().to(home::api_root)))
            .service(system::health_check)
            .configure(personal_info::config_routes)
            .configure(experience::config_routes)
            .configure(projects::config_routes)
            .configure(skills::config_routes)
            .configure(education::config_routes)
            .configure(achievements::config_routes),
    );
}
