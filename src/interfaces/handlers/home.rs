use actix_web::{HttpResponse, Responder, get};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Portfolio API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "api": "/api",
        "health": "/api/health"
    }))
}

pub async fn api_root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Portfolio API is running!"
    }))
}
