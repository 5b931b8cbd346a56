use actix_web::web;

use crate::handlers::{create_handler, method_not_allowed_handler, redirect_handler};

// Configure short link routes; `/shorten` must be registered before `/{code}`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/shorten")
            .route(web::post().to(create_handler))
            .default_service(web::to(method_not_allowed_handler)),
    )
    .service(
        web::resource("/{code}")
            .route(web::get().to(redirect_handler))
            .default_service(web::to(method_not_allowed_handler)),
    );
}
