use actix_web::{error::InternalError, web};
use log::debug;

use crate::{
    errors::AppError,
    handlers::{index_handler, method_not_allowed_handler, not_found_handler},
};

mod short_link;

/// JSON extractor settings: any content type is accepted and every
/// decode failure becomes a plain 400
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            debug!("Rejected request body: {}", err);
            let response = actix_web::ResponseError::error_response(&AppError::Validation(
                err.to_string(),
            ));
            InternalError::from_response(err, response).into()
        })
}

// Configure all routes function
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.service(
        web::resource("/")
            .route(web::get().to(index_handler))
            .default_service(web::to(method_not_allowed_handler)),
    );
    short_link::configure_routes(cfg);
    cfg.default_service(web::to(not_found_handler));
}
