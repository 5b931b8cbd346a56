use actix_web::{http::header::LOCATION, web, HttpRequest, HttpResponse, Responder};
use log::{debug, info};

use crate::{
    config::Config,
    errors::AppError,
    models::CreateShortLinkDto,
    services::{ShortLinkServiceTrait, ShortLinkServiceType},
    types::Result,
};

/// Root banner, doubles as a liveness probe
pub async fn index_handler(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!(
            "{} is live. POST to /shorten to create.\n",
            config.app.name
        ))
}

/// Create short link route handler
pub async fn create_handler(
    dto: web::Json<CreateShortLinkDto>,
    service: web::Data<ShortLinkServiceType>,
) -> Result<impl Responder> {
    let link = service.create(dto.into_inner()).await?;
    Ok(HttpResponse::Created().json(link))
}

/// Redirect route handler
pub async fn redirect_handler(
    path: web::Path<String>,
    service: web::Data<ShortLinkServiceType>,
) -> Result<impl Responder> {
    let short_code = path.into_inner();
    debug!("Redirect requested for code: {}", short_code);

    let target = service.resolve(&short_code).await?;

    info!("Redirecting '{}' to '{}'", short_code, target);

    Ok(HttpResponse::MovedPermanently()
        .insert_header((LOCATION, target))
        .finish())
}

/// Fallback for a known path hit with the wrong method
pub async fn method_not_allowed_handler(req: HttpRequest) -> Result<HttpResponse> {
    Err(AppError::MethodNotAllowed(format!(
        "{} {}",
        req.method(),
        req.path()
    )))
}

/// Fallback for paths no resource matches
pub async fn not_found_handler(req: HttpRequest) -> Result<HttpResponse> {
    Err(AppError::NotFound(format!("No route for {}", req.path())))
}
