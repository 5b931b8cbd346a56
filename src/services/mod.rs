use std::sync::Arc;

use actix_web::web;

mod short_link;

pub use short_link::{ShortLinkService, ShortLinkServiceTrait};

use crate::{
    config::ShortenerConfig, db::Database, repositories::ShortLinkRepository,
    utils::CodeGenerator,
};

pub type ShortLinkServiceType = ShortLinkService<ShortLinkRepository>;

/// Builds the single service instance shared by every worker
pub fn register(db: &Database, config: &ShortenerConfig) -> web::Data<ShortLinkServiceType> {
    let repository = ShortLinkRepository::new(db);
    let generator = CodeGenerator::new();
    let service = ShortLinkService::new(Arc::new(repository), Arc::new(generator), config.clone());
    web::Data::new(service)
}
