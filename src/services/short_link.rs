// src/services/short_link.rs - Business logic
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, info};
use validator::Validate;

use crate::config::ShortenerConfig;
use crate::errors::{AppError, RepositoryError};
use crate::models::{CreateShortLinkDto, ShortLink, ShortLinkResponseDto};
use crate::repositories::ShortLinkRepositoryTrait;
use crate::utils::CodeGenerator;

type Result<T> = std::result::Result<T, AppError>;

#[async_trait]
pub trait ShortLinkServiceTrait {
    async fn create(&self, dto: CreateShortLinkDto) -> Result<ShortLinkResponseDto>;
    async fn resolve(&self, code: &str) -> Result<String>;
}

pub struct ShortLinkService<T: ShortLinkRepositoryTrait> {
    repository: Arc<T>,
    generator: Arc<CodeGenerator>,
    config: ShortenerConfig,
}

impl<T: ShortLinkRepositoryTrait> ShortLinkService<T> {
    pub fn new(repository: Arc<T>, generator: Arc<CodeGenerator>, config: ShortenerConfig) -> Self {
        Self {
            repository,
            generator,
            config,
        }
    }
}

#[async_trait]
impl<T: ShortLinkRepositoryTrait> ShortLinkServiceTrait for ShortLinkService<T> {
    async fn create(&self, dto: CreateShortLinkDto) -> Result<ShortLinkResponseDto> {
        dto.validate()?;

        // A collision surfaces as a failed insert; there is no retry
        let code = self.generator.generate(self.config.code_length);

        self.repository.put(&code, &dto.url).await.map_err(|e| {
            if let RepositoryError::Conflict(_) = e {
                error!("Generated short code '{}' collided with an existing one", code);
            }
            AppError::CreateFailed(e.to_string())
        })?;

        info!("Created short code '{}' for '{}'", code, dto.url);

        let link = ShortLink {
            code,
            target: dto.url,
        };
        Ok(ShortLinkResponseDto::new(&self.config.base_url, link))
    }

    async fn resolve(&self, code: &str) -> Result<String> {
        match self.repository.get(code).await {
            Ok(link) => Ok(link.target),
            Err(RepositoryError::NotFound(_)) => {
                debug!("Short code '{}' not found", code);
                Err(AppError::NotFound(format!("No URL stored for code '{}'", code)))
            }
            Err(e) => {
                error!("Error querying database: {}", e);
                Err(AppError::from(e))
            }
        }
    }
}
