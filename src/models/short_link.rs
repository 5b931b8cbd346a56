// src/models/short_link.rs - Pure data structures
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// Body of `POST /shorten`
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateShortLinkDto {
    /// Stored verbatim; only emptiness is rejected
    #[serde(alias = "URL")]
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}

/// A stored mapping from short code to target URL
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ShortLink {
    #[sqlx(rename = "short_code")]
    pub code: String,

    #[sqlx(rename = "long_url")]
    pub target: String,
}

// Response of `POST /shorten`
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortLinkResponseDto {
    pub short_url: String,
    pub long_url: String,
}

impl ShortLinkResponseDto {
    /// `base_url` is expected to end with `/`
    pub fn new(base_url: &str, link: ShortLink) -> Self {
        ShortLinkResponseDto {
            short_url: format!("{}{}", base_url, link.code),
            long_url: link.target,
        }
    }
}
