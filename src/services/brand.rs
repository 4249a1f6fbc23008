//! Brand Service
//!
//! Brand configuration lookup for the current site directory. Brands come
//! either from an embedded TOML catalog or from a remote JSON endpoint.

use crate::domain::Brand;
use crate::error::Result;
use ahash::AHashMap;
use futures::future::BoxFuture;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// Contract for brand lookup
pub trait BrandProvider: Send + Sync {
    /// Fetch the brand configured for a site directory, `None` when the
    /// directory carries no brand configuration
    fn fetch_brand(&self, dir: &str) -> BoxFuture<'static, Result<Option<Brand>>>;
}

/// TOML catalog layout: a `[brands.<dir>]` table per site directory
#[derive(Debug, Default, Deserialize)]
struct BrandCatalogFile {
    #[serde(default)]
    brands: HashMap<String, Brand>,
}

/// Brand map served from memory
#[derive(Debug, Default)]
pub struct StaticBrandProvider {
    brands: AHashMap<String, Brand>,
}

impl StaticBrandProvider {
    /// Create an empty provider (every directory resolves to no brand)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a brand for a site directory
    pub fn with_brand(mut self, dir: impl Into<String>, brand: Brand) -> Self {
        self.brands.insert(dir.into(), brand);
        self
    }

    /// Load the brand catalog from a TOML document
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: BrandCatalogFile = toml::from_str(text)?;
        Ok(Self {
            brands: file.brands.into_iter().collect(),
        })
    }
}

impl BrandProvider for StaticBrandProvider {
    fn fetch_brand(&self, dir: &str) -> BoxFuture<'static, Result<Option<Brand>>> {
        let brand = self.brands.get(dir).cloned();
        Box::pin(async move { Ok(brand) })
    }
}

/// Brand configuration fetched from a remote endpoint.
///
/// Looks up `GET {base_url}/{dir}.json`; a 404 means the directory has no
/// brand and is not an error.
#[derive(Debug, Clone)]
pub struct HttpBrandProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBrandProvider {
    /// Create a provider rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl BrandProvider for HttpBrandProvider {
    fn fetch_brand(&self, dir: &str) -> BoxFuture<'static, Result<Option<Brand>>> {
        let url = format!("{}/{}.json", self.base_url.trim_end_matches('/'), dir);
        let client = self.client.clone();

        Box::pin(async move {
            debug!(url = %url, "Fetching brand configuration");
            let response = client.get(&url).send().await?;

            if response.status() == StatusCode::NOT_FOUND {
                return Ok(None);
            }

            let body = response.error_for_status()?.text().await?;
            let brand: Brand = serde_json::from_str(&body)?;
            Ok(Some(brand))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_hit_and_miss() {
        let provider = StaticBrandProvider::new().with_brand(
            "casino",
            Brand {
                hide_lang_dropdown: true,
            },
        );

        let hit = provider.fetch_brand("casino").await.expect("fetch");
        assert_eq!(hit.map(|b| b.hide_lang_dropdown), Some(true));

        let miss = provider.fetch_brand("poker").await.expect("fetch");
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn test_from_toml() {
        let provider = StaticBrandProvider::from_toml(
            r#"
            [brands.casino]
            hideLangDropdown = true

            [brands.sports]
            hideLangDropdown = false
            "#,
        )
        .expect("parse");

        let casino = provider.fetch_brand("casino").await.expect("fetch");
        assert_eq!(casino.map(|b| b.hide_lang_dropdown), Some(true));

        let sports = provider.fetch_brand("sports").await.expect("fetch");
        assert_eq!(sports.map(|b| b.hide_lang_dropdown), Some(false));
    }

    #[test]
    fn test_from_toml_rejects_malformed() {
        assert!(StaticBrandProvider::from_toml("brands = 3").is_err());
    }
}
