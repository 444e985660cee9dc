//! # Catalog API Client
//!
//! The `CatalogApi` trait seam and its HTTP implementation.
//!
//! ## Endpoint Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog API Endpoints                              │
//! │                                                                         │
//! │  GET {base}/categories?parent_only=true                                │
//! │  GET {base}/products?search=para&category=Pain+Relief&per_page=20      │
//! │  GET {base}/products?featured=true&per_page=8                          │
//! │                                                                         │
//! │  Response body is list-shaped, in one of two forms the backend uses:   │
//! │                                                                         │
//! │    Bare:       [ {...}, {...} ]                                        │
//! │    Enveloped:  { "data": [ {...}, {...} ], "total": 124, ... }         │
//! │                                                                         │
//! │  The client accepts both; unknown envelope fields are ignored.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The trait exists so the screens and the fallback service can be tested
//! against in-process stubs without a live backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

use medigo_core::{Category, Product, ProductFilter};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Queries
// =============================================================================

/// Query parameters for `GET /products`.
///
/// `None` fields are omitted from the query string entirely; in particular
/// the `"All"` category sentinel and an empty search never reach the wire.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl ProductQuery {
    /// Builds the query for a filtered catalog listing.
    pub fn from_filter(filter: &ProductFilter, per_page: u32) -> Self {
        let search = filter.search.trim();
        ProductQuery {
            search: (!search.is_empty()).then(|| search.to_string()),
            category: (!filter.is_all_categories()).then(|| filter.category.clone()),
            per_page: Some(per_page),
            featured: None,
        }
    }

    /// Builds the query for the featured-products strip.
    pub fn featured(limit: u32) -> Self {
        ProductQuery {
            per_page: Some(limit),
            featured: Some(true),
            ..Default::default()
        }
    }
}

/// Query parameters for `GET /categories`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryQuery {
    pub parent_only: bool,
}

impl CategoryQuery {
    /// Top-level categories only, as the pharmacy screen requests them.
    pub fn parents() -> Self {
        CategoryQuery { parent_only: true }
    }
}

// =============================================================================
// Trait Seam
// =============================================================================

/// The remote catalog service, behind a trait so screens can be tested
/// against in-process stubs.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Lists categories.
    async fn categories(&self, query: &CategoryQuery) -> CatalogResult<Vec<Category>>;

    /// Lists products, filtered/paged server-side.
    async fn products(&self, query: &ProductQuery) -> CatalogResult<Vec<Product>>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// List-shaped response body: either a bare array or a pagination envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Enveloped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListBody<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            ListBody::Enveloped { data } => data,
            ListBody::Bare(items) => items,
        }
    }
}

/// `CatalogApi` over HTTP via reqwest.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: Client,
    base_url: Url,
}

impl HttpCatalogClient {
    /// Builds a client from configuration.
    ///
    /// The base URL must already be normalized (trailing slash) so that
    /// `join("products")` resolves under the base path.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| CatalogError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(HttpCatalogClient { http, base_url })
    }

    /// Fetches a list endpoint, accepting both body shapes.
    async fn get_list<T, Q>(&self, endpoint: &str, query: &Q) -> CatalogResult<Vec<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| CatalogError::InvalidBaseUrl(e.to_string()))?;

        debug!(endpoint, url = %url, "Catalog GET");

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body: ListBody<T> = response.json().await?;
        Ok(body.into_items())
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn categories(&self, query: &CategoryQuery) -> CatalogResult<Vec<Category>> {
        self.get_list("categories", query).await
    }

    async fn products(&self, query: &ProductQuery) -> CatalogResult<Vec<Product>> {
        self.get_list("products", query).await
    }
}
