//! # Catalog Service
//!
//! The fetch-with-fallback layer the screens call.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     CatalogService Flow                                 │
//! │                                                                         │
//! │  Screen calls load_products(filter)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogApi::products(query)        query built from the filter;        │
//! │       │                             "All" category is not sent          │
//! │       │                                                                 │
//! │       ├── Ok(list) ───────────────► Fetched::Live(list)                │
//! │       │                                                                 │
//! │       └── Err(e) ──► warn!(e) ────► filter.apply(bundled dataset)      │
//! │                                     Fetched::Fallback { data, error }  │
//! │                                                                         │
//! │  The caller decides whether to show a degraded-mode hint; nothing      │
//! │  here blocks rendering.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use medigo_core::{Category, Product, ProductFilter};

use crate::client::{CatalogApi, CategoryQuery, ProductQuery};
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::fallback;

// =============================================================================
// Fetched
// =============================================================================

/// The outcome of a catalog load.
///
/// Replaces the "fetch, catch, silently substitute" pattern with an explicit
/// result so callers and tests can distinguish degraded mode from a genuine
/// empty result. Both variants carry renderable data; the error rides along
/// for diagnostics only.
#[derive(Debug)]
pub enum Fetched<T> {
    /// Data straight from the remote catalog.
    Live(T),

    /// Bundled substitute after a failed fetch, with the cause attached.
    Fallback { data: T, error: CatalogError },
}

impl<T> Fetched<T> {
    /// The payload, live or not.
    pub fn data(&self) -> &T {
        match self {
            Fetched::Live(data) => data,
            Fetched::Fallback { data, .. } => data,
        }
    }

    /// Consumes the result, returning the payload.
    pub fn into_data(self) -> T {
        match self {
            Fetched::Live(data) => data,
            Fetched::Fallback { data, .. } => data,
        }
    }

    /// True when this is substitute data after a failed fetch.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Fetched::Fallback { .. })
    }

    /// The fetch error, if this is fallback data.
    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            Fetched::Live(_) => None,
            Fetched::Fallback { error, .. } => Some(error),
        }
    }
}

// =============================================================================
// Catalog Service
// =============================================================================

/// Catalog loads with the storefront's degraded-mode policy applied.
///
/// One attempt per load; no retry, backoff, or cancellation. Each load is
/// independent of the others (the pharmacy screen issues three concurrently).
pub struct CatalogService {
    api: Arc<dyn CatalogApi>,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(api: Arc<dyn CatalogApi>, config: CatalogConfig) -> Self {
        CatalogService { api, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Loads top-level categories, falling back to the bundled list.
    pub async fn load_categories(&self) -> Fetched<Vec<Category>> {
        let start = Instant::now();
        debug!("load_categories");

        match self.api.categories(&CategoryQuery::parents()).await {
            Ok(categories) => {
                info!(
                    elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                    count = categories.len(),
                    "load_categories complete"
                );
                Fetched::Live(categories)
            }
            Err(error) => {
                warn!(%error, "Failed to load categories, using bundled fallback");
                Fetched::Fallback {
                    data: fallback::fallback_categories(),
                    error,
                }
            }
        }
    }

    /// Loads a filtered product listing.
    ///
    /// Primary path delegates search + category to the remote query; the
    /// degraded path applies the same predicate locally over the bundled
    /// dataset, so both paths agree on semantics.
    pub async fn load_products(&self, filter: &ProductFilter) -> Fetched<Vec<Product>> {
        let start = Instant::now();
        let query = ProductQuery::from_filter(filter, self.config.per_page);
        debug!(search = %filter.search, category = %filter.category, "load_products");

        match self.api.products(&query).await {
            Ok(products) => {
                info!(
                    elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                    count = products.len(),
                    "load_products complete"
                );
                Fetched::Live(products)
            }
            Err(error) => {
                warn!(%error, "Failed to load products, filtering bundled fallback");
                Fetched::Fallback {
                    data: filter.apply(&fallback::fallback_products()),
                    error,
                }
            }
        }
    }

    /// Loads the featured-products strip.
    ///
    /// There is no bundled featured set: a failed fetch degrades to an empty
    /// strip, which the screen simply does not render.
    pub async fn load_featured(&self) -> Fetched<Vec<Product>> {
        let start = Instant::now();
        debug!("load_featured");

        match self
            .api
            .products(&ProductQuery::featured(self.config.featured_limit))
            .await
        {
            Ok(products) => {
                info!(
                    elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                    count = products.len(),
                    "load_featured complete"
                );
                Fetched::Live(products)
            }
            Err(error) => {
                warn!(%error, "Failed to load featured products");
                Fetched::Fallback {
                    data: Vec::new(),
                    error,
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use medigo_core::CATEGORY_ALL;

    use crate::error::CatalogResult;

    /// Serves fixed lists, like a healthy backend.
    struct StaticApi {
        products: Vec<Product>,
        categories: Vec<Category>,
    }

    #[async_trait]
    impl CatalogApi for StaticApi {
        async fn categories(&self, _query: &CategoryQuery) -> CatalogResult<Vec<Category>> {
            Ok(self.categories.clone())
        }

        async fn products(&self, _query: &ProductQuery) -> CatalogResult<Vec<Product>> {
            Ok(self.products.clone())
        }
    }

    /// Fails every call, like an unreachable backend.
    struct FailingApi;

    #[async_trait]
    impl CatalogApi for FailingApi {
        async fn categories(&self, _query: &CategoryQuery) -> CatalogResult<Vec<Category>> {
            Err(CatalogError::UnexpectedStatus {
                endpoint: "categories".to_string(),
                status: 503,
            })
        }

        async fn products(&self, _query: &ProductQuery) -> CatalogResult<Vec<Product>> {
            Err(CatalogError::UnexpectedStatus {
                endpoint: "products".to_string(),
                status: 503,
            })
        }
    }

    fn live_service() -> CatalogService {
        CatalogService::new(
            Arc::new(StaticApi {
                products: fallback::fallback_products()[..2].to_vec(),
                categories: fallback::fallback_categories(),
            }),
            CatalogConfig::default(),
        )
    }

    fn degraded_service() -> CatalogService {
        CatalogService::new(Arc::new(FailingApi), CatalogConfig::default())
    }

    #[tokio::test]
    async fn test_live_products_pass_through_unfiltered() {
        // Server-side filtering: the local predicate must NOT run on live data.
        let service = live_service();
        let filter = ProductFilter {
            search: "zzz-no-match".to_string(),
            category: CATEGORY_ALL.to_string(),
        };
        let result = service.load_products(&filter).await;
        assert!(!result.is_fallback());
        assert_eq!(result.data().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_products_fetch_filters_bundled_dataset() {
        let service = degraded_service();
        let filter = ProductFilter {
            search: "Square".to_string(),
            category: CATEGORY_ALL.to_string(),
        };
        let result = service.load_products(&filter).await;
        assert!(result.is_fallback());
        let ids: Vec<&str> = result.data().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4", "7"]);
        assert!(matches!(
            result.error(),
            Some(CatalogError::UnexpectedStatus { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_failed_categories_fetch_uses_bundled_list() {
        let service = degraded_service();
        let result = service.load_categories().await;
        assert!(result.is_fallback());
        assert_eq!(result.data().len(), 5);
        assert_eq!(result.data()[0].name, "Vitamins");
    }

    #[tokio::test]
    async fn test_failed_featured_fetch_degrades_to_empty() {
        let service = degraded_service();
        let result = service.load_featured().await;
        assert!(result.is_fallback());
        assert!(result.data().is_empty());
    }

    #[tokio::test]
    async fn test_fallback_distinct_from_genuinely_empty_live_result() {
        let service = CatalogService::new(
            Arc::new(StaticApi {
                products: Vec::new(),
                categories: Vec::new(),
            }),
            CatalogConfig::default(),
        );
        let result = service.load_products(&ProductFilter::new()).await;
        assert!(result.data().is_empty());
        assert!(!result.is_fallback());
    }
}
