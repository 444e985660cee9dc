//! # Pharmacy Screen
//!
//! State for the pharmacy catalog screen: category strip, featured strip,
//! the filtered product grid, and the bulk prescription upload modal.
//!
//! ## Load Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Pharmacy Screen Loads                                │
//! │                                                                         │
//! │  initial_load()                                                         │
//! │    ├── load_categories ──┐                                              │
//! │    ├── load_products ────┼── concurrent, independent, unsequenced      │
//! │    └── load_featured ────┘   (each settles only its own slice)         │
//! │                                                                         │
//! │  set_search(..) / set_category(..) / clear_filters()                    │
//! │    └── re-run load_products only                                        │
//! │                                                                         │
//! │  Only the product load toggles the `loading` flag; the category and     │
//! │  featured strips simply appear when their data arrives.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Degraded mode is tracked per the explicit-result policy: the screen keeps
//! a flag instead of silently mixing fallback data into "live" state, but it
//! never blocks rendering on a failed fetch.

use std::sync::Arc;
use tracing::{debug, info};

use medigo_catalog::{CatalogService, Fetched};
use medigo_core::error::CoreResult;
use medigo_core::validation::{FileHandle, UploadCandidate, UploadPolicy};
use medigo_core::{Category, CoreError, Product, ProductFilter, CATEGORY_ALL};

/// The pharmacy catalog screen.
pub struct PharmacyScreen {
    service: Arc<CatalogService>,

    /// Current search + category selection.
    pub filter: ProductFilter,

    /// Category strip (may be the bundled fallback list).
    pub categories: Vec<Category>,

    /// Filtered product grid.
    pub products: Vec<Product>,

    /// Featured strip; empty when the fetch failed or returned nothing.
    pub featured: Vec<Product>,

    /// True while a product load is in flight.
    pub loading: bool,

    /// True when the current product grid is fallback data.
    pub degraded: bool,

    /// Bulk prescription upload modal visibility.
    pub show_bulk_upload: bool,

    /// Files picked in the modal, pending submit.
    pub bulk_selection: Vec<UploadCandidate>,
}

impl PharmacyScreen {
    pub fn new(service: Arc<CatalogService>) -> Self {
        PharmacyScreen {
            service,
            filter: ProductFilter::new(),
            categories: Vec::new(),
            products: Vec::new(),
            featured: Vec::new(),
            loading: true,
            degraded: false,
            show_bulk_upload: false,
            bulk_selection: Vec::new(),
        }
    }

    // =========================================================================
    // Loads
    // =========================================================================

    /// Initial mount: all three loads, concurrent and independent.
    pub async fn initial_load(&mut self) {
        self.loading = true;
        let (categories, products, featured) = tokio::join!(
            self.service.load_categories(),
            self.service.load_products(&self.filter),
            self.service.load_featured(),
        );
        self.categories = categories.into_data();
        self.apply_products(products);
        self.featured = featured.into_data();
        self.loading = false;
    }

    /// Re-runs just the product load for the current filter.
    pub async fn reload_products(&mut self) {
        self.loading = true;
        let products = self.service.load_products(&self.filter).await;
        self.apply_products(products);
        self.loading = false;
    }

    fn apply_products(&mut self, result: Fetched<Vec<Product>>) {
        self.degraded = result.is_fallback();
        self.products = result.into_data();
        debug!(
            count = self.products.len(),
            degraded = self.degraded,
            "Product grid updated"
        );
    }

    // =========================================================================
    // Filter Events
    // =========================================================================

    /// Search box change. Re-runs the product load.
    pub async fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.reload_products().await;
    }

    /// Category button click. Re-runs the product load.
    pub async fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
        self.reload_products().await;
    }

    /// "Clear Filters" on the empty-result panel.
    pub async fn clear_filters(&mut self) {
        self.filter.clear();
        self.reload_products().await;
    }

    /// Labels for the category button strip: the `"All"` sentinel followed
    /// by the fetched category names.
    pub fn category_buttons(&self) -> Vec<String> {
        std::iter::once(CATEGORY_ALL.to_string())
            .chain(self.categories.iter().map(|c| c.name.clone()))
            .collect()
    }

    /// The results line under the filter bar.
    pub fn results_summary(&self) -> String {
        if self.loading {
            "Loading products...".to_string()
        } else {
            match self.products.len() {
                0 => "No products found".to_string(),
                1 => "Found 1 product".to_string(),
                n => format!("Found {n} products"),
            }
        }
    }

    // =========================================================================
    // Bulk Prescription Upload
    // =========================================================================

    /// Opens the upload modal.
    pub fn open_bulk_upload(&mut self) {
        self.show_bulk_upload = true;
    }

    /// Cancels the modal, discarding the selection.
    pub fn cancel_bulk_upload(&mut self) {
        self.show_bulk_upload = false;
        self.bulk_selection.clear();
    }

    /// Replaces the modal's file selection.
    pub fn select_prescriptions(&mut self, files: Vec<UploadCandidate>) {
        self.bulk_selection = files;
    }

    /// Submits the selected prescriptions.
    ///
    /// Validates the selection against the prescription upload policy and
    /// hands the accepted handles back for the order pipeline. On success
    /// the modal closes and the selection clears; on failure both stay so
    /// the user can fix the selection.
    pub fn submit_bulk_prescriptions(&mut self) -> CoreResult<Vec<FileHandle>> {
        if self.bulk_selection.is_empty() {
            return Err(CoreError::NothingToSubmit);
        }

        let handles = UploadPolicy::prescriptions().validate(&self.bulk_selection)?;
        info!(count = handles.len(), "Bulk prescriptions submitted");

        self.show_bulk_upload = false;
        self.bulk_selection.clear();
        Ok(handles)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
