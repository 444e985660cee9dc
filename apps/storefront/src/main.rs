//! # Storefront Entry Point
//!
//! Headless smoke run of the storefront stack.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load catalog configuration (env > TOML file > defaults)
//! 3. Build the HTTP catalog client and service
//! 4. Mount the pharmacy screen and run its initial load
//! 5. Spin up the hero banner rotation for a few slides
//! 6. Report what rendered: live vs degraded, counts, current banner
//!
//! Point `MEDIGO_API_URL` at a real backend for live data; without one the
//! run exercises the degraded-mode fallback end to end.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use medigo_catalog::{CatalogConfig, CatalogService, HttpCatalogClient};
use medigo_screens::{HeroBanner, PharmacyScreen};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match CatalogConfig::load() {
        Ok(config) => config,
        Err(error) => {
            warn!(%error, "Config load failed, using defaults");
            CatalogConfig::default()
        }
    };
    let slide_interval = Duration::from_millis(config.slide_interval_ms);

    let client = match HttpCatalogClient::new(&config) {
        Ok(client) => client,
        Err(error) => {
            // Only reachable with a hand-broken config file; nothing to
            // render without a client, so bail.
            eprintln!("Cannot construct catalog client: {error}");
            std::process::exit(1);
        }
    };
    let service = Arc::new(CatalogService::new(Arc::new(client), config));

    // Pharmacy screen: one full load cycle.
    let mut pharmacy = PharmacyScreen::new(service);
    pharmacy.initial_load().await;

    info!(
        degraded = pharmacy.degraded,
        categories = pharmacy.categories.len(),
        featured = pharmacy.featured.len(),
        summary = %pharmacy.results_summary(),
        "Pharmacy screen loaded"
    );
    for product in &pharmacy.products {
        info!(
            id = %product.id,
            name = %product.name,
            category = %product.category,
            in_stock = product.in_stock,
            "product"
        );
    }

    // Hero banner: rotate through one full cycle of the default set.
    let mut hero = HeroBanner::with_default_banners(slide_interval);
    hero.start();
    for _ in 0..hero.active_len() {
        if let Some(banner) = hero.current_banner() {
            info!(index = hero.current_index(), title = %banner.title, "banner");
        }
        hero.next();
    }
    hero.stop();

    info!("Storefront smoke run complete");
}
