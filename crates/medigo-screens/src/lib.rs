//! # medigo-screens: Per-Screen State for the Medigo Storefront
//!
//! Each screen owns a plain state object; all mutation happens in `&mut self`
//! methods (event handlers) or inside the rotation task's mutex. There are no
//! ambient globals, so every screen can be constructed and driven in a test.
//!
//! ## Screens
//!
//! - [`pharmacy`] - catalog browsing: filter, three independent loads,
//!   prescription upload modal
//! - [`hero`] - hero banner host: carousel + auto-advance timer lifecycle
//! - [`admin`] - admin layout (sidebar, menu) and the settings form

pub mod admin;
pub mod hero;
pub mod pharmacy;

pub use admin::{AdminLayout, SettingsForm};
pub use hero::HeroBanner;
pub use pharmacy::PharmacyScreen;
