//! # Catalog Error Types
//!
//! Error types for catalog access.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Payload             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidBaseUrl │  │  Http           │  │  UnexpectedStatus       │ │
//! │  │  ConfigLoad     │  │  (reqwest)      │  │  (non-2xx responses)    │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  There is deliberately no retry/backoff taxonomy: a failed fetch       │
//! │  falls back to bundled data immediately and does not retry.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog error type covering configuration and fetch failures.
///
/// ## Design Principles
/// - Each variant includes enough context for debugging
/// - All errors are `Send + Sync` for async compatibility
/// - None of these ever reach the user as a blocking failure; they are
///   logged and carried inside `Fetched::Fallback`
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured API base URL does not parse.
    #[error("Invalid catalog base URL: {0}")]
    InvalidBaseUrl(String),

    /// Failed to load the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Transport-level failure (connect, timeout, TLS, body read, decode).
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Catalog endpoint '{endpoint}' returned status {status}")]
    UnexpectedStatus { endpoint: String, status: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::UnexpectedStatus {
            endpoint: "products".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "Catalog endpoint 'products' returned status 503"
        );
    }
}
