//! # Error Types
//!
//! Domain-specific error types for medigo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  medigo-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  medigo-catalog errors (separate crate)                                │
//! │  └── CatalogError     - Remote fetch / config failures                 │
//! │                                                                         │
//! │  Fetch failures never reach the user as blocking errors: they are      │
//! │  logged and the caller receives fallback data instead (site policy).   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, limits, file names)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core client-logic errors.
///
/// These represent rule violations in the screen layer. They should be caught
/// and translated to user-friendly messages; they never abort rendering.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A submit was attempted with nothing selected.
    ///
    /// ## When This Occurs
    /// - The prescription upload modal's submit is invoked with an empty
    ///   selection (the UI normally disables the button in this state)
    #[error("No files selected for upload")]
    NothingToSubmit,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before anything leaves the client.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed email address).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// An uploaded file's type is not accepted by the policy.
    #[error("File '{file_name}' has unsupported type '{mime_type}'")]
    UnsupportedFileType { file_name: String, mime_type: String },

    /// An uploaded file exceeds the policy's size limit.
    #[error("File '{file_name}' is {size_bytes} bytes, limit is {max_bytes}")]
    FileTooLarge {
        file_name: String,
        size_bytes: u64,
        max_bytes: u64,
    },

    /// More files were supplied than the policy allows.
    #[error("Policy accepts a single file, got {count}")]
    TooManyFiles { count: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::FileTooLarge {
            file_name: "rx-scan.pdf".to_string(),
            size_bytes: 20_000_000,
            max_bytes: 10_485_760,
        };
        assert_eq!(
            err.to_string(),
            "File 'rx-scan.pdf' is 20000000 bytes, limit is 10485760"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "site_name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
