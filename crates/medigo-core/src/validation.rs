//! # Validation Module
//!
//! Input validation for uploads and settings forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Rendering surface (TypeScript)                               │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Upload policy enforcement (type, size, multiplicity)              │
//! │  └── Settings field rules                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend API                                                  │
//! │  └── Authoritative re-validation server-side                           │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use medigo_core::validation::{UploadCandidate, UploadPolicy};
//!
//! let policy = UploadPolicy::prescriptions();
//! let files = vec![UploadCandidate::new("rx.pdf", "application/pdf", 120_000)];
//! let handles = policy.validate(&files).unwrap();
//! assert_eq!(handles.len(), 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::MAX_UPLOAD_BYTES;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Upload Policy
// =============================================================================

/// Configuration the file upload widget is handed by its host screen.
///
/// Accept patterns follow the widget's convention: either a MIME pattern
/// (`image/*`, `application/pdf`) or an extension pattern (`.pdf`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UploadPolicy {
    /// Accepted type patterns; empty means "accept anything".
    pub accept: Vec<String>,

    /// Maximum size per file in bytes.
    pub max_bytes: u64,

    /// Whether more than one file may be submitted at once.
    pub multiple: bool,
}

impl UploadPolicy {
    /// The policy the pharmacy screen uses for bulk prescription uploads:
    /// images or PDFs, 10 MiB per file, multiple files allowed.
    pub fn prescriptions() -> Self {
        UploadPolicy {
            accept: vec!["image/*".to_string(), ".pdf".to_string()],
            max_bytes: MAX_UPLOAD_BYTES,
            multiple: true,
        }
    }

    /// Validates a batch of candidates against this policy.
    ///
    /// ## Rules
    /// - A single-file policy rejects batches with more than one entry
    /// - Every file must match at least one accept pattern
    /// - Every file must be within the size limit
    ///
    /// All-or-nothing: the first violation rejects the whole batch, which is
    /// what the hosting modal surfaces to the user.
    pub fn validate(&self, candidates: &[UploadCandidate]) -> ValidationResult<Vec<FileHandle>> {
        if !self.multiple && candidates.len() > 1 {
            return Err(ValidationError::TooManyFiles {
                count: candidates.len(),
            });
        }

        let mut accepted = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !self.accepts_type(candidate) {
                return Err(ValidationError::UnsupportedFileType {
                    file_name: candidate.file_name.clone(),
                    mime_type: candidate.mime_type.clone(),
                });
            }
            if candidate.size_bytes > self.max_bytes {
                return Err(ValidationError::FileTooLarge {
                    file_name: candidate.file_name.clone(),
                    size_bytes: candidate.size_bytes,
                    max_bytes: self.max_bytes,
                });
            }
            accepted.push(FileHandle::accept(candidate));
        }
        Ok(accepted)
    }

    /// Whether a candidate matches any accept pattern.
    fn accepts_type(&self, candidate: &UploadCandidate) -> bool {
        if self.accept.is_empty() {
            return true;
        }
        self.accept.iter().any(|pattern| {
            if let Some(prefix) = pattern.strip_suffix("/*") {
                // MIME wildcard: "image/*" accepts any image subtype
                candidate
                    .mime_type
                    .split('/')
                    .next()
                    .is_some_and(|kind| kind.eq_ignore_ascii_case(prefix))
            } else if pattern.starts_with('.') {
                // Extension pattern: ".pdf" matches the file name suffix
                candidate
                    .file_name
                    .to_lowercase()
                    .ends_with(&pattern.to_lowercase())
            } else {
                candidate.mime_type.eq_ignore_ascii_case(pattern)
            }
        })
    }
}

// =============================================================================
// Upload Candidate / File Handle
// =============================================================================

/// A file the user picked, before policy validation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UploadCandidate {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl UploadCandidate {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        UploadCandidate {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }
}

/// An accepted file, as returned to the host screen by the upload widget.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FileHandle {
    /// Unique handle id (UUID v4).
    pub id: String,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    /// When the file passed validation.
    #[ts(as = "String")]
    pub accepted_at: DateTime<Utc>,
}

impl FileHandle {
    fn accept(candidate: &UploadCandidate) -> Self {
        FileHandle {
            id: Uuid::new_v4().to_string(),
            file_name: candidate.file_name.clone(),
            mime_type: candidate.mime_type.clone(),
            size_bytes: candidate.size_bytes,
            accepted_at: Utc::now(),
        }
    }
}

// =============================================================================
// Settings Field Validators
// =============================================================================

/// Validates the platform site name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
pub fn validate_site_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "site_name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "site_name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates the support email address.
///
/// Shape check only (one `@` with non-empty local part and a dotted domain);
/// deliverability is the backend's problem.
pub fn validate_support_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "support_email".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "support_email".to_string(),
        reason: reason.to_string(),
    };

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid("missing '@'"));
    };
    if local.is_empty() {
        return Err(invalid("empty local part"));
    }
    if domain.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return Err(invalid("malformed domain"));
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
