// Outcome Error Reasons
// Reason types carried by outcome values and conversions from native errors

use std::error::Error as StdError;
use std::sync::Arc;

// Re-export common error handling tools for convenience
pub use anyhow;
pub use thiserror;

// Module structure
mod conversion;
mod macros;
mod reason;

// Public exports
pub use conversion::{native_error, IntoNativeError, MessageError};
pub use reason::{Error, ExceptionalError, Metadata, Reason, ReasonKind, ReasonRecord, Success};

/// A caught failure from outside the outcome model.
///
/// Shared behind an `Arc` so that reasons wrapping it remain `Clone`. Its
/// message is its `Display` output.
pub type NativeError = Arc<dyn StdError + Send + Sync + 'static>;
