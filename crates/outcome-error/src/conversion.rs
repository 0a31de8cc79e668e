// Error conversion utilities
// Turns foreign error values into shared native errors

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

use crate::{Error, ExceptionalError, NativeError};

/// Trait for converting a failure value into a NativeError
pub trait IntoNativeError {
    fn into_native_error(self) -> NativeError;
}

/// A native error that is nothing but a message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct MessageError(pub String);

impl IntoNativeError for NativeError {
    fn into_native_error(self) -> NativeError {
        self
    }
}

impl IntoNativeError for Box<dyn StdError + Send + Sync + 'static> {
    fn into_native_error(self) -> NativeError {
        Arc::from(self)
    }
}

impl IntoNativeError for std::io::Error {
    fn into_native_error(self) -> NativeError {
        Arc::new(self)
    }
}

impl IntoNativeError for serde_json::Error {
    fn into_native_error(self) -> NativeError {
        Arc::new(self)
    }
}

// anyhow::Error does not implement std::error::Error itself
impl IntoNativeError for anyhow::Error {
    fn into_native_error(self) -> NativeError {
        let boxed: Box<dyn StdError + Send + Sync + 'static> = self.into();
        Arc::from(boxed)
    }
}

impl IntoNativeError for String {
    fn into_native_error(self) -> NativeError {
        Arc::new(MessageError(self))
    }
}

impl IntoNativeError for &str {
    fn into_native_error(self) -> NativeError {
        Arc::new(MessageError(self.to_string()))
    }
}

impl IntoNativeError for MessageError {
    fn into_native_error(self) -> NativeError {
        Arc::new(self)
    }
}

impl IntoNativeError for Error {
    fn into_native_error(self) -> NativeError {
        Arc::new(self)
    }
}

impl IntoNativeError for ExceptionalError {
    fn into_native_error(self) -> NativeError {
        Arc::new(self)
    }
}

/// Share any concrete error as a NativeError
pub fn native_error<E>(err: E) -> NativeError
where
    E: StdError + Send + Sync + 'static,
{
    Arc::new(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config missing");
        let native = io.into_native_error();
        assert_eq!(native.to_string(), "config missing");
        assert!(native.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_anyhow_error_keeps_message() {
        let native = anyhow::anyhow!("disk full").into_native_error();
        assert_eq!(native.to_string(), "disk full");
    }

    #[test]
    fn test_str_becomes_message_error() {
        let native = "boom".into_native_error();
        assert_eq!(native.downcast_ref::<MessageError>(), Some(&MessageError("boom".into())));
    }

    #[test]
    fn test_native_error_is_passed_through() {
        let native = native_error(MessageError("once".into()));
        let again = native.clone().into_native_error();
        assert!(Arc::ptr_eq(&native, &again));
    }
}
