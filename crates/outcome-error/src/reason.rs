// Reason types
// Successes and errors attached to outcome values

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::NativeError;

/// Key/value details attached to a reason
pub type Metadata = BTreeMap<String, serde_json::Value>;

// Native errors carry no equality of their own, so identity stands in for it
fn same_exception(a: Option<&NativeError>, b: Option<&NativeError>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

/// A successful step, with an optional message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Success {
    message: Option<String>,
    metadata: Metadata,
}

impl Success {
    /// Create a success carrying a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            metadata: Metadata::new(),
        }
    }

    /// Create a success without a message
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Attach a metadata entry, replacing any previous value under `key`
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for Success {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message.as_deref().unwrap_or("success"))
    }
}

/// A failed step.
///
/// An error may be caused by other errors (kept in order) and may wrap the
/// native error it was created from. The wrapped native error is exposed as
/// the `std::error::Error` source.
#[derive(Debug, Clone)]
pub struct Error {
    message: String,
    metadata: Metadata,
    reasons: Vec<Error>,
    exception: Option<NativeError>,
}

impl Error {
    /// Create an error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            metadata: Metadata::new(),
            reasons: Vec::new(),
            exception: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Attach a metadata entry, replacing any previous value under `key`
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Record another error as a cause of this one
    pub fn caused_by(mut self, cause: impl Into<Error>) -> Self {
        self.reasons.push(cause.into());
        self
    }

    /// Causing errors, in the order they were recorded
    pub fn reasons(&self) -> &[Error] {
        &self.reasons
    }

    /// The native error this error was created from, if any
    pub fn exception(&self) -> Option<&NativeError> {
        self.exception.as_ref()
    }

    pub fn is_exceptional(&self) -> bool {
        self.exception.is_some()
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.metadata == other.metadata
            && self.reasons == other.reasons
            && same_exception(self.exception.as_ref(), other.exception.as_ref())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.exception {
            Some(exception) => Some(&**exception as &(dyn StdError + 'static)),
            None => None,
        }
    }
}

/// An error that wraps a caught native error
#[derive(Debug, Clone)]
pub struct ExceptionalError {
    message: String,
    metadata: Metadata,
    exception: NativeError,
}

impl ExceptionalError {
    pub fn new(message: impl Into<String>, exception: NativeError) -> Self {
        Self {
            message: message.into(),
            metadata: Metadata::new(),
            exception,
        }
    }

    /// Create an exceptional error whose message is the native error's own
    pub fn from_exception(exception: NativeError) -> Self {
        Self::new(exception.to_string(), exception)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn exception(&self) -> &NativeError {
        &self.exception
    }
}

impl PartialEq for ExceptionalError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.metadata == other.metadata
            && Arc::ptr_eq(&self.exception, &other.exception)
    }
}

impl fmt::Display for ExceptionalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for ExceptionalError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.exception as &(dyn StdError + 'static))
    }
}

impl From<ExceptionalError> for Error {
    fn from(err: ExceptionalError) -> Self {
        Error {
            message: err.message,
            metadata: err.metadata,
            reasons: Vec::new(),
            exception: Some(err.exception),
        }
    }
}

/// A reason attached to an outcome value
#[derive(Debug, Clone, PartialEq)]
pub enum Reason {
    Success(Success),
    Error(Error),
}

impl Reason {
    pub fn message(&self) -> Option<&str> {
        match self {
            Reason::Success(success) => success.message(),
            Reason::Error(error) => Some(error.message()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reason::Error(_))
    }

    pub fn as_success(&self) -> Option<&Success> {
        match self {
            Reason::Success(success) => Some(success),
            Reason::Error(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<&Error> {
        match self {
            Reason::Error(error) => Some(error),
            Reason::Success(_) => None,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Success(success) => success.fmt(f),
            Reason::Error(error) => error.fmt(f),
        }
    }
}

impl From<Success> for Reason {
    fn from(success: Success) -> Self {
        Reason::Success(success)
    }
}

impl From<Error> for Reason {
    fn from(error: Error) -> Self {
        Reason::Error(error)
    }
}

impl From<ExceptionalError> for Reason {
    fn from(error: ExceptionalError) -> Self {
        Reason::Error(error.into())
    }
}

/// Kind tag used in serialized reasons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonKind {
    Success,
    Error,
    Exceptional,
}

impl fmt::Display for ReasonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasonKind::Success => write!(f, "success"),
            ReasonKind::Error => write!(f, "error"),
            ReasonKind::Exceptional => write!(f, "exceptional"),
        }
    }
}

/// Standard reason format for serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonRecord {
    pub kind: ReasonKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: Metadata,
    /// Display text of the wrapped native error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<ReasonRecord>,
}

impl From<&Success> for ReasonRecord {
    fn from(success: &Success) -> Self {
        ReasonRecord {
            kind: ReasonKind::Success,
            message: success.message.clone(),
            metadata: success.metadata.clone(),
            exception: None,
            reasons: Vec::new(),
        }
    }
}

impl From<&Error> for ReasonRecord {
    fn from(error: &Error) -> Self {
        let kind = if error.is_exceptional() {
            ReasonKind::Exceptional
        } else {
            ReasonKind::Error
        };
        ReasonRecord {
            kind,
            message: Some(error.message.clone()),
            metadata: error.metadata.clone(),
            exception: error.exception.as_ref().map(|e| e.to_string()),
            reasons: error.reasons.iter().map(ReasonRecord::from).collect(),
        }
    }
}

impl From<&Reason> for ReasonRecord {
    fn from(reason: &Reason) -> Self {
        match reason {
            Reason::Success(success) => success.into(),
            Reason::Error(error) => error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MessageError;

    fn boom() -> NativeError {
        Arc::new(MessageError("boom".to_string()))
    }

    #[test]
    fn test_success_message_is_optional() {
        assert_eq!(Success::new("saved").message(), Some("saved"));
        assert_eq!(Success::empty().message(), None);
        assert_eq!(Success::empty().to_string(), "success");
    }

    #[test]
    fn test_error_causes_keep_order() {
        let error = Error::new("outer")
            .caused_by(Error::new("first"))
            .caused_by(Error::new("second"));

        let messages: Vec<&str> = error.reasons().iter().map(Error::message).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert!(!error.is_exceptional());
    }

    #[test]
    fn test_exceptional_error_converts_with_source() {
        let exception = boom();
        let error: Error = ExceptionalError::new("wrapped", exception.clone()).into();

        assert_eq!(error.message(), "wrapped");
        assert!(error.is_exceptional());
        assert!(Arc::ptr_eq(error.exception().unwrap(), &exception));
        assert_eq!(error.source().unwrap().to_string(), "boom");
    }

    #[test]
    fn test_exception_equality_is_identity() {
        let exception = boom();
        let a = ExceptionalError::new("same", exception.clone());
        let b = ExceptionalError::new("same", exception);
        let c = ExceptionalError::new("same", boom());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_exception_uses_native_message() {
        let error = ExceptionalError::from_exception(boom());
        assert_eq!(error.message(), "boom");
    }

    #[test]
    fn test_record_serialization() {
        let error: Error = ExceptionalError::new("load failed", boom())
            .with_metadata("attempt", 2)
            .into();
        let record = ReasonRecord::from(&Reason::from(error));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["kind"], "exceptional");
        assert_eq!(json["message"], "load failed");
        assert_eq!(json["exception"], "boom");
        assert_eq!(json["metadata"]["attempt"], 2);
        assert!(json.get("reasons").is_none());

        let success = serde_json::to_value(ReasonRecord::from(&Success::empty())).unwrap();
        assert_eq!(success, serde_json::json!({ "kind": "success" }));
    }
}
