// Outcome values
//
// A value plus the successes and errors gathered while producing it. Every
// reason created from a message goes through the factories of the settings
// snapshot handed in by the caller.

use outcome_error::{Error, IntoNativeError, Reason, ReasonRecord, Success};

use crate::logger::LogLevel;
use crate::settings::ResultSettings;

/// Outcome of an operation that may fail without panicking.
///
/// An outcome is failed as soon as it carries one error reason; its value is
/// only observable while it is not failed.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T = ()> {
    value: Option<T>,
    reasons: Vec<Reason>,
}

impl<T> Outcome<T> {
    /// A successful outcome holding `value`
    pub fn ok(value: T) -> Self {
        Self {
            value: Some(value),
            reasons: Vec::new(),
        }
    }

    /// A failed outcome with one error built by the snapshot's error factory
    pub fn fail(settings: &ResultSettings, message: &str) -> Self {
        Self::fail_with(settings.error(message))
    }

    /// A failed outcome with one error per message, in order
    pub fn fail_many<I, S>(settings: &ResultSettings, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: None,
            reasons: settings.errors(messages).into_iter().map(Reason::Error).collect(),
        }
    }

    /// A failed outcome carrying an already built error
    pub fn fail_with(error: impl Into<Error>) -> Self {
        Self {
            value: None,
            reasons: vec![Reason::Error(error.into())],
        }
    }

    /// Run `operation`, routing any error through the snapshot's try-catch
    /// handler instead of propagating it
    pub fn try_run<E, F>(settings: &ResultSettings, operation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: IntoNativeError,
    {
        match operation() {
            Ok(value) => Self::ok(value),
            Err(err) => Self::fail_with(settings.handle_exception(err.into_native_error())),
        }
    }

    pub fn with_success(self, settings: &ResultSettings, message: &str) -> Self {
        self.with_reason(settings.success(message))
    }

    pub fn with_error(self, settings: &ResultSettings, message: &str) -> Self {
        self.with_reason(settings.error(message))
    }

    pub fn with_reason(mut self, reason: impl Into<Reason>) -> Self {
        self.reasons.push(reason.into());
        self
    }

    pub fn is_failed(&self) -> bool {
        self.reasons.iter().any(Reason::is_error)
    }

    pub fn is_ok(&self) -> bool {
        !self.is_failed()
    }

    /// The value, unless the outcome is failed
    pub fn value(&self) -> Option<&T> {
        if self.is_failed() {
            None
        } else {
            self.value.as_ref()
        }
    }

    /// All reasons, in the order they were added
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    pub fn errors(&self) -> impl Iterator<Item = &Error> {
        self.reasons.iter().filter_map(Reason::as_error)
    }

    pub fn successes(&self) -> impl Iterator<Item = &Success> {
        self.reasons.iter().filter_map(Reason::as_success)
    }

    /// Convert into a standard result, collecting the errors on failure
    pub fn into_result(self) -> Result<T, Vec<Error>> {
        let failed = self.is_failed();
        match self.value {
            Some(value) if !failed => Ok(value),
            _ => Err(self
                .reasons
                .into_iter()
                .filter_map(|reason| match reason {
                    Reason::Error(error) => Some(error),
                    Reason::Success(_) => None,
                })
                .collect()),
        }
    }

    /// Hand this outcome to the snapshot's logger
    pub fn log(&self, settings: &ResultSettings, context: &str, level: LogLevel) {
        let records: Vec<ReasonRecord> = self.reasons.iter().map(ReasonRecord::from).collect();
        let status = if self.is_failed() { "failed" } else { "ok" };
        let message = match serde_json::to_string(&records) {
            Ok(reasons) => format!("Outcome {}: {}", status, reasons),
            Err(err) => format!("Outcome {} (reasons not serializable: {})", status, err),
        };
        settings.logger().log(level, context, &message);
    }
}

impl Outcome<()> {
    /// A successful outcome without a value
    pub fn ok_unit() -> Self {
        Self::ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ResultSettingsBuilder;
    use crate::logger::CapturingLogger;

    #[test]
    fn test_ok_outcome_exposes_value() {
        let settings = ResultSettings::default();
        let outcome = Outcome::ok(7).with_success(&settings, "computed");

        assert!(outcome.is_ok());
        assert_eq!(outcome.value(), Some(&7));
        assert_eq!(outcome.successes().count(), 1);
        assert_eq!(outcome.into_result(), Ok(7));
    }

    #[test]
    fn test_error_hides_value() {
        let settings = ResultSettings::default();
        let outcome = Outcome::ok(7).with_error(&settings, "too late");

        assert!(outcome.is_failed());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.into_result(), Err(vec![Error::new("too late")]));
    }

    #[test]
    fn test_fail_many_keeps_order() {
        let settings = ResultSettings::default();
        let outcome: Outcome<u32> = Outcome::fail_many(&settings, ["a", "b"]);

        let messages: Vec<&str> = outcome.errors().map(Error::message).collect();
        assert_eq!(messages, vec!["a", "b"]);
    }

    #[test]
    fn test_try_run_routes_errors_through_handler() {
        let settings = ResultSettings::default();
        let outcome: Outcome<u32> = Outcome::try_run(&settings, || "42x".parse::<u32>().map_err(|e| e.to_string()));

        let error = outcome.errors().next().unwrap();
        assert!(error.is_exceptional());
        assert_eq!(error.message(), "invalid digit found in string");

        let ok: Outcome<u32> = Outcome::try_run(&settings, || Ok::<_, String>(42));
        assert_eq!(ok.value(), Some(&42));
    }

    #[test]
    fn test_log_uses_snapshot_logger() {
        let logger = CapturingLogger::new();
        let mut builder = ResultSettingsBuilder::new();
        builder.set_logger(logger.clone());
        let settings = builder.build();

        Outcome::<()>::fail(&settings, "disk full").log(&settings, "backup", LogLevel::Warn);

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].context, "backup");
        assert_eq!(entries[0].level, LogLevel::Warn);
        assert!(entries[0].message.starts_with("Outcome failed"));
        assert!(logger.contains("\"message\":\"disk full\""));
    }
}
