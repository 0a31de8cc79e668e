// Result settings
//
// The immutable snapshot produced by `ResultSettingsBuilder::build`. Consumers
// receive it explicitly and never see later changes made to the builder.

use std::fmt;
use std::sync::Arc;

use outcome_error::{Error, ExceptionalError, NativeError, Success};

use crate::builder::ResultSettingsBuilder;
use crate::logger::ResultLogger;

/// Turns a caught native error into an error reason
pub type TryCatchHandler = Arc<dyn Fn(NativeError) -> Error + Send + Sync>;

/// Creates a success reason from a message
pub type SuccessFactory = Arc<dyn Fn(&str) -> Success + Send + Sync>;

/// Creates an error reason from a message
pub type ErrorFactory = Arc<dyn Fn(&str) -> Error + Send + Sync>;

/// Creates one error reason per message, in order
pub type MultipleErrorFactory = Arc<dyn Fn(&[String]) -> Vec<Error> + Send + Sync>;

/// Creates an exceptional error from an optional message and a native error
pub type ExceptionalErrorFactory = Arc<dyn Fn(Option<&str>, NativeError) -> ExceptionalError + Send + Sync>;

/// Frozen outcome settings.
///
/// Cloning is cheap; every clone shares the same strategies.
#[derive(Clone)]
pub struct ResultSettings {
    pub(crate) logger: Arc<dyn ResultLogger>,
    pub(crate) try_catch_handler: TryCatchHandler,
    pub(crate) success_factory: SuccessFactory,
    pub(crate) error_factory: ErrorFactory,
    pub(crate) multiple_error_factory: MultipleErrorFactory,
    pub(crate) exceptional_error_factory: ExceptionalErrorFactory,
}

impl ResultSettings {
    /// Start a builder populated with the default strategies
    pub fn builder() -> ResultSettingsBuilder {
        ResultSettingsBuilder::new()
    }

    pub fn logger(&self) -> &Arc<dyn ResultLogger> {
        &self.logger
    }

    pub fn try_catch_handler(&self) -> &TryCatchHandler {
        &self.try_catch_handler
    }

    pub fn success_factory(&self) -> &SuccessFactory {
        &self.success_factory
    }

    pub fn error_factory(&self) -> &ErrorFactory {
        &self.error_factory
    }

    pub fn multiple_error_factory(&self) -> &MultipleErrorFactory {
        &self.multiple_error_factory
    }

    pub fn exceptional_error_factory(&self) -> &ExceptionalErrorFactory {
        &self.exceptional_error_factory
    }

    pub fn success(&self, message: &str) -> Success {
        (self.success_factory)(message)
    }

    pub fn error(&self, message: &str) -> Error {
        (self.error_factory)(message)
    }

    /// Create one error per message through the multiple-error factory
    pub fn errors<I, S>(&self, messages: I) -> Vec<Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        (self.multiple_error_factory)(messages.as_slice())
    }

    pub fn exceptional_error(&self, message: Option<&str>, exception: NativeError) -> ExceptionalError {
        (self.exceptional_error_factory)(message, exception)
    }

    /// Translate a caught native error through the try-catch handler
    pub fn handle_exception(&self, exception: NativeError) -> Error {
        (self.try_catch_handler)(exception)
    }
}

impl Default for ResultSettings {
    fn default() -> Self {
        ResultSettingsBuilder::new().build()
    }
}

impl fmt::Debug for ResultSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultSettings")
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}
