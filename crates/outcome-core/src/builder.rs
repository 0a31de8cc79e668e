// Result settings builder
//
// Holds the six outcome strategies, each populated with a default, and freezes
// them into a `ResultSettings` snapshot.

use std::sync::Arc;

use outcome_error::{Error, ExceptionalError, NativeError, Success};

use crate::config::SettingsConfig;
use crate::logger::{DefaultLogger, NoopLogger, ResultLogger};
use crate::settings::{
    ErrorFactory, ExceptionalErrorFactory, MultipleErrorFactory, ResultSettings, SuccessFactory,
    TryCatchHandler,
};

fn default_success_factory() -> SuccessFactory {
    Arc::new(|message: &str| Success::new(message))
}

fn default_error_factory() -> ErrorFactory {
    Arc::new(|message: &str| Error::new(message))
}

fn default_exceptional_error_factory() -> ExceptionalErrorFactory {
    Arc::new(|message: Option<&str>, exception: NativeError| match message {
        Some(message) => ExceptionalError::new(message, exception),
        None => ExceptionalError::from_exception(exception),
    })
}

fn bind_try_catch_handler(exceptional_error_factory: ExceptionalErrorFactory) -> TryCatchHandler {
    Arc::new(move |exception: NativeError| {
        let message = exception.to_string();
        (exceptional_error_factory)(Some(message.as_str()), exception).into()
    })
}

fn default_multiple_error_factory() -> MultipleErrorFactory {
    Arc::new(|messages: &[String]| {
        messages
            .iter()
            .map(|message| Error::new(message.as_str()))
            .collect()
    })
}

/// Builder for [`ResultSettings`].
///
/// Every slot always holds a strategy. The default try-catch handler is not a
/// fixed closure: `build` binds it to the exceptional-error factory of the
/// snapshot being built, so overriding that factory also changes how the
/// default handler materializes errors. The default multiple-error factory
/// creates plain errors and does not consult the error factory.
pub struct ResultSettingsBuilder {
    logger: Arc<dyn ResultLogger>,
    // None until overridden; resolved against the snapshot's own exceptional factory
    try_catch_handler: Option<TryCatchHandler>,
    success_factory: SuccessFactory,
    error_factory: ErrorFactory,
    multiple_error_factory: MultipleErrorFactory,
    exceptional_error_factory: ExceptionalErrorFactory,
}

impl ResultSettingsBuilder {
    /// Create a builder with the default strategies
    pub fn new() -> Self {
        Self {
            logger: Arc::new(DefaultLogger::new()),
            try_catch_handler: None,
            success_factory: default_success_factory(),
            error_factory: default_error_factory(),
            multiple_error_factory: default_multiple_error_factory(),
            exceptional_error_factory: default_exceptional_error_factory(),
        }
    }

    /// Create a builder whose logger follows the given configuration
    pub fn from_config(config: &SettingsConfig) -> Self {
        let mut builder = Self::new();
        if config.logging.enabled {
            builder.set_logger(DefaultLogger::with_level(config.logging.level));
        } else {
            builder.set_logger(NoopLogger);
        }
        builder
    }

    pub fn logger(&self) -> Arc<dyn ResultLogger> {
        Arc::clone(&self.logger)
    }

    /// The current try-catch handler, bound to the current exceptional-error
    /// factory unless one was set explicitly
    pub fn try_catch_handler(&self) -> TryCatchHandler {
        match &self.try_catch_handler {
            Some(handler) => Arc::clone(handler),
            None => bind_try_catch_handler(Arc::clone(&self.exceptional_error_factory)),
        }
    }

    pub fn success_factory(&self) -> SuccessFactory {
        Arc::clone(&self.success_factory)
    }

    pub fn error_factory(&self) -> ErrorFactory {
        Arc::clone(&self.error_factory)
    }

    pub fn multiple_error_factory(&self) -> MultipleErrorFactory {
        Arc::clone(&self.multiple_error_factory)
    }

    pub fn exceptional_error_factory(&self) -> ExceptionalErrorFactory {
        Arc::clone(&self.exceptional_error_factory)
    }

    pub fn set_logger(&mut self, logger: impl ResultLogger + 'static) -> &mut Self {
        self.logger = Arc::new(logger);
        self
    }

    /// Use a logger that is already shared elsewhere
    pub fn set_shared_logger(&mut self, logger: Arc<dyn ResultLogger>) -> &mut Self {
        self.logger = logger;
        self
    }

    pub fn set_try_catch_handler<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(NativeError) -> Error + Send + Sync + 'static,
    {
        self.try_catch_handler = Some(Arc::new(handler));
        self
    }

    pub fn set_success_factory<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(&str) -> Success + Send + Sync + 'static,
    {
        self.success_factory = Arc::new(factory);
        self
    }

    pub fn set_error_factory<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(&str) -> Error + Send + Sync + 'static,
    {
        self.error_factory = Arc::new(factory);
        self
    }

    pub fn set_multiple_error_factory<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(&[String]) -> Vec<Error> + Send + Sync + 'static,
    {
        self.multiple_error_factory = Arc::new(factory);
        self
    }

    pub fn set_exceptional_error_factory<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(Option<&str>, NativeError) -> ExceptionalError + Send + Sync + 'static,
    {
        self.exceptional_error_factory = Arc::new(factory);
        self
    }

    /// Freeze the current strategies into a snapshot.
    ///
    /// The snapshot holds its own references; changing this builder afterwards
    /// does not affect it.
    pub fn build(&self) -> ResultSettings {
        let exceptional_error_factory = Arc::clone(&self.exceptional_error_factory);

        let try_catch_handler = match &self.try_catch_handler {
            Some(handler) => Arc::clone(handler),
            None => bind_try_catch_handler(Arc::clone(&exceptional_error_factory)),
        };

        tracing::debug!(
            logger = ?self.logger,
            custom_try_catch_handler = self.try_catch_handler.is_some(),
            "Built result settings"
        );

        ResultSettings {
            logger: Arc::clone(&self.logger),
            try_catch_handler,
            success_factory: Arc::clone(&self.success_factory),
            error_factory: Arc::clone(&self.error_factory),
            multiple_error_factory: Arc::clone(&self.multiple_error_factory),
            exceptional_error_factory,
        }
    }
}

impl Default for ResultSettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResultSettingsBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultSettingsBuilder")
            .field("logger", &self.logger)
            .field("custom_try_catch_handler", &self.try_catch_handler.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outcome_error::{native_error, MessageError};

    fn boom() -> NativeError {
        native_error(MessageError("boom".to_string()))
    }

    #[test]
    fn test_fresh_builder_has_every_slot() {
        let builder = ResultSettingsBuilder::new();
        let exception = boom();

        assert_eq!(builder.success_factory()("ok"), Success::new("ok"));
        assert_eq!(builder.error_factory()("bad"), Error::new("bad"));
        assert_eq!(builder.multiple_error_factory()(&["a".to_string()][..]).len(), 1);
        assert_eq!(builder.exceptional_error_factory()(None, exception.clone()).message(), "boom");
        assert_eq!(builder.try_catch_handler()(exception).message(), "boom");
        assert!(format!("{:?}", builder.logger()).contains("DefaultLogger"));
    }

    #[test]
    fn test_build_is_decoupled_from_later_changes() {
        let mut builder = ResultSettingsBuilder::new();
        let settings = builder.build();

        builder.set_error_factory(|message: &str| Error::new(format!("custom: {}", message)));
        builder.set_success_factory(|_: &str| Success::empty());

        assert_eq!(settings.error("bad").message(), "bad");
        assert_eq!(settings.success("ok").message(), Some("ok"));
        assert_eq!(builder.build().error("bad").message(), "custom: bad");
    }

    #[test]
    fn test_multiple_errors_ignore_overridden_error_factory() {
        let mut builder = ResultSettingsBuilder::new();
        builder.set_error_factory(|message: &str| Error::new(format!("custom: {}", message)));
        let settings = builder.build();

        assert_eq!(settings.error("a").message(), "custom: a");
        assert_eq!(settings.errors(["a", "b"]), vec![Error::new("a"), Error::new("b")]);
    }

    #[test]
    fn test_explicit_multiple_error_factory_is_kept() {
        let mut builder = ResultSettingsBuilder::new();
        builder.set_multiple_error_factory(|messages: &[String]| vec![Error::new(messages.join(", "))]);

        assert_eq!(builder.build().errors(["a", "b"]), vec![Error::new("a, b")]);
    }

    #[test]
    fn test_default_handler_follows_overridden_exceptional_factory() {
        let mut builder = ResultSettingsBuilder::new();
        builder.set_exceptional_error_factory(|message: Option<&str>, exception: NativeError| {
            ExceptionalError::new(format!("wrapped: {}", message.unwrap_or("?")), exception)
        });
        let settings = builder.build();

        assert_eq!(settings.handle_exception(boom()).message(), "wrapped: boom");
    }

    #[test]
    fn test_explicit_handler_is_kept() {
        let mut builder = ResultSettingsBuilder::new();
        builder.set_try_catch_handler(|_: NativeError| Error::new("handled"));
        builder.set_exceptional_error_factory(|_: Option<&str>, exception: NativeError| {
            ExceptionalError::new("ignored", exception)
        });

        assert_eq!(builder.build().handle_exception(boom()).message(), "handled");
    }

    #[test]
    fn test_from_config_disables_logging() {
        let config = SettingsConfig::from_toml_str("[logging]\nenabled = false\n").unwrap();
        let builder = ResultSettingsBuilder::from_config(&config);
        assert!(format!("{:?}", builder.logger()).contains("NoopLogger"));
    }
}
