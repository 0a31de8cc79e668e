//! Outcome settings
//!
//! Configurable construction and logging of outcome values. A
//! [`ResultSettingsBuilder`] holds six strategies (a logger, a try-catch
//! handler and four reason factories), each with a default, and freezes them
//! into an immutable [`ResultSettings`] snapshot. The snapshot is passed
//! explicitly to whatever creates [`Outcome`] values; there is no global
//! settings instance.
//!
//! ```
//! use outcome_core::{Outcome, ResultSettingsBuilder};
//! use outcome_error::Error;
//!
//! let mut builder = ResultSettingsBuilder::new();
//! builder.set_error_factory(|message: &str| Error::new(message).with_metadata("layer", "import"));
//! let settings = builder.build();
//!
//! let outcome: Outcome<u32> = Outcome::try_run(&settings, || "12".parse::<u32>().map_err(|e| e.to_string()));
//! assert_eq!(outcome.value(), Some(&12));
//!
//! let failed: Outcome<u32> = Outcome::fail(&settings, "row 3 is empty");
//! assert_eq!(failed.errors().next().unwrap().metadata()["layer"], "import");
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod logger;
pub mod outcome;
pub mod settings;

#[cfg(any(test, feature = "testing"))]
pub mod test_logging;

pub use builder::ResultSettingsBuilder;
pub use config::{LoggingConfig, SettingsConfig};
pub use error::{SettingsError, SettingsResult};
pub use logger::{CapturingLogger, DefaultLogger, LogLevel, LogRecord, NoopLogger, ResultLogger};
pub use outcome::Outcome;
pub use settings::{
    ErrorFactory, ExceptionalErrorFactory, MultipleErrorFactory, ResultSettings, SuccessFactory,
    TryCatchHandler,
};

// Reason types are part of every factory signature
pub use outcome_error;
