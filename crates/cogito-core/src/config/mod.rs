//! Configuration management
//!
//! Configuration is assembled once at startup (defaults, then an optional
//! file, then environment variables), validated, and handed to the
//! composition root as an immutable [`Config`] value.

pub mod env_loader;
pub mod file_loader;
pub mod loader;
pub mod model;
pub mod timeouts;
pub mod validation;

pub use loader::{ConfigLoader, ConfigSource};
pub use model::{
    Config, FailurePolicy, GeminiSettings, OpenAiSettings, ProviderKind, RateLimitSettings,
    RetrySettings,
};
pub use timeouts::TimeoutConfig;
