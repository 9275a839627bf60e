//! Provider gateway
//!
//! One [`TextGenerator`] implementation per remote backend, plus the
//! [`ProviderBackend`] sum type selected once at startup.

pub mod error_utils;
pub mod gemini;
pub mod http;
pub mod openai;
pub mod provider_trait;

#[cfg(test)]
mod gemini_tests;
#[cfg(test)]
mod openai_tests;

pub use gemini::GeminiProvider;
pub use http::build_http_client;
pub use openai::OpenAiProvider;
pub use provider_trait::{ProviderBackend, TextGenerator};

#[cfg(test)]
pub use provider_trait::MockTextGenerator;
