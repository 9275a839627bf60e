//! Error types for Cogito
//!
//! The crate-wide [`CogitoError`] carries the taxonomy the protocol layer needs:
//! invalid input and unknown tools are rejected before any network call,
//! provider failures carry a [`ProviderError`] that knows whether it is
//! worth retrying.

mod constructors;
mod conversions;
mod provider;
mod types;

pub use provider::ProviderError;
pub use types::{CogitoError, CogitoResult, UnifiedError};
