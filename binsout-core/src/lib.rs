//! Core types and service wiring for the binsout bin-collection lookup.

/// Domain models and identifiers shared by all providers.
pub mod model;
/// Registry and helpers for plugging council providers into the service.
pub mod plugin;
/// Traits describing the provider interfaces.
pub mod ports;
/// High-level service facade used by clients.
pub mod service;

pub use model::*;
pub use plugin::*;
pub use ports::*;
pub use service::*;
