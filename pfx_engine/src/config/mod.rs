//! Engine configuration
//!
//! Compile-time security limits live in [`constants`]; user-facing runtime
//! preferences (environment-variable backed) live in [`runtime`].

pub mod constants;
pub mod runtime;

pub use runtime::EnginePreferences;
