//! Infrastructure layer.
//!
//! Configuration, logging, and the wiring that turns configuration into
//! running adapters.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;
