//! # Jokebox Core
//!
//! Core types, entities, and error definitions for the Jokebox service.
//! This crate provides the domain model, the snapshot codec, and the
//! unified error type used across all layers.

pub mod codec;
pub mod domain;
pub mod error;
pub mod result;
pub mod telemetry;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use validation::*;
