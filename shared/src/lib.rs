//! Shared types and rules for the Halal Compliance Dashboard
//!
//! This crate contains the models and pure compliance rules shared between
//! the backend, the browser front end (via WASM), and other components.

pub mod aggregate;
pub mod intake;
pub mod models;
pub mod status;
pub mod types;
pub mod validation;

pub use aggregate::*;
pub use intake::*;
pub use models::*;
pub use status::*;
pub use types::*;
pub use validation::*;
