//! Domain models for the Halal Compliance Dashboard

mod certificate;
mod log;
mod roi;
mod seed;
mod submission;
mod supplier;

pub use certificate::*;
pub use log::*;
pub use roi::*;
pub use seed::*;
pub use submission::*;
pub use supplier::*;
