//! HTTP request handlers for the Halal Compliance Dashboard

pub mod certificate;
pub mod dashboard;
pub mod health;
pub mod intake;
pub mod reminder;
pub mod reporting;

pub use certificate::*;
pub use dashboard::*;
pub use health::*;
pub use intake::*;
pub use reminder::*;
pub use reporting::*;
