//! Business logic services for the Halal Compliance Dashboard

pub mod audit_pack;
pub mod certificate;
pub mod intake;
pub mod reminder;
pub mod seed;
pub mod session;

pub use audit_pack::AuditPackService;
pub use certificate::CertificateService;
pub use intake::IntakeService;
pub use reminder::ReminderService;
pub use seed::load_seed;
pub use session::{Session, SessionService, SessionSettings, SharedSession};
