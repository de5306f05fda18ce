//! Email notifications
//!
//! A standalone collaborator for reporting build results by mail. The build
//! pipeline never calls it.

pub mod config;
pub mod error;
pub mod smtp;

pub use config::{NotificationConfig, NotificationSettings};
pub use error::NotifyError;
pub use smtp::SmtpSender;

/// Delivers a notification described by a validated configuration
pub trait NotificationSender {
    /// Send one message to every configured recipient
    fn send(&self, config: &NotificationConfig) -> Result<(), NotifyError>;
}
