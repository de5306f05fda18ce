//! Error types for notifications

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring or sending a notification
#[derive(Error, Debug)]
pub enum NotifyError {
    /// A setting failed validation
    #[error("Invalid notification setting '{field}': {reason}")]
    Invalid {
        /// Setting name
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// The SMTP server could not be reached or rejected the message
    #[error("SMTP transport error")]
    Transport(#[source] lettre::transport::smtp::Error),

    /// The SMTP server rejected the credentials
    #[error("SMTP authentication failed for {user}")]
    Authentication {
        /// Login that was rejected
        user: String,
        #[source]
        /// Transport error source
        source: lettre::transport::smtp::Error,
    },

    /// An attachment could not be read
    #[error("Failed to read attachment {path}")]
    Attachment {
        /// Attachment path
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// The message could not be assembled
    #[error("Failed to build message: {0}")]
    Message(String),
}
