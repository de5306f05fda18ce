//! Validated notification settings

use std::fmt;
use std::path::{Path, PathBuf};

use lettre::message::Mailbox;
use lettre::Address;

use super::error::NotifyError;

/// Raw notification settings as supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct NotificationSettings {
    /// SMTP login, also the sender address
    pub user: String,
    /// SMTP password
    pub password: String,
    /// Display name for the sender (defaults to `user`)
    pub nickname: Option<String>,
    /// SMTP server host
    pub host: String,
    /// SMTP server port
    pub port: u16,
    /// Recipient addresses
    pub recipients: Vec<String>,
    /// Files attached to the message
    pub attachments: Vec<PathBuf>,
    /// Message subject
    pub subject: String,
    /// HTML message body
    pub body: String,
}

/// Immutable, validated notification configuration
///
/// ```
/// use gopack::notify::{NotificationConfig, NotificationSettings};
///
/// let config = NotificationConfig::new(NotificationSettings {
///     user: "ci@example.com".to_string(),
///     password: "secret".to_string(),
///     host: "smtp.example.com".to_string(),
///     port: 465,
///     recipients: vec!["dev@example.com".to_string()],
///     subject: "Build finished".to_string(),
///     ..Default::default()
/// })?;
///
/// assert_eq!(config.from().email.to_string(), "ci@example.com");
/// # Ok::<(), gopack::notify::NotifyError>(())
/// ```
#[derive(Clone)]
pub struct NotificationConfig {
    user: String,
    password: String,
    from: Mailbox,
    host: String,
    port: u16,
    recipients: Vec<Mailbox>,
    attachments: Vec<PathBuf>,
    subject: String,
    body: String,
}

impl NotificationConfig {
    /// Validate `settings`
    ///
    /// User and host must be non-empty, the port non-zero, and at least one
    /// recipient is required. Every address must parse.
    pub fn new(settings: NotificationSettings) -> Result<Self, NotifyError> {
        let user = settings.user.trim().to_string();
        if user.is_empty() {
            return Err(invalid("user", "cannot be empty"));
        }
        let host = settings.host.trim().to_string();
        if host.is_empty() {
            return Err(invalid("host", "cannot be empty"));
        }
        if settings.port == 0 {
            return Err(invalid("port", "must be non-zero"));
        }
        if settings.recipients.is_empty() {
            return Err(invalid("recipients", "at least one recipient is required"));
        }

        let sender = parse_address("user", &user)?;
        let nickname = settings
            .nickname
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| user.clone());
        let from = Mailbox::new(Some(nickname), sender);

        let recipients = settings
            .recipients
            .iter()
            .map(|r| parse_address("recipients", r.trim()).map(|a| Mailbox::new(None, a)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            user,
            password: settings.password,
            from,
            host,
            port: settings.port,
            recipients,
            attachments: settings.attachments,
            subject: settings.subject,
            body: settings.body,
        })
    }

    /// SMTP login
    pub fn user(&self) -> &str {
        &self.user
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// Sender mailbox (nickname plus user address)
    pub fn from(&self) -> &Mailbox {
        &self.from
    }

    /// SMTP server host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// SMTP server port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Recipient mailboxes
    pub fn recipients(&self) -> &[Mailbox] {
        &self.recipients
    }

    /// Attachment paths
    pub fn attachments(&self) -> impl Iterator<Item = &Path> {
        self.attachments.iter().map(PathBuf::as_path)
    }

    /// Message subject
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// HTML message body
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Debug for NotificationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("from", &self.from)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("recipients", &self.recipients)
            .field("attachments", &self.attachments)
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

fn invalid(field: &'static str, reason: &str) -> NotifyError {
    NotifyError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

fn parse_address(field: &'static str, raw: &str) -> Result<Address, NotifyError> {
    raw.parse::<Address>()
        .map_err(|e| invalid(field, &format!("'{}' is not a valid address: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> NotificationSettings {
        NotificationSettings {
            user: "ci@example.com".to_string(),
            password: "secret".to_string(),
            nickname: None,
            host: "smtp.example.com".to_string(),
            port: 465,
            recipients: vec!["dev@example.com".to_string(), "ops@example.com".to_string()],
            attachments: vec![],
            subject: "Build finished".to_string(),
            body: "<p>done</p>".to_string(),
        }
    }

    fn invalid_field(result: Result<NotificationConfig, NotifyError>) -> &'static str {
        match result {
            Err(NotifyError::Invalid { field, .. }) => field,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_settings_build_config() {
        let config = NotificationConfig::new(settings()).unwrap();

        assert_eq!(config.user(), "ci@example.com");
        assert_eq!(config.host(), "smtp.example.com");
        assert_eq!(config.port(), 465);
        assert_eq!(config.recipients().len(), 2);
        assert_eq!(config.subject(), "Build finished");
    }

    #[test]
    fn test_debug_output_hides_password() {
        let config = NotificationConfig::new(settings()).unwrap();

        assert!(!format!("{:?}", config).contains("secret"));
    }

    #[test]
    fn test_nickname_defaults_to_user() {
        let config = NotificationConfig::new(settings()).unwrap();

        assert_eq!(config.from().name.as_deref(), Some("ci@example.com"));
    }

    #[test]
    fn test_nickname_is_used_as_display_name() {
        let config = NotificationConfig::new(NotificationSettings {
            nickname: Some("Build Bot".to_string()),
            ..settings()
        })
        .unwrap();

        assert_eq!(config.from().name.as_deref(), Some("Build Bot"));
        assert_eq!(config.from().email.to_string(), "ci@example.com");
    }

    #[test]
    fn test_empty_user_is_rejected() {
        let result = NotificationConfig::new(NotificationSettings {
            user: "  ".to_string(),
            ..settings()
        });

        assert_eq!(invalid_field(result), "user");
    }

    #[test]
    fn test_empty_host_is_rejected() {
        let result = NotificationConfig::new(NotificationSettings {
            host: String::new(),
            ..settings()
        });

        assert_eq!(invalid_field(result), "host");
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let result = NotificationConfig::new(NotificationSettings {
            port: 0,
            ..settings()
        });

        assert_eq!(invalid_field(result), "port");
    }

    #[test]
    fn test_missing_recipients_are_rejected() {
        let result = NotificationConfig::new(NotificationSettings {
            recipients: vec![],
            ..settings()
        });

        assert_eq!(invalid_field(result), "recipients");
    }

    #[test]
    fn test_malformed_addresses_are_rejected() {
        let bad_user = NotificationConfig::new(NotificationSettings {
            user: "not-an-address".to_string(),
            ..settings()
        });
        assert_eq!(invalid_field(bad_user), "user");

        let bad_recipient = NotificationConfig::new(NotificationSettings {
            recipients: vec!["dev@example.com".to_string(), "nope".to_string()],
            ..settings()
        });
        assert_eq!(invalid_field(bad_recipient), "recipients");
    }
}
