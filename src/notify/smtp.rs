//! SMTP notification sender

use std::path::Path;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::SmtpTransportBuilder;
use lettre::{Message, SmtpTransport, Transport};

use super::config::NotificationConfig;
use super::error::NotifyError;
use super::NotificationSender;

/// SMTP reply codes that mean the login was refused
const AUTH_FAILURE_CODES: [&str; 3] = ["530", "534", "535"];

/// Submission port that expects TLS from the first byte
const IMPLICIT_TLS_PORT: u16 = 465;

/// Sends notifications through an authenticated SMTP relay
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpSender;

impl SmtpSender {
    /// Assemble the message: HTML body plus one part per attachment
    pub fn build_message(config: &NotificationConfig) -> Result<Message, NotifyError> {
        let mut builder = Message::builder()
            .from(config.from().clone())
            .subject(config.subject());
        for recipient in config.recipients() {
            builder = builder.to(recipient.clone());
        }

        let mut parts = MultiPart::mixed().singlepart(SinglePart::html(config.body().to_string()));
        for path in config.attachments() {
            parts = parts.singlepart(attachment(path)?);
        }

        builder
            .multipart(parts)
            .map_err(|e| NotifyError::Message(e.to_string()))
    }
}

impl NotificationSender for SmtpSender {
    fn send(&self, config: &NotificationConfig) -> Result<(), NotifyError> {
        let message = Self::build_message(config)?;

        let credentials = Credentials::new(config.user().to_string(), config.password().to_string());
        let mailer = transport(config.host(), config.port())
            .map_err(NotifyError::Transport)?
            .credentials(credentials)
            .build();

        log::info!(
            "Sending '{}' to {} recipient(s) via {}:{}",
            config.subject(),
            config.recipients().len(),
            config.host(),
            config.port()
        );
        mailer.send(&message).map_err(|e| {
            if is_auth_failure(&e) {
                NotifyError::Authentication {
                    user: config.user().to_string(),
                    source: e,
                }
            } else {
                NotifyError::Transport(e)
            }
        })?;

        log::info!("Notification sent");
        Ok(())
    }
}

/// Implicit TLS on 465, plaintext upgraded with STARTTLS everywhere else
fn transport(
    host: &str,
    port: u16,
) -> Result<SmtpTransportBuilder, lettre::transport::smtp::Error> {
    let builder = if port == IMPLICIT_TLS_PORT {
        SmtpTransport::relay(host)?
    } else {
        SmtpTransport::starttls_relay(host)?
    };
    Ok(builder.port(port))
}

fn attachment(path: &Path) -> Result<SinglePart, NotifyError> {
    let body = std::fs::read(path).map_err(|source| NotifyError::Attachment {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "attachment".to_string());
    let content_type = ContentType::parse("application/octet-stream")
        .map_err(|e| NotifyError::Message(e.to_string()))?;

    log::debug!("Attaching {} ({} bytes)", path.display(), body.len());
    Ok(Attachment::new(file_name).body(body, content_type))
}

fn is_auth_failure(error: &lettre::transport::smtp::Error) -> bool {
    error
        .status()
        .is_some_and(|code| AUTH_FAILURE_CODES.contains(&code.to_string().as_str()))
}
