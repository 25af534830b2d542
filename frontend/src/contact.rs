use gloo_net::http::Request;
use log::{debug, info};
use serde::Serialize;

use crate::config;
use crate::error::SiteError;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub company: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.name.trim().is_empty() {
            return Err(SiteError::InvalidField {
                field: "Name",
                reason: "is required",
            });
        }
        if !looks_like_email(self.email.trim()) {
            return Err(SiteError::InvalidField {
                field: "Email",
                reason: "must be a valid address",
            });
        }
        if self.message.trim().is_empty() {
            return Err(SiteError::InvalidField {
                field: "Message",
                reason: "is required",
            });
        }
        Ok(())
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Lets one submission through at a time.
#[derive(Debug, Default)]
pub struct SubmitGate {
    in_flight: bool,
}

impl SubmitGate {
    /// Returns `false` while an earlier submission is still running.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

/// Default submitter used when the form is not given its own callback.
///
/// Posts to the configured endpoint if there is one, otherwise the message
/// only goes to the log.
pub async fn submit(message: &ContactMessage) -> Result<(), SiteError> {
    message.validate()?;
    let message = message.trimmed();

    let Some(endpoint) = config::contact_endpoint() else {
        info!("Contact form submitted by {} (no endpoint configured)", message.email);
        return Ok(());
    };

    debug!("Posting contact message to {}", endpoint);
    let response = Request::post(endpoint).json(&message)?.send().await?;
    if response.ok() {
        info!("Contact message delivered");
        Ok(())
    } else {
        Err(SiteError::Submit(format!("server answered {}", response.status())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: String::new(),
            message: "We need an intake agent.".to_string(),
        }
    }

    #[test]
    fn test_complete_message_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_blank_fields_are_named() {
        let mut msg = filled();
        msg.name = "   ".to_string();
        assert!(matches!(
            msg.validate(),
            Err(SiteError::InvalidField { field: "Name", .. })
        ));

        let mut msg = filled();
        msg.message = "\n".to_string();
        assert!(matches!(
            msg.validate(),
            Err(SiteError::InvalidField { field: "Message", .. })
        ));
    }

    #[test]
    fn test_email_shapes() {
        for good in ["a@b.co", " ada@example.com ", "first.last@sub.example.org"] {
            assert!(looks_like_email(good.trim()), "{}", good);
        }
        for bad in ["", "ada", "@example.com", "ada@", "ada@example", "ada@.com", "a@b@c.com", "a b@c.com"] {
            assert!(!looks_like_email(bad), "{}", bad);
        }
    }

    #[test]
    fn test_error_message_reads_naturally() {
        let mut msg = filled();
        msg.email = "nope".to_string();
        assert_eq!(
            msg.validate().unwrap_err().to_string(),
            "Email must be a valid address"
        );
    }

    #[test]
    fn test_gate_admits_one_submission_until_finished() {
        let mut gate = SubmitGate::default();
        assert!(gate.try_begin());
        assert!(!gate.try_begin());
        assert!(!gate.try_begin());

        gate.finish();
        assert!(gate.try_begin());
    }

    #[test]
    fn test_trimmed_and_serialized_without_empty_company() {
        let mut msg = filled();
        msg.name = "  Ada ".to_string();
        let json = serde_json::to_value(msg.trimmed()).unwrap();
        assert_eq!(json["name"], "Ada");
        assert!(json.get("company").is_none());
    }
}
