//! # Contact Service
//!
//! Validates the contact form and turns a valid submission into a plain-text
//! artifact the visitor can keep. Nothing is stored or transmitted.

use chrono::{DateTime, Local};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use shared::{ContactArtifact, ContactForm};

use super::errors::ContactError;

/// One `@`, at least one `.` after it, no whitespace anywhere
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const RULE: &str = "=====================================";

#[derive(Debug, Clone)]
pub struct ContactService {
    brand_name: String,
}

impl ContactService {
    pub fn new(brand_name: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
        }
    }

    /// Trim every field and check it; the returned form holds the trimmed values
    pub fn validate(&self, form: &ContactForm) -> Result<ContactForm, ContactError> {
        let trimmed = ContactForm {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            message: form.message.trim().to_string(),
        };

        if trimmed.name.is_empty() || trimmed.email.is_empty() || trimmed.message.is_empty() {
            warn!("Contact form submitted with empty fields");
            return Err(ContactError::MissingFields);
        }

        if !is_valid_email(&trimmed.email) {
            warn!("Contact form submitted with malformed email");
            return Err(ContactError::InvalidEmail);
        }

        Ok(trimmed)
    }

    /// Validate and build the downloadable summary stamped with `now`
    pub fn submit(&self, form: &ContactForm, now: DateTime<Local>) -> Result<ContactArtifact, ContactError> {
        let form = self.validate(form)?;
        let artifact = ContactArtifact {
            file_name: format!("skyway-contact-{}.txt", now.timestamp_millis()),
            content: self.render_content(&form, now),
        };
        info!("Prepared contact artifact {}", artifact.file_name);
        Ok(artifact)
    }

    fn render_content(&self, form: &ContactForm, now: DateTime<Local>) -> String {
        format!(
            "{brand} - Contact Form Submission\n\
             {rule}\n\
             \n\
             Date: {date}\n\
             Name: {name}\n\
             Email: {email}\n\
             \n\
             Message:\n\
             {message}\n\
             \n\
             {rule}\n\
             Thank you for contacting {brand}!\n\
             We will get back to you within 24-48 hours.",
            brand = self.brand_name,
            rule = RULE,
            date = now.format("%d/%m/%Y, %H:%M:%S"),
            name = form.name,
            email = form.email,
            message = form.message,
        )
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn service() -> ContactService {
        ContactService::new("SkyWay Travels")
    }

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("asha@example.com"));
        assert!(is_valid_email("a.b@c.co.in"));
        assert!(!is_valid_email("asha@example"));
        assert!(!is_valid_email("asha example@x.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn test_missing_fields() {
        let result = service().validate(&form("Asha", "   ", "Hello"));
        assert_eq!(result, Err(ContactError::MissingFields));
        assert_eq!(ContactError::MissingFields.to_string(), "Please fill in all fields");
    }

    #[test]
    fn test_invalid_email() {
        let result = service().submit(&form("Asha", "asha.example.com", "Hello"), fixed_now());
        assert_eq!(result, Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_artifact_content() {
        let artifact = service()
            .submit(&form("  Asha Rao ", "asha@example.com", " Need a quote for Bali \n"), fixed_now())
            .unwrap();

        assert_eq!(
            artifact.file_name,
            format!("skyway-contact-{}.txt", fixed_now().timestamp_millis())
        );
        assert!(artifact.content.starts_with("SkyWay Travels - Contact Form Submission\n"));
        assert!(artifact.content.contains("Date: 14/03/2025, 09:30:00\n"));
        assert!(artifact.content.contains("Name: Asha Rao\n"));
        assert!(artifact.content.contains("Email: asha@example.com\n"));
        assert!(artifact.content.contains("Message:\nNeed a quote for Bali\n"));
        assert!(artifact.content.ends_with("We will get back to you within 24-48 hours."));
    }
}
