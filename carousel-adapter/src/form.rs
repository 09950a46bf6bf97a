//! Contact-form validation and mailto handoff.
//!
//! There is no server to post to; a form whose action is a `mailto:` URL
//! is turned into a prefilled message for the visitor's mail client, and
//! anything else is left to the host to simulate.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// A contact-form submission, fields as the page names them.
///
/// The sender's name comes either from a single `name` field or from
/// separate first/last name fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactMessage {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub message: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A name (single field or first + last), an email address, and a
    /// message are all required.
    #[error("please fill in all required fields")]
    MissingRequiredFields,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ContactMessage {
    /// The sender's display name: an explicit `name` wins, else first and
    /// last name joined.
    pub fn full_name(&self) -> Option<String> {
        if let Some(name) = non_empty(&self.name) {
            return Some(String::from(name));
        }
        let joined = format!(
            "{} {}",
            non_empty(&self.first_name).unwrap_or(""),
            non_empty(&self.last_name).unwrap_or("")
        );
        let joined = joined.trim();
        if joined.is_empty() {
            None
        } else {
            Some(String::from(joined))
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.full_name().is_none()
            || non_empty(&self.email).is_none()
            || non_empty(&self.message).is_none()
        {
            return Err(FormError::MissingRequiredFields);
        }
        Ok(())
    }

    /// Builds the prefilled mailto URL for a `mailto:` form action.
    ///
    /// Returns `None` for non-mailto actions or when no sender name is
    /// available. Any query part of the action is dropped; subject and
    /// body are percent-encoded.
    pub fn mailto(&self, action: &str) -> Option<String> {
        let action = action.trim();
        let prefix = action.get(..7)?;
        if !prefix.eq_ignore_ascii_case("mailto:") {
            return None;
        }
        let to = action[7..].split('?').next().unwrap_or("");
        let name = self.full_name()?;

        let subject = format!("New message from {name}");
        let mut lines = Vec::new();
        lines.push(format!("Name: {name}"));
        let optional = [
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("Company", &self.company),
            ("Service", &self.service),
            ("Budget", &self.budget),
            ("Timeline", &self.timeline),
        ];
        for (label, value) in optional {
            if let Some(value) = non_empty(value) {
                lines.push(format!("{label}: {value}"));
            }
        }
        lines.push(String::new());
        lines.push(String::from("Message:"));
        lines.push(String::from(self.message.as_deref().unwrap_or("")));
        let body = lines.join("\n");

        Some(format!(
            "mailto:{to}?subject={}&body={}",
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        ))
    }
}
