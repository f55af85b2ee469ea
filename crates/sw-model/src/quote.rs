//! Outbound quote-request payload.

use serde::{Deserialize, Serialize};

/// Body of `POST /sites/{slug}/quote-requests/`.
///
/// Carries the quote form's field values plus fixed submission metadata
/// (source page, locale, marketing consent). This is the only
/// state-mutating payload the rendering surface ever sends.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Customer name.
    pub name: String,
    /// Contact email. May be empty when a phone number is given.
    pub email: String,
    /// Contact phone. May be empty when an email is given.
    pub phone: String,
    /// Vehicle license plate, for auto-garage tenants.
    pub license_plate: String,
    /// Vehicle make and model, for auto-garage tenants.
    pub car_make_model: String,
    /// Requested service type.
    pub service_type: String,
    /// Free-form message.
    pub message: String,
    /// Slug of the page the form was submitted from.
    pub source_page_slug: String,
    /// Locale of the page the form was submitted from.
    pub locale: String,
    /// Marketing-consent opt-in. Defaults to false and must never be
    /// pre-checked.
    #[serde(default)]
    pub consent_marketing: bool,
}

impl QuoteRequest {
    /// Contact-presence rule: at least one of email/phone is filled in.
    ///
    /// Submissions without a way to reach the customer are rejected
    /// client-side before any request is issued.
    #[must_use]
    pub fn has_contact(&self) -> bool {
        !self.email.is_empty() || !self.phone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_contact_with_phone_only() {
        let request = QuoteRequest {
            name: "Jane".to_owned(),
            phone: "555-1234".to_owned(),
            ..Default::default()
        };
        assert!(request.has_contact());
    }

    #[test]
    fn test_has_contact_with_email_only() {
        let request = QuoteRequest {
            email: "jane@example.com".to_owned(),
            ..Default::default()
        };
        assert!(request.has_contact());
    }

    #[test]
    fn test_has_contact_requires_email_or_phone() {
        let request = QuoteRequest {
            name: "Jane".to_owned(),
            ..Default::default()
        };
        assert!(!request.has_contact());
    }

    #[test]
    fn test_consent_defaults_to_false() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{"name": "", "email": "", "phone": "", "license_plate": "",
                "car_make_model": "", "service_type": "", "message": "",
                "source_page_slug": "", "locale": ""}"#,
        )
        .unwrap();
        assert!(!request.consent_marketing);
    }
}
