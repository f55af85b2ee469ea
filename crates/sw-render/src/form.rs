//! Quote-request form state and submission.
//!
//! The quote form is the only state-mutating operation on the rendering
//! surface. Everything else in this crate is a pure function of the
//! site snapshot; this module owns the one network side effect and
//! keeps it behind the [`QuoteTransport`] seam so the HTTP
//! implementation lives in `sw-client` and tests can substitute an
//! in-memory mock.

use std::fmt::Write;

use sw_model::{QuoteRequest, RenderMode};

use crate::html::escape_html;

/// Fallback error copy when the server response carries no usable
/// message.
const GENERIC_SUBMIT_ERROR: &str = "Something went wrong. Please try again.";

/// Confirmation copy after a successful submission.
const SUBMIT_CONFIRMATION: &str = "Thanks! We received your request and will be in touch soon.";

/// Error from submitting a quote request.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Server rejected the submission (non-2xx response).
    #[error("quote request rejected: HTTP {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Message for the user, taken from the response body when the
        /// server provided one.
        message: String,
    },

    /// Request never completed (connection failure, timeout).
    #[error("quote request failed: {0}")]
    Transport(String),
}

impl SubmitError {
    /// The message shown inline in the form.
    ///
    /// Server-provided messages are surfaced verbatim; transport
    /// failures get generic copy (the details go to the log, not the
    /// visitor).
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { message, .. } if !message.is_empty() => message,
            Self::Rejected { .. } | Self::Transport(_) => GENERIC_SUBMIT_ERROR,
        }
    }
}

/// Transport seam for quote submission.
///
/// Implemented over HTTP by `sw-client`; tests implement it with an
/// in-memory recorder.
pub trait QuoteTransport {
    /// Deliver one quote request for the given site.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] when the server rejects the submission or
    /// the request cannot be delivered.
    fn submit_quote(&self, site_slug: &str, request: &QuoteRequest) -> Result<(), SubmitError>;
}

/// Where a submission originates: which site, page, and locale.
#[derive(Clone, Debug)]
pub struct QuoteFormContext {
    /// Site the quote request is scoped to.
    pub site_slug: String,
    /// Page the form was rendered on.
    pub source_page_slug: String,
    /// Locale of that page.
    pub locale: String,
}

/// Submission lifecycle of the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    /// Nothing submitted yet (or user is editing after a result).
    #[default]
    Idle,
    /// A request is in flight; the submit control is disabled to
    /// prevent duplicate submission.
    Submitting,
    /// Last submission succeeded; fields were cleared.
    Sent,
    /// Last submission failed; fields kept their values for retry.
    Failed(String),
}

/// Local state of the quote-request form component.
///
/// Field values live here between render passes; nothing is persisted.
/// Submission either clears the form (success) or leaves every value
/// intact for retry (failure).
#[derive(Clone, Debug, Default)]
pub struct QuoteFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub license_plate: String,
    pub car_make_model: String,
    pub service_type: String,
    pub message: String,
    pub consent_marketing: bool,
    status: FormStatus,
}

impl QuoteFormState {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current submission status.
    #[must_use]
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Whether the submit control is enabled.
    ///
    /// Requires the contact-presence rule (at least one of email/phone)
    /// and no request currently in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        (!self.email.is_empty() || !self.phone.is_empty())
            && self.status != FormStatus::Submitting
    }

    /// Submit the form through the given transport.
    ///
    /// Returns `true` when a request was actually issued. When
    /// [`can_submit`](Self::can_submit) is false this is a no-op: no
    /// request goes out and the state is unchanged.
    ///
    /// On success every field resets to its empty default and the
    /// status becomes [`FormStatus::Sent`]. On failure the status
    /// carries the user-facing message and the field values stay put so
    /// the visitor can retry.
    pub fn submit<T: QuoteTransport>(&mut self, transport: &T, ctx: &QuoteFormContext) -> bool {
        if !self.can_submit() {
            return false;
        }

        self.status = FormStatus::Submitting;
        let request = self.to_request(ctx);

        match transport.submit_quote(&ctx.site_slug, &request) {
            Ok(()) => {
                self.clear_fields();
                self.status = FormStatus::Sent;
            }
            Err(error) => {
                tracing::warn!(site = %ctx.site_slug, error = %error, "Quote submission failed");
                self.status = FormStatus::Failed(error.user_message().to_owned());
            }
        }
        true
    }

    /// Build the wire payload from current field values and context.
    fn to_request(&self, ctx: &QuoteFormContext) -> QuoteRequest {
        QuoteRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            license_plate: self.license_plate.clone(),
            car_make_model: self.car_make_model.clone(),
            service_type: self.service_type.clone(),
            message: self.message.clone(),
            source_page_slug: ctx.source_page_slug.clone(),
            locale: ctx.locale.clone(),
            consent_marketing: self.consent_marketing,
        }
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.license_plate.clear();
        self.car_make_model.clear();
        self.service_type.clear();
        self.message.clear();
        self.consent_marketing = false;
    }

    /// Render the form reflecting current values and status.
    ///
    /// The submit control is disabled whenever submission is not
    /// currently possible, and always in the dashboard preview.
    #[must_use]
    pub fn render(&self, mode: RenderMode) -> String {
        let mut out = String::with_capacity(1024);
        out.push_str(r##"<form class="sw-quote-form" method="post" action="#">"##);

        match &self.status {
            FormStatus::Sent => {
                write!(
                    out,
                    r#"<p class="sw-form-success">{SUBMIT_CONFIRMATION}</p>"#
                )
                .unwrap();
            }
            FormStatus::Failed(message) => {
                write!(
                    out,
                    r#"<p class="sw-form-error">{}</p>"#,
                    escape_html(message)
                )
                .unwrap();
            }
            FormStatus::Idle | FormStatus::Submitting => {}
        }

        text_input(&mut out, "name", "Name", &self.name);
        text_input(&mut out, "email", "Email", &self.email);
        text_input(&mut out, "phone", "Phone", &self.phone);
        text_input(&mut out, "license_plate", "License plate", &self.license_plate);
        text_input(&mut out, "car_make_model", "Car make and model", &self.car_make_model);
        text_input(&mut out, "service_type", "Service", &self.service_type);
        write!(
            out,
            r#"<label>Message<textarea name="message">{}</textarea></label>"#,
            escape_html(&self.message)
        )
        .unwrap();
        write!(
            out,
            r#"<label><input type="checkbox" name="consent_marketing"{}> Keep me posted about offers</label>"#,
            if self.consent_marketing { " checked" } else { "" }
        )
        .unwrap();

        let disabled = !self.can_submit() || mode == RenderMode::Preview;
        write!(
            out,
            r#"<button type="submit"{}>Request a quote</button>"#,
            if disabled { " disabled" } else { "" }
        )
        .unwrap();

        out.push_str("</form>");
        out
    }
}

fn text_input(out: &mut String, name: &str, label: &str, value: &str) {
    write!(
        out,
        r#"<label>{label}<input type="text" name="{name}" value="{}"></label>"#,
        escape_html(value)
    )
    .unwrap();
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    /// Transport double recording every issued request.
    struct MockTransport {
        calls: RefCell<Vec<QuoteRequest>>,
        response: Option<SubmitError>,
    }

    impl MockTransport {
        fn succeeding() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                response: None,
            }
        }

        fn failing(error: SubmitError) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                response: Some(error),
            }
        }
    }

    impl QuoteTransport for MockTransport {
        fn submit_quote(
            &self,
            _site_slug: &str,
            request: &QuoteRequest,
        ) -> Result<(), SubmitError> {
            self.calls.borrow_mut().push(request.clone());
            match &self.response {
                None => Ok(()),
                Some(SubmitError::Rejected { status, message }) => Err(SubmitError::Rejected {
                    status: *status,
                    message: message.clone(),
                }),
                Some(SubmitError::Transport(message)) => {
                    Err(SubmitError::Transport(message.clone()))
                }
            }
        }
    }

    fn ctx() -> QuoteFormContext {
        QuoteFormContext {
            site_slug: "acme".to_owned(),
            source_page_slug: "home".to_owned(),
            locale: "en".to_owned(),
        }
    }

    fn filled_form() -> QuoteFormState {
        QuoteFormState {
            name: "Jane".to_owned(),
            phone: "555-1234".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_submit_with_phone_only_issues_request_and_clears() {
        let transport = MockTransport::succeeding();
        let mut form = filled_form();

        assert!(form.submit(&transport, &ctx()));

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "Jane");
        assert_eq!(calls[0].phone, "555-1234");
        assert_eq!(calls[0].email, "");
        assert_eq!(calls[0].source_page_slug, "home");
        assert_eq!(calls[0].locale, "en");
        assert!(!calls[0].consent_marketing);

        assert_eq!(form.status(), &FormStatus::Sent);
        assert_eq!(form.name, "");
        assert_eq!(form.phone, "");
    }

    #[test]
    fn test_submit_without_contact_is_refused() {
        let transport = MockTransport::succeeding();
        let mut form = QuoteFormState {
            name: "Jane".to_owned(),
            ..Default::default()
        };

        assert!(!form.can_submit());
        assert!(!form.submit(&transport, &ctx()));

        assert!(transport.calls.borrow().is_empty());
        assert_eq!(form.status(), &FormStatus::Idle);
        assert_eq!(form.name, "Jane");
    }

    #[test]
    fn test_failed_submission_keeps_input_and_surfaces_message() {
        let transport = MockTransport::failing(SubmitError::Rejected {
            status: 422,
            message: "Phone number looks invalid.".to_owned(),
        });
        let mut form = filled_form();

        assert!(form.submit(&transport, &ctx()));

        assert_eq!(
            form.status(),
            &FormStatus::Failed("Phone number looks invalid.".to_owned())
        );
        assert_eq!(form.name, "Jane");
        assert_eq!(form.phone, "555-1234");
    }

    #[test]
    fn test_transport_failure_uses_generic_message() {
        let transport =
            MockTransport::failing(SubmitError::Transport("connection refused".to_owned()));
        let mut form = filled_form();

        form.submit(&transport, &ctx());

        assert_eq!(
            form.status(),
            &FormStatus::Failed(GENERIC_SUBMIT_ERROR.to_owned())
        );
    }

    #[test]
    fn test_retry_after_failure_succeeds() {
        let failing =
            MockTransport::failing(SubmitError::Transport("connection refused".to_owned()));
        let succeeding = MockTransport::succeeding();
        let mut form = filled_form();

        form.submit(&failing, &ctx());
        assert!(matches!(form.status(), FormStatus::Failed(_)));

        // Input survived, so the retry carries the same values.
        assert!(form.submit(&succeeding, &ctx()));
        assert_eq!(succeeding.calls.borrow()[0].phone, "555-1234");
        assert_eq!(form.status(), &FormStatus::Sent);
    }

    #[test]
    fn test_render_reflects_values_and_disabled_state() {
        let form = QuoteFormState {
            name: "Jane".to_owned(),
            ..Default::default()
        };
        let html = form.render(RenderMode::Public);

        assert!(html.contains(r#"value="Jane""#));
        // No contact info yet, so the control is disabled.
        assert!(html.contains("<button type=\"submit\" disabled>"));

        let ready = filled_form().render(RenderMode::Public);
        assert!(ready.contains("<button type=\"submit\">"));
    }

    #[test]
    fn test_render_preview_always_disables_submit() {
        let html = filled_form().render(RenderMode::Preview);
        assert!(html.contains("<button type=\"submit\" disabled>"));
    }

    #[test]
    fn test_render_success_banner() {
        let transport = MockTransport::succeeding();
        let mut form = filled_form();
        form.submit(&transport, &ctx());

        let html = form.render(RenderMode::Public);
        assert!(html.contains("sw-form-success"));
        assert!(html.contains(SUBMIT_CONFIRMATION));
    }

    #[test]
    fn test_render_error_banner_is_escaped() {
        let mut form = filled_form();
        form.status = FormStatus::Failed("<script>alert(1)</script>".to_owned());

        let html = form.render(RenderMode::Public);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
