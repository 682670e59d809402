//! Contact submission gateway
//!
//! The form talks to a single external call through the [`ContactGateway`]
//! trait. The production implementation posts JSON over HTTP; tests use
//! [`MemoryGateway`] to count calls without a network.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;

use crate::error::SiteError;
use crate::types::{ContactFormData, ContactFormErrors, FormSubmitResult};
use crate::validate::validate_contact_form;

/// Transport for one contact-form submission
#[async_trait]
pub trait ContactGateway: Send + Sync {
    /// Deliver the submission; returns the user-facing result.
    ///
    /// Transport failures are errors; a reachable endpoint that declines
    /// the submission is an `Ok` with `success: false`.
    async fn submit(&self, data: &ContactFormData) -> Result<FormSubmitResult, SiteError>;
}

/// Validate locally, then perform at most one gateway call.
///
/// Validation failures short-circuit with per-field errors and the gateway
/// is never invoked. Transport failures are folded into a non-success
/// [`FormSubmitResult`] so the form always has a message to show.
pub async fn submit_contact(
    gateway: &dyn ContactGateway,
    data: &ContactFormData,
) -> Result<FormSubmitResult, ContactFormErrors> {
    let errors = validate_contact_form(data);
    if !errors.is_empty() {
        return Err(errors);
    }

    match gateway.submit(data).await {
        Ok(result) => Ok(result),
        Err(e) => {
            tracing::warn!(error = %e, "Contact submission failed");
            Ok(FormSubmitResult::fail(
                "문의 접수에 실패했습니다. 잠시 후 다시 시도해주세요.",
            ))
        }
    }
}

/// Cloneable handle for passing a gateway through component props.
///
/// Dioxus props must be `PartialEq`; two handles are equal when they point
/// at the same gateway instance.
#[derive(Clone)]
pub struct GatewayHandle(Arc<dyn ContactGateway>);

impl GatewayHandle {
    pub fn new(gateway: impl ContactGateway + 'static) -> Self {
        Self(Arc::new(gateway))
    }

    pub fn gateway(&self) -> &dyn ContactGateway {
        self.0.as_ref()
    }
}

impl PartialEq for GatewayHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for GatewayHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GatewayHandle(..)")
    }
}

/// JSON body posted to the contact endpoint
#[derive(Debug, Serialize)]
struct SubmissionPayload<'a> {
    kindergarten_name: &'a str,
    contact: &'a str,
    privacy_agreed: bool,
    submitted_at: String,
}

/// HTTP gateway posting submissions as JSON
pub struct HttpContactGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ContactGateway for HttpContactGateway {
    async fn submit(&self, data: &ContactFormData) -> Result<FormSubmitResult, SiteError> {
        let payload = SubmissionPayload {
            kindergarten_name: data.kindergarten_name.trim(),
            contact: data.contact.trim(),
            privacy_agreed: data.privacy_agreed,
            submitted_at: Utc::now().to_rfc3339(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            // Endpoints without a JSON body still count as accepted
            match response.json::<FormSubmitResult>().await {
                Ok(result) => Ok(result),
                Err(_) => Ok(FormSubmitResult::ok(
                    "문의가 접수되었습니다. 곧 연락드리겠습니다.",
                )),
            }
        } else {
            tracing::warn!(status = status.as_u16(), "Contact endpoint declined submission");
            Ok(FormSubmitResult::fail(format!(
                "접수 서버 오류입니다. ({}) 잠시 후 다시 시도해주세요.",
                status.as_u16()
            )))
        }
    }
}

/// In-memory gateway recording every submission it receives.
///
/// Used by tests to assert call counts and by the smoke runner, which must
/// render the form without a network.
pub struct MemoryGateway {
    calls: Mutex<Vec<ContactFormData>>,
    result: FormSubmitResult,
}

impl MemoryGateway {
    pub fn new(result: FormSubmitResult) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            result,
        }
    }

    /// Number of submissions delivered so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    /// Copy of every recorded submission
    pub fn calls(&self) -> Vec<ContactFormData> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new(FormSubmitResult::ok("문의가 접수되었습니다."))
    }
}

#[async_trait]
impl ContactGateway for MemoryGateway {
    async fn submit(&self, data: &ContactFormData) -> Result<FormSubmitResult, SiteError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(data.clone());
        }
        Ok(self.result.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactFormData {
        ContactFormData {
            kindergarten_name: "해밀유치원".to_string(),
            contact: "010-1234-5678".to_string(),
            privacy_agreed: true,
        }
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_call() {
        let gateway = MemoryGateway::default();
        let mut form = valid_form();
        form.kindergarten_name = String::new();

        let outcome = submit_contact(&gateway, &form).await;

        let errors = outcome.expect_err("empty name must fail validation");
        assert!(errors.kindergarten_name.is_some());
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_valid_form_makes_exactly_one_call() {
        let gateway = MemoryGateway::default();
        let form = valid_form();

        let result = submit_contact(&gateway, &form)
            .await
            .expect("valid form must submit");

        assert!(result.success);
        assert_eq!(gateway.call_count(), 1);
        assert_eq!(gateway.calls()[0], form);
    }

    #[tokio::test]
    async fn test_unchecked_consent_makes_no_call() {
        let gateway = MemoryGateway::default();
        let mut form = valid_form();
        form.privacy_agreed = false;

        let errors = submit_contact(&gateway, &form)
            .await
            .expect_err("missing consent must fail validation");
        assert!(errors.privacy.is_some());
        assert_eq!(gateway.call_count(), 0);
    }

    #[test]
    fn test_handle_equality_is_identity() {
        let a = GatewayHandle::new(MemoryGateway::default());
        let b = a.clone();
        let c = GatewayHandle::new(MemoryGateway::default());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
