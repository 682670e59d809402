//! Contact form section
//!
//! Collects three fields, validates locally, makes a single submission
//! call through the gateway, and surfaces the result message inline.

use bapsang_core::contact::{submit_contact, GatewayHandle};
use bapsang_core::types::{ContactFormData, ContactFormErrors, FormSubmitResult};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

#[derive(Clone, PartialEq, Props)]
pub struct ContactFormSectionProps {
    /// Where valid submissions are delivered
    pub gateway: GatewayHandle,
}

/// Contact form section.
///
/// Validation failures populate per-field inline messages and never reach
/// the gateway. While a submission is in flight the button is disabled; at
/// most one request is active per click.
#[component]
pub fn ContactFormSection(props: ContactFormSectionProps) -> Element {
    let mut name = use_signal(String::new);
    let mut contact = use_signal(String::new);
    let mut agreed = use_signal(|| false);
    let mut errors = use_signal(ContactFormErrors::default);
    let mut submitting = use_signal(|| false);
    let mut result = use_signal(|| Option::<FormSubmitResult>::None);

    let gateway = props.gateway.clone();
    let on_submit = move |_: ()| {
        if submitting() {
            return;
        }

        let data = ContactFormData {
            kindergarten_name: name.read().clone(),
            contact: contact.read().clone(),
            privacy_agreed: agreed(),
        };

        let gateway = gateway.clone();
        submitting.set(true);
        result.set(None);

        spawn(async move {
            match submit_contact(gateway.gateway(), &data).await {
                Ok(outcome) => {
                    tracing::info!(success = outcome.success, "Contact form submitted");
                    errors.set(ContactFormErrors::default());
                    result.set(Some(outcome));
                }
                Err(field_errors) => {
                    errors.set(field_errors);
                }
            }
            submitting.set(false);
        });
    };

    let name_class = if errors.read().kindergarten_name.is_some() {
        "form-input form-input--invalid"
    } else {
        "form-input"
    };
    let contact_class = if errors.read().contact.is_some() {
        "form-input form-input--invalid"
    } else {
        "form-input"
    };

    rsx! {
        section { class: "contact", id: "contact",
            h2 { class: "section-title", "도입 문의" }

            div { class: "contact-form",
                div { class: "form-group",
                    label { class: "form-label", r#for: "contact-name", "유치원명" }
                    input {
                        id: "contact-name",
                        class: "{name_class}",
                        r#type: "text",
                        value: "{name}",
                        placeholder: "예) 해밀유치원",
                        oninput: move |e| name.set(e.value()),
                    }
                    if let Some(message) = errors.read().kindergarten_name.clone() {
                        span { class: "form-error", "{message}" }
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", r#for: "contact-info", "연락처" }
                    input {
                        id: "contact-info",
                        class: "{contact_class}",
                        r#type: "text",
                        value: "{contact}",
                        placeholder: "휴대폰 번호 또는 이메일",
                        oninput: move |e| contact.set(e.value()),
                    }
                    if let Some(message) = errors.read().contact.clone() {
                        span { class: "form-error", "{message}" }
                    }
                }

                div { class: "form-group",
                    label { class: "form-consent",
                        input {
                            r#type: "checkbox",
                            checked: agreed(),
                            onchange: move |e| agreed.set(e.checked()),
                        }
                        span { "개인정보 수집 및 이용에 동의합니다. 문의 응대 외의 목적으로 사용하지 않습니다." }
                    }
                    if let Some(message) = errors.read().privacy.clone() {
                        span { class: "form-error", "{message}" }
                    }
                }

                if let Some(outcome) = result() {
                    div {
                        class: if outcome.success {
                            "form-result form-result--success"
                        } else {
                            "form-result form-result--failure"
                        },
                        "{outcome.message}"
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() {
                        "접수 중..."
                    } else {
                        "문의 보내기"
                    }
                }
            }
        }
    }
}
