//! Contact form validation
//!
//! Local, synchronous checks run before any submission call is made.
//! The contact field accepts either a Korean mobile number or an e-mail
//! address; separators in the phone number are optional.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{ContactFormData, ContactFormErrors};

/// `010-1234-5678`, `01012345678`, older `011`/`016`... prefixes included
fn phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^01[016789]-?\d{3,4}-?\d{4}$").expect("phone pattern is valid")
    })
}

/// Deliberately loose: one `@`, no whitespace, a dot in the domain
fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"))
}

/// Validate the contact form, returning per-field messages.
///
/// An empty [`ContactFormErrors`] (see `is_empty`) means the form may be
/// submitted. Messages are user-facing Korean strings rendered inline.
pub fn validate_contact_form(data: &ContactFormData) -> ContactFormErrors {
    let mut errors = ContactFormErrors::default();

    if data.kindergarten_name.trim().is_empty() {
        errors.kindergarten_name = Some("유치원 이름을 입력해주세요.".to_string());
    }

    let contact = data.contact.trim();
    if contact.is_empty() {
        errors.contact = Some("연락처를 입력해주세요.".to_string());
    } else if !phone_pattern().is_match(contact) && !email_pattern().is_match(contact) {
        errors.contact = Some("휴대폰 번호 또는 이메일 형식으로 입력해주세요.".to_string());
    }

    if !data.privacy_agreed {
        errors.privacy = Some("개인정보 수집 및 이용에 동의해주세요.".to_string());
    }

    errors
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

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_contact_form(&valid_form()).is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut form = valid_form();
        form.kindergarten_name = "   ".to_string();

        let errors = validate_contact_form(&form);
        assert!(errors.kindergarten_name.is_some());
        assert!(errors.contact.is_none());
    }

    #[test]
    fn test_contact_phone_forms() {
        for contact in ["010-1234-5678", "01012345678", "011-345-6789"] {
            let mut form = valid_form();
            form.contact = contact.to_string();
            assert!(
                validate_contact_form(&form).is_empty(),
                "{contact} should be accepted"
            );
        }
    }

    #[test]
    fn test_contact_email_form() {
        let mut form = valid_form();
        form.contact = "office@haemil.kr".to_string();
        assert!(validate_contact_form(&form).is_empty());
    }

    #[test]
    fn test_implausible_contact_rejected() {
        for contact in ["", "12345", "not an email", "02-123-4567", "a@b"] {
            let mut form = valid_form();
            form.contact = contact.to_string();
            assert!(
                validate_contact_form(&form).contact.is_some(),
                "{contact:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_privacy_consent_required() {
        let mut form = valid_form();
        form.privacy_agreed = false;

        let errors = validate_contact_form(&form);
        assert!(errors.privacy.is_some());
        assert!(!errors.is_empty());
    }
}
