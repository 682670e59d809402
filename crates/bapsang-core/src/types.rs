//! Shared type declarations
//!
//! Plain data shapes for the contact form plus the supplier and
//! match-status enumerations consumed by the statement-matching preview.

use serde::{Deserialize, Serialize};

/// Contact form input, held only in the form's local state.
///
/// Created on user keystroke, submitted at most once per click,
/// discarded on navigation away. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactFormData {
    /// Name of the kindergarten making the inquiry
    pub kindergarten_name: String,
    /// Phone number or e-mail address to reach back on
    pub contact: String,
    /// Whether the privacy-collection consent box was checked
    pub privacy_agreed: bool,
}

/// Per-field validation messages, recomputed on each validation pass.
///
/// Purely derived from [`ContactFormData`]; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormErrors {
    pub kindergarten_name: Option<String>,
    pub contact: Option<String>,
    pub privacy: Option<String>,
}

impl ContactFormErrors {
    /// True when every field passed validation
    pub fn is_empty(&self) -> bool {
        self.kindergarten_name.is_none() && self.contact.is_none() && self.privacy.is_none()
    }
}

/// Outcome of one submission attempt, consumed immediately by the form
/// to render a status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmitResult {
    pub success: bool,
    pub message: String,
}

impl FormSubmitResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

/// Meal-material suppliers whose statements the service matches.
///
/// Closed enumeration; serialized as the supplier code (`"CJ"`,
/// `"SHINSEGAE"`) on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Supplier {
    #[serde(rename = "CJ")]
    Cj,
    #[serde(rename = "SHINSEGAE")]
    Shinsegae,
}

impl Supplier {
    /// Display name shown in the preview table
    pub fn label(&self) -> &'static str {
        match self {
            Supplier::Cj => "CJ프레시웨이",
            Supplier::Shinsegae => "신세계푸드",
        }
    }

    pub fn all() -> &'static [Supplier] {
        &[Supplier::Cj, Supplier::Shinsegae]
    }
}

impl std::fmt::Display for Supplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Match state of one statement line against the menu ledger.
///
/// Serialized in snake_case (`"auto_matched"`, `"pending"`,
/// `"manual_matched"`, `"unmatched"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Matched automatically by item-name normalization
    AutoMatched,
    /// Waiting for the matcher to run
    Pending,
    /// Matched by hand after auto-matching failed
    ManualMatched,
    /// No ledger entry found
    Unmatched,
}

impl MatchStatus {
    /// Display label shown on the status badge
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::AutoMatched => "자동 매칭",
            MatchStatus::Pending => "대기",
            MatchStatus::ManualMatched => "수동 매칭",
            MatchStatus::Unmatched => "미매칭",
        }
    }

    /// CSS class for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            MatchStatus::AutoMatched => "badge badge--auto",
            MatchStatus::Pending => "badge badge--pending",
            MatchStatus::ManualMatched => "badge badge--manual",
            MatchStatus::Unmatched => "badge badge--unmatched",
        }
    }

    /// Whether this line counts as resolved
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchStatus::AutoMatched | MatchStatus::ManualMatched)
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_is_empty() {
        assert!(ContactFormErrors::default().is_empty());

        let errors = ContactFormErrors {
            kindergarten_name: Some("유치원 이름을 입력해주세요.".to_string()),
            ..Default::default()
        };
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_supplier_wire_format() {
        assert_eq!(serde_json::to_string(&Supplier::Cj).unwrap(), "\"CJ\"");
        assert_eq!(
            serde_json::to_string(&Supplier::Shinsegae).unwrap(),
            "\"SHINSEGAE\""
        );

        let parsed: Supplier = serde_json::from_str("\"CJ\"").unwrap();
        assert_eq!(parsed, Supplier::Cj);
    }

    #[test]
    fn test_match_status_wire_format() {
        for (status, wire) in [
            (MatchStatus::AutoMatched, "\"auto_matched\""),
            (MatchStatus::Pending, "\"pending\""),
            (MatchStatus::ManualMatched, "\"manual_matched\""),
            (MatchStatus::Unmatched, "\"unmatched\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            let parsed: MatchStatus = serde_json::from_str(wire).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_match_status_resolution() {
        assert!(MatchStatus::AutoMatched.is_matched());
        assert!(MatchStatus::ManualMatched.is_matched());
        assert!(!MatchStatus::Pending.is_matched());
        assert!(!MatchStatus::Unmatched.is_matched());
    }

    #[test]
    fn test_submit_result_constructors() {
        let ok = FormSubmitResult::ok("문의가 접수되었습니다.");
        assert!(ok.success);
        let fail = FormSubmitResult::fail("다시 시도해주세요.");
        assert!(!fail.success);
    }
}
