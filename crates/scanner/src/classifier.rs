//! Content-based privacy classification.
//!
//! A document's privacy level is a pure function of its text: the content is
//! lowercased once and tested against fixed literal markers, confidential
//! first. Matches are raw substrings with no word-boundary checks, so
//! `password:` inside unrelated prose still classifies as confidential.

use serde::{Deserialize, Serialize};

/// Markers that classify a document as confidential.
pub const CONFIDENTIAL_MARKERS: [&str; 4] = ["[confidential]", "ssn:", "credit card:", "password:"];

/// Markers that classify a document as sensitive.
pub const SENSITIVE_MARKERS: [&str; 3] = ["[sensitive]", "internal only", "employee id:"];

/// Privacy classification for documents, in increasing order of restriction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyLevel {
    Public,
    Sensitive,
    Confidential,
}

impl PrivacyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrivacyLevel::Public => "public",
            PrivacyLevel::Sensitive => "sensitive",
            PrivacyLevel::Confidential => "confidential",
        }
    }
}

impl std::fmt::Display for PrivacyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify document content by marker presence.
///
/// Confidential markers are checked first and short-circuit; sensitive
/// markers only apply when no confidential marker matched.
pub fn classify(content: &str) -> PrivacyLevel {
    let lower = content.to_lowercase();

    if CONFIDENTIAL_MARKERS.iter().any(|m| lower.contains(m)) {
        PrivacyLevel::Confidential
    } else if SENSITIVE_MARKERS.iter().any(|m| lower.contains(m)) {
        PrivacyLevel::Sensitive
    } else {
        PrivacyLevel::Public
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_public() {
        assert_eq!(classify("quarterly report, nothing special"), PrivacyLevel::Public);
        assert_eq!(classify(""), PrivacyLevel::Public);
    }

    #[test]
    fn confidential_markers_match_case_insensitively() {
        assert_eq!(
            classify("[CONFIDENTIAL] SSN: 123-45-6789"),
            PrivacyLevel::Confidential
        );
        assert_eq!(classify("admin Password: hunter2"), PrivacyLevel::Confidential);
        assert_eq!(classify("Credit Card: 4111"), PrivacyLevel::Confidential);
    }

    #[test]
    fn sensitive_markers_match() {
        assert_eq!(classify("This memo is INTERNAL ONLY."), PrivacyLevel::Sensitive);
        assert_eq!(classify("[sensitive] salary bands"), PrivacyLevel::Sensitive);
        assert_eq!(classify("Employee ID: 4521"), PrivacyLevel::Sensitive);
    }

    #[test]
    fn confidential_wins_over_sensitive() {
        assert_eq!(
            classify("[sensitive] and also password: secret"),
            PrivacyLevel::Confidential
        );
    }

    #[test]
    fn markers_match_inside_unrelated_words() {
        // No word-boundary handling, by contract.
        assert_eq!(
            classify("the field xpassword: is reserved"),
            PrivacyLevel::Confidential
        );
    }

    #[test]
    fn identical_content_classifies_identically() {
        let text = "Employee ID: 99";
        assert_eq!(classify(text), classify(text));
    }
}
