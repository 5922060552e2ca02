//! Contact form submissions.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    model::contact::{treatment_label, ContactRequestDto, TREATMENT_OPTIONS},
    server::util::text::non_empty,
};

pub const MAX_NAME_LENGTH: usize = 120;
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// A trimmed contact form submission, ready to validate and forward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: Option<String>,
    pub treatments: Vec<String>,
    pub message: Option<String>,
    pub locale: Option<String>,
}

impl ContactInquiry {
    pub fn from_dto(dto: ContactRequestDto) -> Self {
        let mut seen = HashSet::new();
        let treatments: Vec<String> = dto
            .treatments
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty() && seen.insert(t.clone()))
            .collect();

        Self {
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            country: non_empty(dto.country),
            treatments,
            message: non_empty(dto.message),
            locale: non_empty(dto.locale),
        }
    }

    /// Returns every problem with the submission; empty when valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push("Name is required".to_string());
        } else if self.name.chars().count() > MAX_NAME_LENGTH {
            errors.push(format!("Name must be at most {} characters", MAX_NAME_LENGTH));
        }

        if self.email.is_empty() {
            errors.push("Email is required".to_string());
        } else if !is_valid_email(&self.email) {
            errors.push("Email address is invalid".to_string());
        }

        if self.phone.is_empty() {
            errors.push("Phone is required".to_string());
        } else if self.phone.chars().filter(char::is_ascii_digit).count() < 5 {
            errors.push("Phone number is invalid".to_string());
        }

        for treatment in &self.treatments {
            if !TREATMENT_OPTIONS.iter().any(|(value, _)| value == treatment) {
                errors.push(format!("Unknown treatment '{}'", treatment));
            }
        }

        if let Some(message) = &self.message {
            if message.chars().count() > MAX_MESSAGE_LENGTH {
                errors.push(format!(
                    "Message must be at most {} characters",
                    MAX_MESSAGE_LENGTH
                ));
            }
        }

        errors
    }

    /// Human-readable treatment names for logs and notifications.
    pub fn treatment_labels(&self) -> Vec<&str> {
        self.treatments.iter().map(|t| treatment_label(t)).collect()
    }
}

/// `local@domain.tld` with no whitespace and a dotted domain.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let labels: Vec<&str> = domain.split('.').collect();
    !local.is_empty()
        && !domain.contains('@')
        && labels.len() >= 2
        && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequestDto {
        ContactRequestDto {
            name: "  Maria Rossi ".to_string(),
            email: "maria@example.it".to_string(),
            phone: "+39 333 123 4567".to_string(),
            country: Some("Italy".to_string()),
            treatments: vec!["implants".to_string(), " veneers ".to_string()],
            message: Some("   ".to_string()),
            locale: Some("en".to_string()),
        }
    }

    #[test]
    fn trims_submission() {
        let inquiry = ContactInquiry::from_dto(request());
        assert_eq!(inquiry.name, "Maria Rossi");
        assert_eq!(inquiry.treatments, vec!["implants", "veneers"]);
        assert!(inquiry.message.is_none());
        assert!(inquiry.validate().is_empty());
        assert_eq!(inquiry.treatment_labels(), vec!["Dental Implants", "Veneers"]);
    }

    #[test]
    fn drops_repeated_treatments_in_any_order() {
        let dto = ContactRequestDto {
            treatments: vec![
                "implants".to_string(),
                "veneers".to_string(),
                " implants".to_string(),
                "veneers".to_string(),
            ],
            ..request()
        };
        let inquiry = ContactInquiry::from_dto(dto);
        assert_eq!(inquiry.treatments, vec!["implants", "veneers"]);
    }

    #[test]
    fn reports_every_missing_field() {
        let inquiry = ContactInquiry::from_dto(ContactRequestDto::default());
        assert_eq!(
            inquiry.validate(),
            vec![
                "Name is required".to_string(),
                "Email is required".to_string(),
                "Phone is required".to_string(),
            ]
        );
    }

    #[test]
    fn rejects_malformed_values() {
        let inquiry = ContactInquiry::from_dto(ContactRequestDto {
            email: "maria@localhost".to_string(),
            phone: "call me".to_string(),
            treatments: vec!["braces".to_string()],
            message: Some("x".repeat(MAX_MESSAGE_LENGTH + 1)),
            ..request()
        });

        let errors = inquiry.validate();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&"Email address is invalid".to_string()));
        assert!(errors.contains(&"Unknown treatment 'braces'".to_string()));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b..co"));
    }
}
