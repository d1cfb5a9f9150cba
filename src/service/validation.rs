//! Request validation for contact bodies.
//!
//! The rule table is the single source of truth for create and update.

use crate::error::AppError;
use crate::model::{ContactInput, NewContact};
use regex::Regex;
use std::sync::OnceLock;

/// One `@`, something on both sides, no whitespace.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+$";

pub const FIRST_NAME_MAX: usize = 100;
pub const LAST_NAME_MAX: usize = 100;
pub const PHONE_MAX: usize = 20;
pub const EMAIL_MAX: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Email,
}

/// Constraints for one body field. `field` is the wire name used in messages.
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub max_length: usize,
    pub format: Option<Format>,
    get: fn(&ContactInput) -> Option<&str>,
}

pub const CONTACT_RULES: &[FieldRule] = &[
    FieldRule {
        field: "nombre",
        required: true,
        max_length: FIRST_NAME_MAX,
        format: None,
        get: |c| c.first_name.as_deref(),
    },
    FieldRule {
        field: "apellido",
        required: true,
        max_length: LAST_NAME_MAX,
        format: None,
        get: |c| c.last_name.as_deref(),
    },
    FieldRule {
        field: "telefono",
        required: false,
        max_length: PHONE_MAX,
        format: None,
        get: |c| c.phone.as_deref(),
    },
    FieldRule {
        field: "correo",
        required: false,
        max_length: EMAIL_MAX,
        format: Some(Format::Email),
        get: |c| c.email.as_deref(),
    },
];

pub struct ContactValidator;

impl ContactValidator {
    /// Check every rule against the body, then hand back the mutable fields.
    /// The body's `id` is not inspected here; callers decide what it means.
    pub fn validate(input: ContactInput) -> Result<NewContact, AppError> {
        for rule in CONTACT_RULES {
            validate_field(rule, (rule.get)(&input))?;
        }
        match (input.first_name, input.last_name) {
            (Some(first_name), Some(last_name)) => Ok(NewContact {
                first_name,
                last_name,
                phone: input.phone,
                email: input.email,
            }),
            _ => Err(AppError::Validation("nombre and apellido are required".into())),
        }
    }
}

fn validate_field(rule: &FieldRule, value: Option<&str>) -> Result<(), AppError> {
    let Some(s) = value else {
        if rule.required {
            return Err(AppError::Validation(format!("{} is required", rule.field)));
        }
        return Ok(());
    };
    if s.contains('\0') {
        return Err(AppError::Validation(format!(
            "{} must not contain NUL characters",
            rule.field
        )));
    }
    if rule.required && s.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", rule.field)));
    }
    if s.chars().count() > rule.max_length {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            rule.field, rule.max_length
        )));
    }
    if let Some(format) = rule.format {
        validate_format(rule.field, s, format)?;
    }
    Ok(())
}

fn validate_format(field: &str, s: &str, format: Format) -> Result<(), AppError> {
    match format {
        Format::Email => {
            if !email_regex()?.is_match(s) {
                return Err(AppError::Validation(format!("{} must be a valid email", field)));
            }
        }
    }
    Ok(())
}

fn email_regex() -> Result<&'static Regex, AppError> {
    static RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN))
        .as_ref()
        .map_err(|e| AppError::Internal(format!("email pattern: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ContactInput {
        ContactInput {
            id: None,
            first_name: Some("Juan".into()),
            last_name: Some("Pérez".into()),
            phone: Some("1234567890".into()),
            email: Some("juan@test.com".into()),
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(m) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_full_contact() {
        let new = ContactValidator::validate(input()).unwrap();
        assert_eq!(new.first_name, "Juan");
        assert_eq!(new.last_name, "Pérez");
        assert_eq!(new.phone.as_deref(), Some("1234567890"));
        assert_eq!(new.email.as_deref(), Some("juan@test.com"));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let mut c = input();
        c.phone = None;
        c.email = None;
        let new = ContactValidator::validate(c).unwrap();
        assert!(new.phone.is_none());
        assert!(new.email.is_none());
    }

    #[test]
    fn missing_first_name_is_rejected() {
        let mut c = input();
        c.first_name = None;
        let msg = message(ContactValidator::validate(c).unwrap_err());
        assert_eq!(msg, "nombre is required");
    }

    #[test]
    fn blank_last_name_is_rejected() {
        let mut c = input();
        c.last_name = Some("   ".into());
        let msg = message(ContactValidator::validate(c).unwrap_err());
        assert_eq!(msg, "apellido is required");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut c = input();
        c.first_name = Some("é".repeat(FIRST_NAME_MAX));
        assert!(ContactValidator::validate(c).is_ok());

        let mut c = input();
        c.first_name = Some("é".repeat(FIRST_NAME_MAX + 1));
        let msg = message(ContactValidator::validate(c).unwrap_err());
        assert_eq!(msg, "nombre must be at most 100 characters");
    }

    #[test]
    fn phone_over_limit_is_rejected() {
        let mut c = input();
        c.phone = Some("1".repeat(PHONE_MAX + 1));
        assert!(ContactValidator::validate(c).is_err());
    }

    #[test]
    fn email_shape() {
        for bad in ["", "juan", "@test.com", "juan@", "ju an@test.com", "a@b@c"] {
            let mut c = input();
            c.email = Some(bad.into());
            let msg = message(ContactValidator::validate(c).unwrap_err());
            assert_eq!(msg, "correo must be a valid email", "{bad:?}");
        }
        for good in ["a@b", "juan.perez+tag@test.co"] {
            let mut c = input();
            c.email = Some(good.into());
            assert!(ContactValidator::validate(c).is_ok(), "{good:?}");
        }
    }

    #[test]
    fn nul_bytes_are_rejected_in_every_field() {
        for field in ["nombre", "apellido", "telefono", "correo"] {
            let mut c = input();
            match field {
                "nombre" => c.first_name = Some("a\0b".into()),
                "apellido" => c.last_name = Some("a\0b".into()),
                "telefono" => c.phone = Some("12\u{0}34".into()),
                _ => c.email = Some("a\0@b".into()),
            }
            let msg = message(ContactValidator::validate(c).unwrap_err());
            assert_eq!(msg, format!("{field} must not contain NUL characters"));
        }
    }

    #[test]
    fn email_pattern_compiles() {
        assert!(email_regex().is_ok());
    }

    #[test]
    fn email_over_limit_is_rejected() {
        let mut c = input();
        c.email = Some(format!("{}@test.com", "a".repeat(EMAIL_MAX)));
        let msg = message(ContactValidator::validate(c).unwrap_err());
        assert_eq!(msg, "correo must be at most 200 characters");
    }
}
