use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::config;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {} characters", config::MIN_PASSWORD_CHARS)]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

pub type FieldErrors = BTreeMap<Field, ValidationError>;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    #[serde(skip)]
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

impl SignupForm {
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Checks every field and reports one error per failing field.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, ValidationError::NameRequired);
        }

        if self.email.trim().is_empty() {
            errors.insert(Field::Email, ValidationError::EmailRequired);
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.insert(Field::Email, ValidationError::EmailInvalid);
        }

        if self.password.is_empty() {
            errors.insert(Field::Password, ValidationError::PasswordRequired);
        } else if self.password.chars().count() < config::MIN_PASSWORD_CHARS {
            errors.insert(Field::Password, ValidationError::PasswordTooShort);
        }

        if self.password != self.confirm_password {
            errors.insert(Field::ConfirmPassword, ValidationError::PasswordMismatch);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SignupForm {
        SignupForm {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            password: "correct horse".into(),
            confirm_password: "correct horse".into(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = SignupForm::default().validate().unwrap_err();
        assert_eq!(errors.get(&Field::Name), Some(&ValidationError::NameRequired));
        assert_eq!(errors.get(&Field::Email), Some(&ValidationError::EmailRequired));
        assert_eq!(errors.get(&Field::Password), Some(&ValidationError::PasswordRequired));
        // both passwords empty, so they match
        assert_eq!(errors.get(&Field::ConfirmPassword), None);
    }

    #[test]
    fn whitespace_name_is_missing() {
        let form = SignupForm { name: "   ".into(), ..valid() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Name].to_string(), "Name is required");
    }

    #[test]
    fn email_shape() {
        for bad in ["asha", "asha@example", "@.", "asha example.com"] {
            let form = SignupForm { email: bad.into(), ..valid() };
            let errors = form.validate().unwrap_err();
            assert_eq!(errors[&Field::Email], ValidationError::EmailInvalid, "{bad}");
        }
        let form = SignupForm { email: "a@b.co".into(), ..valid() };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn short_and_mismatched_passwords() {
        let form = SignupForm {
            password: "short".into(),
            confirm_password: "shorter".into(),
            ..valid()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors[&Field::Password].to_string(), "Password must be at least 8 characters");
        assert_eq!(errors[&Field::ConfirmPassword].to_string(), "Passwords do not match");
    }

    #[test]
    fn serialized_form_never_carries_password() {
        let json = serde_json::to_string(&valid()).unwrap();
        assert!(!json.contains("correct horse"));
        assert!(json.contains("asha@example.com"));
    }
}
