//! Registration field validation.
//!
//! A sequential predicate chain in declared order, short-circuiting on
//! the first failure. Each variant's `Display` is the exact user-facing
//! message.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::kernel::NewAccount;

use super::form::SignupForm;

lazy_static! {
    // Names: letters and whitespace only
    static ref NAME_REGEX: Regex = Regex::new(r"^[A-Za-z\s]+$").unwrap();

    // Student numbers are exactly 11 digits
    static ref STUDENT_NUMBER_REGEX: Regex = Regex::new(r"^[0-9]{11}$").unwrap();

    // Institutional addresses only
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@ue\.edu\.ph$").unwrap();
}

const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum ValidationError {
    #[error("First name should contain only letters.")]
    FirstName,

    #[error("Last name should contain only letters.")]
    LastName,

    #[error("Student number must be exactly 11 digits.")]
    StudentNumber,

    #[error("Use a valid UE email address.")]
    Email,

    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,

    #[error("Passwords don't match.")]
    PasswordMismatch,
}

/// Validate the form and produce the five fields the account service
/// receives. The confirmation never leaves the form.
pub fn validate(form: &SignupForm) -> Result<NewAccount, ValidationError> {
    if !NAME_REGEX.is_match(&form.first_name) {
        return Err(ValidationError::FirstName);
    }
    if !NAME_REGEX.is_match(&form.last_name) {
        return Err(ValidationError::LastName);
    }
    if !STUDENT_NUMBER_REGEX.is_match(&form.student_number) {
        return Err(ValidationError::StudentNumber);
    }
    if !EMAIL_REGEX.is_match(&form.email) {
        return Err(ValidationError::Email);
    }
    if form.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }
    if form.confirm_password != form.password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(NewAccount {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        student_number: form.student_number.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
    })
}
