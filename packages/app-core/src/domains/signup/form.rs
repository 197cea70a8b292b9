//! Registration form state.
//!
//! An explicit, serializable value object: the UI shell renders it and
//! routes every edit through `set`. No ambient mutable state anywhere.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub student_number: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// The six editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignupField {
    FirstName,
    LastName,
    StudentNumber,
    Email,
    Password,
    ConfirmPassword,
}

impl SignupForm {
    /// Controlled update: the only mutation path a UI shell needs.
    pub fn set(&mut self, field: SignupField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SignupField::FirstName => self.first_name = value,
            SignupField::LastName => self.last_name = value,
            SignupField::StudentNumber => self.student_number = value,
            SignupField::Email => self.email = value,
            SignupField::Password => self.password = value,
            SignupField::ConfirmPassword => self.confirm_password = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_is_blank() {
        let form = SignupForm::default();
        assert!(form.first_name.is_empty());
        assert!(form.confirm_password.is_empty());
    }

    #[test]
    fn test_set_updates_the_named_field_only() {
        let mut form = SignupForm::default();
        form.set(SignupField::Email, "juan.dela.cruz@ue.edu.ph");
        assert_eq!(form.email, "juan.dela.cruz@ue.edu.ph");
        assert!(form.first_name.is_empty());

        form.set(SignupField::Password, "secret");
        form.set(SignupField::ConfirmPassword, "secret");
        assert_eq!(form.password, form.confirm_password);
    }

    #[test]
    fn test_form_round_trips_through_serde() {
        let mut form = SignupForm::default();
        form.set(SignupField::FirstName, "Juan");
        let json = serde_json::to_string(&form).unwrap();
        let back: SignupForm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, form);
    }
}
