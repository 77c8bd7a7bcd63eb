//! Form validation rules for the sign-up, sign-in, car and category forms.
//!
//! Values are trimmed before checking; a whitespace-only value counts as
//! missing. Each validator returns every failing field, keyed by field name.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::net::types::{CarFields, CategoryFields, SignInRequest, SignUpRequest};

pub const NAME_MAX_CHARS: usize = 50;

/// Field name → first failing message.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Minimal structural email check: one `@`, non-empty local part, dotted
/// domain without empty labels, no whitespace.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &'static str) -> bool {
    if value.trim().is_empty() {
        errors.insert(field, message);
        return false;
    }
    true
}

fn check_email(errors: &mut FieldErrors, value: &str) {
    if require(errors, "email", value, "Email is required") && !is_valid_email(value) {
        errors.insert("email", "Invalid email format");
    }
}

#[must_use]
pub fn validate_sign_up(form: &SignUpRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if require(&mut errors, "name", &form.name, "Name is required")
        && form.name.trim().chars().count() > NAME_MAX_CHARS
    {
        errors.insert("name", "Name cannot exceed 50 characters");
    }
    check_email(&mut errors, &form.email);
    errors
}

#[must_use]
pub fn validate_sign_in(form: &SignInRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, &form.email);
    require(&mut errors, "password", &form.password, "Password is required");
    errors
}

#[must_use]
pub fn validate_car(form: &CarFields) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "model", &form.model, "Model is required");
    require(&mut errors, "make", &form.make, "Make is required");
    require(&mut errors, "color", &form.color, "Color is required");
    require(&mut errors, "category", &form.category, "Category is required");
    require(&mut errors, "registrationNo", &form.registration_no, "Registration number is required");
    errors
}

#[must_use]
pub fn validate_category(form: &CategoryFields) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "name", &form.name, "Name is required");
    errors
}

/// Trimmed copy of a car form, ready to submit.
#[must_use]
pub fn trimmed_car(form: &CarFields) -> CarFields {
    CarFields {
        model: form.model.trim().to_owned(),
        make: form.make.trim().to_owned(),
        color: form.color.trim().to_owned(),
        category: form.category.trim().to_owned(),
        registration_no: form.registration_no.trim().to_owned(),
    }
}
