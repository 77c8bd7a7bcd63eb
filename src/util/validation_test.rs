use super::*;

fn car(model: &str, make: &str, color: &str, category: &str, reg: &str) -> CarFields {
    CarFields {
        model: model.to_owned(),
        make: make.to_owned(),
        color: color.to_owned(),
        category: category.to_owned(),
        registration_no: reg.to_owned(),
    }
}

// =============================================================
// email
// =============================================================

#[test]
fn email_format_accepts_common_addresses() {
    assert!(is_valid_email("ada@example.com"));
    assert!(is_valid_email("  first.last+tag@mail.example.co.uk "));
}

#[test]
fn email_format_rejects_malformed_addresses() {
    for bad in ["ada", "ada@", "@example.com", "ada@example", "ada@@example.com", "a da@example.com", "ada@example..com", "ada@.com"] {
        assert!(!is_valid_email(bad), "{bad}");
    }
}

// =============================================================
// forms
// =============================================================

#[test]
fn sign_up_requires_name_and_valid_email() {
    let errors = validate_sign_up(&SignUpRequest { name: "  ".to_owned(), email: "nope".to_owned() });
    assert_eq!(errors.get("name"), Some(&"Name is required"));
    assert_eq!(errors.get("email"), Some(&"Invalid email format"));
}

#[test]
fn sign_up_limits_name_length() {
    let errors = validate_sign_up(&SignUpRequest { name: "x".repeat(51), email: "a@b.co".to_owned() });
    assert_eq!(errors.get("name"), Some(&"Name cannot exceed 50 characters"));
    let ok = validate_sign_up(&SignUpRequest { name: "x".repeat(50), email: "a@b.co".to_owned() });
    assert!(ok.is_empty());
}

#[test]
fn sign_in_requires_email_and_password() {
    let errors = validate_sign_in(&SignInRequest::default());
    assert_eq!(errors.get("email"), Some(&"Email is required"));
    assert_eq!(errors.get("password"), Some(&"Password is required"));
    assert!(validate_sign_in(&SignInRequest { email: "a@b.co".to_owned(), password: "pw".to_owned() }).is_empty());
}

#[test]
fn car_requires_every_field() {
    let errors = validate_car(&CarFields::default());
    assert_eq!(errors.len(), 5);
    assert_eq!(errors.get("registrationNo"), Some(&"Registration number is required"));
    assert_eq!(errors.get("category"), Some(&"Category is required"));
    assert!(validate_car(&car("Civic", "Honda", "Blue", "c1", "XY-123")).is_empty());
}

#[test]
fn category_requires_name() {
    assert_eq!(validate_category(&CategoryFields::default()).get("name"), Some(&"Name is required"));
    assert!(validate_category(&CategoryFields { name: "SUV".to_owned() }).is_empty());
}

#[test]
fn trimmed_car_strips_whitespace() {
    let trimmed = trimmed_car(&car(" Civic ", "Honda ", " Blue", "c1", " XY-123 "));
    assert_eq!(trimmed, car("Civic", "Honda", "Blue", "c1", "XY-123"));
}
