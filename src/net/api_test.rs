use super::*;

fn valid_join_form() -> JoinForm {
    JoinForm {
        email: " ada@example.com ".to_owned(),
        user_name: " ada ".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        password: "analytical".to_owned(),
        confirm_password: "analytical".to_owned(),
    }
}

fn validation_message(err: ClientError) -> &'static str {
    match err {
        ClientError::Validation(msg) => msg,
        other => panic!("expected validation error, got {other:?}"),
    }
}

// =============================================================
// validate_sign_in
// =============================================================

#[test]
fn validate_sign_in_trims_email_but_not_password() {
    let req = validate_sign_in("  ada@example.com ", " secret ").unwrap();
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.password, " secret ");
}

#[test]
fn validate_sign_in_requires_both_fields() {
    assert_eq!(
        validation_message(validate_sign_in("   ", "pw").unwrap_err()),
        "Enter your email and password."
    );
    assert_eq!(
        validation_message(validate_sign_in("ada@example.com", "").unwrap_err()),
        "Enter your email and password."
    );
}

#[test]
fn validate_sign_in_rejects_malformed_email() {
    for email in ["ada", "@example.com", "ada@localhost", "ada@.com"] {
        assert_eq!(
            validation_message(validate_sign_in(email, "pw").unwrap_err()),
            "Enter a valid email address.",
            "{email}"
        );
    }
}

// =============================================================
// validate_join
// =============================================================

#[test]
fn validate_join_trims_fields() {
    let req = validate_join(&valid_join_form()).unwrap();
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.user_name, "ada");
    assert_eq!(req.password, "analytical");
}

#[test]
fn validate_join_requires_all_fields() {
    let mut form = valid_join_form();
    form.last_name = "  ".to_owned();
    assert_eq!(validation_message(validate_join(&form).unwrap_err()), "All fields are required.");
}

#[test]
fn validate_join_rejects_spaced_user_name() {
    let mut form = valid_join_form();
    form.user_name = "ada l".to_owned();
    assert_eq!(
        validation_message(validate_join(&form).unwrap_err()),
        "User name cannot contain spaces."
    );
}

#[test]
fn validate_join_enforces_password_length() {
    let mut form = valid_join_form();
    form.password = "short".to_owned();
    form.confirm_password = "short".to_owned();
    assert_eq!(
        validation_message(validate_join(&form).unwrap_err()),
        "Password must be at least 8 characters."
    );
}

#[test]
fn validate_join_requires_matching_confirmation() {
    let mut form = valid_join_form();
    form.confirm_password = "analytica1".to_owned();
    assert_eq!(validation_message(validate_join(&form).unwrap_err()), "Passwords do not match.");
}
