//! Sign-in, sign-up and password management forms

use super::is_blank;
use crate::models::{
    ChangePasswordForm, ForgotPasswordForm, LoginForm, RegisterForm, ResetPasswordForm,
};
use crate::utils::error_messages::*;
use crate::utils::validation::{FieldErrors, Rules, ValidationResult};

/// Email must be filled in and well formed
fn check_email<R: Rules + ?Sized>(errors: &mut FieldErrors, email: Option<&str>, rules: &R) {
    if is_blank(email) {
        errors.add("email", EMAIL_REQUIRED);
    } else if !rules.validate_email(email) {
        errors.add("email", INVALID_EMAIL);
    }
}

/// Strong password plus an identical confirmation
fn check_new_password<R: Rules + ?Sized>(
    errors: &mut FieldErrors,
    field: &str,
    password: Option<&str>,
    confirmation: Option<&str>,
    rules: &R,
) {
    if is_blank(password) {
        errors.add(field, PASSWORD_REQUIRED);
    } else if !rules.validate_password(password) {
        errors.add(field, WEAK_PASSWORD);
    }

    if password != confirmation {
        errors.add("confirmPassword", PASSWORDS_DO_NOT_MATCH);
    }
}

/// A password is not needed when signing in with biometrics
pub fn validate_login_form<R: Rules + ?Sized>(values: &LoginForm, rules: &R) -> ValidationResult {
    let mut errors = FieldErrors::new();

    check_email(&mut errors, values.email.as_deref(), rules);

    if !values.use_biometrics && values.password.as_deref().map_or(true, str::is_empty) {
        errors.add("password", PASSWORD_REQUIRED);
    }

    errors.finish("login")
}

pub fn validate_register_form<R: Rules + ?Sized>(
    values: &RegisterForm,
    rules: &R,
) -> ValidationResult {
    let mut errors = FieldErrors::new();

    check_email(&mut errors, values.email.as_deref(), rules);
    check_new_password(
        &mut errors,
        "password",
        values.password.as_deref(),
        values.confirm_password.as_deref(),
        rules,
    );

    if is_blank(values.first_name.as_deref()) {
        errors.add("firstName", FIRST_NAME_REQUIRED);
    }
    if is_blank(values.last_name.as_deref()) {
        errors.add("lastName", LAST_NAME_REQUIRED);
    }
    if !values.agree_to_terms {
        errors.add("agreeToTerms", TERMS_NOT_ACCEPTED);
    }

    errors.finish("register")
}

pub fn validate_forgot_password_form<R: Rules + ?Sized>(
    values: &ForgotPasswordForm,
    rules: &R,
) -> ValidationResult {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, values.email.as_deref(), rules);
    errors.finish("forgot password")
}

pub fn validate_reset_password_form<R: Rules + ?Sized>(
    values: &ResetPasswordForm,
    rules: &R,
) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if is_blank(values.token.as_deref()) {
        errors.add("token", RESET_TOKEN_REQUIRED);
    }
    check_new_password(
        &mut errors,
        "password",
        values.password.as_deref(),
        values.confirm_password.as_deref(),
        rules,
    );

    errors.finish("reset password")
}

pub fn validate_change_password_form<R: Rules + ?Sized>(
    values: &ChangePasswordForm,
    rules: &R,
) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if values.current_password.as_deref().map_or(true, str::is_empty) {
        errors.add("currentPassword", CURRENT_PASSWORD_REQUIRED);
    }
    check_new_password(
        &mut errors,
        "newPassword",
        values.new_password.as_deref(),
        values.confirm_password.as_deref(),
        rules,
    );

    errors.finish("change password")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::forms::test_support::rules;

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn valid_registration() -> RegisterForm {
        RegisterForm {
            email: s("ada@example.com"),
            password: s("Password1!"),
            confirm_password: s("Password1!"),
            first_name: s("Ada"),
            last_name: s("Lovelace"),
            agree_to_terms: true,
        }
    }

    #[test]
    fn test_login_with_biometrics_needs_no_password() {
        let form = LoginForm {
            email: s("user@example.com"),
            password: s(""),
            remember: true,
            use_biometrics: true,
        };

        let result = validate_login_form(&form, &rules());
        assert!(result.is_valid());
        assert!(result.error("password").is_none());
    }

    #[test]
    fn test_login_without_biometrics_needs_password() {
        let form = LoginForm {
            email: s("user@example.com"),
            password: None,
            ..Default::default()
        };

        let result = validate_login_form(&form, &rules());
        assert!(!result.is_valid());
        assert_eq!(result.error("password"), Some(PASSWORD_REQUIRED));
        assert!(result.error("email").is_none());
    }

    #[test]
    fn test_login_email_errors() {
        let cases = vec![
            (None, EMAIL_REQUIRED),
            (s("  "), EMAIL_REQUIRED),
            (s("user@.com"), INVALID_EMAIL),
        ];

        for (email, expected) in cases {
            let form = LoginForm {
                email: email.clone(),
                password: s("anything"),
                ..Default::default()
            };
            let result = validate_login_form(&form, &rules());
            assert_eq!(
                result.error("email"),
                Some(expected),
                "Unexpected email error for {:?}", email
            );
        }
    }

    #[test]
    fn test_valid_registration() {
        let result = validate_register_form(&valid_registration(), &rules());
        assert!(result.is_valid(), "Unexpected errors: {:?}", result.errors());
    }

    #[test]
    fn test_registration_collects_every_error() {
        let form = RegisterForm {
            email: s("nope"),
            password: s("password1!"),
            confirm_password: s("Password1!"),
            first_name: s(" "),
            last_name: None,
            agree_to_terms: false,
        };

        let result = validate_register_form(&form, &rules());
        assert!(!result.is_valid());
        assert_eq!(result.error("email"), Some(INVALID_EMAIL));
        assert_eq!(result.error("password"), Some(WEAK_PASSWORD));
        assert_eq!(result.error("confirmPassword"), Some(PASSWORDS_DO_NOT_MATCH));
        assert_eq!(result.error("firstName"), Some(FIRST_NAME_REQUIRED));
        assert_eq!(result.error("lastName"), Some(LAST_NAME_REQUIRED));
        assert_eq!(result.error("agreeToTerms"), Some(TERMS_NOT_ACCEPTED));
        assert_eq!(result.errors().len(), 6);
    }

    #[test]
    fn test_confirmation_must_match_exactly() {
        let form = RegisterForm {
            confirm_password: s("Password1! "),
            ..valid_registration()
        };

        let result = validate_register_form(&form, &rules());
        assert_eq!(result.error("confirmPassword"), Some(PASSWORDS_DO_NOT_MATCH));
        assert!(result.error("password").is_none());
    }

    #[test]
    fn test_forgot_password() {
        let form = ForgotPasswordForm { email: s("user@example.com") };
        let ok = validate_forgot_password_form(&form, &rules());
        assert!(ok.is_valid());

        for email in [None, s(""), s("user@")] {
            let result = validate_forgot_password_form(&ForgotPasswordForm { email }, &rules());
            assert!(!result.is_valid());
            assert!(result.error("email").is_some());
        }
    }

    #[test]
    fn test_reset_password() {
        let form = ResetPasswordForm {
            token: s("abc123"),
            password: s("Password1!"),
            confirm_password: s("Password1!"),
        };
        assert!(validate_reset_password_form(&form, &rules()).is_valid());

        let form = ResetPasswordForm {
            token: None,
            password: s("short"),
            confirm_password: s("other"),
        };
        let result = validate_reset_password_form(&form, &rules());
        assert_eq!(result.error("token"), Some(RESET_TOKEN_REQUIRED));
        assert_eq!(result.error("password"), Some(WEAK_PASSWORD));
        assert_eq!(result.error("confirmPassword"), Some(PASSWORDS_DO_NOT_MATCH));
    }

    #[test]
    fn test_change_password() {
        let form = ChangePasswordForm {
            current_password: s("old-secret"),
            new_password: s("N3w@Password"),
            confirm_password: s("N3w@Password"),
        };
        assert!(validate_change_password_form(&form, &rules()).is_valid());

        let form = ChangePasswordForm {
            current_password: s(""),
            new_password: s("weak"),
            confirm_password: s("N3w@Password"),
        };
        let result = validate_change_password_form(&form, &rules());
        assert_eq!(result.error("currentPassword"), Some(CURRENT_PASSWORD_REQUIRED));
        assert_eq!(result.error("newPassword"), Some(WEAK_PASSWORD));
        assert_eq!(result.error("confirmPassword"), Some(PASSWORDS_DO_NOT_MATCH));
    }
}
