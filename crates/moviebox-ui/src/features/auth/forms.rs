//! Client-side validation for the auth pages.
//!
//! Each validator turns raw form state into a ready-to-send request body or a
//! single banner message, which is how the auth pages report problems.

use moviebox_api_models::{
    ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest, is_valid_email,
};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum accepted display-name length.
pub const MIN_NAME_LEN: usize = 2;

/// Raw login form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
    /// Remember-me checkbox.
    pub remember: bool,
}

/// Raw signup form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Display-name input.
    pub name: String,
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
    /// Password confirmation input.
    pub confirm_password: String,
    /// Terms-of-service checkbox.
    pub agree_terms: bool,
}

/// Validate the login form.
///
/// # Errors
///
/// Returns the banner message to display when a check fails.
pub fn validate_login(form: &LoginForm) -> Result<LoginRequest, String> {
    if form.email.trim().is_empty() || form.password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    if !is_valid_email(form.email.trim()) {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(LoginRequest {
        email: normalize_email(&form.email),
        password: form.password.clone(),
    })
}

/// Validate the signup form.
///
/// # Errors
///
/// Returns the banner message to display when a check fails.
pub fn validate_signup(form: &SignupForm) -> Result<RegisterRequest, String> {
    if form.name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Err("Please fill in all fields".to_string());
    }
    if !is_valid_email(form.email.trim()) {
        return Err("Please enter a valid email address".to_string());
    }
    if form.name.trim().chars().count() < MIN_NAME_LEN {
        return Err(format!("Name must be at least {MIN_NAME_LEN} characters"));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters"));
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match".to_string());
    }
    if !form.agree_terms {
        return Err("You must agree to the terms and conditions".to_string());
    }
    Ok(RegisterRequest {
        name: form.name.trim().to_string(),
        email: normalize_email(&form.email),
        password: form.password.clone(),
    })
}

/// Validate the forgot-password form.
///
/// # Errors
///
/// Returns the banner message to display when a check fails.
pub fn validate_forgot(email: &str) -> Result<ForgotPasswordRequest, String> {
    if email.trim().is_empty() {
        return Err("Please enter your email address".to_string());
    }
    if !is_valid_email(email.trim()) {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(ForgotPasswordRequest {
        email: normalize_email(email),
    })
}

/// Validate the reset-password form against the token from the reset link.
///
/// # Errors
///
/// Returns the banner message to display when a check fails.
pub fn validate_reset(
    token: Option<&str>,
    password: &str,
    confirm_password: &str,
) -> Result<ResetPasswordRequest, String> {
    let token = token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| "Invalid reset link".to_string())?;
    if password.is_empty() || confirm_password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters"));
    }
    if password != confirm_password {
        return Err("Passwords do not match".to_string());
    }
    Ok(ResetPasswordRequest {
        token: token.to_string(),
        password: password.to_string(),
    })
}

fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupForm {
        SignupForm {
            name: "Ada Lovelace".to_string(),
            email: " Ada@Example.com ".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            agree_terms: true,
        }
    }

    #[test]
    fn login_normalizes_the_email() {
        let form = LoginForm {
            email: " User@Example.COM ".to_string(),
            password: "hunter2".to_string(),
            remember: true,
        };
        let request = validate_login(&form).unwrap();
        assert_eq!(request.email, "user@example.com");
        assert_eq!(request.password, "hunter2");
    }

    #[test]
    fn login_rejects_blank_and_malformed_input() {
        assert!(validate_login(&LoginForm::default()).is_err());
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: "x".to_string(),
            remember: false,
        };
        assert_eq!(
            validate_login(&form).unwrap_err(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn signup_accepts_a_complete_form() {
        let request = validate_signup(&signup()).unwrap();
        assert_eq!(request.name, "Ada Lovelace");
        assert_eq!(request.email, "ada@example.com");
    }

    #[test]
    fn signup_enforces_each_rule_in_order() {
        let mut short_name = signup();
        short_name.name = "A".to_string();
        assert!(validate_signup(&short_name).unwrap_err().contains("Name"));

        let mut short_pass = signup();
        short_pass.password = "abc".to_string();
        short_pass.confirm_password = "abc".to_string();
        assert!(validate_signup(&short_pass).unwrap_err().contains("Password"));

        let mut mismatch = signup();
        mismatch.confirm_password = "secret2".to_string();
        assert_eq!(validate_signup(&mismatch).unwrap_err(), "Passwords do not match");

        let mut no_terms = signup();
        no_terms.agree_terms = false;
        assert!(validate_signup(&no_terms).unwrap_err().contains("terms"));
    }

    #[test]
    fn forgot_requires_a_well_formed_email() {
        assert!(validate_forgot("").is_err());
        assert!(validate_forgot("nope").is_err());
        assert_eq!(
            validate_forgot(" User@Example.com ").unwrap().email,
            "user@example.com"
        );
    }

    #[test]
    fn reset_requires_a_token_before_anything_else() {
        assert_eq!(
            validate_reset(None, "secret1", "secret1").unwrap_err(),
            "Invalid reset link"
        );
        assert_eq!(
            validate_reset(Some("  "), "secret1", "secret1").unwrap_err(),
            "Invalid reset link"
        );
        let request = validate_reset(Some("tok"), "secret1", "secret1").unwrap();
        assert_eq!(request.token, "tok");
    }

    #[test]
    fn reset_applies_password_rules() {
        assert!(validate_reset(Some("tok"), "abc", "abc").is_err());
        assert!(validate_reset(Some("tok"), "secret1", "secret2").is_err());
    }
}
