//! Client-side form validation for the auth and profile screens.
//!
//! DESIGN
//! ======
//! Validators are pure functions over plain input structs, returning
//! per-field error structs that render inline next to the offending input.
//! Provider-side failures are a separate concern and always surface as one
//! general message on the form.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Characters counted as "special" for password strength scoring.
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Basic `local@domain.tld` shape check. Not an RFC address parser.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

/// Cosmetic password-strength classification shown under the signup field.
/// Has no enforcement effect beyond the separate length >= 8 gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

/// Score a password from length and character-class diversity
/// (lower/upper/digit/special).
pub fn password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::Weak;
    }
    let classes = [
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    ]
    .iter()
    .filter(|present| **present)
    .count();
    let length = password.chars().count();

    if length < 8 || classes <= 1 {
        PasswordStrength::Weak
    } else if length < 12 || classes <= 2 {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Strong
    }
}

// =============================================================
// Login
// =============================================================

/// Per-field errors for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Non-empty checks only; credential verification is the provider's job.
pub fn validate_login(email: &str, password: &str) -> LoginErrors {
    LoginErrors {
        email: email.trim().is_empty().then_some("Email is required"),
        password: password.is_empty().then_some("Password is required"),
    }
}

// =============================================================
// Signup
// =============================================================

/// Signup form input.
#[derive(Clone, Debug, Default)]
pub struct SignupInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

/// Per-field errors for the signup form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub full_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
    pub terms: Option<&'static str>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.terms.is_none()
    }
}

pub fn validate_signup(input: &SignupInput) -> SignupErrors {
    let email = if input.email.is_empty() {
        Some("Email is required")
    } else if !is_valid_email(&input.email) {
        Some("Please enter a valid email")
    } else {
        None
    };
    let password = if input.password.is_empty() {
        Some("Password is required")
    } else if input.password.chars().count() < 8 {
        Some("Password must be at least 8 characters")
    } else {
        None
    };
    SignupErrors {
        full_name: input.full_name.trim().is_empty().then_some("Full name is required"),
        email,
        password,
        confirm_password: (input.password != input.confirm_password)
            .then_some("Passwords do not match"),
        terms: (!input.accept_terms).then_some("You must accept the terms and conditions"),
    }
}

// =============================================================
// Password change (profile screen)
// =============================================================

/// Per-field errors for the change-password form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordChangeErrors {
    pub current_password: Option<&'static str>,
    pub new_password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl PasswordChangeErrors {
    pub fn is_empty(&self) -> bool {
        self.current_password.is_none()
            && self.new_password.is_none()
            && self.confirm_password.is_none()
    }
}

pub fn validate_password_change(
    current_password: &str,
    new_password: &str,
    confirm_password: &str,
) -> PasswordChangeErrors {
    let new = if new_password.is_empty() {
        Some("New password is required")
    } else if new_password.chars().count() < 8 {
        Some("Password must be at least 8 characters")
    } else {
        None
    };
    PasswordChangeErrors {
        current_password: current_password
            .is_empty()
            .then_some("Current password is required"),
        new_password: new,
        confirm_password: (new_password != confirm_password).then_some("Passwords do not match"),
    }
}
