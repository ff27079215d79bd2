use regex::Regex;
use std::sync::OnceLock;

/// Result of checking one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub message: String,
}

impl Validation {
    fn valid(message: &str) -> Self {
        Self {
            is_valid: true,
            message: message.to_string(),
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            message: message.to_string(),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("regex email"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

pub fn validate_password(password: &str) -> Validation {
    if password.is_empty() {
        return Validation::invalid("Please enter your password!");
    }
    Validation::valid("Password is valid")
}

/// Usernames are 3 to 50 characters long.
pub fn validate_username(username: &str) -> Validation {
    match username.chars().count() {
        0..=2 => Validation::invalid("Username must be at least 3 characters long"),
        51.. => Validation::invalid("Username must be less than 50 characters"),
        _ => Validation::valid("Username is valid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("asha@example.in"));
        assert!(!is_valid_email("asha@example"));
        assert!(!is_valid_email("asha @example.in"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_username_bounds() {
        assert!(!validate_username("ab").is_valid);
        assert!(validate_username("abc").is_valid);
        assert!(validate_username(&"x".repeat(50)).is_valid);

        let long = validate_username(&"x".repeat(51));
        assert!(!long.is_valid);
        assert_eq!(long.message, "Username must be less than 50 characters");
    }

    #[test]
    fn test_password() {
        assert_eq!(
            validate_password(""),
            Validation::invalid("Please enter your password!")
        );
        assert!(validate_password("secret").is_valid);
    }
}
