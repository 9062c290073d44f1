//! Email address validation for the capture form and endpoint
//!
//! Structural checks only: the form, the state machine and the capture
//! endpoint all agree on what counts as submittable. Full RFC 5321
//! parsing is left to whatever mailing system eventually consumes the
//! addresses.

/// Maximum length for an address (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Address is empty
    Empty,
    /// Address is too long
    TooLong { max: usize, actual: usize },
    /// Address contains whitespace
    ContainsWhitespace,
    /// Address has no `@` separator
    MissingAt,
    /// Nothing before the `@`
    MissingLocalPart,
    /// Nothing usable after the `@`
    InvalidDomain,
}

impl std::fmt::Display for EmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailError::Empty => write!(f, "Address cannot be empty"),
            EmailError::TooLong { max, actual } => {
                write!(f, "Address is too long ({} chars, max {})", actual, max)
            }
            EmailError::ContainsWhitespace => {
                write!(f, "Address cannot contain whitespace")
            }
            EmailError::MissingAt => write!(f, "Address must contain '@'"),
            EmailError::MissingLocalPart => {
                write!(f, "Address must have a name before '@'")
            }
            EmailError::InvalidDomain => {
                write!(f, "Address must have a valid domain after '@'")
            }
        }
    }
}

impl std::error::Error for EmailError {}

/// Validates an email address for submission
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(EmailError::TooLong {
            max: MAX_EMAIL_LENGTH,
            actual: email.len(),
        });
    }
    if email.chars().any(|c| c.is_whitespace()) {
        return Err(EmailError::ContainsWhitespace);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(EmailError::MissingAt);
    };
    if local.is_empty() {
        return Err(EmailError::MissingLocalPart);
    }
    if domain.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
    {
        return Err(EmailError::InvalidDomain);
    }

    Ok(())
}

/// Convenience check used by view code
pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("jan.kowalski@example.org").is_ok());
        assert!(validate_email("dev+tag@sub.domain.io").is_ok());
        assert!(validate_email("x@y.co").is_ok());
    }

    #[test]
    fn test_empty_address() {
        assert_eq!(validate_email(""), Err(EmailError::Empty));
    }

    #[test]
    fn test_too_long_address() {
        let local = "a".repeat(250);
        let long = format!("{}@b.com", local);
        assert!(matches!(
            validate_email(&long),
            Err(EmailError::TooLong { .. })
        ));

        let ok_local = "a".repeat(248);
        let ok = format!("{}@b.com", ok_local);
        assert!(validate_email(&ok).is_ok());
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(
            validate_email("a b@c.com"),
            Err(EmailError::ContainsWhitespace)
        );
        assert_eq!(
            validate_email(" a@b.com"),
            Err(EmailError::ContainsWhitespace)
        );
        assert_eq!(
            validate_email("a@b.com "),
            Err(EmailError::ContainsWhitespace)
        );
    }

    #[test]
    fn test_missing_at() {
        assert_eq!(validate_email("plainaddress"), Err(EmailError::MissingAt));
        assert_eq!(validate_email("a.b.com"), Err(EmailError::MissingAt));
    }

    #[test]
    fn test_missing_local_part() {
        assert_eq!(validate_email("@b.com"), Err(EmailError::MissingLocalPart));
    }

    #[test]
    fn test_invalid_domain() {
        assert_eq!(validate_email("a@"), Err(EmailError::InvalidDomain));
        assert_eq!(validate_email("a@b"), Err(EmailError::InvalidDomain));
        assert_eq!(validate_email("a@.com"), Err(EmailError::InvalidDomain));
        assert_eq!(validate_email("a@b.com."), Err(EmailError::InvalidDomain));
        assert_eq!(validate_email("a@b@c.com"), Err(EmailError::InvalidDomain));
        assert_eq!(validate_email("a@-b.com"), Err(EmailError::InvalidDomain));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("nope"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(EmailError::Empty.to_string(), "Address cannot be empty");
        assert_eq!(
            EmailError::TooLong {
                max: 254,
                actual: 300
            }
            .to_string(),
            "Address is too long (300 chars, max 254)"
        );
    }
}
