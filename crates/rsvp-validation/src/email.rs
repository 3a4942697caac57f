//! Email validation functions

/// Validates basic email format
///
/// Accepts exactly the values matched by `^[^\s@]+@[^\s@]+\.[^\s@]+$`:
/// - No whitespace anywhere
/// - Exactly one '@' symbol with a non-empty local part
/// - At least one '.' in the domain that is neither its first nor its
///   last character
///
/// Note the pattern accepts `user@example..com` (the interior dot
/// satisfies it) while rejecting `user@.com` and `user@example.`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    // '.' is ASCII, so byte positions are safe here
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user_name@example-domain.com"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("bad"));
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("user@example.com "));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn test_interior_double_dot_accepted() {
        // Matches the pattern: the second dot has characters on both sides
        assert!(is_valid_email("user@example..com"));
    }
}
