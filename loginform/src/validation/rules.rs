//! Fixed validation predicates.

/// Passwords must be strictly longer than this after trimming.
pub const MIN_PASSWORD_LEN: usize = 6;

/// An email is accepted as soon as it contains an `@`.
pub fn validate_email(value: &str) -> bool {
    value.contains('@')
}

/// A password is accepted when its trimmed length exceeds [`MIN_PASSWORD_LEN`].
pub fn validate_password(value: &str) -> bool {
    value.trim().chars().count() > MIN_PASSWORD_LEN
}

/// Which predicate a field is validated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Email,
    Password,
}

impl FieldKind {
    /// Run this kind's predicate against a raw value.
    pub fn validate(self, value: &str) -> bool {
        match self {
            Self::Email => validate_email(value),
            Self::Password => validate_password(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_requires_at_sign() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("@"));
        assert!(validate_email("no spaces@ are checked"));
        assert!(!validate_email(""));
        assert!(!validate_email("a"));
        assert!(!validate_email("noatsign"));
    }

    #[test]
    fn test_password_length_is_strictly_greater_than_six() {
        assert!(!validate_password(""));
        assert!(!validate_password("short"));
        assert!(!validate_password("sixsix"));
        assert!(validate_password("sevenn7"));
        assert!(validate_password("longenough"));
    }

    #[test]
    fn test_password_ignores_surrounding_whitespace() {
        assert!(!validate_password("   sixsix   "));
        assert!(!validate_password("\t\n      \n"));
        assert!(validate_password("  seven77  "));
        // Inner whitespace still counts.
        assert!(validate_password("a b c d"));
    }

    #[test]
    fn test_password_counts_characters_not_bytes() {
        // Six two-byte characters.
        assert!(!validate_password("éééééé"));
        assert!(validate_password("ééééééé"));
    }

    #[test]
    fn test_kind_dispatches_to_predicate() {
        for value in ["", "a", "a@b", "longenough", "  x@y  ", "ab@cdefgh"] {
            assert_eq!(FieldKind::Email.validate(value), value.contains('@'));
            assert_eq!(
                FieldKind::Password.validate(value),
                value.trim().chars().count() > 6
            );
        }
    }
}
