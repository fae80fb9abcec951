//! Validation rules for the contact form. Pure functions over field values;
//! the form widget owns when they run (submit, blur) and how failures show.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Message,
}

impl FieldKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Message => "Message",
        }
    }

    /// Phone is the one optional field; it is only checked when non-empty.
    #[must_use]
    pub fn required(self) -> bool {
        !matches!(self, Self::Phone)
    }
}

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";

/// Validates one field value against its kind's rules.
///
/// # Errors
///
/// Returns the user-facing message for the first rule the value breaks.
pub fn validate(kind: FieldKind, value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if kind.required() && trimmed.is_empty() {
        return Err(REQUIRED_MESSAGE);
    }
    match kind {
        FieldKind::Email if !trimmed.is_empty() && !is_valid_email(trimmed) => Err(EMAIL_MESSAGE),
        FieldKind::Phone if !trimmed.is_empty() && !is_valid_phone(trimmed) => Err(PHONE_MESSAGE),
        _ => Ok(()),
    }
}

/// `local@domain.tld`: non-whitespace, non-`@` segments around a single `@`,
/// and a `.` inside the domain with characters on both sides.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let clean = |s: &str| {
        !s.is_empty() && !s.contains(|c: char| c.is_whitespace() || c == '@')
    };
    let dot_inside = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1);
    clean(local) && clean(domain) && dot_inside
}

/// Digits, spaces, hyphens, parentheses and plus signs only, at least ten
/// characters after trimming.
fn is_valid_phone(value: &str) -> bool {
    value.len() >= 10
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::{validate, FieldKind, EMAIL_MESSAGE, PHONE_MESSAGE, REQUIRED_MESSAGE};

    #[test]
    fn required_fields_reject_blank_values() {
        for kind in [FieldKind::Name, FieldKind::Email, FieldKind::Message] {
            assert_eq!(validate(kind, "   "), Err(REQUIRED_MESSAGE));
        }
    }

    #[test]
    fn phone_is_optional() {
        assert_eq!(validate(FieldKind::Phone, ""), Ok(()));
        assert_eq!(validate(FieldKind::Phone, "   "), Ok(()));
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate(FieldKind::Email, "user@example.com"), Ok(()));
        assert_eq!(validate(FieldKind::Email, "not-an-email"), Err(EMAIL_MESSAGE));
        assert_eq!(validate(FieldKind::Email, "a b@example.com"), Err(EMAIL_MESSAGE));
        assert_eq!(validate(FieldKind::Email, "user@example"), Err(EMAIL_MESSAGE));
        assert_eq!(validate(FieldKind::Email, "user@@example.com"), Err(EMAIL_MESSAGE));
    }

    #[test]
    fn phone_rules() {
        assert_eq!(validate(FieldKind::Phone, "555-123-4567"), Ok(()));
        assert_eq!(validate(FieldKind::Phone, "+1 (555) 123 4567"), Ok(()));
        // too short
        assert_eq!(validate(FieldKind::Phone, "12345"), Err(PHONE_MESSAGE));
        // long enough but carries letters
        assert_eq!(validate(FieldKind::Phone, "555-CALL-NOW"), Err(PHONE_MESSAGE));
    }
}
