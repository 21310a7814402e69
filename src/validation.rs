//! Contact form field validation.

pub const NAME_ERROR: &str = "Please enter a valid name (at least 2 characters)";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const MESSAGE_ERROR: &str = "Please enter a message (at least 10 characters)";

// Lengths are measured in UTF-16 code units, the unit the thresholds were
// originally defined in; astral-plane characters count as two.
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

pub fn validate_name(name: &str) -> bool {
    utf16_len(name.trim()) >= 2
}

/// Accepts `local@domain.tld` where none of the three segments is empty and
/// the whole address contains no whitespace or extra `@`.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // A dot with at least one character on each side of it.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate_message(message: &str) -> bool {
    utf16_len(message.trim()) >= 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_needs_two_characters_after_trimming() {
        assert!(!validate_name(""));
        assert!(!validate_name("A"));
        assert!(!validate_name("  A  "));
        assert!(validate_name("Al"));
        assert!(validate_name("  Al  "));
        assert!(validate_name("Aleksandra"));
    }

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("jo@x.com"));
        assert!(validate_email("first.last@mail.example.org"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!validate_email("bad-email"));
        assert!(!validate_email(""));
        assert!(!validate_email("@b.co"));
        assert!(!validate_email("a@"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a@.co"));
        assert!(!validate_email("a@bc."));
        assert!(!validate_email("a@@b.co"));
        assert!(!validate_email("a b@c.co"));
        assert!(!validate_email("a@b .co"));
    }

    #[test]
    fn email_allows_stray_dots_in_the_domain() {
        // Matches the permissive three-part shape: anything dot-separated
        // inside the domain is fine as long as one dot has neighbours.
        assert!(validate_email("a@b..c"));
        assert!(validate_email("a@b.c."));
    }

    #[test]
    fn lengths_count_utf16_code_units() {
        // One crab, two code units: enough for a name on its own.
        assert!(validate_name("🦀"));
        // Five astral characters reach the ten-unit message threshold,
        // five BMP characters do not.
        assert!(validate_message("🦀🦀🦀🦀🦀"));
        assert!(!validate_message("aaaaa"));
    }

    #[test]
    fn message_needs_ten_characters_after_trimming() {
        assert!(!validate_message(""));
        assert!(!validate_message("too short"));
        assert!(!validate_message("   padded   "));
        assert!(validate_message("Hello there, this works"));
        assert!(validate_message("exactly10!"));
    }
}
