//! Field validators shared by the registration and login forms.
//!
//! Pure predicates over string input; they never panic. The email check is a
//! shallow shape test rather than RFC syntax validation; the server
//! re-validates everything anyway.

/// `local@domain.tld` shape: a non-empty local part, a domain containing a
/// dot with non-empty segments on both sides, no whitespace and no second
/// `@` anywhere.
pub fn is_valid_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }
    // The dot may not be the first or last character of the domain.
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

/// At least six characters.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 6
}

/// At least three characters, ASCII letters, digits, and underscore only.
pub fn is_valid_username(username: &str) -> bool {
    username.chars().count() >= 3
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
