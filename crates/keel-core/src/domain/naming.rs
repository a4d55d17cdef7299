//! Naming rules shared by the generators.

use crate::domain::error::DomainError;

/// Uppercase the first character, leaving the rest untouched.
///
/// | Input      | Output     |
/// |------------|------------|
/// | `user`     | `User`     |
/// | `blogPost` | `BlogPost` |
/// | `User`     | `User`     |
/// | `élan`     | `Élan`     |
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check that a name is usable as a single path segment.
pub fn validate_identifier(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid("name cannot contain whitespace"));
    }
    Ok(())
}
