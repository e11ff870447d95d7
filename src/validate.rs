//! Checks the `validator` derive cannot express on its own. SQLite does not
//! enforce declared string lengths, so the bounds live on the input structs
//! in `models`.

use std::borrow::Cow;

use validator::ValidationError;

/// Letters, digits, hyphens and underscores only.
pub fn slug(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("slug").with_message(Cow::Borrowed("must not be empty")));
    }
    if value.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_')) {
        return Err(ValidationError::new("slug")
            .with_message(Cow::Borrowed("only letters, digits, '-' and '_' are allowed")));
    }
    Ok(())
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("is required")));
    }
    Ok(())
}
