//! Page slug generation and page field validation.

use crate::error::CoreError;

/// Maximum length of a page title.
pub const MAX_TITLE_LEN: usize = 255;

/// Maximum length of a page slug.
pub const MAX_SLUG_LEN: usize = 255;

/// Generate a URL-safe slug from a page title.
///
/// Converts to lowercase, replaces anything that is not an ASCII letter or
/// digit with a hyphen, collapses consecutive hyphens, and trims
/// leading/trailing hyphens. Titles without any ASCII alphanumerics produce
/// an empty string.
pub fn generate_slug(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut prev_hyphen = false;
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            result.push('-');
            prev_hyphen = true;
        }
    }

    let trimmed = result.trim_matches('-');
    trimmed.chars().take(MAX_SLUG_LEN).collect::<String>().trim_end_matches('-').to_string()
}

/// Use `explicit` if given (after validation), otherwise derive one from `title`.
pub fn resolve_slug(explicit: Option<&str>, title: &str) -> Result<String, CoreError> {
    match explicit {
        Some(slug) => {
            validate_slug(slug)?;
            Ok(slug.to_string())
        }
        None => {
            let slug = generate_slug(title);
            if slug.is_empty() {
                return Err(CoreError::Validation(
                    "A slug cannot be derived from this title; provide one explicitly".into(),
                ));
            }
            Ok(slug)
        }
    }
}

/// Validate a page title (non-empty, <= 255 chars).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a page slug (non-empty, only lowercase alphanumeric + hyphens).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(())
}
