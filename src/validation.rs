//! List Form Validation
//!
//! Field rules for the list initialization form.

use crate::models::ListInit;

/// Minimum list name length in characters
pub const MIN_NAME_LEN: usize = 5;
/// Minimum number of selected genres
pub const MIN_TAGS: usize = 2;

/// Field-level error messages; empty means the form may submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub tags: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.tags.is_none()
    }
}

pub fn validate_name(name: &str) -> Option<String> {
    if name.is_empty() {
        Some("List Name is required".to_string())
    } else if name.chars().count() < MIN_NAME_LEN {
        Some(format!(
            "List Name must be at least {} characters long",
            MIN_NAME_LEN
        ))
    } else {
        None
    }
}

pub fn validate_tags(tags: &[String]) -> Option<String> {
    if tags.len() < MIN_TAGS {
        Some("Select at least 2 genres".to_string())
    } else {
        None
    }
}

/// Validate and serialize the form fields into a list record.
/// Tags come back comma-joined; the registry mints the id later.
pub fn finalize(name: &str, tags: &[String]) -> Result<ListInit, FormErrors> {
    let errors = FormErrors {
        name: validate_name(name),
        tags: validate_tags(tags),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ListInit {
        name: name.to_string(),
        tags: tags.join(","),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_blocked() {
        assert!(validate_name("Abcd").is_some());
        assert!(validate_name("Abcde").is_none());
    }

    #[test]
    fn test_empty_name_required() {
        assert_eq!(
            validate_name("").as_deref(),
            Some("List Name is required")
        );
    }

    #[test]
    fn test_too_few_tags_blocked() {
        assert!(validate_tags(&[]).is_some());
        assert!(validate_tags(&["Action".to_string()]).is_some());
        assert!(validate_tags(&["Action".to_string(), "Thriller".to_string()]).is_none());
    }

    #[test]
    fn test_finalize_joins_tags() {
        let tags = vec!["Action".to_string(), "Thriller".to_string()];
        let list = finalize("Action Favorites", &tags).expect("should validate");

        assert_eq!(list.name, "Action Favorites");
        assert_eq!(list.tags, "Action,Thriller");
    }

    #[test]
    fn test_finalize_reports_both_errors() {
        let errs = finalize("Abc", &["Action".to_string()]).unwrap_err();

        assert!(errs.name.is_some());
        assert!(errs.tags.is_some());
    }
}
