use std::collections::BTreeMap;

/// Inline form errors keyed by the backend field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn required(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "This field is required");
        }
    }

    pub fn slug(&mut self, field: &'static str, value: &str) {
        self.required(field, value);
        if !value.is_empty() && !is_slug(value) {
            self.add(
                field,
                "Use lowercase letters, digits and dashes only",
            );
        }
    }

    pub fn email(&mut self, field: &'static str, value: &str) {
        self.required(field, value);
        let valid = value
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty());
        if !value.is_empty() && !valid {
            self.add(field, "Enter a valid email address");
        }
    }

    pub fn range(&mut self, field: &'static str, value: i64, min: i64, max: i64) {
        if !(min..=max).contains(&value) {
            self.add(field, format!("Must be between {min} and {max}"));
        }
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Client-side checks run before a form submits.
///
/// These only catch obvious mistakes; the backend still validates everything.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

pub fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Turns a display name into a slug suggestion, e.g. `"Red Shoes!"` -> `"red-shoes"`.
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs() {
        assert!(is_slug("summer-sale-2024"));
        assert!(!is_slug("Summer"));
        assert!(!is_slug("-lead"));
        assert!(!is_slug("with space"));
        assert_eq!(slugify("Red Shoes!  (new)"), "red-shoes-new");
    }

    #[test]
    fn first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.slug("slug", "");
        assert_eq!(errors.get("slug"), Some("This field is required"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["slug"]);
    }

    #[test]
    fn emails() {
        let mut errors = FieldErrors::new();
        errors.email("owner_email", "vendor@example.com");
        errors.email("support_email", "admin@localhost");
        assert!(errors.is_empty());
        errors.email("support_email", "admin@");
        assert!(errors.get("support_email").is_some());
        errors.email("owner_email", "vendor");
        assert_eq!(
            errors.get("owner_email"),
            Some("Enter a valid email address")
        );
    }
}
