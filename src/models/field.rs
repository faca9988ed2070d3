//! Form field identities and validation errors.

use std::collections::BTreeMap;
use std::fmt;

/// A field of the upload form.
///
/// The declaration order is the render order and the multipart part order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Title,
    Category,
    File,
}

impl FieldName {
    /// All fields, in render order.
    pub const ALL: [FieldName; 3] = [FieldName::Title, FieldName::Category, FieldName::File];

    /// Name used for the label, the input `name` attribute and the multipart part.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::File => "file",
        }
    }

    /// Message shown under the input when the field is invalid.
    pub fn error_message(&self) -> String {
        match self {
            Self::File => "Please upload a file".to_string(),
            other => format!("Please enter a {}", other.as_str()),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty or no file was selected.
    Required,
}

/// Validation result for the whole form. Only failing fields are present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn has(&self, field: FieldName) -> bool {
        self.get(field).is_some()
    }

    /// Records `error` for `field`, or clears the field when `None`.
    pub fn set(&mut self, field: FieldName, error: Option<FieldError>) {
        match error {
            Some(error) => {
                self.0.insert(field, error);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields, in render order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_names() {
        let names: Vec<_> = FieldName::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["title", "category", "file"]);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldName::Title.error_message(), "Please enter a title");
        assert_eq!(FieldName::Category.error_message(), "Please enter a category");
        assert_eq!(FieldName::File.error_message(), "Please upload a file");
    }

    #[test]
    fn test_set_and_clear() {
        let mut errors = FieldErrors::new();
        errors.set(FieldName::File, Some(FieldError::Required));
        errors.set(FieldName::Title, Some(FieldError::Required));
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![FieldName::Title, FieldName::File]
        );

        errors.set(FieldName::Title, None);
        assert!(!errors.has(FieldName::Title));
        assert_eq!(errors.get(FieldName::File), Some(FieldError::Required));
    }
}
