//! Required-field checks for raw event rows.

use std::fmt;

/// Logical fields of an event row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DateTime,
    Title,
    Link,
    Region,
    SubRegion,
    Address,
    Tags,
}

impl Field {
    /// Human-readable field name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DateTime => "Date",
            Self::Title => "Title",
            Self::Link => "URL",
            Self::Region => "Country",
            Self::SubRegion => "State",
            Self::Address => "Address",
            Self::Tags => "Games",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required cell is absent or blank. `column` is 1-based.
    MissingField { field: Field, column: usize },
    /// The tag cell held only separators.
    NoTags { column: usize },
    /// Free-form requirement failure.
    Required(String),
}

impl ValidationError {
    pub fn missing(field: Field, column: usize) -> Self {
        Self::MissingField { field, column }
    }

    /// The field this error refers to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::MissingField { field, .. } => Some(*field),
            Self::NoTags { .. } => Some(Field::Tags),
            Self::Required(_) => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField { field, column } => {
                write!(f, "{} (column {}) cannot be empty", field, column)
            }
            ValidationError::NoTags { column } => {
                write!(f, "Games (column {}) lists no games", column)
            }
            ValidationError::Required(reason) => f.write_str(reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Values that can be absent: empty strings, empty collections, `None`, `false`.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        self.as_str().is_truthy()
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Pass `value` through, or fail with `error` when it is falsy.
pub fn require<T: Truthy>(value: T, error: ValidationError) -> Result<T, ValidationError> {
    if value.is_truthy() {
        Ok(value)
    } else {
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_passes_values_through() {
        assert_eq!(require("hello", ValidationError::Required("x".into())), Ok("hello"));
        assert_eq!(require(true, ValidationError::Required("x".into())), Ok(true));
        assert_eq!(
            require(Some("a".to_string()), ValidationError::Required("x".into())),
            Ok(Some("a".to_string()))
        );
        assert!(require(vec![1], ValidationError::Required("x".into())).is_ok());
    }

    #[test]
    fn test_require_rejects_falsy() {
        let err = ValidationError::missing(Field::Address, 5);
        assert_eq!(require("", err.clone()), Err(err.clone()));
        assert_eq!(require("   ", err.clone()), Err(err.clone()));
        assert_eq!(require(false, err.clone()), Err(err.clone()));
        assert_eq!(require(None::<&str>, err.clone()), Err(err.clone()));
        assert_eq!(require(Vec::<u8>::new(), err.clone()), Err(err.clone()));
        assert_eq!(require(&[] as &[u8], err.clone()), Err(err));
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::missing(Field::Address, 5);
        assert_eq!(err.to_string(), "Address (column 5) cannot be empty");
        assert_eq!(err.field(), Some(Field::Address));

        let err = ValidationError::NoTags { column: 6 };
        assert_eq!(err.field(), Some(Field::Tags));

        let err = ValidationError::Required("URL cannot be empty".to_string());
        assert_eq!(err.to_string(), "URL cannot be empty");
        assert_eq!(err.field(), None);
    }
}
