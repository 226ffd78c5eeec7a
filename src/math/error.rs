// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error(
        "Cannot run {algorithm}: '{field}' is not assigned or empty. Please assign a valid value to '{field}' first."
    )]
    InvalidArgument {
        algorithm: &'static str,
        field: &'static str,
    },

    #[error("'{field}' must be {bound}, but '{field}' is {value}.")]
    OutOfRange {
        field: &'static str,
        bound: String,
        value: String,
    },
}

impl MathError {
    pub fn invalid_argument(algorithm: &'static str, field: &'static str) -> Self {
        MathError::InvalidArgument { algorithm, field }
    }

    pub fn out_of_range(
        field: &'static str,
        bound: impl Into<String>,
        value: impl std::fmt::Display,
    ) -> Self {
        MathError::OutOfRange {
            field,
            bound: bound.into(),
            value: value.to_string(),
        }
    }
}

pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_field_bound_and_value() {
        let err = MathError::out_of_range("room_count", "equal or greater than 5", 3);
        let message = err.to_string();
        assert!(message.contains("room_count"));
        assert!(message.contains("equal or greater than 5"));
        assert!(message.contains('3'));
    }

    #[test]
    fn test_invalid_argument_message_names_field() {
        let err = MathError::invalid_argument("Triangulation", "points");
        assert!(err.to_string().contains("'points'"));
        assert!(err.to_string().contains("Triangulation"));
    }
}
