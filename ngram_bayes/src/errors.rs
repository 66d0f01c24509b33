//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = NgramBayesError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NgramBayesError {
    EmptyModel(EmptyModelError),
    UnknownClass(UnknownClassError),
    InvalidArgument(InvalidArgumentError),
}

impl NgramBayesError {
    pub(crate) const fn empty_model() -> Self {
        Self::EmptyModel(EmptyModelError)
    }

    pub(crate) fn unknown_class<S>(label: S) -> Self
    where
        S: Into<String>,
    {
        Self::UnknownClass(UnknownClassError {
            label: label.into(),
        })
    }

    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }
}

impl fmt::Display for NgramBayesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyModel(e) => fmt::Display::fmt(e, f),
            Self::UnknownClass(e) => fmt::Display::fmt(e, f),
            Self::InvalidArgument(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl Error for NgramBayesError {}

/// Error used when the classifier has not seen any training document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyModelError;

impl fmt::Display for EmptyModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EmptyModelError: no training documents")
    }
}

impl Error for EmptyModelError {}

/// Error used when a class label has never been trained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownClassError {
    /// The requested label.
    pub(crate) label: String,
}

impl UnknownClassError {
    /// Gets the label that was not found.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for UnknownClassError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UnknownClassError: {:?}", self.label)
    }
}

impl Error for UnknownClassError {}

/// Error used when the argument is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            "EmptyModelError: no training documents",
            NgramBayesError::empty_model().to_string()
        );
        assert_eq!(
            "UnknownClassError: \"neutro\"",
            NgramBayesError::unknown_class("neutro").to_string()
        );
        assert_eq!(
            "InvalidArgumentError: n_split: must be at least 1",
            NgramBayesError::invalid_argument("n_split", "must be at least 1").to_string()
        );
    }
}
