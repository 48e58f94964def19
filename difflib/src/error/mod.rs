pub mod kind;

use difflib_error::{Error as ReportError, ErrorKind};
use kind::{IndeterminateForm, NonPositiveLogarithm, UnboundVariable};
use std::{fmt, ops::Range};

/// An error that can occur while simplifying, differentiating, or evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Simplification encountered `0^0`.
    IndeterminateForm(IndeterminateForm),

    /// Evaluation encountered a variable with no value.
    UnboundVariable(UnboundVariable),

    /// Evaluation went outside the domain of a function.
    Domain(NonPositiveLogarithm),
}

impl Error {
    /// Creates an [`Error::UnboundVariable`] for the given variable name.
    pub fn unbound(name: impl Into<String>) -> Self {
        Self::UnboundVariable(UnboundVariable { name: name.into() })
    }

    /// Returns the kind of this error, which can build a user-facing report.
    pub fn kind(&self) -> &dyn ErrorKind {
        match self {
            Self::IndeterminateForm(kind) => kind,
            Self::UnboundVariable(kind) => kind,
            Self::Domain(kind) => kind,
        }
    }

    /// Attaches the span of the source code the failing expression was parsed from, producing an
    /// error that can be reported against that source.
    pub fn with_span(self, span: Range<usize>) -> ReportError {
        match self {
            Self::IndeterminateForm(kind) => ReportError::new(vec![span], kind),
            Self::UnboundVariable(kind) => ReportError::new(vec![span], kind),
            Self::Domain(kind) => ReportError::new(vec![span], kind),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndeterminateForm(_) => write!(f, "0^0 is not well-defined"),
            Self::UnboundVariable(UnboundVariable { name }) => {
                write!(f, "no binding was provided for variable `{}`", name)
            },
            Self::Domain(NonPositiveLogarithm { value }) => {
                write!(f, "cannot take the logarithm of {}", value)
            },
        }
    }
}

impl std::error::Error for Error {}

impl From<IndeterminateForm> for Error {
    fn from(kind: IndeterminateForm) -> Self {
        Self::IndeterminateForm(kind)
    }
}

impl From<UnboundVariable> for Error {
    fn from(kind: UnboundVariable) -> Self {
        Self::UnboundVariable(kind)
    }
}

impl From<NonPositiveLogarithm> for Error {
    fn from(kind: NonPositiveLogarithm) -> Self {
        Self::Domain(kind)
    }
}
