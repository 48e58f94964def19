use difflib::Error as ComputeError;
use difflib_parser::parser::error::Error as ParseError;
use std::{io, ops::Range};

/// Utility enum to package errors that can occur while parsing / computing.
#[derive(Debug)]
pub enum Error {
    /// Error that occurred while parsing.
    Parse(ParseError),

    /// Error that occurred while differentiating, simplifying, or evaluating the expression parsed
    /// from the given region of the input.
    Compute {
        error: ComputeError,
        span: Range<usize>,
    },
}

impl Error {
    /// Creates an [`Error::Compute`] pointing at the given region of the input.
    pub fn compute(error: ComputeError, span: Range<usize>) -> Self {
        Self::Compute { error, span }
    }

    /// Report this error to stderr.
    pub fn report_to_stderr(&self, input: &str) -> io::Result<()> {
        match self {
            Self::Parse(err) => err.report_to_stderr("input", input),
            Self::Compute { error, span } => error
                .clone()
                .with_span(span.clone())
                .report_to_stderr("input", input),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}
