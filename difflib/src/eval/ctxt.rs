use std::collections::HashMap;

/// What to do when the natural logarithm is taken of a number that is not positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogDomain {
    /// Fail with [`NonPositiveLogarithm`](crate::error::kind::NonPositiveLogarithm).
    #[default]
    Error,

    /// Return whatever [`f64::ln`] returns (`NaN` for negative numbers, negative infinity for
    /// zero).
    Nan,
}

impl std::fmt::Display for LogDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogDomain::Error => write!(f, "error"),
            LogDomain::Nan => write!(f, "nan"),
        }
    }
}

/// A context to use when evaluating an expression, containing the values bound to its variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,

    /// How logarithms of non-positive numbers are handled.
    pub log_domain: LogDomain,
}

impl Ctxt {
    /// Creates a new context with no variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log domain policy of this context, returning the modified context.
    pub fn with_log_domain(mut self, log_domain: LogDomain) -> Self {
        self.log_domain = log_domain;
        self
    }

    /// Binds a value to a variable, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Returns the value bound to a variable.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns true if the given variable has a value.
    pub fn has_var(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Ctxt {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
            log_domain: LogDomain::default(),
        }
    }
}
