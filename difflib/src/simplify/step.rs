use std::fmt;

/// A rewrite applied by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a^0 = 1`
    PowerZero,

    /// `0^a = 0`
    PowerZeroLeft,

    /// `a^1 = a`
    PowerOne,

    /// `log(c^b) = b*log(c)`, where `c` is a positive literal
    LogPower,

    /// `log(c*a) = log(c)+log(a)`, where `c` is a positive literal
    LogProduct,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match self {
            Self::AddZero => "a + 0 = a",
            Self::MultiplyZero => "a * 0 = 0",
            Self::MultiplyOne => "a * 1 = a",
            Self::PowerZero => "a^0 = 1",
            Self::PowerZeroLeft => "0^a = 0",
            Self::PowerOne => "a^1 = a",
            Self::LogPower => "log(a^b) = b * log(a)",
            Self::LogProduct => "log(a * b) = log(a) + log(b)",
        };
        write!(f, "{}", rule)
    }
}
