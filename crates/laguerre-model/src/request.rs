//! Polynomial requests and the large-computation advisory.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two indices of L_n^l a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    /// Degree `n`.
    N,
    /// Order `l`.
    L,
}

impl Parameter {
    pub const fn name(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::L => "l",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated request for L_n^l(x). Both indices are non-negative by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolynomialRequest {
    pub n: u32,
    pub l: u32,
}

impl PolynomialRequest {
    pub const fn new(n: u32, l: u32) -> Self {
        Self { n, l }
    }

    /// Markup prefix shown in front of a generated polynomial.
    pub fn title_markup(&self) -> String {
        format!("L_{{{}}}^{{{}}}(x) = ", self.n, self.l)
    }
}

impl fmt::Display for PolynomialRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L_{}^{}(x)", self.n, self.l)
    }
}

/// Advisory raised when an index exceeds the configured safety threshold.
///
/// This is not a failure: the caller must let the user confirm or cancel
/// before the evaluation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LargeComputationWarning {
    pub parameter: Parameter,
    pub value: u32,
    pub threshold: u32,
}

impl fmt::Display for LargeComputationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={} may take a long time to compute and render.\n\n\
             Values up to {} are recommended.\n\nContinue?",
            self.parameter, self.value, self.threshold
        )
    }
}
