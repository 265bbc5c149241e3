//! Raw text to [`PolynomialRequest`].

use laguerre_model::{
    LargeComputationWarning, Parameter, PolynomialRequest, StudioError, ValidationConfig,
};

/// Outcome of validating a pair of raw indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validated {
    /// Safe to evaluate right away.
    Ready(PolynomialRequest),
    /// An index is above the safety threshold; the user has to confirm.
    NeedsConfirmation {
        request: PolynomialRequest,
        warning: LargeComputationWarning,
    },
}

impl Validated {
    pub fn request(&self) -> PolynomialRequest {
        match self {
            Self::Ready(request) | Self::NeedsConfirmation { request, .. } => *request,
        }
    }
}

/// Parse one index as a signed integer, with no range checks.
pub fn parse_integer(parameter: Parameter, raw: &str) -> Result<i64, StudioError> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| StudioError::InvalidInput {
        parameter,
        value: trimmed.to_string(),
    })
}

/// Parse one index.
///
/// The text is parsed as a signed 64-bit integer first so that `-1` is
/// reported as negative rather than as garbage.
pub fn parse_index(parameter: Parameter, raw: &str) -> Result<u32, StudioError> {
    let value = parse_integer(parameter, raw)?;
    if value < 0 {
        return Err(StudioError::NegativeValue { parameter, value });
    }
    u32::try_from(value).map_err(|_| StudioError::InvalidInput {
        parameter,
        value: raw.trim().to_string(),
    })
}

/// Validate both indices and apply the large-computation gate.
///
/// `n` is checked before `l`, both for parse errors and for the warning.
pub fn validate(
    n_text: &str,
    l_text: &str,
    config: &ValidationConfig,
) -> Result<Validated, StudioError> {
    let n = parse_index(Parameter::N, n_text)?;
    let l = parse_index(Parameter::L, l_text)?;
    let request = PolynomialRequest::new(n, l);

    let threshold = config.max_safe_value;
    let over = [(Parameter::N, n), (Parameter::L, l)]
        .into_iter()
        .find(|&(_, value)| value > threshold);

    Ok(match over {
        Some((parameter, value)) => Validated::NeedsConfirmation {
            request,
            warning: LargeComputationWarning {
                parameter,
                value,
                threshold,
            },
        },
        None => Validated::Ready(request),
    })
}
