use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("insufficient data: {indicator} needs {required} prices, got {actual}")]
    InsufficientData {
        indicator: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("{indicator} produced a non-finite value")]
    NonFinite { indicator: &'static str },
}

impl IndicatorError {
    pub(crate) fn require(
        indicator: &'static str,
        required: usize,
        actual: usize,
    ) -> Result<(), IndicatorError> {
        if actual < required {
            return Err(IndicatorError::InsufficientData {
                indicator,
                required,
                actual,
            });
        }
        Ok(())
    }
}
