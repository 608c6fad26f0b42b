use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("argument `{argument}` must be {expected}")]
    InvalidArgumentType {
        argument: String,
        expected: &'static str,
    },

    #[error("invalid value for `{argument}`: {reason}")]
    InvalidArgumentValue { argument: String, reason: String },

    #[error("invalid table shape: {0}")]
    DataShape(String),

    #[error("{axis} {index} has zero range (max == min) and cannot be rescaled")]
    DegenerateScaling { axis: &'static str, index: usize },

    #[error("problems loading data set `{dataset}`: {reason}")]
    DataLoad { dataset: String, reason: String },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    pub(crate) fn invalid_value(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgumentValue {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_type(argument: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidArgumentType {
            argument: argument.into(),
            expected,
        }
    }
}
