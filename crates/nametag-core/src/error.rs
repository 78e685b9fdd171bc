pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing `{field}`: no name tag without a {field}")]
    MissingField { field: &'static str },

    #[error("default_color has to be a 6-digit hexadecimal value (got `{value}`)")]
    MalformedColor { value: String },

    #[error("fingerprint has to be a hexadecimal value (got `{value}`)")]
    MalformedFingerprint { value: String },

    #[error("gradient has to be either 'true' or 'false' (got `{value}`)")]
    InvalidGradientFlag { value: String },

    #[error("invalid color mapping JSON: {0}")]
    ColorMap(#[from] serde_json::Error),

    #[error("invalid generator config: {message}")]
    Config { message: String },
}

impl Error {
    /// Errors caused by a malformed client request, as opposed to a broken setup.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::MalformedColor { .. }
                | Self::MalformedFingerprint { .. }
                | Self::InvalidGradientFlag { .. }
        )
    }
}
