#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("template is not well-formed SVG: {message}")]
    MalformedTemplate { message: String },

    #[error("template placeholder error: {message}")]
    TemplateSyntax { message: String },

    #[error("template is missing required node `{id}`")]
    MissingNode { id: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(value: roxmltree::Error) -> Self {
        Self::MalformedTemplate {
            message: value.to_string(),
        }
    }
}

impl From<minijinja::Error> for Error {
    fn from(value: minijinja::Error) -> Self {
        Self::TemplateSyntax {
            message: value.to_string(),
        }
    }
}
