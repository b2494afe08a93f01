use miette::Diagnostic;
use thiserror::Error;

/// Main error type for colorcraft operations
#[derive(Error, Diagnostic, Debug)]
pub enum CraftError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(colorcraft::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid hex colour: {input:?}")]
    #[diagnostic(
        code(colorcraft::format),
        help("Use #RRGGBB with exactly six hex digits")
    )]
    InvalidFormat { input: String },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(colorcraft::argument))]
    InvalidArgument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(colorcraft::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(colorcraft::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl CraftError {
    /// Shorthand for an `InvalidArgument` without help text.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            help: None,
        }
    }

    /// Shorthand for an `InvalidArgument` with help text.
    pub fn invalid_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            help: Some(help.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CraftError>;
