use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tiledex operations
#[derive(Error, Diagnostic, Debug)]
pub enum TiledexError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tiledex::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tiledex::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(tiledex::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tiledex::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Label error: {message}")]
    #[diagnostic(code(tiledex::label))]
    Label { message: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(tiledex::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl TiledexError {
    pub(crate) fn label(message: impl Into<String>) -> Self {
        TiledexError::Label {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TiledexError>;
