use thiserror::Error;

/// Errors produced while loading a theme configuration file.
#[derive(Debug, Error)]
pub enum ThemeConfigError {
    /// The configuration file could not be read.
    #[error("failed to read theme config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML.
    #[error("failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color string could not be parsed.
    #[error("invalid color value: {0}")]
    InvalidColor(String),
}
