/// Convenience result type used across themeverter.
pub type ThemeResult<T> = Result<T, ThemeverterError>;

/// Top-level error taxonomy used by the conversion APIs.
#[derive(thiserror::Error, Debug)]
pub enum ThemeverterError {
    /// A color string or component could not be interpreted as an sRGB color.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A token-color scope expected by an adapter is not present in the theme.
    #[error("missing scope: {0}")]
    MissingScope(String),

    /// The requested source format identifier is unknown.
    #[error("unsupported source format: {0}")]
    UnsupportedSource(String),

    /// The requested target format identifier is unknown.
    #[error("unsupported target format: {0}")]
    UnsupportedTarget(String),

    /// A structurally required value could not be resolved.
    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    /// The source document does not have the shape its format requires.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ThemeverterError {
    /// Build a [`ThemeverterError::InvalidColor`] value.
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    /// Build a [`ThemeverterError::MissingScope`] value.
    pub fn missing_scope(scope: impl Into<String>) -> Self {
        Self::MissingScope(scope.into())
    }

    /// Build a [`ThemeverterError::UnsupportedSource`] value.
    pub fn unsupported_source(id: impl Into<String>) -> Self {
        Self::UnsupportedSource(id.into())
    }

    /// Build a [`ThemeverterError::UnsupportedTarget`] value.
    pub fn unsupported_target(id: impl Into<String>) -> Self {
        Self::UnsupportedTarget(id.into())
    }

    /// Build a [`ThemeverterError::MissingRequiredField`] value.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingRequiredField(field.into())
    }

    /// Build a [`ThemeverterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for errors an adapter may recover from by leaving a field absent.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MissingScope(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
