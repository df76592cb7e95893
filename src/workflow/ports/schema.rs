//! Validation schema port.
//!
//! A schema declares the editable fields of one resource and converts raw
//! form values into the resource's typed fields, or a per-field error map.

use crate::workflow::domain::{FieldErrors, FieldSpec, FormValues};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for schema validation.
pub type SchemaResult<T> = Result<T, FieldErrors>;

/// Declarative shape and constraints for one resource's editable fields.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect errors for every field before returning (not fail-fast)
/// - Be stateless apart from their [`ValidationConfig`]
pub trait FormSchema: Send + Sync {
    /// Typed record produced by a successful validation.
    type Output;

    /// Returns the editable fields in display order.
    fn fields(&self) -> &[FieldSpec];

    /// Returns the draft used in creation mode.
    fn defaults(&self) -> FormValues;

    /// Validates a candidate draft.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldErrors`] map with one human-readable message per
    /// failing field.
    fn validate(&self, values: &FormValues) -> SchemaResult<Self::Output>;

    /// Renders typed fields back into draft values, for edit mode.
    fn to_values(&self, output: &Self::Output) -> FormValues;

    /// Looks up a field descriptor by name.
    fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields().iter().find(|spec| spec.name() == name)
    }
}

/// Tunable limits applied by every schema.
///
/// # Examples
///
/// ```
/// use backoffice::workflow::ports::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert!(config.trim_text);
///
/// let strict = ValidationConfig::strict();
/// assert_eq!(strict.max_text_length, 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length of any text field in characters.
    pub max_text_length: usize,
    /// Whether surrounding whitespace is stripped before validation.
    pub trim_text: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_text_length: 10_000,
            trim_text: true,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration with tight text limits.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_text_length: 255,
            trim_text: true,
        }
    }

    /// Creates a configuration without a length limit.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            max_text_length: usize::MAX,
            trim_text: true,
        }
    }

    /// Parses a configuration from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON
    /// or has mistyped keys.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document could not be parsed.
    #[error("invalid validation config: {0}")]
    Parse(#[from] serde_json::Error),
}
