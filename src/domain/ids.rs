//! Model identifier newtype
//!
//! A model identifier names one exportable model variant, usually an
//! architecture joined to a training-data tag (`ViT-B-32__openai`). The runner
//! never looks inside it; it is handed to the exporter verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Model identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use export_runner::domain::ids::ModelId;
/// use std::str::FromStr;
///
/// let id = ModelId::from_str("ViT-SO400M-14-SigLIP2__webli").unwrap();
/// assert_eq!(id.as_str(), "ViT-SO400M-14-SigLIP2__webli");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelId(String);

impl ModelId {
    /// Creates a new ModelId from a string
    ///
    /// Only blank identifiers are rejected; the value is otherwise kept as-is.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Model ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the model ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ModelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ModelId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModelId> for String {
    fn from(id: ModelId) -> Self {
        id.0
    }
}

impl AsRef<str> for ModelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
