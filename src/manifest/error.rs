/// A manifest attribute is missing or does not parse as its declared type.
///
/// `unique` holds the mod's unique id when it was already read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManifestAttributeError {
    #[error("Missing {attribute} in {}", describe(.unique))]
    Missing {
        attribute: &'static str,
        unique: Option<String>,
    },

    #[error("Empty {attribute} in {}", describe(.unique))]
    Empty {
        attribute: &'static str,
        unique: Option<String>,
    },

    #[error("Invalid {attribute} {value} in {}", describe(.unique))]
    InvalidVersion {
        attribute: &'static str,
        value: String,
        unique: Option<String>,
    },

    #[error("Invalid {attribute} {value} (must be true or false) in {}", describe(.unique))]
    InvalidBool {
        attribute: &'static str,
        value: String,
        unique: Option<String>,
    },
}

impl ManifestAttributeError {
    /// Name of the offending attribute.
    pub fn attribute(&self) -> &'static str {
        match self {
            ManifestAttributeError::Missing { attribute, .. }
            | ManifestAttributeError::Empty { attribute, .. }
            | ManifestAttributeError::InvalidVersion { attribute, .. }
            | ManifestAttributeError::InvalidBool { attribute, .. } => attribute,
        }
    }

    pub fn unique(&self) -> Option<&str> {
        match self {
            ManifestAttributeError::Missing { unique, .. }
            | ManifestAttributeError::Empty { unique, .. }
            | ManifestAttributeError::InvalidVersion { unique, .. }
            | ManifestAttributeError::InvalidBool { unique, .. } => unique.as_deref(),
        }
    }
}

fn describe(unique: &Option<String>) -> String {
    match unique {
        Some(unique) => format!("Mod Identity for {}", unique),
        None => "Mod Identity".to_string(),
    }
}

/// Why a manifest document could not be turned into a [`ModIdentity`](super::ModIdentity).
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Manifest is not well-formed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error(transparent)]
    Attribute(#[from] ManifestAttributeError),
}
