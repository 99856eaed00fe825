//! Site metadata loaded from `site.manifest.toml`.

use leptos::logging;
use serde::Deserialize;
use thiserror::Error;

const MANIFEST_SOURCE: &str = include_str!("../site.manifest.toml");
const SUPPORTED_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Document metadata consumed by the rendering environment (title, description, language).
pub struct SiteManifest {
    /// Manifest format version.
    pub schema_version: u32,
    /// Document title.
    pub title: String,
    /// `<meta name="description">` content.
    pub description: String,
    /// `<html lang>` value.
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for SiteManifest {
    fn default() -> Self {
        Self {
            schema_version: SUPPORTED_SCHEMA_VERSION,
            title: "InterviewAI".to_string(),
            description: "AI-powered pre-selection interviews".to_string(),
            lang: default_lang(),
        }
    }
}

#[derive(Debug, Error)]
/// Errors raised while reading the site manifest.
pub enum ManifestError {
    /// The manifest is not valid TOML or misses required keys.
    #[error("invalid site manifest: {0}")]
    Parse(#[from] toml::de::Error),
    /// The manifest declares a format this build does not understand.
    #[error("unsupported site manifest schema_version {0}")]
    UnsupportedSchema(u32),
    /// A required text field is empty.
    #[error("site manifest field `{0}` must not be empty")]
    EmptyField(&'static str),
}

impl SiteManifest {
    /// Parses and validates a manifest document.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] for malformed TOML, an unknown `schema_version`, or an empty
    /// `title`/`description`.
    pub fn parse(raw: &str) -> Result<Self, ManifestError> {
        let manifest: Self = toml::from_str(raw)?;
        if manifest.schema_version != SUPPORTED_SCHEMA_VERSION {
            return Err(ManifestError::UnsupportedSchema(manifest.schema_version));
        }
        if manifest.title.trim().is_empty() {
            return Err(ManifestError::EmptyField("title"));
        }
        if manifest.description.trim().is_empty() {
            return Err(ManifestError::EmptyField("description"));
        }
        Ok(manifest)
    }

    /// Loads the manifest bundled with the crate, falling back to built-in metadata.
    pub fn load() -> Self {
        Self::parse(MANIFEST_SOURCE).unwrap_or_else(|err| {
            logging::warn!("site manifest load failed, using defaults: {err}");
            Self::default()
        })
    }
}
