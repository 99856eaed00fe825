//! Button tokens, style resolution, passthrough attributes, and shell primitives.

use std::fmt;
use std::str::FromStr;

use leptos::ev::MouseEvent;
use leptos::*;
use serde::Deserialize;

use crate::ConfigurationError;

mod attributes;
mod content;
mod controls;
mod shell;
mod style;

pub use attributes::{AttrValue, PassthroughAttributes, BOOLEAN_ATTRIBUTES, STYLING_KEYS};
pub use content::Content;
pub use controls::{Button, ButtonMarkup, DynamicButton, BUTTON_DISPLAY_NAME};
pub use shell::{AppChrome, CHROME_CLASSES, CONTENT_CLASSES};
pub use style::{
    resolve_class, ButtonConfig, SizeClasses, StyleTable, VariantClasses, STYLE_TABLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
/// Named visual style families for the shared button.
pub enum ButtonVariant {
    /// Primary filled button.
    Default,
    /// Muted secondary button.
    Secondary,
    /// Destructive/danger button.
    Destructive,
    /// Transparent button that only tints on hover.
    Ghost,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Secondary, Self::Destructive, Self::Ghost];

    /// Stable lowercase name used in configuration and `data-ui-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Ghost => "ghost",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = ConfigurationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "default" => Ok(Self::Default),
            "secondary" => Ok(Self::Secondary),
            "destructive" => Ok(Self::Destructive),
            "ghost" => Ok(Self::Ghost),
            other => Err(ConfigurationError::UnknownVariant(other.to_string())),
        }
    }
}

impl TryFrom<String> for ButtonVariant {
    type Error = ConfigurationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
/// Named dimensional style families for the shared button.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    /// Every size, in declaration order.
    pub const ALL: [Self; 4] = [Self::Sm, Self::Md, Self::Lg, Self::Icon];

    /// Stable lowercase name used in configuration and `data-ui-size`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = ConfigurationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            "icon" => Ok(Self::Icon),
            other => Err(ConfigurationError::UnknownSize(other.to_string())),
        }
    }
}

impl TryFrom<String> for ButtonSize {
    type Error = ConfigurationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
