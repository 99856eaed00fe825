//! Shared UI primitive library for the InterviewAI web shell.
//!
//! The crate owns the styled [`Button`] primitive, the immutable [`STYLE_TABLE`] that maps
//! button variants and sizes onto utility classes, the [`AppChrome`] container every page renders
//! inside, and the [`Content`] type used to pass nested composition between components.
//! Pages should compose these primitives instead of assembling class strings by hand.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod error;
mod primitives;

pub use error::ConfigurationError;
pub use primitives::{
    resolve_class, AppChrome, AttrValue, Button, ButtonConfig, ButtonMarkup, ButtonSize,
    ButtonVariant, Content, DynamicButton, PassthroughAttributes, SizeClasses, StyleTable,
    VariantClasses, BOOLEAN_ATTRIBUTES, BUTTON_DISPLAY_NAME, CHROME_CLASSES, CONTENT_CLASSES,
    STYLE_TABLE, STYLING_KEYS,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppChrome, AttrValue, Button, ButtonConfig, ButtonSize, ButtonVariant, ConfigurationError,
        Content, DynamicButton, PassthroughAttributes,
    };
}
