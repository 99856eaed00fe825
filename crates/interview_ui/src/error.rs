use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Button configuration rejected at the primitive boundary.
///
/// Raised only while turning caller-supplied names into typed configuration. Once a
/// [`crate::ButtonConfig`] or [`crate::PassthroughAttributes`] exists, every lookup into the
/// style table succeeds and every attribute name is safe to write into a tag.
pub enum ConfigurationError {
    /// The variant name is not one of `default`, `secondary`, `destructive`, `ghost`.
    #[error("unknown button variant `{0}` (expected default, secondary, destructive or ghost)")]
    UnknownVariant(String),
    /// The size name is not one of `sm`, `md`, `lg`, `icon`.
    #[error("unknown button size `{0}` (expected sm, md, lg or icon)")]
    UnknownSize(String),
    /// A passthrough attribute name is empty or contains whitespace, a control character, or one
    /// of `"`, `'`, `>`, `/`, `=`.
    #[error("invalid attribute name `{0}`")]
    InvalidAttributeName(String),
}
