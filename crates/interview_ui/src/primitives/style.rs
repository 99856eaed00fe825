use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Class entries for every [`ButtonVariant`]. Each variant is a named field, so a table that
/// misses one does not compile.
pub struct VariantClasses {
    /// Classes for [`ButtonVariant::Default`].
    pub default: &'static str,
    /// Classes for [`ButtonVariant::Secondary`].
    pub secondary: &'static str,
    /// Classes for [`ButtonVariant::Destructive`].
    pub destructive: &'static str,
    /// Classes for [`ButtonVariant::Ghost`].
    pub ghost: &'static str,
}

impl VariantClasses {
    /// Returns the class entry for `variant`.
    pub fn get(&self, variant: ButtonVariant) -> &'static str {
        match variant {
            ButtonVariant::Default => self.default,
            ButtonVariant::Secondary => self.secondary,
            ButtonVariant::Destructive => self.destructive,
            ButtonVariant::Ghost => self.ghost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Class entries for every [`ButtonSize`].
pub struct SizeClasses {
    /// Classes for [`ButtonSize::Sm`].
    pub sm: &'static str,
    /// Classes for [`ButtonSize::Md`].
    pub md: &'static str,
    /// Classes for [`ButtonSize::Lg`].
    pub lg: &'static str,
    /// Classes for [`ButtonSize::Icon`].
    pub icon: &'static str,
}

impl SizeClasses {
    /// Returns the class entry for `size`.
    pub fn get(&self, size: ButtonSize) -> &'static str {
        match size {
            ButtonSize::Sm => self.sm,
            ButtonSize::Md => self.md,
            ButtonSize::Lg => self.lg,
            ButtonSize::Icon => self.icon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Immutable mapping from button configuration to utility classes.
pub struct StyleTable {
    /// Shared layout, typography, focus-ring, and disabled-state rules.
    pub base: &'static str,
    /// Per-variant color rules.
    pub variants: VariantClasses,
    /// Per-size dimension rules.
    pub sizes: SizeClasses,
}

/// Process-wide button style table.
pub static STYLE_TABLE: StyleTable = StyleTable {
    base: "inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm \
           font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 \
           focus-visible:ring-ring disabled:opacity-50 disabled:pointer-events-none",
    variants: VariantClasses {
        default: "bg-primary text-primary-foreground hover:bg-primary/90",
        secondary: "bg-secondary text-secondary-foreground hover:bg-secondary/80",
        destructive: "bg-destructive text-destructive-foreground hover:bg-destructive/90",
        ghost: "bg-transparent hover:bg-accent",
    },
    sizes: SizeClasses {
        sm: "h-8 px-3",
        md: "h-10 px-4",
        lg: "h-12 px-6",
        icon: "h-10 w-10 p-0",
    },
};

impl StyleTable {
    /// Builds the class string for `config`: base, variant, size, then caller classes.
    ///
    /// Caller classes come last so they win over earlier rules of equal specificity. Nothing is
    /// reordered or deduplicated; blank caller tokens are skipped.
    pub fn resolve(&self, config: &ButtonConfig) -> String {
        let mut classes = ClassList::default();
        classes.push(self.base);
        classes.push(self.variants.get(config.variant));
        classes.push(self.sizes.get(config.size));
        for extra in &config.extra_classes {
            classes.push(extra);
        }
        classes.finish()
    }
}

/// Resolves `config` against [`STYLE_TABLE`].
pub fn resolve_class(config: &ButtonConfig) -> String {
    STYLE_TABLE.resolve(config)
}

#[derive(Debug, Default)]
struct ClassList(String);

impl ClassList {
    fn push(&mut self, classes: &str) {
        let classes = classes.trim();
        if classes.is_empty() {
            return;
        }
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(classes);
    }

    fn finish(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
/// Styling configuration for one [`crate::Button`] render.
///
/// Defaults to [`ButtonVariant::Default`], [`ButtonSize::Md`], and no extra classes.
pub struct ButtonConfig {
    /// Visual style family.
    pub variant: ButtonVariant,
    /// Dimensional style family.
    pub size: ButtonSize,
    /// Caller classes appended after the table entries, in order.
    pub extra_classes: Vec<String>,
}

impl ButtonConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the variant.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the size.
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Appends one caller class token (or a space-separated group).
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.extra_classes.push(class.into());
        self
    }

    /// Validates raw names at the configuration boundary. Omitted names fall back to the
    /// defaults; unknown names are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when `variant` or `size` is supplied but not recognized.
    pub fn from_raw<I, S>(
        variant: Option<&str>,
        size: Option<&str>,
        extra_classes: I,
    ) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variant = variant
            .map(str::parse::<ButtonVariant>)
            .transpose()?
            .unwrap_or_default();
        let size = size
            .map(str::parse::<ButtonSize>)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            variant,
            size,
            extra_classes: extra_classes.into_iter().map(Into::into).collect(),
        })
    }

    /// Resolved class string for this configuration.
    pub fn class_name(&self) -> String {
        resolve_class(self)
    }
}
