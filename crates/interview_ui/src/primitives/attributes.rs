use std::collections::BTreeMap;

use super::*;

/// Passthrough keys consumed by class resolution instead of being forwarded.
pub const STYLING_KEYS: [&str; 2] = ["class", "className"];

/// HTML boolean attributes valid on `<button>`: present when true, absent when false.
pub const BOOLEAN_ATTRIBUTES: [&str; 5] =
    ["autofocus", "disabled", "formnovalidate", "hidden", "inert"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
/// Value of a native control attribute.
pub enum AttrValue {
    /// Boolean value. Rendered as presence for HTML boolean attributes such as `disabled`, and as
    /// `"true"`/`"false"` for everything else (`aria-pressed`, `data-*`).
    Flag(bool),
    /// Text attribute such as `type` or `aria-label`.
    Text(String),
}

impl AttrValue {
    /// Converts into the Leptos attribute representation for the attribute called `name`.
    pub fn into_attribute(self, name: &str) -> Attribute {
        match self {
            Self::Flag(value) if BOOLEAN_ATTRIBUTES.contains(&name) => Attribute::Bool(value),
            Self::Flag(value) => Attribute::String(bool_token(value).into()),
            Self::Text(value) => Attribute::String(value.into()),
        }
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|ch| {
            ch.is_whitespace() || ch.is_control() || matches!(ch, '"' | '\'' | '>' | '/' | '=')
        })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, AttrValue>")]
/// Native attributes forwarded verbatim to the rendered control.
///
/// Every name is checked on the way in, so nothing stored here can break out of the tag.
pub struct PassthroughAttributes(BTreeMap<String, AttrValue>);

impl PassthroughAttributes {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects `(name, value)` pairs, rejecting the first invalid name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidAttributeName`] for a name outside the HTML
    /// attribute-name grammar.
    pub fn try_from_iter<I, K, V>(pairs: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        let mut attrs = Self::new();
        for (name, value) in pairs {
            attrs.insert(name, value)?;
        }
        Ok(attrs)
    }

    /// Adds or replaces `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidAttributeName`] for an invalid name.
    pub fn with(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<Self, ConfigurationError> {
        self.insert(name, value)?;
        Ok(self)
    }

    /// Adds or replaces `name`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidAttributeName`] for an invalid name; the set is left
    /// unchanged.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<Option<AttrValue>, ConfigurationError> {
        let name = name.into();
        if !is_valid_attribute_name(&name) {
            return Err(ConfigurationError::InvalidAttributeName(name));
        }
        Ok(self.0.insert(name, value.into()))
    }

    /// Looks up an attribute by exact name.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no attributes were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Splits styling keys from the rest. Returns the class tokens carried by `class` /
    /// `className` and every other attribute unchanged.
    pub(crate) fn partition_styling(&self) -> (Vec<String>, Vec<(String, AttrValue)>) {
        let mut classes = Vec::new();
        let mut forwarded = Vec::with_capacity(self.0.len());
        for (name, value) in &self.0 {
            if STYLING_KEYS.contains(&name.as_str()) {
                // Flag values carry no class tokens.
                if let AttrValue::Text(raw) = value {
                    classes.extend(raw.split_whitespace().map(str::to_string));
                }
            } else {
                forwarded.push((name.clone(), value.clone()));
            }
        }
        (classes, forwarded)
    }
}

impl TryFrom<BTreeMap<String, AttrValue>> for PassthroughAttributes {
    type Error = ConfigurationError;

    fn try_from(raw: BTreeMap<String, AttrValue>) -> Result<Self, Self::Error> {
        Self::try_from_iter(raw)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn styling_keys_become_class_tokens() {
        let attrs = PassthroughAttributes::try_from_iter([
            ("class", AttrValue::from("mt-2  w-full")),
            ("className", AttrValue::from("ml-auto")),
            ("aria-label", AttrValue::from("Start interview")),
            ("disabled", AttrValue::from(true)),
        ])
        .expect("attributes");

        let (classes, forwarded) = attrs.partition_styling();

        assert_eq!(classes, vec!["mt-2", "w-full", "ml-auto"]);
        assert_eq!(
            forwarded,
            vec![
                ("aria-label".to_string(), AttrValue::from("Start interview")),
                ("disabled".to_string(), AttrValue::Flag(true)),
            ]
        );
    }

    #[test]
    fn insert_replaces_previous_value() {
        let mut attrs = PassthroughAttributes::new();
        assert_eq!(attrs.insert("type", "button"), Ok(None));
        assert_eq!(
            attrs.insert("type", "submit"),
            Ok(Some(AttrValue::Text("button".to_string())))
        );
        assert_eq!(attrs.get("type"), Some(&AttrValue::from("submit")));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn names_that_could_leave_the_tag_are_rejected() {
        for name in [
            "",
            "aria label",
            "x\"><script>alert(1)</script><b y",
            "on'click",
            "data-x>",
            "a/b",
            "a=b",
            "tab\tindex",
        ] {
            let mut attrs = PassthroughAttributes::new();
            assert_eq!(
                attrs.insert(name, "1"),
                Err(ConfigurationError::InvalidAttributeName(name.to_string())),
                "name {name:?}"
            );
            assert!(attrs.is_empty());
        }
    }

    #[test]
    fn builder_and_collection_stop_at_invalid_names() {
        let err = PassthroughAttributes::new()
            .with("type", "submit")
            .and_then(|attrs| attrs.with("bad name", true))
            .expect_err("invalid name");
        assert_eq!(
            err,
            ConfigurationError::InvalidAttributeName("bad name".to_string())
        );

        assert!(PassthroughAttributes::try_from_iter([("ok", "1"), ("x=y", "2")]).is_err());
    }

    #[test]
    fn deserializes_text_and_flag_values() {
        let attrs: PassthroughAttributes =
            serde_json::from_str(r#"{"type":"submit","disabled":false,"data-step":"2"}"#)
                .expect("attributes");

        let expected = PassthroughAttributes::try_from_iter([
            ("type", AttrValue::from("submit")),
            ("disabled", AttrValue::from(false)),
            ("data-step", AttrValue::from("2")),
        ])
        .expect("attributes");
        assert_eq!(attrs, expected);
    }

    #[test]
    fn deserializing_rejects_invalid_names() {
        let err = serde_json::from_str::<PassthroughAttributes>(
            r#"{"x\"><script>alert(1)</script><b y":"1"}"#,
        )
        .expect_err("invalid name");
        assert!(err.to_string().contains("invalid attribute name"));
    }

    #[test]
    fn flags_render_as_presence_only_for_html_boolean_attributes() {
        assert!(matches!(
            AttrValue::Flag(true).into_attribute("disabled"),
            Attribute::Bool(true)
        ));
        assert!(matches!(
            AttrValue::Flag(false).into_attribute("hidden"),
            Attribute::Bool(false)
        ));
        assert!(matches!(
            AttrValue::Flag(false).into_attribute("aria-expanded"),
            Attribute::String(value) if &*value == "false"
        ));
        assert!(matches!(
            AttrValue::Flag(true).into_attribute("data-active"),
            Attribute::String(value) if &*value == "true"
        ));
    }
}
