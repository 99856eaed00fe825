use std::borrow::Cow;
use std::rc::Rc;

use super::*;

#[derive(Clone)]
/// Renderable content handed from a parent composition to a wrapper component.
///
/// Both cases can be rendered any number of times and produce the same tree each time.
pub enum Content {
    /// Plain text content.
    Static(Cow<'static, str>),
    /// A further nested composition of components.
    Nested(ChildrenFn),
}

impl Content {
    /// Wraps a view-producing closure as nested content.
    pub fn nested<F, V>(render: F) -> Self
    where
        F: Fn() -> V + 'static,
        V: IntoView,
    {
        Self::Nested(Rc::new(move || Fragment::new(vec![render().into_view()])))
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Static(Cow::Borrowed(""))
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Self::Nested(_) => f.write_str("Nested(..)"),
        }
    }
}

impl From<&'static str> for Content {
    fn from(text: &'static str) -> Self {
        Self::Static(Cow::Borrowed(text))
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Static(Cow::Owned(text))
    }
}

impl IntoView for Content {
    fn into_view(self) -> View {
        match self {
            Self::Static(text) => text.into_owned().into_view(),
            Self::Nested(render) => render().into_view(),
        }
    }
}
