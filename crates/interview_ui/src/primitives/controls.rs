use super::*;

/// Stable component name exposed for debugging tools as `data-ui-component`.
pub const BUTTON_DISPLAY_NAME: &str = "Button";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything the button primitive puts on its native element, computed without rendering.
pub struct ButtonMarkup {
    /// Resolved class string.
    pub class: String,
    /// Forwarded passthrough attributes, styling keys removed.
    pub attributes: Vec<(String, AttrValue)>,
}

impl ButtonMarkup {
    /// Resolves `config` and folds `class`/`className` passthrough tokens in after the
    /// configured extra classes. All other attributes are forwarded unchanged.
    pub fn build(config: &ButtonConfig, attributes: &PassthroughAttributes) -> Self {
        if attributes.is_empty() {
            return Self {
                class: resolve_class(config),
                attributes: Vec::new(),
            };
        }
        let (caller_classes, forwarded) = attributes.partition_styling();
        let class = if caller_classes.is_empty() {
            resolve_class(config)
        } else {
            let mut config = config.clone();
            config.extra_classes.extend(caller_classes);
            resolve_class(&config)
        };
        Self {
            class,
            attributes: forwarded,
        }
    }

    /// Looks up a forwarded attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, value)| value)
    }
}

fn render_button(
    config: &ButtonConfig,
    markup: ButtonMarkup,
    node_ref: NodeRef<html::Button>,
    on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> HtmlElement<html::Button> {
    let ButtonMarkup { class, attributes } = markup;
    let element = html::button()
        .attr("class", class)
        .attr("data-ui-primitive", "true")
        .attr("data-ui-component", BUTTON_DISPLAY_NAME)
        .attr("data-ui-variant", config.variant.token())
        .attr("data-ui-size", config.size.token());
    attributes
        .into_iter()
        .fold(element, |element, (name, value)| {
            let attribute = value.into_attribute(&name);
            element.attr(name, attribute)
        })
        .node_ref(node_ref)
        .on(ev::click, move |ev| {
            if let Some(on_click) = on_click.as_ref() {
                on_click.call(ev);
            }
        })
        .child(children())
}

#[component]
/// Shared button primitive.
///
/// Renders one native `<button>` whose class is resolved from `config` and which carries every
/// passthrough attribute verbatim. `node_ref` belongs to the caller; the primitive only binds
/// it to the rendered element.
pub fn Button(
    #[prop(optional)] config: ButtonConfig,
    #[prop(optional)] attributes: PassthroughAttributes,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let markup = ButtonMarkup::build(&config, &attributes);
    render_button(&config, markup, node_ref, on_click, children)
}

#[component]
/// Button primitive configured from raw variant and size names, e.g. deserialized props.
///
/// An unknown name fails this instance only: the [`ConfigurationError`] is logged and handed to
/// the nearest `ErrorBoundary`, and no element is rendered.
pub fn DynamicButton(
    #[prop(optional, into)] variant: Option<String>,
    #[prop(optional, into)] size: Option<String>,
    #[prop(optional)] extra_classes: Vec<String>,
    #[prop(optional)] attributes: PassthroughAttributes,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    match ButtonConfig::from_raw(variant.as_deref(), size.as_deref(), extra_classes) {
        Ok(config) => {
            let markup = ButtonMarkup::build(&config, &attributes);
            Ok(render_button(&config, markup, node_ref, on_click, children))
        }
        Err(err) => {
            logging::warn!("{BUTTON_DISPLAY_NAME} configuration rejected: {err}");
            Err(err)
        }
    }
}



#[cfg(all(test, target_arch = "wasm32", feature = "csr"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn node_ref_is_bound_and_click_reaches_callback() {
        let _runtime = create_runtime();
        let node_ref = create_node_ref::<html::Button>();
        let clicks = create_rw_signal(0);

        mount_to_body(move || {
            view! {
                <Button
                    node_ref=node_ref
                    on_click=Callback::new(move |_| clicks.update(|count| *count += 1))
                >
                    "Go"
                </Button>
            }
        });

        let element = node_ref.get_untracked().expect("node ref bound");
        assert_eq!(element.text_content().as_deref(), Some("Go"));
        element.click();
        assert_eq!(clicks.get_untracked(), 1);
    }
}
