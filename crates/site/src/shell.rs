//! Root layout shared by every page.

use interview_ui::prelude::*;
use leptos::*;
use leptos_meta::{Html, Meta, Title};

use crate::{Providers, SiteManifest};

#[component]
/// Root composition: document metadata from `manifest`, the [`Providers`] boundary, then the
/// page chrome around `content`.
///
/// There is one render path; the shell never branches on its inputs.
pub fn AppShell(manifest: SiteManifest, #[prop(into)] content: Content) -> impl IntoView {
    let SiteManifest {
        title,
        description,
        lang,
        ..
    } = manifest;

    view! {
        <Providers>
            <Html lang=lang />
            <Title text=title />
            <Meta name="description" content=description />
            <AppChrome content=content />
        </Providers>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use interview_ui::{CHROME_CLASSES, CONTENT_CLASSES};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{HomePage, TAGLINE};

    fn render(view: impl FnOnce() -> View + 'static) -> String {
        leptos::ssr::render_to_string(view).to_string()
    }

    /// Drops hydration markers so two renders can be compared structurally.
    fn structure(html: &str) -> String {
        let mut out = String::with_capacity(html.len());
        let mut rest = html;
        loop {
            let comment = rest.find("<!--");
            let key = rest.find(" data-hk=\"");
            let next = match (comment, key) {
                (Some(c), Some(k)) => Some(c.min(k)),
                (c, k) => c.or(k),
            };
            let Some(start) = next else {
                out.push_str(rest);
                return out;
            };
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            let end = if tail.starts_with("<!--") {
                tail.find("-->").map(|end| end + 3)
            } else {
                tail[" data-hk=\"".len()..]
                    .find('"')
                    .map(|end| end + " data-hk=\"".len() + 1)
            };
            match end {
                Some(end) => rest = &tail[end..],
                None => {
                    out.push_str(tail);
                    return out;
                }
            }
        }
    }

    /// Offset of the first `class` attribute whose trimmed value is `classes`.
    fn class_position(html: &str, classes: &str) -> Option<usize> {
        html.match_indices("class=\"").find_map(|(start, marker)| {
            let value = html[start + marker.len()..].split('"').next()?;
            (value.trim() == classes).then_some(start)
        })
    }

    fn home() -> Content {
        Content::nested(|| view! { <HomePage /> })
    }

    fn shell(content: Content) -> String {
        render(move || {
            view! { <AppShell manifest=SiteManifest::default() content=content /> }.into_view()
        })
    }

    #[test]
    fn shell_wraps_page_in_chrome_and_main() {
        let html = shell(home());

        let chrome = class_position(&html, CHROME_CLASSES).expect("chrome container");
        let main = class_position(&html, CONTENT_CLASSES).expect("content region");
        let tagline = html.find(TAGLINE).expect("page copy");
        assert!(chrome < main && main < tagline);
    }

    #[test]
    fn rendering_twice_is_structurally_identical() {
        let content = home();
        let again = content.clone();

        let first = shell(content);
        let second = shell(again);

        assert_eq!(structure(&first), structure(&second));
    }

    #[test]
    fn static_content_renders_as_text() {
        let html = shell(Content::from("Maintenance"));
        assert!(html.contains("Maintenance"));
    }
}
