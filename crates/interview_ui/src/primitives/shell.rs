use super::*;

/// Classes on the full-viewport chrome container.
pub const CHROME_CLASSES: &str = "min-h-dvh bg-background text-foreground";

/// Classes on the padded content region inside the chrome.
pub const CONTENT_CLASSES: &str = "container py-8";

#[component]
/// Fixed page chrome: a full-viewport container holding one padded `<main>` region.
pub fn AppChrome(#[prop(into)] content: Content) -> impl IntoView {
    view! {
        <div
            class=CHROME_CLASSES
            data-ui-primitive="true"
            data-ui-kind="app-chrome"
        >
            <main class=CONTENT_CLASSES data-ui-slot="content">
                {content}
            </main>
        </div>
    }
}
