//! InterviewAI web application: root layout, providers, and landing page.

mod manifest;
mod pages;
mod providers;
mod shell;
mod web_app;

pub use manifest::{ManifestError, SiteManifest};
pub use pages::{HomePage, PRODUCT_NAME, TAGLINE};
pub use providers::Providers;
pub use shell::AppShell;
pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
