use interview_ui::prelude::*;
use leptos::*;

use crate::{AppShell, HomePage, SiteManifest};

#[component]
/// Application root mounted into the document body.
pub fn SiteApp() -> impl IntoView {
    let manifest = SiteManifest::load();

    view! { <AppShell manifest=manifest content=Content::nested(|| view! { <HomePage /> }) /> }
}
