//! Context boundary every page renders inside.

use leptos::*;
use leptos_meta::provide_meta_context;

#[component]
/// Provides the document-metadata context, then renders `children` unchanged.
pub fn Providers(children: Children) -> impl IntoView {
    provide_meta_context();

    children()
}
