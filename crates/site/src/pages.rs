use leptos::*;

/// Product name shown as the landing page heading.
pub const PRODUCT_NAME: &str = "InterviewAI";

/// Landing page tagline.
pub const TAGLINE: &str = "AI\u{2011}powered pre\u{2011}selection interviews for any role.";

#[component]
/// Landing page content.
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h1 class="text-3xl font-bold tracking-tight">{PRODUCT_NAME}</h1>
            <p class="text-muted-foreground">{TAGLINE}</p>
        </div>
    }
}
