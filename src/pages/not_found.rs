//! Catch-all page for unknown routes.

use leptos::prelude::*;

/// 404 page with a link back home.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href="/">"Back to home"</a>
        </div>
    }
}
