//! Top navigation bar with auth-dependent links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};

/// Navigation bar shown on every page.
///
/// Authenticated users see create/profile/logout; everyone else sees
/// login/register.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let authenticated = move || auth_state.get().session.is_authenticated();

    let on_logout = move |_| {
        auth::log_out(auth_state);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <div class="nav-brand">
                    <a href="/">"FundRaizr"</a>
                </div>
                <div class="nav-links">
                    <a href="/">"Home"</a>
                    <Show
                        when=authenticated
                        fallback=|| {
                            view! {
                                <a href="/login">"Login"</a>
                                <a href="/register" class="register-btn">"Register"</a>
                            }
                        }
                    >
                        <a href="/create-fundraiser">"Create Fundraiser"</a>
                        <a href="/profile">"My Profile"</a>
                        <button class="logout-btn" on:click=on_logout.clone()>
                            "Log Out"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
