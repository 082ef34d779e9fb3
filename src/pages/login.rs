//! Login page with a username/password form.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Login form: exchanges credentials for an API token, stores the session,
/// and navigates home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                let credentials = crate::net::types::Credentials {
                    username: username.get_untracked(),
                    password: password.get_untracked(),
                };
                match crate::net::api::login(&credentials).await {
                    Ok(data) => {
                        crate::state::auth::log_in(
                            auth,
                            crate::state::auth::Session::authenticated(
                                data.token,
                                data.user_id.map(|id| id.to_string()),
                                data.email,
                            ),
                        );
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = auth;
        }
    };

    view! {
        <div class="auth-container">
            <div class="auth-form">
                <h2>"Welcome Back"</h2>
                <p class="auth-subtitle">"Sign in to support campaigns"</p>
                <Show when=move || error.get().is_some()>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <form on:submit=submit>
                    <div class="form-group">
                        <label for="username">"Username:"</label>
                        <input
                            type="text"
                            id="username"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password:"</label>
                        <input
                            type="password"
                            id="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-link">
                    "Don't have an account? " <a href="/register">"Register here"</a>
                </p>
            </div>
        </div>
    }
}
