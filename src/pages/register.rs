//! Registration page: creates an account, then logs the user in.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Registration form with client-side password confirmation.
///
/// A password/confirm mismatch is a local validation error; no request is
/// issued. On success the new account is logged in immediately and the
/// full identity (token, user id, email) is stored.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        if password.get_untracked() != confirm.get_untracked() {
            error.set(Some("Passwords do not match".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                let new_user = crate::net::types::NewUser {
                    username: username.get_untracked(),
                    email: email.get_untracked(),
                    password: password.get_untracked(),
                };
                let result = async {
                    crate::net::api::register(&new_user).await?;
                    crate::net::api::login(&crate::net::types::Credentials {
                        username: new_user.username.clone(),
                        password: new_user.password.clone(),
                    })
                    .await
                }
                .await;
                match result {
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
                <h2>"Join FundRaizr"</h2>
                <p class="auth-subtitle">"Create your account to start crowdfunding"</p>
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
                        <label for="email">"Email:"</label>
                        <input
                            type="email"
                            id="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
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
                    <div class="form-group">
                        <label for="confirm-password">"Confirm Password:"</label>
                        <input
                            type="password"
                            id="confirm-password"
                            required
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-link">
                    "Already have an account? " <a href="/login">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
