//! Create-fundraiser page, available to authenticated users only.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::money;

/// Form for starting a new fundraiser.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn CreateFundraiserPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let submit_navigate = navigate.clone();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.session.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let goal = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let is_open = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let Some(goal_value) = money::parse_amount(&goal.get_untracked()) else {
            error.set(Some("Goal must be a positive number".to_owned()));
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = submit_navigate.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                let image_url = image.get_untracked();
                let new_fundraiser = crate::net::types::NewFundraiser {
                    title: title.get_untracked(),
                    description: description.get_untracked(),
                    goal: goal_value,
                    image: (!image_url.trim().is_empty()).then_some(image_url),
                    is_open: is_open.get_untracked(),
                };
                match crate::net::api::create_fundraiser(&new_fundraiser).await {
                    Ok(created) => {
                        navigate(
                            &format!("/fundraiser/{}", created.id),
                            NavigateOptions::default(),
                        );
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = goal_value;
        }
    };

    view! {
        <div class="auth-container">
            <div class="auth-form auth-form--wide">
                <h2>"Create New Fundraiser"</h2>
                <Show when=move || error.get().is_some()>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <form on:submit=submit>
                    <div class="form-group">
                        <label for="title">"Title:"</label>
                        <input
                            type="text"
                            id="title"
                            required
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="description">"Description:"</label>
                        <textarea
                            id="description"
                            required
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label for="goal">"Goal Amount ($):"</label>
                        <input
                            type="number"
                            id="goal"
                            min="1"
                            step="0.01"
                            required
                            prop:value=move || goal.get()
                            on:input=move |ev| goal.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="image">"Image URL:"</label>
                        <input
                            type="url"
                            id="image"
                            placeholder="https://example.com/image.jpg"
                            prop:value=move || image.get()
                            on:input=move |ev| image.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                prop:checked=move || is_open.get()
                                on:change=move |ev| is_open.set(event_target_checked(&ev))
                            />
                            "Open for pledges"
                        </label>
                    </div>
                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating..." } else { "Create Fundraiser" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
