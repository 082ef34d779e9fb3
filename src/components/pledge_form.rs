//! Pledge submission form shown on the fundraiser detail page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::money;

/// Form for pledging toward an open fundraiser.
///
/// The amount must parse as a positive number before any request is
/// issued. On success the form resets and `on_success` fires so the parent
/// can refetch the fundraiser.
#[component]
pub fn PledgeForm(fundraiser_id: i64, on_success: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let amount = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());
    let anonymous = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        // Local validation short-circuits before any network I/O.
        let Some(value) = money::parse_amount(&amount.get_untracked()) else {
            error.set(Some("Pledge amount must be a positive number".to_owned()));
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                let pledge = crate::net::types::NewPledge {
                    amount: value,
                    comment: comment.get_untracked(),
                    anonymous: anonymous.get_untracked(),
                    fundraiser: fundraiser_id,
                    supporter: auth.get_untracked().session.user_id_num(),
                };
                match crate::net::api::create_pledge(&pledge).await {
                    Ok(_) => {
                        amount.set(String::new());
                        comment.set(String::new());
                        anonymous.set(false);
                        on_success.run(());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (value, fundraiser_id, on_success, auth);
        }
    };

    view! {
        <div class="pledge-form-container">
            <form class="pledge-form" on:submit=submit>
                <Show when=move || error.get().is_some()>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <div class="form-group">
                    <label for="amount">"Pledge Amount ($):"</label>
                    <input
                        type="number"
                        id="amount"
                        min="1"
                        step="0.01"
                        required
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="comment">"Comment (optional):"</label>
                    <textarea
                        id="comment"
                        rows="3"
                        placeholder="Add a message of support..."
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || anonymous.get()
                            on:change=move |ev| anonymous.set(event_target_checked(&ev))
                        />
                        "Make this pledge anonymous"
                    </label>
                </div>
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Processing..." } else { "Submit Pledge" }}
                </button>
            </form>
        </div>
    }
}
