//! Fundraiser detail page with pledges, owner actions, and the pledge form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::pledge_form::PledgeForm;
use crate::net::error::ApiError;
use crate::net::types::Fundraiser;
use crate::state::auth::AuthState;
use crate::util::money;

/// Detail view for one fundraiser, loaded from the `:id` route param.
#[component]
pub fn FundraiserDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let fundraiser = LocalResource::new(move || {
        let id = id();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_fundraiser(id).await,
                None => Err(ApiError::status(404, "Fundraiser not found")),
            }
        }
    });
    let refresh = Callback::new(move |()| fundraiser.refetch());

    view! {
        <Suspense fallback=move || view! { <div class="loading">"Loading..."</div> }>
            {move || {
                fundraiser
                    .get()
                    .map(|result| match result {
                        Ok(loaded) => {
                            view! { <DetailView fundraiser=loaded refresh=refresh/> }.into_any()
                        }
                        Err(err) => {
                            view! { <div class="error-message">{err.to_string()}</div> }.into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

/// Switches between the read view and the owner's edit form.
#[component]
fn DetailView(fundraiser: Fundraiser, refresh: Callback<()>) -> impl IntoView {
    let editing = RwSignal::new(false);
    let edit_copy = fundraiser.clone();

    view! {
        <Show
            when=move || editing.get()
            fallback=move || {
                view! { <DetailBody fundraiser=fundraiser.clone() editing=editing refresh=refresh/> }
            }
        >
            <EditForm fundraiser=edit_copy.clone() editing=editing refresh=refresh/>
        </Show>
    }
}

/// The read-only detail body: progress, owner actions, pledge section.
#[component]
fn DetailBody(fundraiser: Fundraiser, editing: RwSignal<bool>, refresh: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let error = RwSignal::new(None::<String>);
    let show_pledge_form = RwSignal::new(false);

    let id = fundraiser.id;
    let owner = fundraiser.owner;
    let is_open = fundraiser.is_open;

    let viewer_is_owner = move || {
        owner.is_some() && auth.get().session.user_id_num() == owner
    };
    let authenticated = move || auth.get().session.is_authenticated();

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_delete = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Are you sure you want to delete this fundraiser?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_fundraiser(id).await {
                    Ok(()) => navigate("/", leptos_router::NavigateOptions::default()),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
    };

    let on_pledged = Callback::new(move |()| {
        show_pledge_form.set(false);
        refresh.run(());
    });

    let total = money::total_pledged(&fundraiser.pledges);
    let percent = money::progress_percent(total, fundraiser.goal);
    let owner_name = fundraiser
        .owner_username
        .clone()
        .unwrap_or_else(|| "Unknown".to_owned());
    // Keep the date part of the ISO timestamp.
    let created = fundraiser
        .date_created
        .clone()
        .map_or_else(|| "unknown".to_owned(), |d| d.chars().take(10).collect());
    let pledges = fundraiser.pledges.clone();
    let image = fundraiser
        .image
        .clone()
        .map(|src| view! { <img class="fundraiser-image" src=src alt=fundraiser.title.clone()/> });

    view! {
        <div class="fundraiser-detail">
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            {image}
            <h1>{fundraiser.title.clone()}</h1>
            <p class="fundraiser-meta">
                {format!("Created by: {owner_name} | Created: {created}")}
            </p>
            <p class="fundraiser-description">{fundraiser.description.clone()}</p>

            <div class="progress-section">
                <div class="progress-bar">
                    <div class="progress-fill" style:width=format!("{percent}%")></div>
                </div>
                <p class="progress-text">
                    {format!(
                        "{} raised of {} goal",
                        money::format_usd(total),
                        money::format_usd(fundraiser.goal),
                    )}
                </p>
            </div>

            <p class=if is_open { "status open" } else { "status closed" }>
                {if is_open { "Status: Open" } else { "Status: Closed" }}
            </p>

            <Show when=viewer_is_owner>
                <div class="owner-actions">
                    <button on:click=move |_| editing.set(true)>"Edit"</button>
                    <button class="delete-btn" on:click=on_delete.clone()>"Delete"</button>
                </div>
            </Show>

            <Show when=move || is_open && authenticated() && !viewer_is_owner()>
                <div class="pledge-section">
                    <button on:click=move |_| show_pledge_form.update(|open| *open = !*open)>
                        {move || {
                            if show_pledge_form.get() { "Hide Pledge Form" } else { "Make a Pledge" }
                        }}
                    </button>
                    <Show when=move || show_pledge_form.get()>
                        <PledgeForm fundraiser_id=id on_success=on_pledged/>
                    </Show>
                </div>
            </Show>

            <div class="pledges-section">
                <h2>{format!("Pledges ({})", pledges.len())}</h2>
                {if pledges.is_empty() {
                    view! { <p>"No pledges yet. Be the first to support!"</p> }.into_any()
                } else {
                    view! {
                        <ul class="pledges-list">
                            {pledges
                                .iter()
                                .map(|pledge| {
                                    let supporter = if pledge.anonymous {
                                        "Anonymous".to_owned()
                                    } else {
                                        pledge
                                            .supporter_username
                                            .clone()
                                            .unwrap_or_else(|| "Unknown".to_owned())
                                    };
                                    let comment = pledge
                                        .comment
                                        .clone()
                                        .filter(|c| !c.is_empty())
                                        .map(|c| view! { <p class="pledge-comment">{c}</p> });
                                    view! {
                                        <li class="pledge-item">
                                            <div class="pledge-info">
                                                <strong>{money::format_usd(pledge.amount)}</strong>
                                                <span>{format!(" by {supporter}")}</span>
                                            </div>
                                            {comment}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}

/// The owner's edit form, seeded from the loaded fundraiser.
#[component]
fn EditForm(fundraiser: Fundraiser, editing: RwSignal<bool>, refresh: Callback<()>) -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let title = RwSignal::new(fundraiser.title.clone());
    let description = RwSignal::new(fundraiser.description.clone());
    let goal = RwSignal::new(fundraiser.goal.to_string());
    let is_open = RwSignal::new(fundraiser.is_open);
    let id = fundraiser.id;

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let Some(goal_value) = money::parse_amount(&goal.get_untracked()) else {
            error.set(Some("Goal must be a positive number".to_owned()));
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let update = crate::net::types::FundraiserUpdate {
                    title: title.get_untracked(),
                    description: description.get_untracked(),
                    goal: goal_value,
                    is_open: is_open.get_untracked(),
                };
                match crate::net::api::update_fundraiser(id, &update).await {
                    Ok(_) => {
                        editing.set(false);
                        refresh.run(());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (goal_value, id, refresh);
        }
    };

    view! {
        <form class="edit-form" on:submit=submit>
            <h2>"Edit Fundraiser"</h2>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <div class="form-group">
                <label for="edit-title">"Title:"</label>
                <input
                    type="text"
                    id="edit-title"
                    required
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="edit-description">"Description:"</label>
                <textarea
                    id="edit-description"
                    required
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-group">
                <label for="edit-goal">"Goal:"</label>
                <input
                    type="number"
                    id="edit-goal"
                    min="1"
                    step="0.01"
                    required
                    prop:value=move || goal.get()
                    on:input=move |ev| goal.set(event_target_value(&ev))
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
            <div class="button-group">
                <button type="submit">"Save Changes"</button>
                <button type="button" on:click=move |_| editing.set(false)>"Cancel"</button>
            </div>
        </form>
    }
}
