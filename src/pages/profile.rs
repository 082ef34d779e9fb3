//! Profile page listing the signed-in user's fundraisers and pledges.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::money;

/// Profile page. Redirects to `/login` if the user is not authenticated;
/// otherwise fetches the user's fundraisers and pledges in parallel.
#[component]
pub fn UserProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.session.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let data = LocalResource::new(|| crate::net::api::fetch_profile_data());

    let identity = move || {
        auth.get()
            .session
            .email
            .map_or_else(|| "Signed in".to_owned(), |email| format!("Signed in as {email}"))
    };

    view! {
        <div class="user-profile">
            <div class="profile-header">
                <h1>"My Profile"</h1>
                <p class="user-info">{identity}</p>
            </div>

            <Suspense fallback=move || view! { <div class="loading">"Loading..."</div> }>
                {move || {
                    data.get()
                        .map(|result| match result {
                            Ok((fundraisers, pledges)) => {
                                view! {
                                    <ProfileFundraisers fundraisers=fundraisers/>
                                    <ProfilePledges pledges=pledges/>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <div class="error-message">{err.to_string()}</div> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// The "My Fundraisers" section with per-card progress summaries.
#[component]
fn ProfileFundraisers(fundraisers: Vec<crate::net::types::Fundraiser>) -> impl IntoView {
    view! {
        <section class="profile-section">
            <h2>{format!("My Fundraisers ({})", fundraisers.len())}</h2>
            {if fundraisers.is_empty() {
                view! {
                    <p class="empty-state">
                        "You haven't created any fundraisers yet. "
                        <a href="/create-fundraiser">"Create one now!"</a>
                    </p>
                }
                    .into_any()
            } else {
                view! {
                    <div class="fundraisers-grid">
                        {fundraisers
                            .iter()
                            .map(|fundraiser| {
                                let total = money::total_pledged(&fundraiser.pledges);
                                let href = format!("/fundraiser/{}", fundraiser.id);
                                view! {
                                    <div class="fundraiser-card">
                                        <h3>
                                            <a href=href>{fundraiser.title.clone()}</a>
                                        </h3>
                                        <p class="fundraiser-goal">
                                            {format!(
                                                "{} / {}",
                                                money::format_usd(total),
                                                money::format_usd(fundraiser.goal),
                                            )}
                                        </p>
                                        <p class=if fundraiser.is_open {
                                            "fundraiser-status open"
                                        } else {
                                            "fundraiser-status closed"
                                        }>
                                            {if fundraiser.is_open { "Open" } else { "Closed" }}
                                        </p>
                                        <p class="pledge-count">
                                            {format!("{} pledges", fundraiser.pledges.len())}
                                        </p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}

/// The "My Pledges" section.
#[component]
fn ProfilePledges(pledges: Vec<crate::net::types::Pledge>) -> impl IntoView {
    view! {
        <section class="profile-section">
            <h2>{format!("My Pledges ({})", pledges.len())}</h2>
            {if pledges.is_empty() {
                view! { <p class="empty-state">"You haven't pledged to any fundraisers yet."</p> }
                    .into_any()
            } else {
                view! {
                    <div class="pledges-list">
                        {pledges
                            .iter()
                            .map(|pledge| {
                                let link = pledge
                                    .fundraiser
                                    .map(|fid| {
                                        let href = format!("/fundraiser/{fid}");
                                        view! { <a href=href>"View fundraiser"</a> }
                                    });
                                let comment = pledge
                                    .comment
                                    .clone()
                                    .filter(|c| !c.is_empty())
                                    .map(|c| view! { <p class="pledge-comment">{c}</p> });
                                view! {
                                    <div class="pledge-card">
                                        <div class="pledge-header">
                                            <strong>{money::format_usd(pledge.amount)}</strong>
                                            " "
                                            {link}
                                        </div>
                                        {comment}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
