//! Home page listing active fundraisers.

use leptos::prelude::*;

use crate::components::fundraiser_card::FundraiserCard;

/// Landing page with a hero section and the fundraiser grid.
#[component]
pub fn HomePage() -> impl IntoView {
    let fundraisers = LocalResource::new(|| crate::net::api::fetch_fundraisers());

    view! {
        <div class="home-page">
            <div class="hero-section">
                <h1>"Welcome to FundRaizr"</h1>
                <p>"Support amazing projects and make dreams come true"</p>
                <a href="/create-fundraiser" class="cta-button">
                    "Start a Fundraiser"
                </a>
            </div>

            <div class="fundraisers-section">
                <h2>"Active Fundraisers"</h2>
                <Suspense fallback=move || {
                    view! { <div class="loading">"Loading fundraisers..."</div> }
                }>
                    {move || {
                        fundraisers
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    if list.is_empty() {
                                        view! {
                                            <p class="empty-state">
                                                "No fundraisers yet. Be the first to create one!"
                                            </p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div id="fundraiser-list">
                                                {list
                                                    .into_iter()
                                                    .map(|fundraiser| {
                                                        view! { <FundraiserCard fundraiser=fundraiser/> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }
                                Err(err) => {
                                    view! { <div class="error-message">{err.to_string()}</div> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
