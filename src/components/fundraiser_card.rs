//! Card for one fundraiser in the home-page grid.

use leptos::prelude::*;

use crate::net::types::Fundraiser;
use crate::util::money;

/// A clickable card summarizing a fundraiser's progress and status.
#[component]
pub fn FundraiserCard(fundraiser: Fundraiser) -> impl IntoView {
    let href = format!("/fundraiser/{}", fundraiser.id);
    let total = money::total_pledged(&fundraiser.pledges);
    let percent = money::progress_percent(total, fundraiser.goal);
    let status = if fundraiser.is_open { "Open" } else { "Closed" };
    let status_class = if fundraiser.is_open {
        "card-status open"
    } else {
        "card-status closed"
    };
    let image = fundraiser
        .image
        .clone()
        .map(|src| view! { <img src=src alt=fundraiser.title.clone()/> });

    view! {
        <div class="fundraiser-card">
            <a href=href>
                {image}
                <div class="card-content">
                    <h3>{fundraiser.title.clone()}</h3>
                    <p class="card-description">{money::preview(&fundraiser.description, 100)}</p>
                    <div class="card-progress">
                        <div class="progress-bar">
                            <div class="progress-fill" style:width=format!("{percent}%")></div>
                        </div>
                        <p class="progress-text">
                            {format!(
                                "{} of {}",
                                money::format_usd(total),
                                money::format_usd(fundraiser.goal),
                            )}
                        </p>
                    </div>
                    <p class=status_class>{status}</p>
                </div>
            </a>
        </div>
    }
}
