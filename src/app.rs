//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    create_fundraiser::CreateFundraiserPage, fundraiser_detail::FundraiserDetailPage,
    home::HomePage, login::LoginPage, not_found::NotFoundPage, profile::UserProfilePage,
    register::RegisterPage,
};
use crate::state::auth::AuthState;
use crate::state::token_store;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Seeds the shared auth context from persisted storage and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState {
        session: token_store::load(),
        loading: false,
    });
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/fundraizr.css"/>
        <Title text="FundRaizr"/>

        <Router>
            <NavBar/>
            <main class="main-content">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("create-fundraiser") view=CreateFundraiserPage/>
                    <Route
                        path=(StaticSegment("fundraiser"), ParamSegment("id"))
                        view=FundraiserDetailPage
                    />
                    <Route path=StaticSegment("profile") view=UserProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
