//! Root application component with routing and the SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{create_trip::CreateTripPage, trip_details::TripDetailsPage};
use crate::util::config::API_URL_META;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_url` is published as a `<meta>` tag so the hydrated bundle can find
/// the remote trip API without being rebuilt per environment.
pub fn shell(options: LeptosOptions, api_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_URL_META content=api_url/>
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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/planner.css"/>
        <Title text="plann.er"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CreateTripPage/>
                <Route path=(StaticSegment("trips"), ParamSegment("trip_id")) view=TripDetailsPage/>
            </Routes>
        </Router>
    }
}

/// Client route for a created trip.
pub fn trip_path(trip_id: &str) -> String {
    format!("/trips/{trip_id}")
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
