//! Trip-details page: trip header, activities per day, and the
//! register-activity modal.

use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::button::Button;
use crate::components::create_activity_modal::CreateActivityModal;
use crate::net::types::ActivityDay;
use crate::state::trip_details::TripDetailsState;
use crate::util::dates;

#[component]
pub fn TripDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let trip_id = move || params.read().get("trip_id").unwrap_or_default();
    let details = RwSignal::new(TripDetailsState::default());

    Effect::new(move || {
        let id = trip_id();
        if id.is_empty() {
            return;
        }
        details.update(TripDetailsState::begin_loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_trip(id, details));
    });

    let open_modal = Callback::new(move |()| details.update(TripDetailsState::open_activity_modal));
    let close_modal = Callback::new(move |()| details.update(TripDetailsState::close_activity_modal));

    let destination = move || {
        details.with(|d| d.trip.as_ref().map(|t| t.destination.clone()).unwrap_or_default())
    };
    let dates_label = move || details.with(TripDetailsState::dates_label).unwrap_or_default();

    view! {
        <div class="trip-details-page">
            <header class="trip-header">
                <span class="trip-header__destination">{destination}</span>
                <span class="trip-header__dates">{dates_label}</span>
            </header>

            <Show when=move || details.with(|d| d.error.is_some())>
                <p class="trip-details-page__error">
                    {move || details.with(|d| d.error.clone().unwrap_or_default())}
                </p>
            </Show>

            <main class="activities">
                <div class="activities__header">
                    <h2>"Activities"</h2>
                    <Button on_click=open_modal>"+ Register activity"</Button>
                </div>
                <Show
                    when=move || !details.with(|d| d.loading)
                    fallback=move || view! { <p>"Loading activities..."</p> }
                >
                    {move || {
                        details
                            .with(|d| d.activities.clone())
                            .into_iter()
                            .map(|day| view! { <ActivityDaySection day=day/> })
                            .collect::<Vec<_>>()
                    }}
                </Show>
            </main>

            <Show when=move || details.with(|d| d.activity_modal_open)>
                <CreateActivityModal trip_id=trip_id() on_close=close_modal/>
            </Show>
        </div>
    }
}

/// One trip day with its activities, or a placeholder when there are none.
#[component]
fn ActivityDaySection(day: ActivityDay) -> impl IntoView {
    let (day_number, weekday) = dates::day_heading(day.date);
    let body = if day.activities.is_empty() {
        Either::Left(view! { <p class="activity-day__empty">"No activities registered for this date."</p> })
    } else {
        Either::Right(
            day.activities
                .into_iter()
                .map(|activity| {
                    view! {
                        <div class="activity-card">
                            <span class="activity-card__title">{activity.title}</span>
                            <span class="activity-card__time">{dates::clock_label(activity.occurs_at)}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>(),
        )
    };

    view! {
        <section class="activity-day">
            <h3 class="activity-day__heading">
                "Day " {day_number}
                <span class="activity-day__weekday">{weekday}</span>
            </h3>
            {body}
        </section>
    }
}

#[cfg(feature = "hydrate")]
async fn load_trip(trip_id: String, details: RwSignal<TripDetailsState>) {
    let trip = crate::net::api::fetch_trip(&trip_id).await;
    let activities = crate::net::api::fetch_activities(&trip_id).await;
    match (trip, activities) {
        (Ok(trip), Ok(activities)) => details.update(|d| d.apply_loaded(trip, activities)),
        (Err(err), _) | (_, Err(err)) => {
            log::error!("loading trip {trip_id} failed: {err}");
            details.update(|d| d.apply_error(err.to_string()));
        }
    }
}
