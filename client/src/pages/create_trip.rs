//! Create-trip page: the multi-step trip form.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It owns the trip draft and the step/modal
//! flags, validates on confirm, issues a single `POST /trips`, and navigates
//! to the created trip once the service returns its identifier.
//!
//! ERROR HANDLING
//! ==============
//! Incomplete drafts and failed requests abort quietly: they are logged and
//! the form stays as the user left it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::trip_path;
use crate::components::confirm_trip_modal::ConfirmTripModal;
use crate::components::destination_and_date_step::DestinationAndDateStep;
use crate::components::invite_guests_modal::InviteGuestsModal;
use crate::components::invite_guests_step::InviteGuestsStep;
use crate::state::create_trip_flow::CreateTripFlow;
use crate::state::trip_draft::TripDraft;

#[component]
pub fn CreateTripPage() -> impl IntoView {
    let draft = RwSignal::new(TripDraft::default());
    let flow = RwSignal::new(CreateTripFlow::default());
    let created_trip_id = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(trip_id) = created_trip_id.get() {
            created_trip_id.set(None);
            navigate(&trip_path(&trip_id), NavigateOptions::default());
        }
    });

    let create_trip = Callback::new(move |()| submit_trip(draft, flow, created_trip_id));
    let close_guest_modal = Callback::new(move |()| flow.update(CreateTripFlow::close_guest_modal));
    let close_confirm_modal = Callback::new(move |()| flow.update(CreateTripFlow::close_confirm_modal));
    let submitting = Signal::derive(move || flow.get().submitting);

    view! {
        <div class="create-trip-page">
            <div class="create-trip-page__content">
                <header class="create-trip-page__brand">
                    <h1 class="brand">"plann.er"</h1>
                    <p class="create-trip-page__tagline">"Invite your friends and plan your next trip!"</p>
                </header>

                <div class="create-trip-page__steps">
                    <DestinationAndDateStep draft=draft flow=flow/>
                    <Show when=move || flow.get().guest_input_open>
                        <InviteGuestsStep draft=draft flow=flow/>
                    </Show>
                </div>

                <p class="create-trip-page__legal">
                    "By planning your trip with plann.er you automatically agree"
                    <br/>
                    "to our "
                    <a href="#">"terms of use"</a>
                    " and "
                    <a href="#">"privacy policies"</a>
                    "."
                </p>
            </div>

            <Show when=move || flow.get().guest_modal_open>
                <InviteGuestsModal draft=draft on_close=close_guest_modal/>
            </Show>
            <Show when=move || flow.get().confirm_modal_open>
                <ConfirmTripModal
                    draft=draft
                    busy=submitting
                    on_close=close_confirm_modal
                    on_submit=create_trip
                />
            </Show>
        </div>
    }
}

fn submit_trip(
    draft: RwSignal<TripDraft>,
    flow: RwSignal<CreateTripFlow>,
    created_trip_id: RwSignal<Option<String>>,
) {
    let request = match draft.with_untracked(TripDraft::validate) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("trip not submitted: {err}");
            return;
        }
    };
    if !flow.try_update(CreateTripFlow::begin_submit).unwrap_or(false) {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::create_trip(&request).await {
            Ok(trip_id) => {
                log::info!("trip created: {trip_id}");
                created_trip_id.set(Some(trip_id));
            }
            Err(err) => log::error!("trip creation failed: {err}"),
        }
        flow.update(CreateTripFlow::finish_submit);
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, created_trip_id);
        flow.update(CreateTripFlow::finish_submit);
    }
}
