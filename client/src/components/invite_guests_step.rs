//! Second step of the create-trip form: guest summary and confirmation.

#[cfg(test)]
#[path = "invite_guests_step_test.rs"]
mod invite_guests_step_test;

use leptos::prelude::*;

use super::button::Button;
use crate::state::create_trip_flow::CreateTripFlow;
use crate::state::trip_draft::TripDraft;

/// Label of the guest-picker trigger for the current invite count.
pub fn guests_summary(count: usize) -> String {
    match count {
        0 => "Who will be on the trip?".to_owned(),
        1 => "1 person invited".to_owned(),
        n => format!("{n} people invited"),
    }
}

#[component]
pub fn InviteGuestsStep(draft: RwSignal<TripDraft>, flow: RwSignal<CreateTripFlow>) -> impl IntoView {
    view! {
        <div class="trip-step">
            <button
                class="trip-step__guests"
                type="button"
                on:click=move |_| flow.update(CreateTripFlow::open_guest_modal)
            >
                {move || guests_summary(draft.with(|d| d.emails_to_invite.len()))}
            </button>

            <span class="trip-step__divider" aria-hidden="true"></span>

            <Button on_click=Callback::new(move |()| flow.update(CreateTripFlow::open_confirm_modal))>
                "Confirm trip"
            </Button>
        </div>
    }
}
