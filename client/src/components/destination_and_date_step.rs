//! First step of the create-trip form: destination and trip dates.

use leptos::prelude::*;

use super::button::{Button, ButtonVariant};
use crate::state::create_trip_flow::CreateTripFlow;
use crate::state::trip_draft::TripDraft;
use crate::util::dates;

/// Destination + date range inputs. Inputs lock once the guest step opens.
#[component]
pub fn DestinationAndDateStep(draft: RwSignal<TripDraft>, flow: RwSignal<CreateTripFlow>) -> impl IntoView {
    let locked = move || flow.get().guest_input_open;

    view! {
        <div class="trip-step">
            <label class="trip-step__field trip-step__field--grow">
                <input
                    class="trip-step__input"
                    type="text"
                    placeholder="Where are you going?"
                    disabled=locked
                    prop:value=move || draft.with(|d| d.destination.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.destination = value);
                    }
                />
            </label>
            <label class="trip-step__field">
                <input
                    class="trip-step__input trip-step__input--date"
                    type="date"
                    aria-label="Start date"
                    disabled=locked
                    prop:value=move || draft.with(|d| d.dates.from.map(dates::format_date_input).unwrap_or_default())
                    on:input=move |ev| {
                        let from = dates::parse_date_input(&event_target_value(&ev));
                        draft.update(|d| d.dates.set_from(from));
                    }
                />
                <span class="trip-step__range-sep">"to"</span>
                <input
                    class="trip-step__input trip-step__input--date"
                    type="date"
                    aria-label="End date"
                    disabled=locked
                    prop:value=move || draft.with(|d| d.dates.to.map(dates::format_date_input).unwrap_or_default())
                    on:input=move |ev| {
                        let to = dates::parse_date_input(&event_target_value(&ev));
                        draft.update(|d| d.dates.set_to(to));
                    }
                />
            </label>

            <span class="trip-step__divider" aria-hidden="true"></span>

            <Show
                when=locked
                fallback=move || {
                    view! {
                        <Button on_click=Callback::new(move |()| flow.update(CreateTripFlow::open_guest_input))>
                            "Continue"
                        </Button>
                    }
                }
            >
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |()| flow.update(CreateTripFlow::close_guest_input))
                >
                    "Change place/date"
                </Button>
            </Show>
        </div>
    }
}
