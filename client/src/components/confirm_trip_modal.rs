//! Modal collecting the trip owner's name and email before creation.

#[cfg(test)]
#[path = "confirm_trip_modal_test.rs"]
mod confirm_trip_modal_test;

use leptos::prelude::*;

use super::button::{Button, ButtonSize};
use crate::state::trip_draft::TripDraft;

/// Sentence summarizing the trip about to be confirmed.
pub fn confirmation_summary(destination: &str, dates_label: Option<&str>) -> String {
    let destination = destination.trim();
    match dates_label {
        Some(dates) => format!("To confirm the trip to {destination} on {dates}, fill in your details below."),
        None => format!("To confirm the trip to {destination}, fill in your details below."),
    }
}

#[component]
pub fn ConfirmTripModal(
    draft: RwSignal<TripDraft>,
    #[prop(into)] busy: Signal<bool>,
    on_close: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let summary = move || {
        draft.with(|d| confirmation_summary(&d.destination, d.dates.label().as_deref()))
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--confirm"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <h2>"Confirm trip creation"</h2>
                    <button class="dialog__close" type="button" title="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <p class="dialog__hint">{summary}</p>

                <form class="dialog__form" on:submit=on_form_submit>
                    <input
                        class="dialog__input"
                        type="text"
                        name="name"
                        placeholder="Your full name"
                        prop:value=move || draft.with(|d| d.owner_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.owner_name = value);
                        }
                    />
                    <input
                        class="dialog__input"
                        type="email"
                        name="email"
                        placeholder="Your personal email"
                        prop:value=move || draft.with(|d| d.owner_email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.owner_email = value);
                        }
                    />
                    <Button submit=true size=ButtonSize::Full disabled=busy>
                        {move || if busy.get() { "Creating trip..." } else { "Confirm trip creation" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
