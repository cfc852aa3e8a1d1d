//! Modal for registering an activity on an existing trip.
//!
//! The POST is awaited and the page then fully reloads so the activity list
//! is fetched fresh. A failed request is logged and the reload still happens.

use leptos::prelude::*;

use super::button::{Button, ButtonSize};
use crate::state::activity_draft::ActivityDraft;

#[component]
pub fn CreateActivityModal(trip_id: String, on_close: Callback<()>) -> impl IntoView {
    let draft = RwSignal::new(ActivityDraft::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match draft.with_untracked(ActivityDraft::validate) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("activity not registered: {err}");
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let trip_id = trip_id.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::create_activity(&trip_id, &request).await {
                    log::error!("activity registration failed: {err}");
                }
                crate::util::browser::reload_page();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&trip_id, request);
        }
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
                class="dialog dialog--activity"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <h2>"Register activity"</h2>
                    <button class="dialog__close" type="button" title="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <p class="dialog__hint">"All guests can see the activities."</p>

                <form class="dialog__form" on:submit=on_submit>
                    <input
                        class="dialog__input"
                        type="text"
                        name="title"
                        placeholder="What is the activity?"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.title = value);
                        }
                    />
                    <input
                        class="dialog__input"
                        type="datetime-local"
                        name="occurs_at"
                        aria-label="Activity date and time"
                        prop:value=move || draft.with(|d| d.occurs_at.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.occurs_at = value);
                        }
                    />
                    <Button submit=true size=ButtonSize::Full disabled=Signal::derive(move || busy.get())>
                        "Save activity"
                    </Button>
                </form>
            </div>
        </div>
    }
}
