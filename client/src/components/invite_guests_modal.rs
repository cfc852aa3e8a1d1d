//! Modal for building the guest invite list.

use leptos::prelude::*;

use super::button::Button;
use crate::state::trip_draft::{EmailChange, TripDraft};

/// Invitee list with remove buttons plus an add-email form.
///
/// The email field is cleared only when an address was actually added;
/// blank and duplicate submissions leave it as typed.
#[component]
pub fn InviteGuestsModal(draft: RwSignal<TripDraft>, on_close: Callback<()>) -> impl IntoView {
    let email = RwSignal::new(String::new());

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = email.get_untracked();
        if draft.try_update(|d| d.add_email(&value)) == Some(EmailChange::Added) {
            email.set(String::new());
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
                class="dialog dialog--guests"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <h2>"Select guests"</h2>
                    <button class="dialog__close" type="button" title="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <p class="dialog__hint">
                    "Guests will receive an email to confirm their participation in the trip."
                </p>

                <div class="guest-list">
                    {move || {
                        draft
                            .with(|d| d.emails_to_invite.clone())
                            .into_iter()
                            .map(|address| {
                                let to_remove = address.clone();
                                view! {
                                    <div class="guest-chip">
                                        <span class="guest-chip__email">{address}</span>
                                        <button
                                            class="guest-chip__remove"
                                            type="button"
                                            title="Remove guest"
                                            on:click=move |_| draft.update(|d| d.remove_email(&to_remove))
                                        >
                                            "×"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <div class="dialog__divider"></div>

                <form class="dialog__inline-form" on:submit=on_add>
                    <input
                        class="dialog__input"
                        type="email"
                        name="email"
                        placeholder="Guest email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Button submit=true>"Invite"</Button>
                </form>
            </div>
        </div>
    }
}
