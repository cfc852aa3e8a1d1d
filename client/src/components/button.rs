//! Shared button with visual variants and sizes.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    /// Stretch to the container width.
    Full,
}

/// CSS class list for a button variant/size pair.
pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let mut class = String::from("btn");
    class.push_str(match variant {
        ButtonVariant::Primary => " btn--primary",
        ButtonVariant::Secondary => " btn--secondary",
    });
    if size == ButtonSize::Full {
        class.push_str(" btn--full");
    }
    class
}

/// Styled `<button>`. Acts as a form submit button when `submit` is set.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] submit: bool,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=button_class(variant, size)
            type=if submit { "submit" } else { "button" }
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
