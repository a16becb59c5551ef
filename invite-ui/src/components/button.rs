//! Button components

use dioxus::prelude::*;

/// Chromeless button - accessibility and click handling without visual styling.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type,
            disabled,
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button that springs up slightly on hover.
///
/// The hover scale and its spring-like easing come from the `bounce-button`
/// class in main.css.
#[component]
pub fn BounceButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let extra = class.unwrap_or_default();

    rsx! {
        ChromelessButton {
            class: Some(format!("bounce-button border-0 outline-none cursor-pointer px-4 py-2 rounded-md {extra}")),
            r#type,
            disabled,
            aria_label,
            onclick,
            {children}
        }
    }
}
