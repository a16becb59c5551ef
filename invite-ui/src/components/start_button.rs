//! Centered play button that starts the intro

use crate::components::icons::PlayCircleIcon;
use crate::components::BounceButton;
use dioxus::prelude::*;

/// Fades up and out once `started`, and stops taking clicks.
#[component]
pub fn StartButtonView(started: bool, on_start: EventHandler<()>) -> Element {
    let state_class = if started {
        "opacity-0 -translate-y-5 pointer-events-none"
    } else {
        "opacity-100 translate-y-0"
    };

    rsx! {
        div { class: "absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2",
            div { class: "transition-all duration-500 ease-out {state_class}",
                BounceButton {
                    class: Some("bg-transparent px-0 py-0".to_string()),
                    aria_label: Some("Play".to_string()),
                    disabled: started,
                    onclick: move |evt: MouseEvent| {
                        // The page background toggles mute; the start click is not a toggle
                        evt.stop_propagation();
                        on_start.call(());
                    },
                    PlayCircleIcon { size: 96, color: "black" }
                }
            }
        }
    }
}
