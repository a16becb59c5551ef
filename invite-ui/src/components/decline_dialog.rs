//! "No" dialog

use crate::components::{BounceButton, Modal};
use dioxus::prelude::*;

#[component]
pub fn DeclineDialogView(is_open: ReadSignal<bool>, on_close: EventHandler<()>) -> Element {
    rsx! {
        Modal { is_open, on_close, title: "Maybe next time".to_string(),
            div { class: "flex flex-col items-center gap-4 text-center",
                p { class: "text-lg",
                    "Sorry you can't make it. I'll raise a glass for you anyway."
                }
                BounceButton {
                    class: Some("bg-gray-800 text-white font-bold".to_string()),
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
