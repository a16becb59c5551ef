//! Modal built on the native `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap and Escape-to-close
//! for free. The dialog manages its own `display`, so layout classes go on the
//! inner container, never on the `<dialog>` itself.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::components::icons::XIcon;
use dioxus::prelude::*;
use wasm_bindgen_x::JsCast;

static NEXT_DIALOG_ID: AtomicU64 = AtomicU64::new(0);

/// Call a zero-argument method on a DOM element by name, ignoring failures.
fn call_dialog_method(element: &web_sys_x::Element, method: &str) {
    let Ok(func) = js_sys_x::Reflect::get(element, &method.into()) else {
        return;
    };
    if let Some(func) = func.dyn_ref::<js_sys_x::Function>() {
        let _ = func.call0(element);
    }
}

/// Card-style modal with a title and a close button.
///
/// Content is only rendered while open, so per-open state inside `children`
/// starts fresh each time. State that must survive a close belongs to the caller.
#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    /// Escape key, backdrop click or the close button
    on_close: EventHandler<()>,
    title: String,
    children: Element,
) -> Element {
    let dialog_id = use_hook(|| format!("dialog-{}", NEXT_DIALOG_ID.fetch_add(1, Ordering::Relaxed)));
    let effect_id = dialog_id.clone();

    use_effect(move || {
        let want_open = is_open();
        let Some(element) = web_sys_x::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&effect_id))
        else {
            return;
        };

        // showModal() throws on an already-open dialog
        let currently_open = element.has_attribute("open");
        match (want_open, currently_open) {
            (true, false) => call_dialog_method(&element, "showModal"),
            (false, true) => call_dialog_method(&element, "close"),
            _ => {}
        }
    });

    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/60",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center p-4",
                    onclick: move |_| on_close.call(()),
                    div {
                        class: "relative bg-white text-gray-900 rounded-xl shadow-2xl max-w-md w-full p-6",
                        onclick: move |evt| evt.stop_propagation(),
                        button {
                            class: "absolute top-3 right-3 text-gray-400 hover:text-gray-700 cursor-pointer",
                            aria_label: "Close",
                            onclick: move |_| on_close.call(()),
                            XIcon { class: "w-5 h-5" }
                        }
                        h2 { class: "text-2xl font-bold mb-4 pr-6", "{title}" }
                        {children}
                    }
                }
            }
        }
    }
}
