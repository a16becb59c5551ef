//! Labelled text input

use dioxus::prelude::*;

/// Text field with a visible label above it
#[component]
pub fn TextInput(
    id: &'static str,
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default)] autofocus: bool,
) -> Element {
    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    rsx! {
        div { class: "flex flex-col gap-1 text-left",
            label { class: "text-sm font-semibold text-gray-700", r#for: id,
                "{label}"
                if required {
                    span { class: "text-pink-500 ml-0.5", "*" }
                }
            }
            input {
                r#type: "text",
                id,
                name: id,
                class: "w-full rounded-md border border-gray-300 px-3 py-2 focus:outline-none focus:ring-2 focus:ring-emerald-400 {disabled_class}",
                value: "{value}",
                placeholder,
                required,
                disabled,
                autocomplete: "name",
                oninput: move |e| on_input.call(e.value()),
                onmounted: move |event| async move {
                    if autofocus {
                        let _ = event.data().set_focus(true).await;
                    }
                },
            }
        }
    }
}
