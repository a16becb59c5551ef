//! "Yes" dialog: collect names and show the submission outcome

use crate::components::icons::{AlertTriangleIcon, CheckIcon};
use crate::components::{BounceButton, Modal, TextInput};
use dioxus::prelude::*;
use invite_common::SubmissionStatus;

/// Confirm-attendance dialog view.
///
/// Status is owned by the caller and is not reset on close, so reopening after a
/// successful RSVP shows the success view again.
#[component]
pub fn ConfirmRsvpDialogView(
    is_open: ReadSignal<bool>,
    name1: String,
    name2: String,
    status: SubmissionStatus,
    submitting: bool,
    /// Last submit was refused because the name was blank
    #[props(default)]
    name_missing: bool,
    on_name1_input: EventHandler<String>,
    on_name2_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let title = if status == SubmissionStatus::Success {
        "See you there!"
    } else {
        "Wonderful!"
    };

    rsx! {
        Modal { is_open, on_close, title: title.to_string(),
            if status == SubmissionStatus::Success {
                div { class: "flex flex-col items-center gap-4 text-center",
                    div { class: "rounded-full bg-emerald-100 p-3 text-emerald-600",
                        CheckIcon { class: "w-8 h-8" }
                    }
                    p { class: "text-lg", "You're on the list. Can't wait to celebrate with you." }
                    BounceButton {
                        class: Some("bg-emerald-500 text-white font-bold".to_string()),
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            } else {
                form {
                    class: "flex flex-col gap-4",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        if !submitting {
                            on_submit.call(());
                        }
                    },
                    p { class: "text-gray-600", "Let me know who's coming." }
                    TextInput {
                        id: "rsvp-name1",
                        label: "Your name",
                        value: name1,
                        on_input: on_name1_input,
                        required: true,
                        disabled: submitting,
                        autofocus: true,
                    }
                    if name_missing {
                        p { class: "text-sm text-pink-500 -mt-2", role: "alert", "Please enter your name." }
                    }
                    TextInput {
                        id: "rsvp-name2",
                        label: "Bringing someone? (optional)",
                        value: name2,
                        on_input: on_name2_input,
                        placeholder: Some("Their name"),
                        disabled: submitting,
                    }
                    if status == SubmissionStatus::Error {
                        div {
                            class: "flex items-start gap-2 rounded-md bg-amber-50 border border-amber-300 p-3 text-left text-sm text-amber-900",
                            role: "alert",
                            AlertTriangleIcon { class: "w-5 h-5 flex-shrink-0 text-amber-500" }
                            p {
                                "Something went wrong saving your RSVP. Please try again, or just text me to let me know you're coming."
                            }
                        }
                    }
                    BounceButton {
                        r#type: Some("submit"),
                        class: Some("bg-emerald-500 text-white font-bold self-center disabled:opacity-50".to_string()),
                        disabled: submitting,
                        onclick: |_| {},
                        if submitting {
                            "Sending..."
                        } else {
                            "Count me in"
                        }
                    }
                }
            }
        }
    }
}
