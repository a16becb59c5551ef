//! The RSVP card revealed after the intro

use crate::components::BounceButton;
use dioxus::prelude::*;

/// A place the evening moves through, linked to its website
#[derive(Clone, Debug, PartialEq)]
pub struct Venue {
    pub name: String,
    pub url: String,
    /// Text color class for the venue name
    pub color_class: String,
}

/// Copy shown on the card
#[derive(Clone, Debug, PartialEq)]
pub struct EventDetails {
    pub headline: String,
    pub blurb: String,
    pub when: String,
    pub venues: Vec<Venue>,
    pub question: String,
}

#[component]
pub fn InvitationCardView(
    details: EventDetails,
    on_yes: EventHandler<()>,
    on_no: EventHandler<()>,
) -> Element {
    let venue_count = details.venues.len();

    rsx! {
        div {
            class: "reveal-card p-8 text-center absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 flex flex-col items-center max-w-2xl gap-6",
            // Clicks on the card must not reach the page's mute toggle
            onclick: move |evt| evt.stop_propagation(),
            h1 { class: "text-5xl font-extrabold tracking-tight", "{details.headline}" }
            p { class: "text-xl", "{details.blurb}" }
            p { class: "text-xl leading-relaxed",
                strong { "{details.when}" }
            }
            p { class: "text-4xl leading-relaxed font-display",
                for (i, venue) in details.venues.iter().enumerate() {
                    a {
                        class: "{venue.color_class} text-shadow-lg",
                        href: "{venue.url}",
                        "{venue.name}"
                    }
                    if i + 1 < venue_count {
                        " + "
                    }
                }
            }
            p { class: "text-lg leading-relaxed", "{details.question}" }
            div { class: "flex justify-center gap-4",
                BounceButton {
                    class: Some("bg-emerald-500 text-white font-bold".to_string()),
                    onclick: move |_| on_yes.call(()),
                    "Yes"
                }
                BounceButton {
                    class: Some("bg-gray-800 text-white font-bold".to_string()),
                    onclick: move |_| on_no.call(()),
                    "No"
                }
            }
        }
    }
}
