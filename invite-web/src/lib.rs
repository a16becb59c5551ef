pub mod event;
pub mod pages;

use dioxus::prelude::*;
use pages::Home;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Lato for body copy, Erica One for venue names
const FONTS_HREF: &str =
    "https://fonts.googleapis.com/css2?family=Erica+One&family=Lato:wght@400;700;900&display=swap";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Celebrate Mid Life With Me." }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "stylesheet", href: FONTS_HREF }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
