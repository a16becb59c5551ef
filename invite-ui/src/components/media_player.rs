//! Full-viewport background video that cycles through a playlist forever
//!
//! Two pieces:
//! - **`use_media_handle()`**: Hook returning a `MediaHandle`. The owner keeps
//!   it and can start playback from its own gesture handlers.
//! - **`CyclicMediaPlayer`**: Renders the `<video>` and drives the cycle. Takes
//!   the handle and wires it onto the element.
//!
//! On every completed playback the next source is loaded (wrapping at the end)
//! and played if autoplay is on or playback has started before. A rejected
//! `play()` is not an error: the browser's autoplay policy may block it until
//! the visitor interacts, and the next cycle or gesture tries again.

use dioxus::prelude::*;
use invite_common::{CyclicPlayback, MediaPlaylist, PlayerOptions};
use tracing::{debug, error, info};
use wasm_bindgen_x::JsCast;

/// Capability handle to a live `<video>`/`<audio>` element.
#[derive(Clone, Copy, PartialEq)]
pub struct MediaHandle {
    element: Signal<Option<web_sys_x::HtmlMediaElement>>,
}

impl MediaHandle {
    /// Callback for the media element's `onmounted`.
    pub fn onmounted(&self) -> impl FnMut(MountedEvent) {
        let mut element = self.element;
        move |evt: MountedEvent| {
            let media = evt
                .data()
                .downcast::<web_sys_x::Element>()
                .cloned()
                .and_then(|el| el.dyn_into::<web_sys_x::HtmlMediaElement>().ok());
            if media.is_none() {
                error!("Media handle attached to a non-media element");
            }
            element.set(media);
        }
    }

    /// Ask the element to play. Failures are logged and dropped.
    pub fn play(&self) {
        if let Some(el) = self.element.peek().clone() {
            spawn(async move {
                play_quietly(&el).await;
            });
        }
    }

    pub fn set_muted(&self, muted: bool) {
        if let Some(el) = self.element.peek().as_ref() {
            el.set_muted(muted);
        }
    }
}

/// Hook that creates an unattached `MediaHandle`.
pub fn use_media_handle() -> MediaHandle {
    MediaHandle {
        element: use_signal(|| None),
    }
}

/// Call `play()` and wait for its promise. Returns whether playback started.
pub async fn play_quietly(el: &web_sys_x::HtmlMediaElement) -> bool {
    let promise = match el.play() {
        Ok(promise) => promise,
        Err(e) => {
            debug!("play() threw: {e:?}");
            return false;
        }
    };
    match wasm_bindgen_futures_x::JsFuture::from(promise).await {
        Ok(_) => true,
        Err(e) => {
            debug!("play() rejected: {e:?}");
            false
        }
    }
}

/// Background player. The playlist and `options.autoplay` are fixed at mount;
/// an empty playlist renders nothing.
#[component]
pub fn CyclicMediaPlayer(
    sources: Vec<String>,
    #[props(default)] posters: Option<Vec<String>>,
    #[props(default)] options: PlayerOptions,
    handle: MediaHandle,
    #[props(default)] class: Option<String>,
) -> Element {
    let mut playback = use_signal(move || match MediaPlaylist::new(sources, posters) {
        Ok(playlist) => Some(CyclicPlayback::new(playlist)),
        Err(e) => {
            error!("Background player disabled: {e}");
            None
        }
    });

    // Only the cycle count triggers a reload, not the started flag flipping.
    let cycle = use_memo(move || playback.read().as_ref().map(|p| p.cycle()));

    let autoplay = use_hook(|| options.autoplay);
    use_effect(move || {
        let Some(cycle) = cycle() else {
            return;
        };
        let Some(el) = (handle.element)() else {
            return;
        };
        let should_play = playback
            .peek()
            .as_ref()
            .is_some_and(|p| p.should_play_after_load(autoplay));

        el.load();
        debug!("Loaded background source (cycle {cycle})");
        if should_play {
            spawn(async move {
                play_quietly(&el).await;
            });
        }
    });

    let (src, poster) = {
        let read = playback.read();
        let Some(p) = read.as_ref() else {
            return rsx! {};
        };
        (
            p.current_source().to_string(),
            p.current_poster().map(str::to_string),
        )
    };

    let extra = class.unwrap_or_default();

    rsx! {
        div {
            class: "fixed top-0 left-0 w-screen h-screen {extra}",
            style: options.container_style(),
            video {
                class: "absolute top-0 left-0 w-full h-full",
                style: options.media_style(),
                autoplay,
                muted: options.muted,
                playsinline: options.plays_inline,
                preload: "auto",
                poster,
                onmounted: handle.onmounted(),
                onended: move |_| {
                    if let Some(p) = playback.write().as_mut() {
                        let next = p.on_ended();
                        debug!("Background source ended, next: {next}");
                    }
                },
                onplay: move |_| {
                    let already = playback.peek().as_ref().is_some_and(|p| p.has_started_playing());
                    if !already {
                        if let Some(p) = playback.write().as_mut() {
                            p.on_play();
                        }
                        info!("Background playback started");
                    }
                },
                source { src: "{src}", r#type: "video/mp4" }
                "Your browser does not support the video tag."
            }
            if options.overlay {
                div {
                    class: "w-full h-full absolute inset-0 transition-opacity duration-[2000ms]",
                    style: options.overlay_style(),
                }
            }
        }
    }
}
