use crate::event::{background_videos, event_details, BACKGROUND_SCALE, INTRO_AUDIO_SRC, REVEALED_OVERLAY_COLOR};
use dioxus::prelude::*;
use invite_common::PlayerOptions;
use invite_core::datastore::{self, insert_with_timeout, INSERT_TIMEOUT_MS};
use invite_core::timing::after_reveal_delay;
use invite_ui::stores::{InviteUiState, InviteUiStateStoreExt, RsvpDialog};
use invite_ui::{
    use_media_handle, ConfirmRsvpDialogView, CyclicMediaPlayer, DeclineDialogView,
    InvitationCardView, StartButtonView,
};
use tracing::{debug, error, info};

/// Landing page: play gesture, timed reveal, RSVP dialogs.
#[component]
pub fn Home() -> Element {
    let mut state = use_store(InviteUiState::default);
    let background = use_media_handle();
    let intro_audio = use_media_handle();
    let mut reveal_task: Signal<Option<Task>> = use_signal(|| None);

    // No reveal after the page is gone
    use_drop(move || {
        if let Some(task) = reveal_task.peek().as_ref() {
            task.cancel();
        }
    });

    let on_start = move |_: ()| {
        if !state.reveal().write().start() {
            return;
        }
        info!("Intro started");
        intro_audio.play();
        background.play();

        let task = spawn(async move {
            after_reveal_delay(move || {
                if state.reveal().write().fire() {
                    info!("RSVP card revealed");
                }
            })
            .await;
        });
        reveal_task.set(Some(task));
    };

    let on_background_click = move |_: MouseEvent| {
        if let Some(muted) = state.reveal().write().toggle_audio_mute() {
            intro_audio.set_muted(muted);
            info!("Audio {}", if muted { "muted" } else { "unmuted" });
        }
    };

    let on_submit = move |_: ()| {
        let record = match state.rsvp().write().begin() {
            Ok(Some(record)) => record,
            Ok(None) => return,
            Err(e) => {
                debug!("RSVP not submitted: {e}");
                return;
            }
        };
        let Some(client) = datastore::global() else {
            error!("Datastore client not installed");
            state.rsvp().write().finish(false);
            return;
        };
        spawn(async move {
            let result = insert_with_timeout(client, &record, INSERT_TIMEOUT_MS).await;
            state.rsvp().write().finish(result.is_ok());
        });
    };

    let confirm_open = use_memo(move || state.read().is_open(RsvpDialog::Confirm));
    let confirm_open: ReadSignal<bool> = confirm_open.into();
    let decline_open = use_memo(move || state.read().is_open(RsvpDialog::Decline));
    let decline_open: ReadSignal<bool> = decline_open.into();

    let (started, revealed, overlay_opacity) = {
        let reveal = state.reveal().read();
        (reveal.is_started(), reveal.is_revealed(), reveal.overlay_opacity())
    };
    let rsvp = state.rsvp().read().clone();

    let player_options = PlayerOptions {
        overlay: true,
        overlay_opacity,
        overlay_color: REVEALED_OVERLAY_COLOR.to_string(),
        autoplay: false,
        scale: BACKGROUND_SCALE,
        ..Default::default()
    };

    rsx! {
        CyclicMediaPlayer {
            sources: background_videos(),
            options: player_options,
            handle: background,
        }
        audio {
            class: "hidden",
            src: INTRO_AUDIO_SRC,
            preload: "auto",
            onmounted: intro_audio.onmounted(),
        }
        main {
            class: "flex items-center justify-center min-h-screen relative z-10",
            onclick: on_background_click,
            StartButtonView { started, on_start }
            if revealed {
                InvitationCardView {
                    details: event_details(),
                    on_yes: move |_| state.write().open(RsvpDialog::Confirm),
                    on_no: move |_| state.write().open(RsvpDialog::Decline),
                }
            }
        }
        ConfirmRsvpDialogView {
            is_open: confirm_open,
            name1: rsvp.form.name1.clone(),
            name2: rsvp.form.name2.clone(),
            status: rsvp.status(),
            submitting: rsvp.is_in_flight(),
            name_missing: rsvp.is_name_missing(),
            on_name1_input: move |value: String| state.rsvp().write().form.name1 = value,
            on_name2_input: move |value: String| state.rsvp().write().form.name2 = value,
            on_submit,
            on_close: move |_| state.write().close(),
        }
        DeclineDialogView {
            is_open: decline_open,
            on_close: move |_| state.write().close(),
        }
    }
}
