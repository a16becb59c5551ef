//! Shared UI components

pub mod button;
pub mod decline_dialog;
pub mod icons;
pub mod invitation_card;
pub mod media_player;
pub mod modal;
pub mod rsvp_dialog;
pub mod start_button;
pub mod text_input;

pub use button::{BounceButton, ChromelessButton};
pub use decline_dialog::DeclineDialogView;
pub use icons::{AlertTriangleIcon, CheckIcon, PlayCircleIcon, XIcon};
pub use invitation_card::{EventDetails, InvitationCardView, Venue};
pub use media_player::{play_quietly, use_media_handle, CyclicMediaPlayer, MediaHandle};
pub use modal::Modal;
pub use rsvp_dialog::ConfirmRsvpDialogView;
pub use start_button::StartButtonView;
pub use text_input::TextInput;
