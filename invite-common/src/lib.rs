mod media_cycle;
mod player_options;
mod reveal;
mod rsvp;

pub use media_cycle::{CyclicPlayback, MediaPlaylist, PlaylistError};
pub use player_options::{ObjectFit, PlayerOptions};
pub use reveal::{RevealState, REVEAL_DELAY_MS};
pub use rsvp::{RsvpError, RsvpForm, RsvpRecord, RsvpSubmission, SubmissionStatus};
