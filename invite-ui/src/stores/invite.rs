//! Landing page state store

use dioxus::prelude::*;
use invite_common::{RevealState, RsvpSubmission};

/// Which RSVP dialog is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RsvpDialog {
    Confirm,
    Decline,
}

/// UI state for the invitation page
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct InviteUiState {
    /// Start gesture, reveal timer and audio mute
    pub reveal: RevealState,
    /// Confirm-dialog form and last submission status
    pub rsvp: RsvpSubmission,
    /// Open dialog, if any
    pub open_dialog: Option<RsvpDialog>,
}

impl InviteUiState {
    /// Show a dialog. The submission status is left as-is, so a confirm
    /// dialog reopened after success shows the success view again.
    pub fn open(&mut self, dialog: RsvpDialog) {
        self.open_dialog = Some(dialog);
    }

    pub fn close(&mut self) {
        self.open_dialog = None;
    }

    pub fn is_open(&self, dialog: RsvpDialog) -> bool {
        self.open_dialog == Some(dialog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invite_common::{RsvpForm, SubmissionStatus};

    fn submitted() -> InviteUiState {
        let mut state = InviteUiState::default();
        state.open(RsvpDialog::Confirm);
        state.rsvp.form = RsvpForm {
            name1: "Alex".into(),
            name2: "Sam".into(),
        };
        state.rsvp.begin().unwrap();
        state.rsvp.finish(true);
        state
    }

    #[test]
    fn test_reopen_after_success_keeps_success() {
        let mut state = submitted();
        state.close();
        assert!(!state.is_open(RsvpDialog::Confirm));

        state.open(RsvpDialog::Confirm);
        assert!(state.is_open(RsvpDialog::Confirm));
        assert_eq!(state.rsvp.status(), SubmissionStatus::Success);
        assert_eq!(state.rsvp.form, RsvpForm::default());
    }

    #[test]
    fn test_reopen_after_failure_keeps_names_and_error() {
        let mut state = InviteUiState::default();
        state.open(RsvpDialog::Confirm);
        state.rsvp.form.name1 = "Alex".into();
        state.rsvp.begin().unwrap();
        state.rsvp.finish(false);
        state.close();
        state.open(RsvpDialog::Confirm);

        assert_eq!(state.rsvp.status(), SubmissionStatus::Error);
        assert_eq!(state.rsvp.form.name1, "Alex");
    }

    #[test]
    fn test_one_dialog_at_a_time() {
        let mut state = InviteUiState::default();
        state.open(RsvpDialog::Confirm);
        state.open(RsvpDialog::Decline);
        assert!(state.is_open(RsvpDialog::Decline));
        assert!(!state.is_open(RsvpDialog::Confirm));
    }
}
