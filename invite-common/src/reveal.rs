/// Delay between the start gesture and the RSVP card appearing
pub const REVEAL_DELAY_MS: u64 = 5000;

/// One-time landing sequence: waiting for the gesture, started, revealed.
///
/// Also owns the audio mute toggle, which only works once started. The delay
/// itself is run by the caller; dropping that timer is how a pending reveal
/// is abandoned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealState {
    started: bool,
    revealed: bool,
    audio_muted: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start gesture. True the first time only; the caller then
    /// waits `REVEAL_DELAY_MS` and calls `fire`.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// Timer elapsed. Reveals and returns true once, and only after `start`.
    pub fn fire(&mut self) -> bool {
        if !self.started || self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn audio_muted(&self) -> bool {
        self.audio_muted
    }

    /// Flip the audio mute state. `None` before the start gesture.
    pub fn toggle_audio_mute(&mut self) -> Option<bool> {
        if !self.started {
            return None;
        }
        self.audio_muted = !self.audio_muted;
        Some(self.audio_muted)
    }

    /// Background tint opacity: clear until the card shows.
    pub fn overlay_opacity(&self) -> f64 {
        if self.revealed {
            0.5
        } else {
            0.0
        }
    }
}
