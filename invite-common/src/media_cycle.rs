/// Errors building a playlist
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaylistError {
    #[error("playlist must contain at least one source")]
    Empty,
}

/// Ordered list of media sources with optional parallel preview images.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPlaylist {
    sources: Vec<String>,
    posters: Option<Vec<String>>,
}

impl MediaPlaylist {
    /// Build a playlist. `sources` must be non-empty; `posters` is looked up
    /// per index and may be shorter than `sources`.
    pub fn new(sources: Vec<String>, posters: Option<Vec<String>>) -> Result<Self, PlaylistError> {
        if sources.is_empty() {
            return Err(PlaylistError::Empty);
        }
        Ok(Self { sources, posters })
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Always false for a constructed playlist; present for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn source(&self, index: usize) -> Option<&str> {
        self.sources.get(index).map(String::as_str)
    }

    /// Preview image for `index`, if one was supplied for that position.
    pub fn poster(&self, index: usize) -> Option<&str> {
        self.posters
            .as_ref()
            .and_then(|p| p.get(index))
            .map(String::as_str)
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }
}

/// Pure playback state for a background player that loops a playlist forever.
///
/// Tracks which entry is current and whether playback has ever started. The
/// view layer owns the media element and reports `ended`/`play` events here;
/// this type decides what should happen next without doing any I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclicPlayback {
    playlist: MediaPlaylist,
    current_index: usize,
    has_started_playing: bool,
    cycle: u64,
}

impl CyclicPlayback {
    pub fn new(playlist: MediaPlaylist) -> Self {
        Self {
            playlist,
            current_index: 0,
            has_started_playing: false,
            cycle: 0,
        }
    }

    pub fn playlist(&self) -> &MediaPlaylist {
        &self.playlist
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Source URI of the current entry.
    pub fn current_source(&self) -> &str {
        // current_index is kept in bounds by on_ended
        self.playlist.source(self.current_index).unwrap_or_default()
    }

    pub fn current_poster(&self) -> Option<&str> {
        self.playlist.poster(self.current_index)
    }

    pub fn has_started_playing(&self) -> bool {
        self.has_started_playing
    }

    /// Number of completed playbacks. Changes on every `ended`, even for a
    /// single-entry playlist whose index never moves.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Handle the media element's `ended` event. Returns the new current source.
    pub fn on_ended(&mut self) -> &str {
        self.current_index = (self.current_index + 1) % self.playlist.len();
        self.cycle += 1;
        self.current_source()
    }

    /// Handle the media element's `play` event.
    /// Returns true only for the first play, when the sticky flag flips.
    pub fn on_play(&mut self) -> bool {
        if self.has_started_playing {
            return false;
        }
        self.has_started_playing = true;
        true
    }

    /// Whether a freshly loaded source should be played right away.
    pub fn should_play_after_load(&self, autoplay: bool) -> bool {
        autoplay || self.has_started_playing
    }
}
