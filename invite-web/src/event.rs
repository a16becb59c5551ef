//! Event copy and media for the landing page

use invite_ui::{EventDetails, Venue};

/// Background playlist, served from `public/`
pub const BACKGROUND_VIDEOS: &[&str] = &["/primary-bg-video.mp4"];

/// Intro track, URI-encoded (`/10 Don't Reach Across My Plate.m4a`)
pub const INTRO_AUDIO_SRC: &str = "/10%20Don't%20Reach%20Across%20My%20Plate.m4a";

/// Tint over the background once the card is up
pub const REVEALED_OVERLAY_COLOR: &str = "#ffffff";

/// Background zoom, hides letterboxing on odd aspect ratios
pub const BACKGROUND_SCALE: f64 = 1.2;

pub fn background_videos() -> Vec<String> {
    BACKGROUND_VIDEOS.iter().map(|s| s.to_string()).collect()
}

pub fn event_details() -> EventDetails {
    EventDetails {
        headline: "Celebrate Mid Life With Me.".to_string(),
        blurb: "Join me for an evening of maturity, intellectualism, and pedantic banter \
                followed by a night of denial and debauchery."
            .to_string(),
        when: "Friday, Aug 29th, 7pm".to_string(),
        venues: vec![
            Venue {
                name: "Sal Y Limón".to_string(),
                url: "https://www.salylimonseattle.com/".to_string(),
                color_class: "text-emerald-400".to_string(),
            },
            Venue {
                name: "Ozzies".to_string(),
                url: "https://www.ozziesinseattle.com/".to_string(),
                color_class: "text-pink-500".to_string(),
            },
        ],
        question: "Can you make it?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_not_empty() {
        assert!(!background_videos().is_empty());
        assert!(background_videos().iter().all(|s| s.starts_with('/')));
    }

    #[test]
    fn test_audio_src_has_no_spaces() {
        assert!(!INTRO_AUDIO_SRC.contains(' '));
        assert!(INTRO_AUDIO_SRC.ends_with(".m4a"));
    }

    #[test]
    fn test_venue_links() {
        let details = event_details();
        assert_eq!(details.venues.len(), 2);
        assert!(details.venues.iter().all(|v| v.url.starts_with("https://")));
    }
}
