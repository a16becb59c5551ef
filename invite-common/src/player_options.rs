/// CSS `object-fit` for the background media surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectFit {
    #[default]
    Cover,
    Contain,
    Fill,
    None,
    ScaleDown,
}

impl ObjectFit {
    pub fn as_css(self) -> &'static str {
        match self {
            ObjectFit::Cover => "cover",
            ObjectFit::Contain => "contain",
            ObjectFit::Fill => "fill",
            ObjectFit::None => "none",
            ObjectFit::ScaleDown => "scale-down",
        }
    }
}

/// Visual and playback options for the background player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerOptions {
    /// Render a tint layer above the media
    pub overlay: bool,
    /// Tint opacity, clamped to [0, 1] when read
    pub overlay_opacity: f64,
    /// Tint color (any CSS color)
    pub overlay_color: String,
    pub muted: bool,
    pub autoplay: bool,
    pub plays_inline: bool,
    pub object_fit: ObjectFit,
    pub z_index: i32,
    pub scale: f64,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            overlay: false,
            overlay_opacity: 0.3,
            overlay_color: "#000000".to_string(),
            muted: true,
            autoplay: true,
            plays_inline: true,
            object_fit: ObjectFit::Cover,
            z_index: -1,
            scale: 1.0,
        }
    }
}

impl PlayerOptions {
    pub fn overlay_opacity(&self) -> f64 {
        if self.overlay_opacity.is_nan() {
            return 0.0;
        }
        self.overlay_opacity.clamp(0.0, 1.0)
    }

    /// Media is blurred whenever a visible tint sits on top of it.
    pub fn is_blurred(&self) -> bool {
        self.overlay && self.overlay_opacity() > 0.0
    }

    pub fn container_style(&self) -> String {
        format!("z-index: {}; transform: scale({});", self.z_index, self.scale)
    }

    pub fn media_style(&self) -> String {
        let filter = if self.is_blurred() { "blur(2px)" } else { "none" };
        format!(
            "object-fit: {}; filter: {}; transition: filter 2000ms;",
            self.object_fit.as_css(),
            filter
        )
    }

    pub fn overlay_style(&self) -> String {
        format!(
            "background-color: {}; opacity: {}; z-index: 1;",
            self.overlay_color,
            self.overlay_opacity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let o = PlayerOptions::default();
        assert!(!o.overlay);
        assert_eq!(o.overlay_opacity(), 0.3);
        assert_eq!(o.overlay_color, "#000000");
        assert!(o.muted && o.autoplay && o.plays_inline);
        assert_eq!(o.object_fit, ObjectFit::Cover);
        assert_eq!(o.z_index, -1);
        assert_eq!(o.scale, 1.0);
    }

    #[test]
    fn test_opacity_clamped() {
        let mut o = PlayerOptions {
            overlay_opacity: 1.7,
            ..Default::default()
        };
        assert_eq!(o.overlay_opacity(), 1.0);
        o.overlay_opacity = -0.2;
        assert_eq!(o.overlay_opacity(), 0.0);
        o.overlay_opacity = f64::NAN;
        assert_eq!(o.overlay_opacity(), 0.0);
    }

    #[test]
    fn test_blur_needs_overlay_and_positive_opacity() {
        let mut o = PlayerOptions {
            overlay: true,
            overlay_opacity: 0.0,
            ..Default::default()
        };
        assert!(!o.is_blurred());
        assert!(o.media_style().contains("filter: none"));

        o.overlay_opacity = 0.5;
        assert!(o.is_blurred());
        assert!(o.media_style().contains("filter: blur(2px)"));

        o.overlay = false;
        assert!(!o.is_blurred());
    }

    #[test]
    fn test_styles() {
        let o = PlayerOptions {
            overlay: true,
            overlay_opacity: 0.5,
            overlay_color: "#ffffff".to_string(),
            object_fit: ObjectFit::ScaleDown,
            z_index: -1,
            scale: 1.2,
            ..Default::default()
        };
        assert_eq!(o.container_style(), "z-index: -1; transform: scale(1.2);");
        assert!(o.media_style().starts_with("object-fit: scale-down;"));
        assert_eq!(
            o.overlay_style(),
            "background-color: #ffffff; opacity: 0.5; z-index: 1;"
        );
    }
}
