use std::path::PathBuf;
use clap::Parser;
use crate::constants::*;
use crate::state::IndicatorPolicy;

/// Auto-advancing image slideshow.
///
/// Right arrow or Space shows the next slide, Left arrow the previous one,
/// 1-9 or a click on a dot jumps to that slide.
#[derive(Debug, Parser)]
#[command(name = "carousel", version)]
pub struct Config {
    /// Directory holding the slide images
    pub image_directory: PathBuf,

    /// Show the slides in random order
    #[arg(long)]
    pub shuffle: bool,

    /// Mark the dot of the slide being shown
    #[arg(long)]
    pub highlight_active: bool,

    /// Initial window width in pixels
    #[arg(long, default_value_t = RENDER_WIDTH / 2, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = RENDER_HEIGHT / 2, value_parser = clap::value_parser!(i32).range(1..))]
    pub height: i32,
}

impl Config {
    pub fn indicator_policy(&self) -> IndicatorPolicy {
        if self.highlight_active {
            IndicatorPolicy::HighlightCurrent
        } else {
            IndicatorPolicy::ClearOnly
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["carousel", "photos"]).expect("parse");
        assert_eq!(config.image_directory, PathBuf::from("photos"));
        assert!(!config.shuffle);
        assert_eq!(config.indicator_policy(), IndicatorPolicy::ClearOnly);
        assert_eq!((config.width, config.height), (RENDER_WIDTH / 2, RENDER_HEIGHT / 2));
    }

    #[test]
    fn flags() {
        let config = Config::try_parse_from([
            "carousel", "photos", "--shuffle", "--highlight-active", "--width", "800", "--height", "600",
        ])
        .expect("parse");
        assert!(config.shuffle);
        assert_eq!(config.indicator_policy(), IndicatorPolicy::HighlightCurrent);
        assert_eq!((config.width, config.height), (800, 600));
    }

    #[test]
    fn directory_is_required() {
        assert!(Config::try_parse_from(["carousel"]).is_err());
    }

    #[test]
    fn window_size_must_be_positive() {
        assert!(Config::try_parse_from(["carousel", "photos", "--width", "0"]).is_err());
        assert!(Config::try_parse_from(["carousel", "photos", "--height=-10"]).is_err());
        assert!(Config::try_parse_from(["carousel", "photos", "--width", "1", "--height", "1"]).is_ok());
    }
}
