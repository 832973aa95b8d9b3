// File: crates/dotplan-core/src/theme.rs
// Summary: Print color themes for dots, ink, weekend highlights and muted separators.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub dots: skia::Color,
    pub ink: skia::Color,
    /// Weekend day numbers.
    pub alert: skia::Color,
    /// Week separators.
    pub muted: skia::Color,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            dots: skia::Color::from_rgb(179, 179, 179), // 70% gray
            ink: skia::Color::BLACK,
            alert: skia::Color::from_rgb(255, 0, 0),
            muted: skia::Color::from_rgb(211, 211, 211), // lightgrey
        }
    }

    /// Lighter dots and softer red, for toner-hungry printers.
    pub fn faint() -> Self {
        Self {
            name: "faint",
            dots: skia::Color::from_rgb(204, 204, 204),
            ink: skia::Color::from_rgb(40, 40, 40),
            alert: skia::Color::from_rgb(200, 60, 60),
            muted: skia::Color::from_rgb(225, 225, 225),
        }
    }

    /// Grayscale only; weekends stay distinguishable through a mid gray.
    pub fn mono() -> Self {
        Self {
            name: "mono",
            dots: skia::Color::from_rgb(179, 179, 179),
            ink: skia::Color::BLACK,
            alert: skia::Color::from_rgb(110, 110, 110),
            muted: skia::Color::from_rgb(211, 211, 211),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::faint(), Theme::mono()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
