use derive_more::{Deref, From, Into};
use gtk::gdk;
use gtk4 as gtk;
use palette::{Srgb, Srgba};
use serde_with::DeserializeFromStr;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ColorError {
    #[error("invalid color '{0}', expected #rgb or #rrggbb")]
    InvalidHex(String),
}

/// An opaque color written as `#rrggbb` or `#rgb`.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, Deref, From, Into)]
pub struct ThemeColor(Srgba<f64>);

impl ThemeColor {
    pub const WHITE: Self = Self(Srgba::new(1.0, 1.0, 1.0, 1.0));
    pub const BLACK: Self = Self(Srgba::new(0.0, 0.0, 0.0, 1.0));
}

impl FromStr for ThemeColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rgb: Srgb<u8> = s
            .trim()
            .parse()
            .map_err(|_| ColorError::InvalidHex(s.to_string()))?;
        let rgb: Srgb<f64> = rgb.into_format();
        Ok(Self(Srgba::new(rgb.red, rgb.green, rgb.blue, 1.0)))
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgb: Srgb<u8> = self.0.color.into_format();
        write!(f, "#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.gyre-window, .gyre-canvas {
    background: none;
    background-color: transparent;
}

.gyre-debug {
    background-color: alpha(@theme_bg_color, 0.8);
    border-radius: 8px;
    padding: 8px;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
