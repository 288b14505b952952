/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! CSS color parsing and contrasting text color selection.
//!
//! Theme colors come straight from page markup, so any CSS color syntax
//! `csscolorparser` understands is accepted: hex, `rgb()`/`rgba()` in comma
//! or space form, `hsl()`/`hsla()`, `hwb()` and the named colors.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

/// Icon / title text color picked for legibility on a tab background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    Invalid { value: String, reason: String },
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty color value"),
            Self::Invalid { value, reason } => write!(f, "invalid color '{value}': {reason}"),
        }
    }
}

impl std::error::Error for ColorParseError {}

impl CssColor {
    pub const BLACK: CssColor = CssColor::rgb(0, 0, 0);
    pub const WHITE: CssColor = CssColor::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let value = input.trim();
        if value.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let color = csscolorparser::parse(value).map_err(|e| ColorParseError::Invalid {
            value: value.to_string(),
            reason: e.to_string(),
        })?;
        let [r, g, b, _] = color.to_rgba8();
        Ok(Self {
            r,
            g,
            b,
            alpha: color.a,
        })
    }

    /// WCAG 2.x relative luminance in `0.0..=1.0`.
    pub fn relative_luminance(&self) -> f64 {
        fn channel(value: u8) -> f64 {
            let c = f64::from(value) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    pub fn contrast_ratio(&self, other: &CssColor) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (light, dark) = if a >= b { (a, b) } else { (b, a) };
        (light + 0.05) / (dark + 0.05)
    }

    /// Black or white, whichever reads better on top of `self`.
    ///
    /// Ties go to black.
    pub fn contrasting_text_color(&self) -> TextColor {
        if self.contrast_ratio(&Self::BLACK) >= self.contrast_ratio(&Self::WHITE) {
            TextColor::Black
        } else {
            TextColor::White
        }
    }
}

/// Text color for a page-supplied background, `None` if it does not parse.
pub fn text_color_for_background(color: &str) -> Option<TextColor> {
    match CssColor::parse(color) {
        Ok(parsed) => Some(parsed.contrasting_text_color()),
        Err(e) => {
            log::debug!("Ignoring theme color for text contrast: {e}");
            None
        }
    }
}
