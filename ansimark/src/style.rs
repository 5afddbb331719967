//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::Color;
use std::fmt::Write;

/// Cumulative text style built from SGR parameters.
///
/// Every attribute is independently optional. `None` means the attribute has
/// never been set since the start of input or the last reset, which is
/// different from an explicit `Normal`/`Off` value set by codes `22`, `23`
/// or `24`.
///
/// # SGR Codes
///
/// | Code               | Attribute                      |
/// |--------------------|--------------------------------|
/// | `1` / `22`         | [`Weight::Bold`] / [`Weight::Normal`] |
/// | `3` / `23`         | [`Slant::Italic`] / [`Slant::Normal`] |
/// | `4` / `24`         | [`Underline::On`] / [`Underline::Off`] |
/// | `30-37`, `90-97`   | foreground                     |
/// | `40-47`, `100-107` | background                     |
/// | `38;5;n`, `38;2;r;g;b` | extended foreground        |
/// | `48;5;n`, `48;2;r;g;b` | extended background        |
///
/// # Examples
///
/// ```
/// use ansimark::{Color, Style, Weight};
///
/// let mut style = Style {
///     weight: Some(Weight::Bold),
///     ..Default::default()
/// };
/// style.merge(&Style {
///     foreground: Some(Color::from_rgb(255, 0, 0)),
///     ..Default::default()
/// });
/// assert_eq!(style.to_css(), "color:#ff0000;font-weight:bold;");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color, rendered as CSS `color`.
    pub foreground: Option<Color>,
    /// Background color, rendered as CSS `background`.
    pub background: Option<Color>,
    /// Font weight, rendered as CSS `font-weight`.
    pub weight: Option<Weight>,
    /// Font slant, rendered as CSS `font-style`.
    pub slant: Option<Slant>,
    /// Underline, rendered as CSS `text-decoration`.
    pub underline: Option<Underline>,
}

impl Style {
    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none()
            && self.background.is_none()
            && self.weight.is_none()
            && self.slant.is_none()
            && self.underline.is_none()
    }

    /// Overlays every attribute that is set in `other` onto `self`.
    ///
    /// Attributes left unset in `other` keep their current value.
    pub fn merge(&mut self, other: &Style) {
        if let Some(color) = &other.foreground {
            self.foreground = Some(color.clone());
        }
        if let Some(color) = &other.background {
            self.background = Some(color.clone());
        }
        if other.weight.is_some() {
            self.weight = other.weight;
        }
        if other.slant.is_some() {
            self.slant = other.slant;
        }
        if other.underline.is_some() {
            self.underline = other.underline;
        }
    }

    /// Writes the inline CSS declarations for the attributes that are set.
    ///
    /// Declarations are always emitted in the order color, background,
    /// weight, slant, underline, each as `property:value;`.
    pub fn write_css<W: Write>(&self, writer: &mut W) -> std::fmt::Result {
        if let Some(color) = &self.foreground {
            write!(writer, "color:{};", color)?;
        }
        if let Some(color) = &self.background {
            write!(writer, "background:{};", color)?;
        }
        if let Some(weight) = self.weight {
            write!(writer, "font-weight:{};", weight.css_value())?;
        }
        if let Some(slant) = self.slant {
            write!(writer, "font-style:{};", slant.css_value())?;
        }
        if let Some(underline) = self.underline {
            write!(writer, "text-decoration:{};", underline.css_value())?;
        }
        Ok(())
    }

    /// Returns the inline CSS declarations as a new string.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_css(&mut css);
        css
    }
}

/// Font weight set by SGR `1` (bold) and `22` (normal).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weight {
    /// SGR `1`.
    Bold,
    /// SGR `22`.
    Normal,
}

impl Weight {
    /// CSS `font-weight` value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Weight::Bold => "bold",
            Weight::Normal => "normal",
        }
    }

    /// Maps an SGR code to a weight.
    pub fn from_sgr(code: u32) -> Option<Weight> {
        match code {
            1 => Some(Weight::Bold),
            22 => Some(Weight::Normal),
            _ => None,
        }
    }
}

/// Font slant set by SGR `3` (italic) and `23` (normal).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slant {
    /// SGR `3`.
    Italic,
    /// SGR `23`.
    Normal,
}

impl Slant {
    /// CSS `font-style` value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Slant::Italic => "italic",
            Slant::Normal => "normal",
        }
    }

    /// Maps an SGR code to a slant.
    pub fn from_sgr(code: u32) -> Option<Slant> {
        match code {
            3 => Some(Slant::Italic),
            23 => Some(Slant::Normal),
            _ => None,
        }
    }
}

/// Underline set by SGR `4` (on) and `24` (off).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Underline {
    /// SGR `4`.
    On,
    /// SGR `24`.
    Off,
}

impl Underline {
    /// CSS `text-decoration` value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Underline::On => "underline",
            Underline::Off => "none",
        }
    }

    /// Maps an SGR code to an underline state.
    pub fn from_sgr(code: u32) -> Option<Underline> {
        match code {
            4 => Some(Underline::On),
            24 => Some(Underline::Off),
            _ => None,
        }
    }
}
