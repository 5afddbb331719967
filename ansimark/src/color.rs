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

//! Color codec mapping SGR color codes to CSS hex colors.

use crate::consts::{BRIGHT_PALETTE, FIXED_BASIC_PALETTE, STANDARD_PALETTE};
use std::fmt;

/// A CSS color in `#rrggbb` form, always lowercase.
///
/// Colors are produced from SGR parameters, either through one of the fixed
/// palettes or by direct RGB arithmetic.
///
/// Channel values are not clamped. A truecolor sequence such as `38;2;300;0;0`
/// yields `#12c0000`, matching what the arithmetic produces. Well formed input
/// (every channel in `0-255`) always yields exactly six hex digits.
///
/// Palette arithmetic runs in `u64`, so even the largest index cannot
/// overflow: `38;5;4294967295` yields the gray channel `9fffff6ee`, repeated
/// for each of red, green and blue. Parameters too large for a `u32` are
/// saturated to `u32::MAX` before they reach the codec.
///
/// # Examples
///
/// ```
/// use ansimark::Color;
///
/// assert_eq!(Color::from_sgr(31).unwrap().as_str(), "#ff4d4f");
/// assert_eq!(Color::from_fixed(196).as_str(), "#ff0000");
/// assert_eq!(Color::from_rgb(18, 52, 86).as_str(), "#123456");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Resolves a standard or bright SGR color code.
    ///
    /// Accepts foreground codes `30-37` and `90-97` and background codes
    /// `40-47` and `100-107`. Any other code returns `None`.
    pub fn from_sgr(code: u32) -> Option<Color> {
        let hex = match code {
            30..=37 => STANDARD_PALETTE[(code - 30) as usize],
            40..=47 => STANDARD_PALETTE[(code - 40) as usize],
            90..=97 => BRIGHT_PALETTE[(code - 90) as usize],
            100..=107 => BRIGHT_PALETTE[(code - 100) as usize],
            _ => return None,
        };
        Some(Color(hex.to_string()))
    }

    /// Resolves an index of the 256 color palette (`38;5;n` / `48;5;n`).
    ///
    /// - `0-15` use the classic sixteen color table
    /// - `16-231` form a 6x6x6 cube, each digit scaled by 51
    /// - `232` and above form a grayscale ramp starting at 8 in steps of 10
    pub fn from_fixed(index: u32) -> Color {
        if index < 16 {
            Color(FIXED_BASIC_PALETTE[index as usize].to_string())
        } else if index < 232 {
            let cube = index - 16;
            let r = cube / 36;
            let g = (cube % 36) / 6;
            let b = cube % 6;
            Color::from_rgb(r * 51, g * 51, b * 51)
        } else {
            let gray = 8 + (u64::from(index) - 232) * 10;
            Color::from_channels(gray, gray, gray)
        }
    }

    /// Builds a color directly from red, green and blue channels.
    pub fn from_rgb(r: u32, g: u32, b: u32) -> Color {
        Color::from_channels(r.into(), g.into(), b.into())
    }

    fn from_channels(r: u64, g: u64, b: u64) -> Color {
        Color(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }

    /// Returns the `#rrggbb` representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_foreground_and_background_share_palette() {
        assert_eq!(Color::from_sgr(31).unwrap().as_str(), "#ff4d4f");
        assert_eq!(Color::from_sgr(41).unwrap().as_str(), "#ff4d4f");
        assert_eq!(Color::from_sgr(30).unwrap().as_str(), "#000000");
        assert_eq!(Color::from_sgr(47).unwrap().as_str(), "#ffffff");
    }

    #[test]
    fn test_bright_codes() {
        assert_eq!(Color::from_sgr(90).unwrap().as_str(), "#bfbfbf");
        assert_eq!(Color::from_sgr(97).unwrap().as_str(), "#f5f5f5");
        assert_eq!(Color::from_sgr(101).unwrap().as_str(), "#ff7875");
        assert_eq!(Color::from_sgr(107).unwrap().as_str(), "#f5f5f5");
    }

    #[test]
    fn test_non_color_codes_are_rejected() {
        for code in [0, 1, 29, 38, 39, 48, 49, 89, 98, 99, 108, 255] {
            assert_eq!(Color::from_sgr(code), None, "code {}", code);
        }
    }

    #[test]
    fn test_fixed_basic_table_differs_from_sgr_palette() {
        assert_eq!(Color::from_fixed(1).as_str(), "#800000");
        assert_eq!(Color::from_fixed(9).as_str(), "#ff0000");
        assert_eq!(Color::from_fixed(15).as_str(), "#ffffff");
        assert_ne!(Color::from_fixed(1), Color::from_sgr(31).unwrap());
    }

    #[test]
    fn test_fixed_color_cube() {
        assert_eq!(Color::from_fixed(16).as_str(), "#000000");
        assert_eq!(Color::from_fixed(46).as_str(), "#00ff00");
        assert_eq!(Color::from_fixed(196).as_str(), "#ff0000");
        assert_eq!(Color::from_fixed(208).as_str(), "#ff6600");
        assert_eq!(Color::from_fixed(231).as_str(), "#ffffff");
    }

    #[test]
    fn test_fixed_grayscale_ramp() {
        assert_eq!(Color::from_fixed(232).as_str(), "#080808");
        assert_eq!(Color::from_fixed(244).as_str(), "#808080");
        assert_eq!(Color::from_fixed(255).as_str(), "#eeeeee");
    }

    #[test]
    fn test_rgb_is_lowercase_and_padded() {
        assert_eq!(Color::from_rgb(255, 0, 0).as_str(), "#ff0000");
        assert_eq!(Color::from_rgb(10, 11, 171).as_str(), "#0a0bab");
        assert_eq!(Color::from_rgb(10, 11, 171).to_string(), "#0a0bab");
    }

    #[test]
    fn test_out_of_range_values_are_not_clamped() {
        assert_eq!(Color::from_rgb(300, 0, 0).as_str(), "#12c0000");
        assert_eq!(Color::from_fixed(256).as_str(), "#f8f8f8");
        assert_eq!(Color::from_fixed(300).as_str(), "#2b02b02b0");
    }

    #[test]
    fn test_largest_fixed_index_does_not_overflow() {
        // 8 + (4294967295 - 232) * 10 = 42949670638 = 0x9fffff6ee
        assert_eq!(Color::from_fixed(u32::MAX).as_str(), "#9fffff6ee9fffff6ee9fffff6ee");
        assert_eq!(Color::from_fixed(500_000_000).as_str(), "#12a05e8f812a05e8f812a05e8f8");
        assert_eq!(Color::from_rgb(u32::MAX, 0, 0).as_str(), "#ffffffff0000");
    }
}
