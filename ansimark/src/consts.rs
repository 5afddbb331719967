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

/// Escape character (`0x1B`) that opens every ANSI escape sequence.
pub const ESC: char = '\x1b';

/// Second character of a Control Sequence Introducer (`ESC [`).
pub const CSI_OPEN: char = '[';

/// Final character of a Select Graphic Rendition sequence.
pub const SGR_FINAL: char = 'm';

/// Separator between SGR parameters.
pub const PARAM_SEPARATOR: char = ';';

/// Palette used for the standard colors `30-37` / `40-47`.
///
/// Order is black, red, green, yellow, blue, magenta, cyan, white. The values
/// are tuned for a dark page background rather than being pure primaries.
pub const STANDARD_PALETTE: [&str; 8] = [
    "#000000", "#ff4d4f", "#52c41a", "#faad14", "#1677ff", "#d4380d", "#13c2c2", "#ffffff",
];

/// Palette used for the bright colors `90-97` / `100-107`.
pub const BRIGHT_PALETTE: [&str; 8] = [
    "#bfbfbf", "#ff7875", "#95de64", "#ffe58f", "#69c0ff", "#ff85c0", "#5cdbd3", "#f5f5f5",
];

/// First sixteen entries of the 256 color palette (`38;5;0-15`).
///
/// These are the classic VGA style values and intentionally differ from
/// [`STANDARD_PALETTE`] and [`BRIGHT_PALETTE`].
pub const FIXED_BASIC_PALETTE: [&str; 16] = [
    "#000000", "#800000", "#008000", "#808000", "#000080", "#800080", "#008080", "#c0c0c0",
    "#808080", "#ff0000", "#00ff00", "#ffff00", "#0000ff", "#ff00ff", "#00ffff", "#ffffff",
];
