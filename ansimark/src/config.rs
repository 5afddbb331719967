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

/// Settings for exported documents.
///
/// The style fields describe the `<pre>` container wrapped around exported
/// HTML. A field set to `None` is left out of the container's `style`
/// attribute, and when every field is `None` the attribute is omitted.
///
/// # Examples
///
/// ```
/// use ansimark::ExportConfig;
///
/// let config = ExportConfig::dark().with_background("#000").with_file_stem("build-log");
/// assert_eq!(config.file_stem, "build-log");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExportConfig {
    /// Container `background`.
    pub background: Option<String>,
    /// Container `color`.
    pub foreground: Option<String>,
    /// Container `padding`.
    pub padding: Option<String>,
    /// Container `font-family`.
    pub font_family: Option<String>,
    /// Container `white-space`.
    pub white_space: Option<String>,
    /// Container `border-radius`.
    pub border_radius: Option<String>,
    /// File name without extension used when saving a document.
    pub file_stem: String,
}

impl ExportConfig {
    /// Light text on a dark monospace panel.
    pub fn dark() -> ExportConfig {
        ExportConfig {
            background: Some("#1e1e1e".to_string()),
            foreground: Some("#fff".to_string()),
            padding: Some("16px".to_string()),
            font_family: Some("monospace".to_string()),
            white_space: Some("pre-wrap".to_string()),
            border_radius: Some("4px".to_string()),
            file_stem: "ansi-output".to_string(),
        }
    }

    /// A bare `<pre>` without any container styling.
    pub fn bare() -> ExportConfig {
        ExportConfig {
            background: None,
            foreground: None,
            padding: None,
            font_family: None,
            white_space: None,
            border_radius: None,
            file_stem: "ansi-output".to_string(),
        }
    }

    /// Set the container background color.
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Set the container text color.
    pub fn with_foreground(mut self, foreground: impl Into<String>) -> Self {
        self.foreground = Some(foreground.into());
        self
    }

    /// Set the container font family.
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    /// Set the file name stem.
    pub fn with_file_stem(mut self, file_stem: impl Into<String>) -> Self {
        self.file_stem = file_stem.into();
        self
    }

    /// Inline CSS for the container, in a fixed declaration order.
    pub fn container_css(&self) -> String {
        let declarations = [
            ("background", &self.background),
            ("color", &self.foreground),
            ("padding", &self.padding),
            ("font-family", &self.font_family),
            ("white-space", &self.white_space),
            ("border-radius", &self.border_radius),
        ];
        let mut css = String::new();
        for (property, value) in declarations {
            if let Some(value) = value {
                css.push_str(property);
                css.push(':');
                css.push_str(value);
                css.push(';');
            }
        }
        css
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::dark()
    }
}
