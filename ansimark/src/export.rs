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

//! Output formats and standalone documents for saving converted text.

use crate::{ExportConfig, ExportError, ExportResult, escape_html, render_markup, render_plain};
use std::borrow::Cow;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use tracing::{debug, instrument};

/// The kinds of output a conversion can be exported as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// The input exactly as given, escape sequences included.
    Original,
    /// The input with SGR sequences stripped.
    Plain,
    /// Styled HTML markup.
    Html,
}

impl OutputFormat {
    /// File extension used when saving this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Original | OutputFormat::Plain => "txt",
            OutputFormat::Html => "html",
        }
    }

    /// MIME type of a saved document.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Original | OutputFormat::Plain => "text/plain",
            OutputFormat::Html => "text/html",
        }
    }

    /// Converts `input` into this format.
    ///
    /// [`OutputFormat::Html`] yields the bare markup without a container.
    pub fn convert<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self {
            OutputFormat::Original => Cow::Borrowed(input),
            OutputFormat::Plain => render_plain(input),
            OutputFormat::Html => Cow::Owned(render_markup(input)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Original => f.write_str("original"),
            OutputFormat::Plain => f.write_str("plain"),
            OutputFormat::Html => f.write_str("html"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(name: &str) -> ExportResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "orig" | "original" => Ok(OutputFormat::Original),
            "plain" | "txt" | "text" => Ok(OutputFormat::Plain),
            "html" | "markup" => Ok(OutputFormat::Html),
            _ => Err(ExportError::UnknownFormat(name.to_string())),
        }
    }
}

/// A converted document ready to be saved.
///
/// HTML documents are wrapped in a `<pre>` container styled by
/// [`ExportConfig`] so they display correctly when opened on their own.
///
/// # Examples
///
/// ```
/// use ansimark::{Document, ExportConfig, OutputFormat};
///
/// let config = ExportConfig::bare();
/// let document = Document::new("\x1b[1mok\x1b[0m", OutputFormat::Html, &config);
/// assert_eq!(document.body(), "<pre><span style=\"font-weight:bold;\">ok</span></pre>");
/// assert_eq!(document.file_name(&config), "ansi-output.html");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    format: OutputFormat,
    body: String,
}

impl Document {
    /// Converts `input` and wraps it as required by `format`.
    #[instrument(skip(input, config), fields(len = input.len()))]
    pub fn new(input: &str, format: OutputFormat, config: &ExportConfig) -> Document {
        let converted = format.convert(input);
        let body = match format {
            OutputFormat::Original | OutputFormat::Plain => converted.into_owned(),
            OutputFormat::Html => {
                let css = config.container_css();
                if css.is_empty() {
                    format!("<pre>{}</pre>", converted)
                } else {
                    format!("<pre style=\"{}\">{}</pre>", escape_html(&css), converted)
                }
            }
        };
        Document { format, body }
    }

    /// The format this document was produced in.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// The document contents.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// File name for saving this document, `{file_stem}.{extension}`.
    pub fn file_name(&self, config: &ExportConfig) -> String {
        format!("{}.{}", config.file_stem, self.format.extension())
    }

    /// Writes the document contents to `sink`.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> ExportResult<()> {
        sink.write_all(self.body.as_bytes())?;
        sink.flush()?;
        debug!(format = %self.format, bytes = self.body.len(), "document written");
        Ok(())
    }
}
